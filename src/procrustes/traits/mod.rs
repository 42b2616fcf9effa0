//! Procrustes algorithm traits.

pub mod fit;
pub mod significance;

pub use fit::{ProcrustesFit, ProcrustesFitAlgorithms};
pub use significance::{ProcrustesTestAlgorithms, ProtestOptions, ProtestResult};
