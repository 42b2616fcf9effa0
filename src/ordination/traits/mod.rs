//! Ordination algorithm traits.

pub mod ordination;

pub use ordination::{OrdinationAlgorithms, PcaResult, PcoaResult};
