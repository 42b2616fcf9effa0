//! Ordination projections used as block pre-transforms.
//!
//! PCA and PCoA here are thin projections over numr's symmetric
//! eigendecomposition and distance kernels; no decomposition is implemented
//! in this crate.

mod cpu;
pub mod impl_generic;
pub mod traits;
mod validation;

#[cfg(feature = "cuda")]
mod cuda;

#[cfg(feature = "wgpu")]
mod wgpu;

pub use validation::{validate_components, validate_ordination_data, validate_ordination_dtype};

pub use traits::ordination::{OrdinationAlgorithms, PcaResult, PcoaResult};
