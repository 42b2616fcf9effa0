//! Cross comparison of two row-matched tables over named column blocks.
//!
//! This is the orchestration layer: it validates the paired tables, resolves
//! named column blocks (or falls back to whole-table blocks), applies the
//! configured ordination pre-transform to every block, dispatches the chosen
//! permutation-test variant on each spec-block × env-block pair, and collects
//! one [`FitRecord`] per pair. An optional grouping vector splits the rows
//! into independent sub-analyses whose tagged records are concatenated.
//!
//! ```text
//! compare/
//! ├── mod.rs                # Exports only
//! ├── validation.rs         # Paired-table / block / grouping validation
//! ├── traits/               # Types and the CrossFitAlgorithms contract
//! ├── impl_generic/         # Generic implementation (written once)
//! ├── cpu/                  # CPU trait impl (pure delegation)
//! ├── cuda/                 # CUDA trait impl (pure delegation)
//! └── wgpu/                 # WebGPU trait impl (pure delegation)
//! ```

mod cpu;
pub mod impl_generic;
pub mod traits;
mod validation;

#[cfg(feature = "cuda")]
mod cuda;

#[cfg(feature = "wgpu")]
mod wgpu;

pub use validation::{validate_blocks, validate_grouping, validate_paired_tables};

pub use traits::crossfit::{
    Block, BlockTransform, CrossFitAlgorithms, CrossFitOptions, FitRecord, TestVariant,
};
