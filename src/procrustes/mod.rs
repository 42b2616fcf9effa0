//! Procrustes rotational fits and their permutation significance tests.
//!
//! # Runtime-Generic Architecture
//!
//! All operations are implemented generically over numr's `Runtime` trait.
//! The same code works on CPU, CUDA, and WebGPU backends.
//!
//! ```text
//! procrustes/
//! ├── mod.rs                # Exports only
//! ├── validation.rs         # Input validation helpers
//! ├── traits/               # Algorithm trait definitions
//! │   ├── fit.rs
//! │   └── significance.rs
//! ├── impl_generic/         # Generic implementations (written once)
//! │   ├── fit.rs
//! │   └── significance.rs
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

pub use validation::{
    validate_matching_rows, validate_permutations, validate_table_2d, validate_table_dtype,
};

pub use traits::fit::{ProcrustesFit, ProcrustesFitAlgorithms};
pub use traits::significance::{ProcrustesTestAlgorithms, ProtestOptions, ProtestResult};
