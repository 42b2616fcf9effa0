//! Generic procrustes implementations.
//!
//! Runtime-generic: the same code serves CPU, CUDA, and WebGPU backends.

mod fit;
mod significance;

pub use fit::procrustes_fit_impl;
pub use significance::{procrustes_randtest_impl, procrustes_rtest_impl, protest_impl};
