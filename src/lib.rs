//! ordfit - Procrustes comparison of paired multivariate tables
//!
//! ordfit compares two row-matched tables of observations by procrustes
//! analysis: rotational fits, permutation significance tests, and a
//! block-wise cross-comparison layer that collects one tidy record per tested
//! pair. Built on numr's foundational math primitives, it works across all
//! backends (CPU, CUDA, WebGPU).
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────┐
//! │                      ordfit                              │
//! │   (procrustes fits, permutation tests, block compare)   │
//! └──────────────────────────┬──────────────────────────────┘
//!                            │ uses
//! ┌──────────────────────────▼──────────────────────────────┐
//! │                       numr                               │
//! │     (tensors, SVD, eigendecomposition, distances, RNG)  │
//! └─────────────────────────────────────────────────────────┘
//! ```
//!
//! # Current Modules
//!
//! - [`procrustes`] - Rotational fits and permutation significance tests
//! - [`ordination`] - PCA / PCoA projections used as block pre-transforms
//! - [`compare`] - Block-wise cross comparison with grouping and tidy records
//!
//! # Backend Support
//!
//! ordfit is generic over numr's `Runtime` trait. The same code works on:
//! - CPU (with SIMD acceleration)
//! - CUDA (NVIDIA GPUs)
//! - WebGPU (cross-platform GPU)
//!
//! # Feature Flags
//!
//! | Feature | Description | Dependencies |
//! |---------|-------------|--------------|
//! | `cuda`  | Enable CUDA GPU acceleration | CUDA 12.x, numr/cuda |
//! | `wgpu`  | Enable WebGPU cross-platform GPU | numr/wgpu |
//!
//! ## Backend Limitations
//!
//! - **WebGPU**: Only supports F32 precision (no F64)
//! - **CUDA**: Requires CUDA 12.x toolkit installed
//!
//! # Example
//!
//! ```ignore
//! use ordfit::compare::{Block, CrossFitAlgorithms, CrossFitOptions};
//! use numr::runtime::cpu::{CpuClient, CpuDevice};
//!
//! let device = CpuDevice::new();
//! let client = CpuClient::new(device.clone());
//!
//! let spec = /* [n, p] community table */;
//! let env = /* [n, q] environment table */;
//!
//! let blocks = vec![
//!     Block::new("bacteria", vec![0, 1, 2]),
//!     Block::new("fungi", vec![3, 4]),
//! ];
//!
//! let records = client.cross_fit(&spec, &env, &blocks, &[], &CrossFitOptions::default())?;
//! for r in &records {
//!     println!("{} ~ {}: r = {:.3}, p = {:.3}", r.spec_block, r.env_block, r.correlation, r.pvalue);
//! }
//! ```

pub mod common;
pub mod compare;
pub mod ordination;
pub mod procrustes;

// Re-export main types for convenience
pub use compare::{
    Block, BlockTransform, CrossFitAlgorithms, CrossFitOptions, FitRecord, TestVariant,
};
pub use ordination::{OrdinationAlgorithms, PcaResult, PcoaResult};
pub use procrustes::{
    ProcrustesFit, ProcrustesFitAlgorithms, ProcrustesTestAlgorithms, ProtestOptions,
    ProtestResult,
};

// Re-export numr types that users will commonly need
pub use numr::dtype::DType;
pub use numr::error::{Error, Result};
pub use numr::ops::DistanceMetric;
pub use numr::runtime::{Runtime, RuntimeClient};
pub use numr::tensor::Tensor;
