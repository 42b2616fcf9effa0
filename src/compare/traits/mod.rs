//! Cross-comparison traits and types.

pub mod crossfit;

pub use crossfit::{
    Block, BlockTransform, CrossFitAlgorithms, CrossFitOptions, FitRecord, TestVariant,
};
