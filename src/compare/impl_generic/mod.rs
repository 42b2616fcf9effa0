//! Generic cross-comparison implementations.

mod crossfit;

pub use crossfit::{cross_fit_grouped_impl, cross_fit_impl};
