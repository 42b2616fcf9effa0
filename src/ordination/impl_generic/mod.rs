//! Generic ordination implementations.

mod pca;
mod pcoa;

pub use pca::pca_impl;
pub use pcoa::pcoa_impl;
