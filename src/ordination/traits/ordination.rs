//! Ordination trait: low-dimensional projections used as block pre-transforms.

use numr::error::Result;
use numr::ops::DistanceMetric;
use numr::runtime::Runtime;
use numr::tensor::Tensor;

/// Result of principal component analysis.
#[derive(Debug, Clone)]
pub struct PcaResult<R: Runtime> {
    /// Projected observations [n, k].
    pub scores: Tensor<R>,
    /// Principal axes as columns [p, k].
    pub components: Tensor<R>,
    /// Variance carried by each retained axis [k], descending.
    pub explained_variance: Tensor<R>,
}

/// Result of principal coordinates analysis (classical metric scaling).
#[derive(Debug, Clone)]
pub struct PcoaResult<R: Runtime> {
    /// Embedded observations [n, k].
    pub scores: Tensor<R>,
    /// Eigenvalues of the doubly-centered dissimilarity matrix [k],
    /// descending; negative values are clamped to zero.
    pub eigenvalues: Tensor<R>,
}

/// Ordination projections over numr's decompositions.
pub trait OrdinationAlgorithms<R: Runtime> {
    /// Principal component analysis of a 2-D table [n, p].
    ///
    /// Column-centers the table, eigendecomposes the covariance matrix, and
    /// projects onto the `k` leading axes. `n_components` defaults to
    /// min(n − 1, p).
    fn pca(&self, data: &Tensor<R>, n_components: Option<usize>) -> Result<PcaResult<R>>;

    /// Principal coordinates analysis of a 2-D table [n, p].
    ///
    /// Builds the pairwise dissimilarity matrix under `metric`, applies Gower
    /// double-centering to the squared dissimilarities, and embeds the
    /// observations along the `k` leading eigenvectors scaled by √λ.
    /// `n_components` defaults to min(n − 1, p).
    fn pcoa(
        &self,
        data: &Tensor<R>,
        metric: DistanceMetric,
        n_components: Option<usize>,
    ) -> Result<PcoaResult<R>>;
}
