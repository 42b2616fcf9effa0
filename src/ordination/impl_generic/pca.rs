//! Generic principal component analysis implementation.

use crate::common::center_columns;
use crate::ordination::traits::ordination::PcaResult;
use crate::ordination::{validate_components, validate_ordination_data, validate_ordination_dtype};
use numr::algorithm::linalg::LinearAlgebraAlgorithms;
use numr::error::Result;
use numr::ops::{LinalgOps, ReduceOps, ScalarOps, TensorOps};
use numr::runtime::{Runtime, RuntimeClient};
use numr::tensor::Tensor;

/// Principal component analysis via eigendecomposition of the covariance
/// matrix. The decomposition itself is numr's; this is only the projection.
pub fn pca_impl<R, C>(
    client: &C,
    data: &Tensor<R>,
    n_components: Option<usize>,
) -> Result<PcaResult<R>>
where
    R: Runtime,
    C: TensorOps<R>
        + ScalarOps<R>
        + ReduceOps<R>
        + LinalgOps<R>
        + LinearAlgebraAlgorithms<R>
        + RuntimeClient<R>,
{
    validate_ordination_dtype(data.dtype(), "pca")?;
    validate_ordination_data(data.shape(), "pca")?;

    let n = data.shape()[0];
    let p = data.shape()[1];
    let k_max = (n - 1).min(p);
    let k = n_components.unwrap_or(k_max);
    validate_components(k, k_max, "pca")?;

    let centered = center_columns(client, data)?;

    // Covariance C = XᵀX / (n − 1); symmetric, so its eigendecomposition
    // doubles as an SVD with eigenvalues sorted descending.
    let gram = client.matmul(&centered.transpose(0, 1)?, &centered)?;
    let cov = client.div_scalar(&gram, (n - 1) as f64)?;

    let eig = client.eig_decompose_symmetric(&cov)?;
    let components = eig.eigenvectors.narrow(1, 0, k)?;
    let explained_variance = eig.eigenvalues.narrow(0, 0, k)?;

    let scores = client.matmul(&centered, &components)?;

    Ok(PcaResult {
        scores,
        components,
        explained_variance,
    })
}
