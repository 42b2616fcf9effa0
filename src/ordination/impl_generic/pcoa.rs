//! Generic principal coordinates analysis implementation.
//!
//! Classical metric scaling: Gower double-centering of the squared
//! dissimilarity matrix followed by a symmetric eigendecomposition. With a
//! Euclidean metric the embedding reproduces the pairwise distances exactly
//! (up to rank); non-Euclidean metrics can produce negative eigenvalues,
//! which are clamped so the scores stay real.

use crate::common::extract_scalar;
use crate::ordination::traits::ordination::PcoaResult;
use crate::ordination::{validate_components, validate_ordination_data, validate_ordination_dtype};
use numr::algorithm::linalg::LinearAlgebraAlgorithms;
use numr::error::Result;
use numr::ops::{
    CompareOps, DistanceMetric, DistanceOps, LinalgOps, ReduceOps, ScalarOps, TensorOps, UnaryOps,
};
use numr::runtime::{Runtime, RuntimeClient};
use numr::tensor::Tensor;

pub fn pcoa_impl<R, C>(
    client: &C,
    data: &Tensor<R>,
    metric: DistanceMetric,
    n_components: Option<usize>,
) -> Result<PcoaResult<R>>
where
    R: Runtime,
    C: TensorOps<R>
        + ScalarOps<R>
        + ReduceOps<R>
        + DistanceOps<R>
        + CompareOps<R>
        + UnaryOps<R>
        + LinalgOps<R>
        + LinearAlgebraAlgorithms<R>
        + RuntimeClient<R>,
{
    validate_ordination_dtype(data.dtype(), "pcoa")?;
    validate_ordination_data(data.shape(), "pcoa")?;

    let n = data.shape()[0];
    let k_max = (n - 1).min(data.shape()[1]);
    let k = n_components.unwrap_or(k_max);
    validate_components(k, k_max, "pcoa")?;

    let dtype = data.dtype();
    let device = data.device();

    let dist = client.cdist(data, data, metric)?;
    let d2 = match metric {
        DistanceMetric::SquaredEuclidean => dist,
        _ => client.mul(&dist, &dist)?,
    };

    // Gower centering: B = −½ (D² − row − col + grand)
    let row_means = client.mean(&d2, &[1], true)?; // [n, 1]
    let col_means = client.mean(&d2, &[0], true)?; // [1, n]
    let grand_mean = extract_scalar(&client.mean(&d2, &[0, 1], false)?)?;

    let centered = client.sub(&d2, &row_means.broadcast_to(&[n, n])?)?;
    let centered = client.sub(&centered, &col_means.broadcast_to(&[n, n])?)?;
    let centered = client.add_scalar(&centered, grand_mean)?;
    let b = client.mul_scalar(&centered, -0.5)?;

    let eig = client.eig_decompose_symmetric(&b)?;
    let vectors = eig.eigenvectors.narrow(1, 0, k)?; // [n, k]
    let values = eig.eigenvalues.narrow(0, 0, k)?; // [k]

    // Clamp negative eigenvalues before taking square roots.
    let zero = Tensor::<R>::zeros(&[k], dtype, device);
    let eigenvalues = client.maximum(&values, &zero)?;
    let axis_scale = client.sqrt(&eigenvalues)?;

    let scores = client.mul(&vectors, &axis_scale.unsqueeze(0)?.broadcast_to(&[n, k])?)?;

    Ok(PcoaResult { scores, eigenvalues })
}
