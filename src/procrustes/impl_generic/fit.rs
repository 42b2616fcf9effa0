//! Generic procrustes rotational-fit implementation.

use crate::common::{center_columns, extract_scalar, total_sum_of_squares};
use crate::procrustes::traits::fit::ProcrustesFit;
use crate::procrustes::{validate_matching_rows, validate_table_2d, validate_table_dtype};
use numr::algorithm::linalg::LinearAlgebraAlgorithms;
use numr::error::{Error, Result};
use numr::ops::{ReduceOps, ScalarOps, TensorOps};
use numr::runtime::{Runtime, RuntimeClient};
use numr::tensor::Tensor;

/// Center a configuration, optionally normalize it to unit total sum of
/// squares, and report the resulting trace tr(XᵀX).
///
/// A constant configuration (zero variance in every column) cannot be fit.
pub(crate) fn prepare_configuration<R, C>(
    client: &C,
    t: &Tensor<R>,
    symmetric: bool,
    op: &'static str,
) -> Result<(Tensor<R>, f64)>
where
    R: Runtime,
    C: TensorOps<R> + ScalarOps<R> + RuntimeClient<R>,
{
    let centered = center_columns(client, t)?;
    let trace = total_sum_of_squares(client, &centered)?;

    if trace <= f64::EPSILON {
        return Err(Error::InvalidArgument {
            arg: "table",
            reason: format!("{op}: configuration has zero total variance"),
        });
    }

    if symmetric {
        let normalized = client.div_scalar(&centered, trace.sqrt())?;
        Ok((normalized, 1.0))
    } else {
        Ok((centered, trace))
    }
}

/// Zero-pad a configuration on the right so it has `width` columns.
pub(crate) fn pad_columns<R, C>(client: &C, t: &Tensor<R>, width: usize) -> Result<Tensor<R>>
where
    R: Runtime,
    C: TensorOps<R> + RuntimeClient<R>,
{
    let cols = t.shape()[1];
    if cols == width {
        return Ok(t.clone());
    }
    let pad = Tensor::<R>::zeros(&[t.shape()[0], width - cols], t.dtype(), t.device());
    client.cat(&[t, &pad], 1)
}

/// Sum of the singular values of XᵀY for two prepared configurations.
///
/// When both configurations carry unit total sum of squares this is the
/// symmetric procrustean correlation.
pub(crate) fn trace_of_singular_values<R, C>(
    client: &C,
    x: &Tensor<R>,
    y: &Tensor<R>,
) -> Result<f64>
where
    R: Runtime,
    C: TensorOps<R> + ReduceOps<R> + LinearAlgebraAlgorithms<R> + RuntimeClient<R>,
{
    let cross = client.matmul(&x.transpose(0, 1)?, y)?;
    let svd = client.svd_decompose(&cross)?;
    extract_scalar(&client.sum(&svd.s, &[0], false)?)
}

/// Compute a procrustes rotational fit of `y` onto `x`.
pub fn procrustes_fit_impl<R, C>(
    client: &C,
    x: &Tensor<R>,
    y: &Tensor<R>,
    symmetric: bool,
    scaling: bool,
) -> Result<ProcrustesFit<R>>
where
    R: Runtime,
    C: TensorOps<R> + ScalarOps<R> + ReduceOps<R> + LinearAlgebraAlgorithms<R> + RuntimeClient<R>,
{
    validate_table_dtype(x.dtype(), "procrustes_fit")?;
    validate_table_dtype(y.dtype(), "procrustes_fit")?;
    validate_table_2d(x.shape(), "procrustes_fit")?;
    validate_table_2d(y.shape(), "procrustes_fit")?;
    validate_matching_rows(x.shape(), y.shape(), 3, "procrustes_fit")?;

    let (xc, trace_x) = prepare_configuration(client, x, symmetric, "procrustes_fit")?;
    let (yc, trace_y) = prepare_configuration(client, y, symmetric, "procrustes_fit")?;

    let width = x.shape()[1].max(y.shape()[1]);
    let xp = pad_columns(client, &xc, width)?;
    let yp = pad_columns(client, &yc, width)?;

    // XᵀY = U Σ Vᵀ; the rotation taking Y onto X is A = V Uᵀ.
    let cross = client.matmul(&xp.transpose(0, 1)?, &yp)?;
    let svd = client.svd_decompose(&cross)?;
    let trace_sigma = extract_scalar(&client.sum(&svd.s, &[0], false)?)?;

    let v = svd.vt.transpose(0, 1)?;
    let ut = svd.u.transpose(0, 1)?;
    let rotation = client.matmul(&v, &ut)?;

    let scale = if scaling { trace_sigma / trace_y } else { 1.0 };

    let ss = if scaling {
        trace_x - trace_sigma * trace_sigma / trace_y
    } else {
        trace_x + trace_y - 2.0 * trace_sigma
    };

    let correlation = (trace_sigma / (trace_x * trace_y).sqrt()).min(1.0);

    let rotated = client.matmul(&yp, &rotation)?;
    let yrot = client.mul_scalar(&rotated, scale)?;

    Ok(ProcrustesFit {
        rotation,
        scale,
        ss,
        correlation,
        yrot,
    })
}
