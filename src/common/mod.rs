//! Helpers shared across ordfit modules.
//!
//! These work with any numr Runtime (CPU, CUDA, WebGPU).

use numr::dtype::DType;
use numr::error::{Error, Result};
use numr::ops::TensorOps;
use numr::runtime::{Runtime, RuntimeClient};
use numr::tensor::Tensor;

/// Extract a scalar f64 from a 0-D or 1-element tensor.
pub fn extract_scalar<R: Runtime>(t: &Tensor<R>) -> Result<f64> {
    if t.numel() != 1 {
        return Err(Error::InvalidArgument {
            arg: "tensor",
            reason: format!("expected scalar (1 element), got {} elements", t.numel()),
        });
    }

    let t = t.contiguous();
    match t.dtype() {
        DType::F32 => {
            let data: Vec<f32> = t.to_vec();
            Ok(data[0] as f64)
        }
        DType::F64 => {
            let data: Vec<f64> = t.to_vec();
            Ok(data[0])
        }
        dtype => Err(Error::UnsupportedDType {
            dtype,
            op: "extract_scalar",
        }),
    }
}

/// Total sum of squares of a tensor, as a host scalar.
pub fn total_sum_of_squares<R, C>(client: &C, t: &Tensor<R>) -> Result<f64>
where
    R: Runtime,
    C: TensorOps<R> + RuntimeClient<R>,
{
    let sq = client.mul(t, t)?;
    let all_dims: Vec<usize> = (0..t.ndim()).collect();
    extract_scalar(&client.sum(&sq, &all_dims, false)?)
}

/// Column-center a 2-D table: subtract the per-column mean from every row.
pub fn center_columns<R, C>(client: &C, t: &Tensor<R>) -> Result<Tensor<R>>
where
    R: Runtime,
    C: TensorOps<R> + RuntimeClient<R>,
{
    let mean = client.mean(t, &[0], true)?;
    client.sub(t, &mean.broadcast_to(t.shape())?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use numr::runtime::cpu::{CpuClient, CpuDevice, CpuRuntime};

    #[test]
    fn test_extract_scalar_rejects_non_scalar() {
        let device = CpuDevice::new();
        let t = Tensor::<CpuRuntime>::from_slice(&[1.0, 2.0], &[2], &device);
        assert!(extract_scalar(&t).is_err());
    }

    #[test]
    fn test_center_columns() {
        let device = CpuDevice::new();
        let client = CpuClient::new(device.clone());

        let t = Tensor::<CpuRuntime>::from_slice(&[1.0, 10.0, 3.0, 20.0], &[2, 2], &device);
        let centered = center_columns(&client, &t).unwrap();
        let data: Vec<f64> = centered.to_vec();

        assert!((data[0] + 1.0).abs() < 1e-12);
        assert!((data[1] + 5.0).abs() < 1e-12);
        assert!((data[2] - 1.0).abs() < 1e-12);
        assert!((data[3] - 5.0).abs() < 1e-12);
    }
}
