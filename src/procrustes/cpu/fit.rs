//! CPU implementation of the procrustes rotational fit.

use crate::procrustes::impl_generic::procrustes_fit_impl;
use crate::procrustes::traits::fit::{ProcrustesFit, ProcrustesFitAlgorithms};
use numr::error::Result;
use numr::runtime::cpu::{CpuClient, CpuRuntime};
use numr::tensor::Tensor;

impl ProcrustesFitAlgorithms<CpuRuntime> for CpuClient {
    fn procrustes_fit(
        &self,
        x: &Tensor<CpuRuntime>,
        y: &Tensor<CpuRuntime>,
        symmetric: bool,
        scaling: bool,
    ) -> Result<ProcrustesFit<CpuRuntime>> {
        procrustes_fit_impl(self, x, y, symmetric, scaling)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use numr::ops::{BinaryOps, MatmulOps, ScalarOps, TensorOps};
    use numr::runtime::cpu::CpuDevice;
    use numr::runtime::RuntimeClient;

    fn setup() -> (CpuClient, CpuDevice) {
        let device = CpuDevice::new();
        let client = CpuClient::new(device.clone());
        (client, device)
    }

    fn square_config(device: &CpuDevice) -> Tensor<CpuRuntime> {
        Tensor::<CpuRuntime>::from_slice(
            &[0.0, 0.0, 2.0, 0.5, 1.5, 2.5, -0.5, 1.0, 1.0, -1.0],
            &[5, 2],
            device,
        )
    }

    #[test]
    fn test_fit_identical_configurations() {
        let (client, device) = setup();
        let x = square_config(&device);

        let fit = client.procrustes_fit(&x, &x, true, true).unwrap();

        assert!((fit.correlation - 1.0).abs() < 1e-10);
        assert!(fit.ss.abs() < 1e-10);
    }

    #[test]
    fn test_fit_recovers_rotation() {
        let (client, device) = setup();
        let x = square_config(&device);

        // Rotate by 30 degrees; a rigid rotation is a perfect fit.
        let (s, c) = (30.0_f64.to_radians().sin(), 30.0_f64.to_radians().cos());
        let rot = Tensor::<CpuRuntime>::from_slice(&[c, s, -s, c], &[2, 2], &device);
        let y = client.matmul(&x, &rot).unwrap();

        let fit = client.procrustes_fit(&x, &y, true, true).unwrap();

        assert!((fit.correlation - 1.0).abs() < 1e-8);
        assert!(fit.ss.abs() < 1e-8);
    }

    #[test]
    fn test_fit_translation_invariance() {
        let (client, device) = setup();
        let x = square_config(&device);
        let shift = Tensor::<CpuRuntime>::full_scalar(&[5, 2], x.dtype(), 7.5, &device);
        let y = client.add(&x, &shift).unwrap();

        let fit = client.procrustes_fit(&x, &y, true, true).unwrap();

        assert!((fit.correlation - 1.0).abs() < 1e-10);
    }

    #[test]
    fn test_fit_scale_recovery() {
        let (client, device) = setup();
        let x = square_config(&device);
        let y = client.mul_scalar(&x, 3.0).unwrap();

        // Rotating y back onto x shrinks it by 1/3.
        let fit = client.procrustes_fit(&x, &y, false, true).unwrap();

        assert!((fit.scale - 1.0 / 3.0).abs() < 1e-8);
        assert!(fit.ss.abs() < 1e-8);
        assert!((fit.correlation - 1.0).abs() < 1e-10);
    }

    #[test]
    fn test_fit_pads_unequal_column_counts() {
        let (client, device) = setup();
        let x = Tensor::<CpuRuntime>::from_slice(
            &[
                0.0, 0.0, 1.0, 2.0, 0.5, -1.0, 1.5, 2.5, 0.0, -0.5, 1.0, 0.5,
            ],
            &[4, 3],
            &device,
        );
        let y = Tensor::<CpuRuntime>::from_slice(
            &[0.1, 0.0, 1.9, 0.4, 1.4, 2.6, -0.4, 1.1],
            &[4, 2],
            &device,
        );

        let fit = client.procrustes_fit(&x, &y, true, true).unwrap();

        assert_eq!(fit.yrot.shape(), &[4, 3]);
        assert_eq!(fit.rotation.shape(), &[3, 3]);
        assert!(fit.correlation > 0.0 && fit.correlation <= 1.0);
    }

    #[test]
    fn test_fit_rejects_constant_configuration() {
        let (client, device) = setup();
        let x = square_config(&device);
        let y = Tensor::<CpuRuntime>::full_scalar(&[5, 2], x.dtype(), 4.0, &device);

        assert!(client.procrustes_fit(&x, &y, true, true).is_err());
    }

    #[test]
    fn test_fit_rejects_row_mismatch() {
        let (client, device) = setup();
        let x = square_config(&device);
        let y = Tensor::<CpuRuntime>::from_slice(&[0.0, 1.0, 2.0, 3.0], &[2, 2], &device);

        assert!(client.procrustes_fit(&x, &y, true, true).is_err());
    }
}
