//! CPU implementation of ordination projections.

use crate::ordination::impl_generic::{pca_impl, pcoa_impl};
use crate::ordination::traits::ordination::{OrdinationAlgorithms, PcaResult, PcoaResult};
use numr::error::Result;
use numr::ops::DistanceMetric;
use numr::runtime::cpu::{CpuClient, CpuRuntime};
use numr::tensor::Tensor;

impl OrdinationAlgorithms<CpuRuntime> for CpuClient {
    fn pca(
        &self,
        data: &Tensor<CpuRuntime>,
        n_components: Option<usize>,
    ) -> Result<PcaResult<CpuRuntime>> {
        pca_impl(self, data, n_components)
    }

    fn pcoa(
        &self,
        data: &Tensor<CpuRuntime>,
        metric: DistanceMetric,
        n_components: Option<usize>,
    ) -> Result<PcoaResult<CpuRuntime>> {
        pcoa_impl(self, data, metric, n_components)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use numr::ops::DistanceOps;
    use numr::runtime::cpu::CpuDevice;

    fn setup() -> (CpuClient, CpuDevice) {
        let device = CpuDevice::new();
        let client = CpuClient::new(device.clone());
        (client, device)
    }

    #[test]
    fn test_pca_collinear_data_is_rank_one() {
        let (client, device) = setup();

        // Points on the line y = 2x: all variance on one axis.
        let data = Tensor::<CpuRuntime>::from_slice(
            &[0.0, 0.0, 1.0, 2.0, 2.0, 4.0, 3.0, 6.0, 4.0, 8.0],
            &[5, 2],
            &device,
        );

        let result = client.pca(&data, None).unwrap();
        let variance: Vec<f64> = result.explained_variance.to_vec();

        assert_eq!(result.scores.shape(), &[5, 2]);
        assert!(variance[0] > 1.0);
        assert!(variance[1].abs() < 1e-10);
    }

    #[test]
    fn test_pca_truncates_components() {
        let (client, device) = setup();

        let data = Tensor::<CpuRuntime>::from_slice(
            &[
                0.5, 1.0, -0.5, 2.0, 0.0, 1.5, 1.0, -1.0, 2.5, 0.5, -1.5, 2.0, 0.5, 0.0, 1.0, 1.0,
                2.0, -0.5, 1.5, 0.5, 0.0, 2.5, -1.0, 1.0,
            ],
            &[6, 4],
            &device,
        );

        let result = client.pca(&data, Some(2)).unwrap();

        assert_eq!(result.scores.shape(), &[6, 2]);
        assert_eq!(result.components.shape(), &[4, 2]);
        assert_eq!(result.explained_variance.shape(), &[2]);
    }

    #[test]
    fn test_pca_rejects_excess_components() {
        let (client, device) = setup();

        let data =
            Tensor::<CpuRuntime>::from_slice(&[0.0, 1.0, 2.0, 3.0, 4.0, 5.0], &[3, 2], &device);

        assert!(client.pca(&data, Some(3)).is_err());
        assert!(client.pca(&data, Some(0)).is_err());
    }

    #[test]
    fn test_pcoa_euclidean_preserves_distances() {
        let (client, device) = setup();

        let data = Tensor::<CpuRuntime>::from_slice(
            &[0.0, 0.0, 1.0, 0.5, 2.0, 2.0, -1.0, 1.0, 0.5, -1.5],
            &[5, 2],
            &device,
        );

        let result = client.pcoa(&data, DistanceMetric::Euclidean, None).unwrap();

        // Classical scaling of Euclidean distances reproduces them exactly.
        let original = client.cdist(&data, &data, DistanceMetric::Euclidean).unwrap();
        let embedded = client
            .cdist(&result.scores, &result.scores, DistanceMetric::Euclidean)
            .unwrap();

        let original: Vec<f64> = original.to_vec();
        let embedded: Vec<f64> = embedded.to_vec();
        for (a, b) in original.iter().zip(embedded.iter()) {
            assert!((a - b).abs() < 1e-8);
        }
    }

    #[test]
    fn test_pcoa_eigenvalues_non_negative() {
        let (client, device) = setup();

        let data = Tensor::<CpuRuntime>::from_slice(
            &[0.0, 0.2, 1.3, 0.5, 2.1, 2.0, -1.0, 1.4],
            &[4, 2],
            &device,
        );

        let result = client
            .pcoa(&data, DistanceMetric::Manhattan, Some(2))
            .unwrap();
        let values: Vec<f64> = result.eigenvalues.to_vec();

        assert_eq!(result.scores.shape(), &[4, 2]);
        for v in values {
            assert!(v >= 0.0);
        }
    }
}
