//! CUDA implementation of ordination projections.

use crate::ordination::impl_generic::{pca_impl, pcoa_impl};
use crate::ordination::traits::ordination::{OrdinationAlgorithms, PcaResult, PcoaResult};
use numr::error::Result;
use numr::ops::DistanceMetric;
use numr::runtime::cuda::{CudaClient, CudaRuntime};
use numr::tensor::Tensor;

impl OrdinationAlgorithms<CudaRuntime> for CudaClient {
    fn pca(
        &self,
        data: &Tensor<CudaRuntime>,
        n_components: Option<usize>,
    ) -> Result<PcaResult<CudaRuntime>> {
        pca_impl(self, data, n_components)
    }

    fn pcoa(
        &self,
        data: &Tensor<CudaRuntime>,
        metric: DistanceMetric,
        n_components: Option<usize>,
    ) -> Result<PcoaResult<CudaRuntime>> {
        pcoa_impl(self, data, metric, n_components)
    }
}
