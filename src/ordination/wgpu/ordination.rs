//! WebGPU implementation of ordination projections.

use crate::ordination::impl_generic::{pca_impl, pcoa_impl};
use crate::ordination::traits::ordination::{OrdinationAlgorithms, PcaResult, PcoaResult};
use numr::error::Result;
use numr::ops::DistanceMetric;
use numr::runtime::wgpu::{WgpuClient, WgpuRuntime};
use numr::tensor::Tensor;

impl OrdinationAlgorithms<WgpuRuntime> for WgpuClient {
    fn pca(
        &self,
        data: &Tensor<WgpuRuntime>,
        n_components: Option<usize>,
    ) -> Result<PcaResult<WgpuRuntime>> {
        pca_impl(self, data, n_components)
    }

    fn pcoa(
        &self,
        data: &Tensor<WgpuRuntime>,
        metric: DistanceMetric,
        n_components: Option<usize>,
    ) -> Result<PcoaResult<WgpuRuntime>> {
        pcoa_impl(self, data, metric, n_components)
    }
}
