//! WebGPU implementation of the procrustes rotational fit.

use crate::procrustes::impl_generic::procrustes_fit_impl;
use crate::procrustes::traits::fit::{ProcrustesFit, ProcrustesFitAlgorithms};
use numr::error::Result;
use numr::runtime::wgpu::{WgpuClient, WgpuRuntime};
use numr::tensor::Tensor;

impl ProcrustesFitAlgorithms<WgpuRuntime> for WgpuClient {
    fn procrustes_fit(
        &self,
        x: &Tensor<WgpuRuntime>,
        y: &Tensor<WgpuRuntime>,
        symmetric: bool,
        scaling: bool,
    ) -> Result<ProcrustesFit<WgpuRuntime>> {
        procrustes_fit_impl(self, x, y, symmetric, scaling)
    }
}
