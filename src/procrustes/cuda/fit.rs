//! CUDA implementation of the procrustes rotational fit.

use crate::procrustes::impl_generic::procrustes_fit_impl;
use crate::procrustes::traits::fit::{ProcrustesFit, ProcrustesFitAlgorithms};
use numr::error::Result;
use numr::runtime::cuda::{CudaClient, CudaRuntime};
use numr::tensor::Tensor;

impl ProcrustesFitAlgorithms<CudaRuntime> for CudaClient {
    fn procrustes_fit(
        &self,
        x: &Tensor<CudaRuntime>,
        y: &Tensor<CudaRuntime>,
        symmetric: bool,
        scaling: bool,
    ) -> Result<ProcrustesFit<CudaRuntime>> {
        procrustes_fit_impl(self, x, y, symmetric, scaling)
    }
}
