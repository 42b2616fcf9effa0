//! CPU implementation of the procrustes permutation tests.

use crate::procrustes::impl_generic::{
    procrustes_randtest_impl, procrustes_rtest_impl, protest_impl,
};
use crate::procrustes::traits::significance::{
    ProcrustesTestAlgorithms, ProtestOptions, ProtestResult,
};
use numr::error::Result;
use numr::runtime::cpu::{CpuClient, CpuRuntime};
use numr::tensor::Tensor;

impl ProcrustesTestAlgorithms<CpuRuntime> for CpuClient {
    fn protest(
        &self,
        x: &Tensor<CpuRuntime>,
        y: &Tensor<CpuRuntime>,
        options: &ProtestOptions,
    ) -> Result<ProtestResult> {
        protest_impl(self, x, y, options)
    }

    fn procrustes_rtest(
        &self,
        x: &Tensor<CpuRuntime>,
        y: &Tensor<CpuRuntime>,
        options: &ProtestOptions,
    ) -> Result<ProtestResult> {
        procrustes_rtest_impl(self, x, y, options)
    }

    fn procrustes_randtest(
        &self,
        x: &Tensor<CpuRuntime>,
        y: &Tensor<CpuRuntime>,
        options: &ProtestOptions,
    ) -> Result<ProtestResult> {
        procrustes_randtest_impl(self, x, y, options)
    }
}
