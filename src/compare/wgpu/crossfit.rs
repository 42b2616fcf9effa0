//! WebGPU implementation of cross comparisons.

use crate::compare::impl_generic::{cross_fit_grouped_impl, cross_fit_impl};
use crate::compare::traits::crossfit::{Block, CrossFitAlgorithms, CrossFitOptions, FitRecord};
use numr::error::Result;
use numr::runtime::wgpu::{WgpuClient, WgpuRuntime};
use numr::tensor::Tensor;

impl CrossFitAlgorithms<WgpuRuntime> for WgpuClient {
    fn cross_fit(
        &self,
        spec: &Tensor<WgpuRuntime>,
        env: &Tensor<WgpuRuntime>,
        spec_blocks: &[Block],
        env_blocks: &[Block],
        options: &CrossFitOptions,
    ) -> Result<Vec<FitRecord>> {
        cross_fit_impl(self, spec, env, spec_blocks, env_blocks, options)
    }

    fn cross_fit_grouped(
        &self,
        spec: &Tensor<WgpuRuntime>,
        env: &Tensor<WgpuRuntime>,
        spec_blocks: &[Block],
        env_blocks: &[Block],
        groups: &[&str],
        options: &CrossFitOptions,
    ) -> Result<Vec<FitRecord>> {
        cross_fit_grouped_impl(self, spec, env, spec_blocks, env_blocks, groups, options)
    }
}
