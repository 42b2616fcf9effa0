//! CPU implementation of cross comparisons.

use crate::compare::impl_generic::{cross_fit_grouped_impl, cross_fit_impl};
use crate::compare::traits::crossfit::{Block, CrossFitAlgorithms, CrossFitOptions, FitRecord};
use numr::error::Result;
use numr::runtime::cpu::{CpuClient, CpuRuntime};
use numr::tensor::Tensor;

impl CrossFitAlgorithms<CpuRuntime> for CpuClient {
    fn cross_fit(
        &self,
        spec: &Tensor<CpuRuntime>,
        env: &Tensor<CpuRuntime>,
        spec_blocks: &[Block],
        env_blocks: &[Block],
        options: &CrossFitOptions,
    ) -> Result<Vec<FitRecord>> {
        cross_fit_impl(self, spec, env, spec_blocks, env_blocks, options)
    }

    fn cross_fit_grouped(
        &self,
        spec: &Tensor<CpuRuntime>,
        env: &Tensor<CpuRuntime>,
        spec_blocks: &[Block],
        env_blocks: &[Block],
        groups: &[&str],
        options: &CrossFitOptions,
    ) -> Result<Vec<FitRecord>> {
        cross_fit_grouped_impl(self, spec, env, spec_blocks, env_blocks, groups, options)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compare::traits::crossfit::{BlockTransform, TestVariant};
    use numr::runtime::cpu::CpuDevice;

    fn setup() -> (CpuClient, CpuDevice) {
        let device = CpuDevice::new();
        let client = CpuClient::new(device.clone());
        (client, device)
    }

    /// 8 rows, spec 4 columns, env 3 columns, no degenerate columns.
    fn tables(device: &CpuDevice) -> (Tensor<CpuRuntime>, Tensor<CpuRuntime>) {
        let spec = Tensor::<CpuRuntime>::from_slice(
            &[
                0.2, 1.1, -0.7, 2.0, 2.3, -0.4, 1.2, 0.3, 1.7, 0.9, -1.5, 1.1, -1.2, 2.0, 0.8,
                -0.6, 0.6, -0.8, 2.1, 0.4, 2.9, 1.4, -0.2, 1.8, -0.3, 0.1, 1.6, -1.1, 1.1, 2.2,
                0.5, 0.9,
            ],
            &[8, 4],
            device,
        );
        let env = Tensor::<CpuRuntime>::from_slice(
            &[
                1.0, 0.3, -0.2, 0.1, 1.8, 0.9, 2.2, -0.5, 1.3, -0.9, 1.1, 0.6, 0.4, 2.5, -1.0,
                1.9, 0.2, 0.8, -0.7, 1.4, 2.0, 0.9, -1.3, 0.5,
            ],
            &[8, 3],
            device,
        );
        (spec, env)
    }

    fn options(seed: u64) -> CrossFitOptions {
        CrossFitOptions {
            permutations: 49,
            seed: Some(seed),
            ..CrossFitOptions::default()
        }
    }

    #[test]
    fn test_whole_table_defaults() {
        let (client, device) = setup();
        let (spec, env) = tables(&device);

        let records = client
            .cross_fit(&spec, &env, &[], &[], &options(11))
            .unwrap();

        assert_eq!(records.len(), 1);
        assert_eq!(records[0].spec_block, "spec");
        assert_eq!(records[0].env_block, "env");
        assert!(records[0].group.is_none());
        assert!(records[0].correlation > 0.0 && records[0].correlation <= 1.0);
        assert!(records[0].pvalue > 0.0 && records[0].pvalue <= 1.0);
    }

    #[test]
    fn test_cross_product_order_and_names() {
        let (client, device) = setup();
        let (spec, env) = tables(&device);

        let spec_blocks = vec![
            Block::new("taxa_a", vec![0, 1]),
            Block::new("taxa_b", vec![2, 3]),
        ];
        let env_blocks = vec![
            Block::new("chemistry", vec![0, 1]),
            Block::new("climate", vec![2]),
        ];

        let records = client
            .cross_fit(&spec, &env, &spec_blocks, &env_blocks, &options(3))
            .unwrap();

        assert_eq!(records.len(), 4);
        let names: Vec<(&str, &str)> = records
            .iter()
            .map(|r| (r.spec_block.as_str(), r.env_block.as_str()))
            .collect();
        assert_eq!(
            names,
            vec![
                ("taxa_a", "chemistry"),
                ("taxa_a", "climate"),
                ("taxa_b", "chemistry"),
                ("taxa_b", "climate"),
            ]
        );
    }

    #[test]
    fn test_seeded_runs_reproduce() {
        let (client, device) = setup();
        let (spec, env) = tables(&device);
        let blocks = vec![Block::new("a", vec![0, 1]), Block::new("b", vec![2, 3])];

        let first = client
            .cross_fit(&spec, &env, &blocks, &[], &options(99))
            .unwrap();
        let second = client
            .cross_fit(&spec, &env, &blocks, &[], &options(99))
            .unwrap();

        assert_eq!(first.len(), second.len());
        for (a, b) in first.iter().zip(second.iter()) {
            assert_eq!(a.pvalue, b.pvalue);
            assert_eq!(a.correlation, b.correlation);
        }
    }

    #[test]
    fn test_variants_dispatch() {
        let (client, device) = setup();
        let (spec, env) = tables(&device);

        for variant in [TestVariant::Protest, TestVariant::Rtest, TestVariant::Randtest] {
            let opts = CrossFitOptions {
                variant,
                ..options(17)
            };
            let records = client.cross_fit(&spec, &env, &[], &[], &opts).unwrap();
            assert_eq!(records.len(), 1);
            assert!(records[0].pvalue >= 1.0 / 50.0 && records[0].pvalue <= 1.0);
        }
    }

    #[test]
    fn test_pca_transform_path() {
        let (client, device) = setup();
        let (spec, env) = tables(&device);

        let opts = CrossFitOptions {
            spec_transform: BlockTransform::Pca {
                components: Some(2),
            },
            ..options(23)
        };

        let records = client.cross_fit(&spec, &env, &[], &[], &opts).unwrap();

        assert_eq!(records.len(), 1);
        assert!(records[0].correlation.is_finite());
        assert!(records[0].pvalue > 0.0 && records[0].pvalue <= 1.0);
    }

    #[test]
    fn test_grouped_records_are_tagged_and_ordered() {
        let (client, device) = setup();
        let (spec, env) = tables(&device);
        let groups = ["wet", "wet", "dry", "wet", "dry", "dry", "wet", "dry"];

        let records = client
            .cross_fit_grouped(&spec, &env, &[], &[], &groups, &options(7))
            .unwrap();

        assert_eq!(records.len(), 2);
        assert_eq!(records[0].group.as_deref(), Some("wet"));
        assert_eq!(records[1].group.as_deref(), Some("dry"));
        for record in &records {
            assert!(record.pvalue > 0.0 && record.pvalue <= 1.0);
        }
    }

    #[test]
    fn test_grouped_rejects_small_group() {
        let (client, device) = setup();
        let (spec, env) = tables(&device);
        let groups = ["a", "a", "a", "a", "a", "a", "b", "b"];

        assert!(client
            .cross_fit_grouped(&spec, &env, &[], &[], &groups, &options(1))
            .is_err());
    }

    #[test]
    fn test_grouped_rejects_length_mismatch() {
        let (client, device) = setup();
        let (spec, env) = tables(&device);
        let groups = ["a", "b", "a"];

        assert!(client
            .cross_fit_grouped(&spec, &env, &[], &[], &groups, &options(1))
            .is_err());
    }

    #[test]
    fn test_rejects_bad_blocks() {
        let (client, device) = setup();
        let (spec, env) = tables(&device);

        let out_of_bounds = vec![Block::new("a", vec![9])];
        assert!(client
            .cross_fit(&spec, &env, &out_of_bounds, &[], &options(1))
            .is_err());

        let duplicate = vec![Block::new("a", vec![0]), Block::new("a", vec![1])];
        assert!(client
            .cross_fit(&spec, &env, &duplicate, &[], &options(1))
            .is_err());
    }

    #[test]
    fn test_rejects_row_mismatch() {
        let (client, device) = setup();
        let (spec, _) = tables(&device);
        let env = Tensor::<CpuRuntime>::from_slice(
            &[0.0, 1.0, 2.0, 3.0, 4.0, 5.0],
            &[3, 2],
            &device,
        );

        assert!(client.cross_fit(&spec, &env, &[], &[], &options(1)).is_err());
    }
}
