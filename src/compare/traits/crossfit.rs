//! Block-wise cross comparison of two row-matched tables.

use numr::error::Result;
use numr::ops::DistanceMetric;
use numr::runtime::Runtime;
use numr::tensor::Tensor;

/// A named subset of a table's columns.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Block {
    /// Label carried into the output records.
    pub name: String,
    /// Column indices belonging to the block.
    pub columns: Vec<usize>,
}

impl Block {
    pub fn new(name: &str, columns: Vec<usize>) -> Self {
        Self {
            name: name.to_string(),
            columns,
        }
    }
}

/// Pre-transform applied to every block of a table before testing.
#[derive(Debug, Clone, Default)]
pub enum BlockTransform {
    /// Use the block's columns as-is.
    #[default]
    Identity,
    /// Replace the block by its PCA scores.
    Pca {
        /// Retained axes; `None` keeps min(n − 1, p).
        components: Option<usize>,
    },
    /// Replace the block by its PCoA embedding under the given metric.
    Pcoa {
        metric: DistanceMetric,
        /// Retained axes; `None` keeps min(n − 1, p).
        components: Option<usize>,
    },
}

/// Which permutation test is run on every block pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TestVariant {
    /// Protest: permute rows of the first (spec) block.
    #[default]
    Protest,
    /// Randomization test: permute rows of the second (env) block.
    Rtest,
    /// Monte-Carlo test: permute rows of both blocks independently.
    Randtest,
}

/// Options for a cross comparison.
#[derive(Debug, Clone)]
pub struct CrossFitOptions {
    /// Significance-test variant dispatched per pair.
    pub variant: TestVariant,
    /// Permutations per test.
    pub permutations: usize,
    /// Base seed; each (group, pair) derives its own stream so record values
    /// do not depend on evaluation order. `None` uses the backend RNG.
    pub seed: Option<u64>,
    /// Transform applied to every spec block.
    pub spec_transform: BlockTransform,
    /// Transform applied to every env block.
    pub env_transform: BlockTransform,
}

impl Default for CrossFitOptions {
    fn default() -> Self {
        Self {
            variant: TestVariant::Protest,
            permutations: 999,
            seed: None,
            spec_transform: BlockTransform::Identity,
            env_transform: BlockTransform::Identity,
        }
    }
}

/// One row of the tidy output: a single tested block pair.
#[derive(Debug, Clone)]
pub struct FitRecord {
    /// Group label, present when the analysis was split by a grouping vector.
    pub group: Option<String>,
    /// Name of the spec-side block.
    pub spec_block: String,
    /// Name of the env-side block.
    pub env_block: String,
    /// Symmetric procrustean correlation of the pair.
    pub correlation: f64,
    /// Symmetric residual sum of squares, 1 − correlation².
    pub ss: f64,
    /// Permutation p-value.
    pub pvalue: f64,
    /// Permutations used for the pair.
    pub permutations: usize,
}

/// Cross comparison of two row-matched tables over named column blocks.
///
/// Records come back in deterministic order: groups by first appearance,
/// then spec blocks, then env blocks, each in caller-given order.
pub trait CrossFitAlgorithms<R: Runtime> {
    /// Test every spec-block × env-block pair and collect one record each.
    ///
    /// An empty block slice stands for one block spanning the whole table,
    /// named `"spec"` or `"env"` respectively.
    fn cross_fit(
        &self,
        spec: &Tensor<R>,
        env: &Tensor<R>,
        spec_blocks: &[Block],
        env_blocks: &[Block],
        options: &CrossFitOptions,
    ) -> Result<Vec<FitRecord>>;

    /// Split rows by `groups` (one label per row) and run an independent
    /// cross comparison per group, concatenating the tagged records.
    fn cross_fit_grouped(
        &self,
        spec: &Tensor<R>,
        env: &Tensor<R>,
        spec_blocks: &[Block],
        env_blocks: &[Block],
        groups: &[&str],
        options: &CrossFitOptions,
    ) -> Result<Vec<FitRecord>>;
}
