//! Permutation significance tests for procrustes fits.

use numr::error::Result;
use numr::runtime::Runtime;
use numr::tensor::Tensor;

/// Options shared by the procrustes significance tests.
#[derive(Debug, Clone, Copy)]
pub struct ProtestOptions {
    /// Number of row permutations used to build the null distribution.
    pub permutations: usize,
    /// Seed for reproducible permutation draws. `None` uses the backend RNG.
    pub seed: Option<u64>,
}

impl Default for ProtestOptions {
    fn default() -> Self {
        Self {
            permutations: 999,
            seed: None,
        }
    }
}

/// Result of a procrustes permutation test.
#[derive(Debug, Clone, Copy)]
pub struct ProtestResult {
    /// Observed symmetric procrustean correlation.
    pub correlation: f64,
    /// Observed symmetric residual sum of squares, 1 − correlation².
    pub ss: f64,
    /// Permutation p-value, (exceedances + 1) / (permutations + 1).
    pub pvalue: f64,
    /// Number of permutations actually run.
    pub permutations: usize,
}

/// Permutation tests of the symmetric procrustean correlation between two
/// row-matched configurations.
///
/// All three variants share the observed statistic and differ only in how the
/// null distribution is generated.
pub trait ProcrustesTestAlgorithms<R: Runtime> {
    /// Protest: permutes the rows of the first configuration.
    fn protest(
        &self,
        x: &Tensor<R>,
        y: &Tensor<R>,
        options: &ProtestOptions,
    ) -> Result<ProtestResult>;

    /// Randomization test permuting the rows of the second configuration.
    fn procrustes_rtest(
        &self,
        x: &Tensor<R>,
        y: &Tensor<R>,
        options: &ProtestOptions,
    ) -> Result<ProtestResult>;

    /// Monte-Carlo test permuting the rows of both configurations
    /// independently on every draw.
    fn procrustes_randtest(
        &self,
        x: &Tensor<R>,
        y: &Tensor<R>,
        options: &ProtestOptions,
    ) -> Result<ProtestResult>;
}
