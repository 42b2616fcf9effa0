//! Generic permutation tests for the procrustean correlation.
//!
//! The observed statistic is the symmetric procrustean correlation: both
//! configurations are column-centered and normalized to unit total sum of
//! squares, so the sum of the singular values of XᵀY is the correlation
//! itself. Row permutation leaves column means and norms unchanged, which
//! lets every draw reuse the prepared matrices.
//!
//! Seeded draws use numr's counter-based Philox generator so results are
//! reproducible on every backend; unseeded draws fall back to `randperm`.

use crate::procrustes::impl_generic::fit::{
    pad_columns, prepare_configuration, trace_of_singular_values,
};
use crate::procrustes::traits::significance::{ProtestOptions, ProtestResult};
use crate::procrustes::{
    validate_matching_rows, validate_permutations, validate_table_2d, validate_table_dtype,
};
use numr::algorithm::linalg::LinearAlgebraAlgorithms;
use numr::dtype::DType;
use numr::error::Result;
use numr::ops::{AdvancedRandomOps, IndexingOps, RandomOps, ReduceOps, ScalarOps, TensorOps};
use numr::runtime::{Runtime, RuntimeClient};
use numr::tensor::Tensor;

/// Which configuration's rows are shuffled when building the null.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum PermutationScheme {
    First,
    Second,
    Both,
}

/// Stride separating the Philox streams of successive draws.
const SEED_STRIDE: u64 = 0x9E37_79B9_7F4A_7C15;

fn draw_seed(seed: Option<u64>, draw: usize) -> Option<u64> {
    seed.map(|s| s.wrapping_add((draw as u64 + 1).wrapping_mul(SEED_STRIDE)))
}

/// Return `t` with its rows shuffled by a uniform random permutation.
fn permuted_rows<R, C>(client: &C, t: &Tensor<R>, seed: Option<u64>) -> Result<Tensor<R>>
where
    R: Runtime,
    C: TensorOps<R> + RandomOps<R> + AdvancedRandomOps<R> + IndexingOps<R> + RuntimeClient<R>,
{
    let n = t.shape()[0];
    let order = match seed {
        Some(s) => {
            // Sorting uniform keys yields an unbiased permutation.
            let keys = client.philox_uniform(&[n], s, 0, DType::F64)?;
            client.argsort(&keys, 0, false)?
        }
        None => client.randperm(n)?,
    };
    client.index_select(t, 0, &order)
}

fn permutation_test<R, C>(
    client: &C,
    x: &Tensor<R>,
    y: &Tensor<R>,
    options: &ProtestOptions,
    scheme: PermutationScheme,
    op: &'static str,
) -> Result<ProtestResult>
where
    R: Runtime,
    C: TensorOps<R>
        + ScalarOps<R>
        + ReduceOps<R>
        + IndexingOps<R>
        + RandomOps<R>
        + AdvancedRandomOps<R>
        + LinearAlgebraAlgorithms<R>
        + RuntimeClient<R>,
{
    validate_table_dtype(x.dtype(), op)?;
    validate_table_dtype(y.dtype(), op)?;
    validate_table_2d(x.shape(), op)?;
    validate_table_2d(y.shape(), op)?;
    validate_matching_rows(x.shape(), y.shape(), 3, op)?;
    validate_permutations(options.permutations, op)?;

    let (xc, _) = prepare_configuration(client, x, true, op)?;
    let (yc, _) = prepare_configuration(client, y, true, op)?;

    let width = x.shape()[1].max(y.shape()[1]);
    let xp = pad_columns(client, &xc, width)?;
    let yp = pad_columns(client, &yc, width)?;

    // Rounding in the SVD can push the trace a hair past 1; clamp so the
    // reported correlation stays in range.
    let observed = trace_of_singular_values(client, &xp, &yp)?.min(1.0);

    let mut exceedances = 0usize;
    for draw in 0..options.permutations {
        let statistic = match scheme {
            PermutationScheme::First => {
                let shuffled = permuted_rows(client, &xp, draw_seed(options.seed, 2 * draw))?;
                trace_of_singular_values(client, &shuffled, &yp)?
            }
            PermutationScheme::Second => {
                let shuffled = permuted_rows(client, &yp, draw_seed(options.seed, 2 * draw + 1))?;
                trace_of_singular_values(client, &xp, &shuffled)?
            }
            PermutationScheme::Both => {
                let sx = permuted_rows(client, &xp, draw_seed(options.seed, 2 * draw))?;
                let sy = permuted_rows(client, &yp, draw_seed(options.seed, 2 * draw + 1))?;
                trace_of_singular_values(client, &sx, &sy)?
            }
        };
        if statistic >= observed {
            exceedances += 1;
        }
    }

    let pvalue = (exceedances + 1) as f64 / (options.permutations + 1) as f64;

    Ok(ProtestResult {
        correlation: observed,
        ss: 1.0 - observed * observed,
        pvalue,
        permutations: options.permutations,
    })
}

/// Protest: null built by permuting the rows of the first configuration.
pub fn protest_impl<R, C>(
    client: &C,
    x: &Tensor<R>,
    y: &Tensor<R>,
    options: &ProtestOptions,
) -> Result<ProtestResult>
where
    R: Runtime,
    C: TensorOps<R>
        + ScalarOps<R>
        + ReduceOps<R>
        + IndexingOps<R>
        + RandomOps<R>
        + AdvancedRandomOps<R>
        + LinearAlgebraAlgorithms<R>
        + RuntimeClient<R>,
{
    permutation_test(client, x, y, options, PermutationScheme::First, "protest")
}

/// Randomization test: null built by permuting the rows of the second
/// configuration.
pub fn procrustes_rtest_impl<R, C>(
    client: &C,
    x: &Tensor<R>,
    y: &Tensor<R>,
    options: &ProtestOptions,
) -> Result<ProtestResult>
where
    R: Runtime,
    C: TensorOps<R>
        + ScalarOps<R>
        + ReduceOps<R>
        + IndexingOps<R>
        + RandomOps<R>
        + AdvancedRandomOps<R>
        + LinearAlgebraAlgorithms<R>
        + RuntimeClient<R>,
{
    permutation_test(
        client,
        x,
        y,
        options,
        PermutationScheme::Second,
        "procrustes_rtest",
    )
}

/// Monte-Carlo test: null built by permuting both configurations
/// independently on every draw.
pub fn procrustes_randtest_impl<R, C>(
    client: &C,
    x: &Tensor<R>,
    y: &Tensor<R>,
    options: &ProtestOptions,
) -> Result<ProtestResult>
where
    R: Runtime,
    C: TensorOps<R>
        + ScalarOps<R>
        + ReduceOps<R>
        + IndexingOps<R>
        + RandomOps<R>
        + AdvancedRandomOps<R>
        + LinearAlgebraAlgorithms<R>
        + RuntimeClient<R>,
{
    permutation_test(
        client,
        x,
        y,
        options,
        PermutationScheme::Both,
        "procrustes_randtest",
    )
}
