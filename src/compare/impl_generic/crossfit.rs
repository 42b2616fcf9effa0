//! Generic cross-comparison implementation.
//!
//! The cross product of spec blocks and env blocks is walked in deterministic
//! order; every pair is extracted, transformed, and handed to the chosen
//! permutation test. Each pair (and each group) derives its own seed stream
//! from the caller's base seed, so a record's value never depends on how many
//! pairs ran before it.

use crate::compare::traits::crossfit::{
    Block, BlockTransform, CrossFitOptions, FitRecord, TestVariant,
};
use crate::compare::validation::{validate_blocks, validate_grouping, validate_paired_tables};
use crate::ordination::impl_generic::{pca_impl, pcoa_impl};
use crate::procrustes::impl_generic::{
    procrustes_randtest_impl, procrustes_rtest_impl, protest_impl,
};
use crate::procrustes::traits::significance::ProtestOptions;
use crate::procrustes::validate_table_dtype;
use numr::algorithm::linalg::LinearAlgebraAlgorithms;
use numr::error::{Error, Result};
use numr::ops::{
    AdvancedRandomOps, CompareOps, DistanceOps, IndexingOps, LinalgOps, RandomOps, ReduceOps,
    ScalarOps, TensorOps, UnaryOps,
};
use numr::runtime::{Runtime, RuntimeClient};
use numr::tensor::Tensor;

/// Stream separation constants for per-pair and per-group sub-seeds.
const PAIR_STRIDE: u64 = 0xD1B5_4A32_D192_ED03;
const GROUP_STRIDE: u64 = 0xA24B_AED4_963E_E407;

fn pair_seed(seed: Option<u64>, pair: usize) -> Option<u64> {
    seed.map(|s| s.wrapping_add((pair as u64 + 1).wrapping_mul(PAIR_STRIDE)))
}

fn group_seed(seed: Option<u64>, group: usize) -> Option<u64> {
    seed.map(|s| s.wrapping_add((group as u64 + 1).wrapping_mul(GROUP_STRIDE)))
}

/// Extract the given columns of a 2-D table, in block order.
fn select_columns<R, C>(client: &C, table: &Tensor<R>, columns: &[usize]) -> Result<Tensor<R>>
where
    R: Runtime,
    C: IndexingOps<R> + RuntimeClient<R>,
{
    let indices: Vec<i64> = columns.iter().map(|&c| c as i64).collect();
    let indices = Tensor::<R>::from_slice(&indices, &[columns.len()], client.device());
    client.index_select(table, 1, &indices)
}

fn apply_transform<R, C>(
    client: &C,
    block: &Tensor<R>,
    transform: &BlockTransform,
) -> Result<Tensor<R>>
where
    R: Runtime,
    C: TensorOps<R>
        + ScalarOps<R>
        + ReduceOps<R>
        + DistanceOps<R>
        + CompareOps<R>
        + UnaryOps<R>
        + LinalgOps<R>
        + LinearAlgebraAlgorithms<R>
        + RuntimeClient<R>,
{
    match transform {
        BlockTransform::Identity => Ok(block.clone()),
        BlockTransform::Pca { components } => Ok(pca_impl(client, block, *components)?.scores),
        BlockTransform::Pcoa { metric, components } => {
            Ok(pcoa_impl(client, block, *metric, *components)?.scores)
        }
    }
}

/// Materialize a table's blocks: extract columns and apply the transform.
/// An empty block list stands for one whole-table block.
fn prepare_blocks<R, C>(
    client: &C,
    table: &Tensor<R>,
    blocks: &[Block],
    transform: &BlockTransform,
    default_name: &str,
    op: &'static str,
) -> Result<Vec<(String, Tensor<R>)>>
where
    R: Runtime,
    C: TensorOps<R>
        + ScalarOps<R>
        + ReduceOps<R>
        + IndexingOps<R>
        + DistanceOps<R>
        + CompareOps<R>
        + UnaryOps<R>
        + LinalgOps<R>
        + LinearAlgebraAlgorithms<R>
        + RuntimeClient<R>,
{
    let whole_table;
    let blocks = if blocks.is_empty() {
        whole_table = [Block::new(default_name, (0..table.shape()[1]).collect())];
        &whole_table[..]
    } else {
        blocks
    };
    validate_blocks(blocks, table.shape()[1], op)?;

    let mut prepared = Vec::with_capacity(blocks.len());
    for block in blocks {
        let columns = select_columns(client, table, &block.columns)?;
        let transformed = apply_transform(client, &columns, transform)?;
        prepared.push((block.name.clone(), transformed));
    }
    Ok(prepared)
}

/// Cross comparison of two row-matched tables.
pub fn cross_fit_impl<R, C>(
    client: &C,
    spec: &Tensor<R>,
    env: &Tensor<R>,
    spec_blocks: &[Block],
    env_blocks: &[Block],
    options: &CrossFitOptions,
) -> Result<Vec<FitRecord>>
where
    R: Runtime,
    C: TensorOps<R>
        + ScalarOps<R>
        + ReduceOps<R>
        + IndexingOps<R>
        + RandomOps<R>
        + AdvancedRandomOps<R>
        + DistanceOps<R>
        + CompareOps<R>
        + UnaryOps<R>
        + LinalgOps<R>
        + LinearAlgebraAlgorithms<R>
        + RuntimeClient<R>,
{
    validate_table_dtype(spec.dtype(), "cross_fit")?;
    validate_table_dtype(env.dtype(), "cross_fit")?;
    validate_paired_tables(spec.shape(), env.shape(), "cross_fit")?;

    let spec_prepared = prepare_blocks(
        client,
        spec,
        spec_blocks,
        &options.spec_transform,
        "spec",
        "cross_fit",
    )?;
    let env_prepared = prepare_blocks(
        client,
        env,
        env_blocks,
        &options.env_transform,
        "env",
        "cross_fit",
    )?;

    let mut records = Vec::with_capacity(spec_prepared.len() * env_prepared.len());
    for (si, (spec_name, spec_table)) in spec_prepared.iter().enumerate() {
        for (ei, (env_name, env_table)) in env_prepared.iter().enumerate() {
            let pair = si * env_prepared.len() + ei;
            let test_options = ProtestOptions {
                permutations: options.permutations,
                seed: pair_seed(options.seed, pair),
            };

            let result = match options.variant {
                TestVariant::Protest => protest_impl(client, spec_table, env_table, &test_options),
                TestVariant::Rtest => {
                    procrustes_rtest_impl(client, spec_table, env_table, &test_options)
                }
                TestVariant::Randtest => {
                    procrustes_randtest_impl(client, spec_table, env_table, &test_options)
                }
            }?;

            records.push(FitRecord {
                group: None,
                spec_block: spec_name.clone(),
                env_block: env_name.clone(),
                correlation: result.correlation,
                ss: result.ss,
                pvalue: result.pvalue,
                permutations: result.permutations,
            });
        }
    }

    Ok(records)
}

/// Grouped cross comparison: split rows by label, run each group
/// independently, and concatenate the tagged records.
pub fn cross_fit_grouped_impl<R, C>(
    client: &C,
    spec: &Tensor<R>,
    env: &Tensor<R>,
    spec_blocks: &[Block],
    env_blocks: &[Block],
    groups: &[&str],
    options: &CrossFitOptions,
) -> Result<Vec<FitRecord>>
where
    R: Runtime,
    C: TensorOps<R>
        + ScalarOps<R>
        + ReduceOps<R>
        + IndexingOps<R>
        + RandomOps<R>
        + AdvancedRandomOps<R>
        + DistanceOps<R>
        + CompareOps<R>
        + UnaryOps<R>
        + LinalgOps<R>
        + LinearAlgebraAlgorithms<R>
        + RuntimeClient<R>,
{
    validate_paired_tables(spec.shape(), env.shape(), "cross_fit_grouped")?;
    validate_grouping(groups.len(), spec.shape()[0], "cross_fit_grouped")?;

    // Labels in order of first appearance.
    let mut labels: Vec<&str> = Vec::new();
    let mut members: Vec<Vec<i64>> = Vec::new();
    for (row, label) in groups.iter().enumerate() {
        match labels.iter().position(|l| l == label) {
            Some(i) => members[i].push(row as i64),
            None => {
                labels.push(label);
                members.push(vec![row as i64]);
            }
        }
    }

    let mut records = Vec::new();
    for (g, (label, rows)) in labels.iter().zip(members.iter()).enumerate() {
        if rows.len() < 3 {
            return Err(Error::InvalidArgument {
                arg: "groups",
                reason: format!(
                    "cross_fit_grouped: group '{label}' has {} rows, need at least 3",
                    rows.len()
                ),
            });
        }

        let indices = Tensor::<R>::from_slice(rows, &[rows.len()], client.device());
        let sub_spec = client.index_select(spec, 0, &indices)?;
        let sub_env = client.index_select(env, 0, &indices)?;

        let sub_options = CrossFitOptions {
            seed: group_seed(options.seed, g),
            ..options.clone()
        };

        let mut sub_records = cross_fit_impl(
            client,
            &sub_spec,
            &sub_env,
            spec_blocks,
            env_blocks,
            &sub_options,
        )?;
        for record in &mut sub_records {
            record.group = Some((*label).to_string());
        }
        records.append(&mut sub_records);
    }

    Ok(records)
}
