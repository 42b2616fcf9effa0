//! Validation helpers for cross comparisons.

use crate::compare::traits::crossfit::Block;
use numr::error::{Error, Result};

/// Validate that `spec` and `env` agree on the number of rows.
pub fn validate_paired_tables(
    spec_shape: &[usize],
    env_shape: &[usize],
    op: &'static str,
) -> Result<()> {
    if spec_shape.len() != 2 || env_shape.len() != 2 {
        return Err(Error::InvalidArgument {
            arg: "spec/env",
            reason: format!("{op} requires 2D tables [n, p]"),
        });
    }
    if spec_shape[0] != env_shape[0] {
        return Err(Error::InvalidArgument {
            arg: "spec/env",
            reason: format!(
                "{op} requires matching row counts: spec has {}, env has {}",
                spec_shape[0], env_shape[0]
            ),
        });
    }
    Ok(())
}

/// Validate a block list against its table's column count.
///
/// Names must be unique and non-empty; every block needs at least one column;
/// indices must be in bounds and unique within a block.
pub fn validate_blocks(blocks: &[Block], ncols: usize, op: &'static str) -> Result<()> {
    for (i, block) in blocks.iter().enumerate() {
        if block.name.is_empty() {
            return Err(Error::InvalidArgument {
                arg: "blocks",
                reason: format!("{op}: block {i} has an empty name"),
            });
        }
        if blocks[..i].iter().any(|b| b.name == block.name) {
            return Err(Error::InvalidArgument {
                arg: "blocks",
                reason: format!("{op}: duplicate block name '{}'", block.name),
            });
        }
        if block.columns.is_empty() {
            return Err(Error::InvalidArgument {
                arg: "blocks",
                reason: format!("{op}: block '{}' has no columns", block.name),
            });
        }
        for (j, &col) in block.columns.iter().enumerate() {
            if col >= ncols {
                return Err(Error::InvalidArgument {
                    arg: "blocks",
                    reason: format!(
                        "{op}: block '{}' references column {col}, table has {ncols}",
                        block.name
                    ),
                });
            }
            if block.columns[..j].contains(&col) {
                return Err(Error::InvalidArgument {
                    arg: "blocks",
                    reason: format!("{op}: block '{}' lists column {col} twice", block.name),
                });
            }
        }
    }
    Ok(())
}

/// Validate a grouping vector against the row count.
pub fn validate_grouping(groups_len: usize, nrows: usize, op: &'static str) -> Result<()> {
    if groups_len != nrows {
        return Err(Error::InvalidArgument {
            arg: "groups",
            reason: format!(
                "{op} requires one label per row: got {groups_len} labels for {nrows} rows"
            ),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_blocks() {
        let ok = vec![
            Block::new("a", vec![0, 1]),
            Block::new("b", vec![2]),
        ];
        assert!(validate_blocks(&ok, 3, "test").is_ok());

        let dup_name = vec![Block::new("a", vec![0]), Block::new("a", vec![1])];
        assert!(validate_blocks(&dup_name, 3, "test").is_err());

        let out_of_bounds = vec![Block::new("a", vec![3])];
        assert!(validate_blocks(&out_of_bounds, 3, "test").is_err());

        let dup_col = vec![Block::new("a", vec![1, 1])];
        assert!(validate_blocks(&dup_col, 3, "test").is_err());

        let empty = vec![Block::new("a", vec![])];
        assert!(validate_blocks(&empty, 3, "test").is_err());
    }

    #[test]
    fn test_validate_paired_tables() {
        assert!(validate_paired_tables(&[10, 3], &[10, 5], "test").is_ok());
        assert!(validate_paired_tables(&[10, 3], &[9, 5], "test").is_err());
        assert!(validate_paired_tables(&[10], &[10, 5], "test").is_err());
    }

    #[test]
    fn test_validate_grouping() {
        assert!(validate_grouping(4, 4, "test").is_ok());
        assert!(validate_grouping(3, 4, "test").is_err());
    }
}
