//! Validation helpers for procrustes algorithms.

use numr::dtype::DType;
use numr::error::{Error, Result};

/// Validate table dtype (must be F32 or F64).
pub fn validate_table_dtype(dtype: DType, op: &'static str) -> Result<()> {
    match dtype {
        DType::F32 | DType::F64 => Ok(()),
        _ => Err(Error::UnsupportedDType { dtype, op }),
    }
}

/// Validate that a table is 2D [n, p].
pub fn validate_table_2d(shape: &[usize], op: &'static str) -> Result<()> {
    if shape.len() != 2 {
        return Err(Error::InvalidArgument {
            arg: "table",
            reason: format!("{op} requires a 2D table [n, p], got {}-D", shape.len()),
        });
    }
    if shape[1] == 0 {
        return Err(Error::InvalidArgument {
            arg: "table",
            reason: format!("{op} requires at least one column"),
        });
    }
    Ok(())
}

/// Validate that two tables have the same row count, with at least `min_rows`.
pub fn validate_matching_rows(
    x_shape: &[usize],
    y_shape: &[usize],
    min_rows: usize,
    op: &'static str,
) -> Result<()> {
    if x_shape[0] != y_shape[0] {
        return Err(Error::InvalidArgument {
            arg: "x/y",
            reason: format!(
                "{op} requires matching row counts: got {} and {}",
                x_shape[0], y_shape[0]
            ),
        });
    }
    if x_shape[0] < min_rows {
        return Err(Error::InvalidArgument {
            arg: "x/y",
            reason: format!("{op} requires at least {min_rows} rows, got {}", x_shape[0]),
        });
    }
    Ok(())
}

/// Validate the permutation count for a significance test.
pub fn validate_permutations(permutations: usize, op: &'static str) -> Result<()> {
    if permutations == 0 {
        return Err(Error::InvalidArgument {
            arg: "permutations",
            reason: format!("{op} requires at least 1 permutation"),
        });
    }
    Ok(())
}
