//! Validation helpers for ordination algorithms.

use numr::dtype::DType;
use numr::error::{Error, Result};

/// Validate data dtype (must be F32 or F64).
pub fn validate_ordination_dtype(dtype: DType, op: &'static str) -> Result<()> {
    match dtype {
        DType::F32 | DType::F64 => Ok(()),
        _ => Err(Error::UnsupportedDType { dtype, op }),
    }
}

/// Validate that data is 2D [n, p] with at least 2 rows and 1 column.
pub fn validate_ordination_data(shape: &[usize], op: &'static str) -> Result<()> {
    if shape.len() != 2 {
        return Err(Error::InvalidArgument {
            arg: "data",
            reason: format!("{op} requires 2D data [n, p], got {}-D", shape.len()),
        });
    }
    if shape[0] < 2 {
        return Err(Error::InvalidArgument {
            arg: "data",
            reason: format!("{op} requires at least 2 observations, got {}", shape[0]),
        });
    }
    if shape[1] == 0 {
        return Err(Error::InvalidArgument {
            arg: "data",
            reason: format!("{op} requires at least one column"),
        });
    }
    Ok(())
}

/// Validate the retained-component count against its admissible range.
pub fn validate_components(k: usize, k_max: usize, op: &'static str) -> Result<()> {
    if k == 0 {
        return Err(Error::InvalidArgument {
            arg: "n_components",
            reason: format!("{op} requires n_components > 0"),
        });
    }
    if k > k_max {
        return Err(Error::InvalidArgument {
            arg: "n_components",
            reason: format!("{op}: n_components={k} exceeds maximum {k_max}"),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_components() {
        assert!(validate_components(2, 4, "test").is_ok());
        assert!(validate_components(0, 4, "test").is_err());
        assert!(validate_components(5, 4, "test").is_err());
    }
}
