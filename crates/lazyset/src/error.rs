//! Error taxonomy.
//!
//! - `ConstructionError`: a shape could not be built from the given parts.
//! - `UsageError`: a query was called with incompatible operands.
//!
//! Predicates are total on well-formed, same-dimension inputs; everything
//! else is reported to the caller and never retried or coerced.

/// Failure to construct a shape.
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum ConstructionError {
    #[error("{context}: expected dimension {expected}, found {found}")]
    DimensionMismatch {
        context: &'static str,
        expected: usize,
        found: usize,
    },
    #[error("invalid constructor arguments: {reason}")]
    Argument { reason: String },
    #[error("radius must be non-negative, got {value} (axis {axis:?})")]
    NegativeRadius { value: f64, axis: Option<usize> },
    #[error("{context} contains a non-finite value")]
    NonFinite { context: &'static str },
}

impl ConstructionError {
    pub(crate) fn argument(reason: impl Into<String>) -> Self {
        Self::Argument {
            reason: reason.into(),
        }
    }

    pub(crate) fn dimension(context: &'static str, expected: usize, found: usize) -> Self {
        Self::DimensionMismatch {
            context,
            expected,
            found,
        }
    }
}

/// Misuse of a query (operands of different dimension, unsupported pair,
/// a result leaving the finite range).
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum UsageError {
    #[error("{context}: expected dimension {expected}, found {found}")]
    DimensionMismatch {
        context: &'static str,
        expected: usize,
        found: usize,
    },
    #[error("unsupported query: {reason}")]
    Unsupported { reason: String },
    #[error("{context} contains a non-finite value")]
    NonFinite { context: &'static str },
}

impl UsageError {
    pub(crate) fn unsupported(reason: impl Into<String>) -> Self {
        Self::Unsupported {
            reason: reason.into(),
        }
    }
}

/// Fails with `UsageError::DimensionMismatch` unless `found == expected`.
#[inline]
pub(crate) fn check_dim(context: &'static str, expected: usize, found: usize) -> Result<(), UsageError> {
    if expected == found {
        Ok(())
    } else {
        Err(UsageError::DimensionMismatch {
            context,
            expected,
            found,
        })
    }
}

/// Umbrella error for callers that mix construction and queries.
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum LazySetError {
    #[error(transparent)]
    Construction(#[from] ConstructionError),
    #[error(transparent)]
    Usage(#[from] UsageError),
}
