use std::fmt;

use thiserror::Error;

/// Rejection raised before any review or revenue figure is produced.
#[derive(Clone, Debug, PartialEq, Error)]
pub enum CalcError {
    #[error("invalid target rating {target}: {reason}")]
    InvalidTarget { target: f64, reason: TargetIssue },
    #[error("invalid {field}: {reason}")]
    InvalidInput { field: &'static str, reason: String },
}

impl CalcError {
    pub fn invalid_input(field: &'static str, reason: impl Into<String>) -> Self {
        CalcError::InvalidInput {
            field,
            reason: reason.into(),
        }
    }

    pub fn target(target: f64, reason: TargetIssue) -> Self {
        CalcError::InvalidTarget { target, reason }
    }

    pub fn is_invalid_target(&self) -> bool {
        matches!(self, CalcError::InvalidTarget { .. })
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TargetIssue {
    /// Not a number in (0.0, 5.0].
    OutOfRange,
    /// In range, but no finite number of 5-star reviews gets there.
    Unreachable,
    /// Reachable in theory, but the count outgrows exact float arithmetic.
    BeyondPrecision,
}

impl fmt::Display for TargetIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TargetIssue::OutOfRange => write!(f, "must be greater than 0 and at most 5"),
            TargetIssue::Unreachable => {
                write!(f, "cannot be reached with a finite number of 5-star reviews")
            }
            TargetIssue::BeyondPrecision => {
                write!(f, "needs more 5-star reviews than can be counted exactly")
            }
        }
    }
}
