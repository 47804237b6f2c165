//! Error types for the core domain types.

use thiserror::Error;

/// A specialized Result type for core operations.
pub type CoreResult<T> = Result<T, CoreError>;

/// Errors raised by rate conversions and bond specifications.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CoreError {
    /// A caller-supplied argument is malformed.
    #[error("Invalid input: {reason}")]
    InvalidInput {
        /// Description of the invalid input.
        reason: String,
    },

    /// The time is too close to zero to imply a rate.
    #[error("Time {time:.2e} is too small for a rate calculation")]
    TimeTooSmall {
        /// The offending time in years.
        time: f64,
    },

    /// A discount factor outside (0, 1].
    #[error("Invalid discount factor: {value}")]
    InvalidDiscountFactor {
        /// The offending discount factor.
        value: f64,
    },

    /// A bond specification breaks one of its invariants.
    #[error("Invalid bond specification: {reason}")]
    InvalidBondSpec {
        /// Description of what's invalid.
        reason: String,
    },

    /// Market data could not be parsed.
    #[error("Parse error: {reason}")]
    Parse {
        /// Description of the parse failure.
        reason: String,
    },
}

impl CoreError {
    /// Creates an invalid input error.
    #[must_use]
    pub fn invalid_input(reason: impl Into<String>) -> Self {
        Self::InvalidInput {
            reason: reason.into(),
        }
    }

    /// Creates an invalid bond specification error.
    #[must_use]
    pub fn invalid_bond_spec(reason: impl Into<String>) -> Self {
        Self::InvalidBondSpec {
            reason: reason.into(),
        }
    }

    /// Creates a parse error.
    #[must_use]
    pub fn parse(reason: impl Into<String>) -> Self {
        Self::Parse {
            reason: reason.into(),
        }
    }
}

impl From<serde_json::Error> for CoreError {
    fn from(err: serde_json::Error) -> Self {
        Self::parse(err.to_string())
    }
}
