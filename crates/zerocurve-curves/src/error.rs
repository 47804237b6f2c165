//! Error types for curve operations.
//!
//! Failures fall into two families:
//!
//! - **invalid input**: malformed caller arguments, detected before any state changes
//! - **infeasible market data**: a bootstrapped discount factor left `(1e-10, 1]`
//!
//! A negative forward between knots is not an error; see
//! [`YieldCurve::has_arbitrage`](crate::YieldCurve::has_arbitrage).

use thiserror::Error;
use zerocurve_core::CoreError;
use zerocurve_math::MathError;

/// A specialized Result type for curve operations.
pub type CurveResult<T> = Result<T, CurveError>;

/// Error types for curve operations.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CurveError {
    /// Invalid caller argument.
    #[error("Invalid input: {reason}")]
    InvalidInput {
        /// Description of the invalid input.
        reason: String,
    },

    /// The curve has no knots to query.
    #[error("Curve has no knots")]
    EmptyCurve,

    /// Not enough knots for the requested operation.
    #[error("Insufficient points: need at least {required}, got {got}")]
    InsufficientPoints {
        /// Minimum required points.
        required: usize,
        /// Actual number of points.
        got: usize,
    },

    /// A knot time does not increase on the previous one.
    #[error("Non-monotonic times at index {index}: {prev:.6} >= {current:.6}")]
    NonMonotonicTimes {
        /// Index of the rejected knot.
        index: usize,
        /// Time of the previous knot.
        prev: f64,
        /// Time of the rejected knot.
        current: f64,
    },

    /// The curve has been smoothed and can no longer take new knots.
    #[error("Curve has been smoothed; knots can no longer be added")]
    AlreadySmoothed,

    /// A bond price implies a discount factor outside `(1e-10, 1]`.
    #[error("Infeasible discount factor {discount_factor:.8} at maturity {maturity:.4}")]
    InfeasibleDiscountFactor {
        /// Maturity of the offending bond.
        maturity: f64,
        /// The implied discount factor.
        discount_factor: f64,
    },

    /// Bootstrap configuration could not be loaded.
    #[error("Configuration error: {reason}")]
    Config {
        /// Description of the failure.
        reason: String,
    },

    /// Error from the core types.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// Error from the numerics.
    #[error(transparent)]
    Math(#[from] MathError),
}

impl CurveError {
    /// Creates an invalid input error.
    #[must_use]
    pub fn invalid_input(reason: impl Into<String>) -> Self {
        Self::InvalidInput {
            reason: reason.into(),
        }
    }

    /// Creates an insufficient points error.
    #[must_use]
    pub fn insufficient_points(required: usize, got: usize) -> Self {
        Self::InsufficientPoints { required, got }
    }

    /// Creates a non-monotonic times error.
    #[must_use]
    pub fn non_monotonic_times(index: usize, prev: f64, current: f64) -> Self {
        Self::NonMonotonicTimes {
            index,
            prev,
            current,
        }
    }

    /// Creates an infeasible discount factor error.
    #[must_use]
    pub fn infeasible(maturity: f64, discount_factor: f64) -> Self {
        Self::InfeasibleDiscountFactor {
            maturity,
            discount_factor,
        }
    }

    /// Creates a configuration error.
    #[must_use]
    pub fn config(reason: impl Into<String>) -> Self {
        Self::Config {
            reason: reason.into(),
        }
    }

    /// Returns true for malformed caller arguments.
    #[must_use]
    pub fn is_invalid_input(&self) -> bool {
        match self {
            Self::InvalidInput { .. }
            | Self::EmptyCurve
            | Self::InsufficientPoints { .. }
            | Self::NonMonotonicTimes { .. }
            | Self::AlreadySmoothed
            | Self::Config { .. }
            | Self::Core(_)
            | Self::Math(_) => true,
            Self::InfeasibleDiscountFactor { .. } => false,
        }
    }

    /// Returns true when market prices are inconsistent with a valid curve.
    #[must_use]
    pub fn is_infeasible(&self) -> bool {
        matches!(self, Self::InfeasibleDiscountFactor { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = CurveError::insufficient_points(2, 1);
        assert!(err.to_string().contains("at least 2"));

        let err = CurveError::infeasible(3.0, 1.02);
        assert!(err.to_string().contains("1.02"));
    }

    #[test]
    fn test_non_monotonic_times() {
        let err = CurveError::non_monotonic_times(2, 1.0, 0.5);
        let msg = err.to_string();
        assert!(msg.contains("index 2"));
        assert!(msg.contains("1.000000"));
    }

    #[test]
    fn test_taxonomy() {
        assert!(CurveError::invalid_input("bad").is_invalid_input());
        assert!(CurveError::EmptyCurve.is_invalid_input());
        assert!(CurveError::from(CoreError::invalid_bond_spec("price")).is_invalid_input());
        assert!(CurveError::from(MathError::NotFitted).is_invalid_input());

        let infeasible = CurveError::infeasible(1.0, 1.5);
        assert!(infeasible.is_infeasible());
        assert!(!infeasible.is_invalid_input());
    }

    #[test]
    fn test_wrapped_errors_are_transparent() {
        let err = CurveError::from(MathError::NotFitted);
        assert_eq!(err.to_string(), MathError::NotFitted.to_string());
    }
}
