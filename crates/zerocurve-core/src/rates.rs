//! Conversion between zero rates and discount factors.
//!
//! Free-function forms of the [`Compounding`] conversions, plus the
//! discount-factor validity check shared by the curve crate.

use crate::error::CoreResult;
use crate::types::Compounding;

/// Times below this threshold are treated as "now".
pub const ZERO_TIME_THRESHOLD: f64 = 1e-10;

/// Exclusive lower bound of a valid discount factor.
pub const MIN_DISCOUNT_FACTOR: f64 = 1e-10;

/// Inclusive upper bound of a valid discount factor.
pub const MAX_DISCOUNT_FACTOR: f64 = 1.0;

/// Discount factor at `time` for a zero `rate` quoted with `compounding`.
pub fn discount_factor_from_rate(time: f64, rate: f64, compounding: Compounding) -> CoreResult<f64> {
    compounding.discount_factor(time, rate)
}

/// Zero rate quoted with `compounding` implied by `df` at `time`.
pub fn rate_from_discount_factor(time: f64, df: f64, compounding: Compounding) -> CoreResult<f64> {
    compounding.zero_rate(time, df)
}

/// Returns true if `df` lies in `(1e-10, 1.0]`.
#[must_use]
pub fn is_valid_discount_factor(df: f64) -> bool {
    df > MIN_DISCOUNT_FACTOR && df <= MAX_DISCOUNT_FACTOR
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_is_valid_discount_factor() {
        assert!(!is_valid_discount_factor(0.0));
        assert!(!is_valid_discount_factor(-0.1));
        assert!(!is_valid_discount_factor(1e-11));
        assert!(!is_valid_discount_factor(1.1));
        assert!(!is_valid_discount_factor(f64::NAN));
        assert!(is_valid_discount_factor(0.95));
        assert!(is_valid_discount_factor(1.0));
    }

    #[test]
    fn test_free_functions_match_methods() {
        let df = discount_factor_from_rate(3.0, 0.04, Compounding::SemiAnnual).unwrap();
        assert_relative_eq!(
            df,
            Compounding::SemiAnnual.discount_factor(3.0, 0.04).unwrap(),
            epsilon = 1e-15
        );

        let rate = rate_from_discount_factor(3.0, df, Compounding::SemiAnnual).unwrap();
        assert_relative_eq!(rate, 0.04, epsilon = 1e-12);
    }
}
