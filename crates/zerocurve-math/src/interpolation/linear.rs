//! Linear interpolation on discount factors.

use crate::error::MathResult;
use crate::interpolation::{locate, DiscountInterpolator, Location};

/// Linear interpolation between discount-factor knots.
///
/// ```text
/// DF(t) = DF_i + w * (DF_{i+1} - DF_i),   w = (t - t_i) / (t_{i+1} - t_i)
/// ```
///
/// Flat before the first knot and after the last.
///
/// # Example
///
/// ```rust
/// use zerocurve_math::interpolation::{DiscountInterpolator, LinearInterpolator};
///
/// let times = [1.0, 2.0, 3.0];
/// let dfs = [0.95, 0.90, 0.85];
///
/// let df = LinearInterpolator.interpolate(1.5, &times, &dfs).unwrap();
/// assert!((df - 0.925).abs() < 1e-12);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LinearInterpolator;

impl DiscountInterpolator for LinearInterpolator {
    fn interpolate(&self, t: f64, times: &[f64], discount_factors: &[f64]) -> MathResult<f64> {
        match locate(t, times, discount_factors)? {
            Location::Flat(df) => Ok(df),
            Location::Beyond => Ok(discount_factors[discount_factors.len() - 1]),
            Location::Inside(i) => {
                let w = (t - times[i]) / (times[i + 1] - times[i]);
                Ok(discount_factors[i] + w * (discount_factors[i + 1] - discount_factors[i]))
            }
        }
    }

    fn name(&self) -> &'static str {
        "Linear"
    }
}
