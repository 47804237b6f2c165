//! Flat-forward interpolation on discount factors.

use crate::error::{MathError, MathResult};
use crate::interpolation::{locate, DiscountInterpolator, Location};

/// Piecewise constant forward rates between discount-factor knots.
///
/// Within `[t_i, t_{i+1}]`:
///
/// ```text
/// f      = -ln(DF_{i+1} / DF_i) / (t_{i+1} - t_i)
/// DF(t)  = DF_i * exp(-f * (t - t_i))
/// ```
///
/// Flat before the first knot. Beyond the last knot the forward rate of the
/// final bracket is extended.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FlatForwardInterpolator;

impl FlatForwardInterpolator {
    fn bracket_forward(i: usize, times: &[f64], discount_factors: &[f64]) -> MathResult<f64> {
        let (df0, df1) = (discount_factors[i], discount_factors[i + 1]);
        if df0 <= 0.0 || df1 <= 0.0 {
            return Err(MathError::invalid_input(format!(
                "flat-forward interpolation requires positive discount factors, got {df0} and {df1}"
            )));
        }
        Ok(-(df1 / df0).ln() / (times[i + 1] - times[i]))
    }
}

impl DiscountInterpolator for FlatForwardInterpolator {
    fn interpolate(&self, t: f64, times: &[f64], discount_factors: &[f64]) -> MathResult<f64> {
        match locate(t, times, discount_factors)? {
            Location::Flat(df) => Ok(df),
            Location::Beyond => {
                let n = times.len();
                let forward = Self::bracket_forward(n - 2, times, discount_factors)?;
                Ok(discount_factors[n - 1] * (-forward * (t - times[n - 1])).exp())
            }
            Location::Inside(i) => {
                let forward = Self::bracket_forward(i, times, discount_factors)?;
                Ok(discount_factors[i] * (-forward * (t - times[i])).exp())
            }
        }
    }

    fn name(&self) -> &'static str {
        "Flat-Forward"
    }
}
