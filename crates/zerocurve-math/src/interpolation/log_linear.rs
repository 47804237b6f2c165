//! Log-linear interpolation on discount factors.
//!
//! Interpolating ln(DF) linearly keeps every interpolated value positive and
//! gives a constant forward rate across each bracket.

use crate::error::{MathError, MathResult};
use crate::interpolation::{locate, DiscountInterpolator, Location};

/// Log-linear interpolation between discount-factor knots.
///
/// ```text
/// DF(t) = exp(ln DF_i + w * (ln DF_{i+1} - ln DF_i))
/// ```
///
/// Flat before the first knot and after the last.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LogLinearInterpolator;

impl DiscountInterpolator for LogLinearInterpolator {
    fn interpolate(&self, t: f64, times: &[f64], discount_factors: &[f64]) -> MathResult<f64> {
        match locate(t, times, discount_factors)? {
            Location::Flat(df) => Ok(df),
            Location::Beyond => Ok(discount_factors[discount_factors.len() - 1]),
            Location::Inside(i) => {
                let (df0, df1) = (discount_factors[i], discount_factors[i + 1]);
                if df0 <= 0.0 || df1 <= 0.0 {
                    return Err(MathError::invalid_input(format!(
                        "log-linear interpolation requires positive discount factors, got {df0} and {df1}"
                    )));
                }
                let w = (t - times[i]) / (times[i + 1] - times[i]);
                let (ln0, ln1) = (df0.ln(), df1.ln());
                Ok((ln0 + w * (ln1 - ln0)).exp())
            }
        }
    }

    fn name(&self) -> &'static str {
        "Log-Linear"
    }
}
