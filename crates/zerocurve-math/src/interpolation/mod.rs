//! Interpolation methods for zero-curve construction.
//!
//! # Discount-Factor Strategies
//!
//! The three strategies interpolate discount factors over `(time, DF)` knots
//! owned by the caller. They share one boundary policy:
//!
//! - a single knot gives that knot's DF everywhere,
//! - at or before the first knot the first DF is returned (flat),
//! - at or after the last knot each strategy applies its own extrapolation.
//!
//! | Method | Inside a bracket | Beyond the last knot |
//! |--------|------------------|----------------------|
//! | [`LinearInterpolator`] | linear on DF | flat |
//! | [`LogLinearInterpolator`] | linear on ln(DF) | flat |
//! | [`FlatForwardInterpolator`] | constant forward rate | last forward rate extended |
//!
//! [`InterpolationMethod`] is the closed, serializable selector over the three.
//!
//! # Smoothing
//!
//! [`CubicSpline`] is a natural cubic spline used to smooth zero rates once a
//! curve is complete.

mod cubic_spline;
mod flat_forward;
mod linear;
mod log_linear;

pub use cubic_spline::CubicSpline;
pub use flat_forward::FlatForwardInterpolator;
pub use linear::LinearInterpolator;
pub use log_linear::LogLinearInterpolator;

use serde::{Deserialize, Serialize};

use crate::error::{MathError, MathResult};

/// Trait for discount-factor interpolation strategies.
///
/// Implementations are stateless: the knots are passed on every call as
/// parallel slices with strictly increasing times.
pub trait DiscountInterpolator: Send + Sync {
    /// Returns the discount factor at `t`.
    ///
    /// # Errors
    ///
    /// Returns an error if the slices differ in length or are empty.
    fn interpolate(&self, t: f64, times: &[f64], discount_factors: &[f64]) -> MathResult<f64>;

    /// Returns the display name of the strategy.
    fn name(&self) -> &'static str;
}

/// Selects one of the discount-factor interpolation strategies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum InterpolationMethod {
    /// Linear interpolation on discount factors.
    Linear,

    /// Linear interpolation on log discount factors.
    #[default]
    LogLinear,

    /// Piecewise constant forward rates.
    FlatForward,
}

impl InterpolationMethod {
    /// All supported methods.
    pub const ALL: [InterpolationMethod; 3] = [
        InterpolationMethod::Linear,
        InterpolationMethod::LogLinear,
        InterpolationMethod::FlatForward,
    ];
}

impl DiscountInterpolator for InterpolationMethod {
    fn interpolate(&self, t: f64, times: &[f64], discount_factors: &[f64]) -> MathResult<f64> {
        match self {
            Self::Linear => LinearInterpolator.interpolate(t, times, discount_factors),
            Self::LogLinear => LogLinearInterpolator.interpolate(t, times, discount_factors),
            Self::FlatForward => FlatForwardInterpolator.interpolate(t, times, discount_factors),
        }
    }

    fn name(&self) -> &'static str {
        match self {
            Self::Linear => LinearInterpolator.name(),
            Self::LogLinear => LogLinearInterpolator.name(),
            Self::FlatForward => FlatForwardInterpolator.name(),
        }
    }
}

impl std::fmt::Display for InterpolationMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Returns the last index whose value is `<= x`, clamped into `[0, len - 2]`.
///
/// `xs` must be sorted and hold at least two values.
#[must_use]
pub fn find_interval(x: f64, xs: &[f64]) -> usize {
    xs.partition_point(|&probe| probe <= x)
        .saturating_sub(1)
        .min(xs.len().saturating_sub(2))
}

/// Where a query time falls relative to the knots.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) enum Location {
    /// Single knot, or at/before the first knot: the contained DF applies.
    Flat(f64),
    /// At or after the last knot of a multi-knot curve.
    Beyond,
    /// Inside the bracket starting at the contained index.
    Inside(usize),
}

/// Validates the knot slices and applies the shared boundary policy.
pub(crate) fn locate(t: f64, times: &[f64], discount_factors: &[f64]) -> MathResult<Location> {
    if times.len() != discount_factors.len() {
        return Err(MathError::invalid_input(format!(
            "times and discount factors must have same length: {} vs {}",
            times.len(),
            discount_factors.len()
        )));
    }
    if times.is_empty() {
        return Err(MathError::insufficient_data(1, 0));
    }

    if times.len() == 1 || t <= times[0] {
        return Ok(Location::Flat(discount_factors[0]));
    }
    if t >= times[times.len() - 1] {
        return Ok(Location::Beyond);
    }

    Ok(Location::Inside(find_interval(t, times)))
}
