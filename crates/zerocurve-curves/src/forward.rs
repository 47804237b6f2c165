//! Forward-rate view over a bootstrapped curve.

use crate::curve::YieldCurve;
use crate::error::CurveResult;

/// A read-only forward-rate view of a [`YieldCurve`].
///
/// The view holds no state of its own; every query is answered by the
/// borrowed curve.
///
/// # Example
///
/// ```rust
/// use zerocurve_core::Compounding;
/// use zerocurve_curves::{ForwardCurve, YieldCurve};
/// use zerocurve_math::interpolation::InterpolationMethod;
///
/// let mut curve = YieldCurve::new(Compounding::Continuous, InterpolationMethod::LogLinear);
/// curve.add_point(1.0, 0.97).unwrap();
/// curve.add_point(2.0, 0.94).unwrap();
///
/// let view = ForwardCurve::new(&curve);
/// let forwards = view.forward_curve(&[0.5, 1.0, 1.5, 2.0]).unwrap();
/// assert_eq!(forwards.len(), 3);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct ForwardCurve<'a> {
    curve: &'a YieldCurve,
}

impl<'a> ForwardCurve<'a> {
    /// Creates a view over `curve`.
    #[must_use]
    pub fn new(curve: &'a YieldCurve) -> Self {
        Self { curve }
    }

    /// The underlying curve.
    pub fn curve(&self) -> &'a YieldCurve {
        self.curve
    }

    /// Forward rate between `t1` and `t2`.
    pub fn forward_rate(&self, t1: f64, t2: f64) -> CurveResult<f64> {
        self.curve.forward_rate(t1, t2)
    }

    /// Instantaneous forward at `time`.
    pub fn instantaneous_forward(&self, time: f64) -> CurveResult<f64> {
        self.curve.instantaneous_forward(time)
    }

    /// Forward rate for each consecutive pair of `tenors`.
    ///
    /// Fewer than two tenors give an empty result.
    pub fn forward_curve(&self, tenors: &[f64]) -> CurveResult<Vec<f64>> {
        tenors
            .windows(2)
            .map(|pair| self.forward_rate(pair[0], pair[1]))
            .collect()
    }
}

impl<'a> From<&'a YieldCurve> for ForwardCurve<'a> {
    fn from(curve: &'a YieldCurve) -> Self {
        Self::new(curve)
    }
}
