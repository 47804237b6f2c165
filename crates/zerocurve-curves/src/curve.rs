//! The bootstrapped zero-coupon curve.

use log::debug;
use serde::{Deserialize, Serialize};
use zerocurve_core::rates::{is_valid_discount_factor, ZERO_TIME_THRESHOLD};
use zerocurve_core::Compounding;
use zerocurve_math::interpolation::{CubicSpline, DiscountInterpolator, InterpolationMethod};

use crate::error::{CurveError, CurveResult};

/// Default step for the finite-difference instantaneous forward.
pub const DEFAULT_FORWARD_STEP: f64 = 1e-6;

/// Knot forwards below this level flag an arbitrage.
pub const ARBITRAGE_TOLERANCE: f64 = 1e-6;

/// A single `(time, discount factor)` point on the curve.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CurveKnot {
    /// Time in years.
    pub time: f64,
    /// Discount factor at `time`.
    pub discount_factor: f64,
}

impl CurveKnot {
    /// Creates a knot.
    #[must_use]
    pub fn new(time: f64, discount_factor: f64) -> Self {
        Self {
            time,
            discount_factor,
        }
    }
}

/// How the curve answers queries.
#[derive(Debug, Clone, PartialEq)]
enum QueryMode {
    /// Discount factors interpolated between knots.
    Interpolated,
    /// Zero rates read off a spline fitted through the knots.
    Smoothed(CubicSpline),
}

/// A zero-coupon curve built from discount-factor knots.
///
/// The curve starts empty in interpolated mode and grows one knot at a time
/// through [`add_point`](Self::add_point). Once
/// [`apply_cubic_spline_smoothing`](Self::apply_cubic_spline_smoothing) has
/// been called, queries go through the fitted zero-rate spline for the rest of
/// the curve's life and no further knots can be added.
///
/// # Example
///
/// ```rust
/// use zerocurve_core::Compounding;
/// use zerocurve_curves::YieldCurve;
/// use zerocurve_math::interpolation::InterpolationMethod;
///
/// let mut curve = YieldCurve::new(Compounding::Continuous, InterpolationMethod::LogLinear);
/// curve.add_point(1.0, 0.97).unwrap();
/// curve.add_point(2.0, 0.94).unwrap();
///
/// let df = curve.discount_factor(1.5).unwrap();
/// assert!(df < 0.97 && df > 0.94);
/// assert!(!curve.has_arbitrage().unwrap());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct YieldCurve {
    times: Vec<f64>,
    discount_factors: Vec<f64>,
    compounding: Compounding,
    interpolation: InterpolationMethod,
    mode: QueryMode,
}

impl YieldCurve {
    /// Creates an empty curve.
    #[must_use]
    pub fn new(compounding: Compounding, interpolation: InterpolationMethod) -> Self {
        Self {
            times: Vec::new(),
            discount_factors: Vec::new(),
            compounding,
            interpolation,
            mode: QueryMode::Interpolated,
        }
    }

    /// Appends a knot.
    ///
    /// # Errors
    ///
    /// Fails without changing the curve if the curve has been smoothed, `time`
    /// is negative or not after the last knot, or `discount_factor` is outside
    /// `(1e-10, 1]`.
    pub fn add_point(&mut self, time: f64, discount_factor: f64) -> CurveResult<()> {
        if self.is_smoothed() {
            return Err(CurveError::AlreadySmoothed);
        }
        if time < 0.0 || time.is_nan() {
            return Err(CurveError::invalid_input(format!(
                "knot time must be non-negative, got {time}"
            )));
        }
        if !is_valid_discount_factor(discount_factor) {
            return Err(CurveError::invalid_input(format!(
                "discount factor must be in (1e-10, 1], got {discount_factor}"
            )));
        }
        if let Some(&last) = self.times.last() {
            if time <= last {
                return Err(CurveError::non_monotonic_times(self.times.len(), last, time));
            }
        }

        self.times.push(time);
        self.discount_factors.push(discount_factor);
        Ok(())
    }

    /// Returns the discount factor at `time`.
    ///
    /// # Errors
    ///
    /// Fails if the curve has no knots or `time` is negative.
    pub fn discount_factor(&self, time: f64) -> CurveResult<f64> {
        if self.times.is_empty() {
            return Err(CurveError::EmptyCurve);
        }
        if time < 0.0 || time.is_nan() {
            return Err(CurveError::invalid_input(format!(
                "query time must be non-negative, got {time}"
            )));
        }
        if time < ZERO_TIME_THRESHOLD {
            return Ok(1.0);
        }

        match &self.mode {
            QueryMode::Smoothed(spline) => {
                let rate = spline.evaluate(time)?;
                Ok(self.compounding.discount_factor(time, rate)?)
            }
            QueryMode::Interpolated => {
                Ok(self
                    .interpolation
                    .interpolate(time, &self.times, &self.discount_factors)?)
            }
        }
    }

    /// Returns the zero rate at `time` in the curve's compounding convention.
    ///
    /// # Errors
    ///
    /// Fails if the discount factor query fails or `time` is below `1e-10`.
    pub fn zero_rate(&self, time: f64) -> CurveResult<f64> {
        let df = self.discount_factor(time)?;
        Ok(self.compounding.zero_rate(time, df)?)
    }

    /// Returns the continuously compounded forward rate between `t1` and `t2`.
    ///
    /// ```text
    /// f(t1, t2) = -ln(DF(t2) / DF(t1)) / (t2 - t1)
    /// ```
    ///
    /// # Errors
    ///
    /// Fails if `t1 >= t2` or either discount factor query fails.
    pub fn forward_rate(&self, t1: f64, t2: f64) -> CurveResult<f64> {
        if t1 >= t2 {
            return Err(CurveError::invalid_input(format!(
                "forward start {t1} must be before end {t2}"
            )));
        }
        let df1 = self.discount_factor(t1)?;
        let df2 = self.discount_factor(t2)?;
        Ok(-(df2 / df1).ln() / (t2 - t1))
    }

    /// Returns the instantaneous forward at `time` using a step of `1e-6`.
    pub fn instantaneous_forward(&self, time: f64) -> CurveResult<f64> {
        self.instantaneous_forward_with_step(time, DEFAULT_FORWARD_STEP)
    }

    /// Returns `forward_rate(time, time + dt)`.
    ///
    /// # Errors
    ///
    /// Fails if `dt <= 0` or the forward rate query fails.
    pub fn instantaneous_forward_with_step(&self, time: f64, dt: f64) -> CurveResult<f64> {
        if dt <= 0.0 || dt.is_nan() {
            return Err(CurveError::invalid_input(format!(
                "forward step must be positive, got {dt}"
            )));
        }
        self.forward_rate(time, time + dt)
    }

    /// Fits a natural cubic spline through the knots' zero rates and answers
    /// all later queries from it.
    ///
    /// # Errors
    ///
    /// Fails if the curve has fewer than 2 knots, is already smoothed, or a
    /// knot's zero rate cannot be computed.
    pub fn apply_cubic_spline_smoothing(&mut self) -> CurveResult<()> {
        if self.is_smoothed() {
            return Err(CurveError::AlreadySmoothed);
        }
        if self.times.len() < 2 {
            return Err(CurveError::insufficient_points(2, self.times.len()));
        }

        let rates = self
            .times
            .iter()
            .zip(&self.discount_factors)
            .map(|(&t, &df)| self.compounding.zero_rate(t, df))
            .collect::<Result<Vec<_>, _>>()?;

        let mut spline = CubicSpline::new();
        spline.fit(&self.times, &rates)?;

        debug!(
            "smoothed {} curve over {} knots",
            self.compounding,
            self.times.len()
        );
        self.mode = QueryMode::Smoothed(spline);
        Ok(())
    }

    /// Returns the forward rate between each consecutive pair of knots.
    pub fn knot_forward_rates(&self) -> CurveResult<Vec<f64>> {
        self.times
            .windows(2)
            .map(|pair| self.forward_rate(pair[0], pair[1]))
            .collect()
    }

    /// Returns true if any forward between consecutive knots is below `-1e-6`.
    pub fn has_arbitrage(&self) -> CurveResult<bool> {
        Ok(self
            .knot_forward_rates()?
            .iter()
            .any(|&fwd| fwd < -ARBITRAGE_TOLERANCE))
    }

    /// Knot times in increasing order.
    pub fn times(&self) -> &[f64] {
        &self.times
    }

    /// Knot discount factors, parallel to [`times`](Self::times).
    pub fn discount_factors(&self) -> &[f64] {
        &self.discount_factors
    }

    /// The knots as `(time, discount factor)` pairs.
    pub fn knots(&self) -> Vec<CurveKnot> {
        self.times
            .iter()
            .zip(&self.discount_factors)
            .map(|(&time, &df)| CurveKnot::new(time, df))
            .collect()
    }

    /// Number of knots.
    pub fn len(&self) -> usize {
        self.times.len()
    }

    /// Returns true if the curve has no knots.
    pub fn is_empty(&self) -> bool {
        self.times.is_empty()
    }

    /// The compounding convention fixed at construction.
    pub fn compounding(&self) -> Compounding {
        self.compounding
    }

    /// The interpolation method fixed at construction.
    pub fn interpolation(&self) -> InterpolationMethod {
        self.interpolation
    }

    /// Returns true once smoothing has been applied.
    pub fn is_smoothed(&self) -> bool {
        matches!(self.mode, QueryMode::Smoothed(_))
    }
}
