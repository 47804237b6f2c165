//! Natural cubic spline fitting.

use log::debug;

use crate::error::{MathError, MathResult};
use crate::interpolation::find_interval;
use crate::linear_algebra::solve_tridiagonal;

/// Natural cubic spline through a set of `(x, y)` knots.
///
/// Each interval `i` carries a quadruple `(a_i, b_i, c_i, d_i)` such that
///
/// ```text
/// value(x) = a_i + b_i dx + c_i dx^2 + d_i dx^3,   dx = x - x_i
/// ```
///
/// with continuous value, first and second derivative at interior knots and
/// zero second derivative at both ends.
///
/// Outside `[x_0, x_n]` the spline is flat: [`evaluate`](Self::evaluate)
/// returns the endpoint value and [`derivative`](Self::derivative) returns 0.
///
/// # Example
///
/// ```rust
/// use zerocurve_math::interpolation::CubicSpline;
///
/// let mut spline = CubicSpline::new();
/// spline.fit(&[0.0, 1.0, 2.0, 3.0], &[0.0, 1.0, 4.0, 9.0]).unwrap();
///
/// assert!((spline.evaluate(2.0).unwrap() - 4.0).abs() < 1e-10);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CubicSpline {
    x: Vec<f64>,
    y: Vec<f64>,
    a: Vec<f64>,
    b: Vec<f64>,
    c: Vec<f64>,
    d: Vec<f64>,
}

impl CubicSpline {
    /// Creates an unfitted spline.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Fits the spline to the given knots, replacing any previous fit.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `x` and `y` differ in length
    /// - There are fewer than 2 points
    /// - `x` is not strictly increasing
    pub fn fit(&mut self, x: &[f64], y: &[f64]) -> MathResult<()> {
        if x.len() != y.len() {
            return Err(MathError::length_mismatch(x.len(), y.len()));
        }
        if x.len() < 2 {
            return Err(MathError::insufficient_data(2, x.len()));
        }

        let n = x.len() - 1;
        let mut h = Vec::with_capacity(n);
        for i in 0..n {
            let step = x[i + 1] - x[i];
            if step <= 0.0 || step.is_nan() {
                return Err(MathError::invalid_input(format!(
                    "x values must be strictly increasing: x[{}] = {} then x[{}] = {}",
                    i,
                    x[i],
                    i + 1,
                    x[i + 1]
                )));
            }
            h.push(step);
        }

        // System for the n + 1 second-derivative coefficients c_0..c_n.
        // Natural boundary rows pin c_0 and c_n to zero.
        let mut lower = vec![0.0; n];
        let mut diag = vec![1.0; n + 1];
        let mut upper = vec![0.0; n];
        let mut rhs = vec![0.0; n + 1];

        for i in 1..n {
            lower[i - 1] = h[i - 1];
            diag[i] = 2.0 * (h[i - 1] + h[i]);
            upper[i] = h[i];
            rhs[i] = 3.0 * ((y[i + 1] - y[i]) / h[i] - (y[i] - y[i - 1]) / h[i - 1]);
        }

        let c_full = solve_tridiagonal(&lower, &diag, &upper, &rhs)?;

        let mut a = Vec::with_capacity(n);
        let mut b = Vec::with_capacity(n);
        let mut c = Vec::with_capacity(n);
        let mut d = Vec::with_capacity(n);

        for j in 0..n {
            a.push(y[j]);
            b.push((y[j + 1] - y[j]) / h[j] - h[j] * (c_full[j + 1] + 2.0 * c_full[j]) / 3.0);
            c.push(c_full[j]);
            d.push((c_full[j + 1] - c_full[j]) / (3.0 * h[j]));
        }

        self.x = x.to_vec();
        self.y = y.to_vec();
        self.a = a;
        self.b = b;
        self.c = c;
        self.d = d;

        debug!(
            "fitted natural cubic spline over {} knots on [{}, {}]",
            x.len(),
            x[0],
            x[n]
        );

        Ok(())
    }

    /// Returns true once [`fit`](Self::fit) has succeeded.
    #[must_use]
    pub fn is_fitted(&self) -> bool {
        !self.a.is_empty()
    }

    /// Evaluates the spline at `x`.
    ///
    /// # Errors
    ///
    /// Returns `MathError::NotFitted` if the spline has not been fitted.
    pub fn evaluate(&self, x: f64) -> MathResult<f64> {
        let (first, last) = self.bounds()?;
        if x <= first {
            return Ok(self.y[0]);
        }
        if x >= last {
            return Ok(self.y[self.y.len() - 1]);
        }

        let i = find_interval(x, &self.x);
        let dx = x - self.x[i];
        Ok(self.a[i] + dx * (self.b[i] + dx * (self.c[i] + dx * self.d[i])))
    }

    /// Evaluates the first derivative of the spline at `x`.
    ///
    /// # Errors
    ///
    /// Returns `MathError::NotFitted` if the spline has not been fitted.
    pub fn derivative(&self, x: f64) -> MathResult<f64> {
        let (first, last) = self.bounds()?;
        if x <= first || x >= last {
            return Ok(0.0);
        }

        let i = find_interval(x, &self.x);
        let dx = x - self.x[i];
        Ok(self.b[i] + dx * (2.0 * self.c[i] + 3.0 * self.d[i] * dx))
    }

    /// Per-interval coefficient arrays `(a, b, c, d)`.
    #[must_use]
    pub fn coefficients(&self) -> (&[f64], &[f64], &[f64], &[f64]) {
        (&self.a, &self.b, &self.c, &self.d)
    }

    /// The fitted knots `(x, y)`.
    #[must_use]
    pub fn knots(&self) -> (&[f64], &[f64]) {
        (&self.x, &self.y)
    }

    fn bounds(&self) -> MathResult<(f64, f64)> {
        match (self.x.first(), self.x.last()) {
            (Some(&first), Some(&last)) if self.is_fitted() => Ok((first, last)),
            _ => Err(MathError::NotFitted),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_cubic_spline_through_points() {
        let xs = [0.0, 1.0, 2.0, 3.0];
        let ys = [0.0, 1.0, 4.0, 9.0];

        let mut spline = CubicSpline::new();
        spline.fit(&xs, &ys).unwrap();

        for (x, y) in xs.iter().zip(ys.iter()) {
            assert_relative_eq!(spline.evaluate(*x).unwrap(), *y, epsilon = 1e-10);
        }
    }

    #[test]
    fn test_cubic_spline_known_value() {
        let mut spline = CubicSpline::new();
        spline.fit(&[0.0, 1.0, 2.0], &[0.0, 1.0, 0.0]).unwrap();

        // c_1 = -1.5, b_0 = 1.5, d_0 = -0.5
        assert_relative_eq!(spline.evaluate(0.5).unwrap(), 0.6875, epsilon = 1e-12);
        assert_relative_eq!(spline.evaluate(1.5).unwrap(), 0.6875, epsilon = 1e-12);
        assert_relative_eq!(spline.derivative(1.0).unwrap(), 0.0, epsilon = 1e-12);
    }

    #[test]
    fn test_natural_boundary_conditions() {
        let mut spline = CubicSpline::new();
        spline
            .fit(&[0.0, 1.0, 2.5, 4.0], &[0.02, 0.025, 0.03, 0.032])
            .unwrap();

        let (_, _, c, d) = spline.coefficients();
        assert_eq!(c[0], 0.0);

        // Second derivative at the right end: 2 c + 6 d h on the last interval.
        let h = 1.5;
        assert_relative_eq!(2.0 * c[2] + 6.0 * d[2] * h, 0.0, epsilon = 1e-12);
    }

    #[test]
    fn test_derivative_is_continuous() {
        let mut spline = CubicSpline::new();
        spline
            .fit(&[0.0, 1.0, 2.0, 3.0, 4.0], &[0.0, 1.0, 0.0, 1.0, 0.0])
            .unwrap();

        let left = spline.derivative(1.5).unwrap();
        let right = spline.derivative(1.500_01).unwrap();
        assert!((left - right).abs() < 1e-3);

        // First derivative matches across an interior knot.
        let below = spline.derivative(2.0 - 1e-9).unwrap();
        let above = spline.derivative(2.0 + 1e-9).unwrap();
        assert_relative_eq!(below, above, epsilon = 1e-6);
    }

    #[test]
    fn test_flat_outside_range() {
        let mut spline = CubicSpline::new();
        spline.fit(&[1.0, 2.0, 3.0], &[0.01, 0.02, 0.025]).unwrap();

        assert_eq!(spline.evaluate(0.0).unwrap(), 0.01);
        assert_eq!(spline.evaluate(1.0).unwrap(), 0.01);
        assert_eq!(spline.evaluate(3.0).unwrap(), 0.025);
        assert_eq!(spline.evaluate(10.0).unwrap(), 0.025);
        assert_eq!(spline.derivative(0.5).unwrap(), 0.0);
        assert_eq!(spline.derivative(3.0).unwrap(), 0.0);
    }

    #[test]
    fn test_two_points_is_linear() {
        let mut spline = CubicSpline::new();
        spline.fit(&[1.0, 3.0], &[0.02, 0.04]).unwrap();

        assert_relative_eq!(spline.evaluate(2.0).unwrap(), 0.03, epsilon = 1e-14);
        assert_relative_eq!(spline.derivative(2.5).unwrap(), 0.01, epsilon = 1e-14);
    }

    #[test]
    fn test_not_fitted() {
        let spline = CubicSpline::new();
        assert!(!spline.is_fitted());
        assert_eq!(spline.evaluate(1.0), Err(MathError::NotFitted));
        assert_eq!(spline.derivative(1.0), Err(MathError::NotFitted));
    }

    #[test]
    fn test_fit_errors() {
        let mut spline = CubicSpline::new();

        assert!(matches!(
            spline.fit(&[0.0, 1.0, 2.0], &[0.0, 1.0]),
            Err(MathError::InvalidInput { .. })
        ));
        assert_eq!(
            spline.fit(&[1.0], &[1.0]),
            Err(MathError::insufficient_data(2, 1))
        );
        assert!(matches!(
            spline.fit(&[0.0, 2.0, 1.0], &[0.0, 1.0, 2.0]),
            Err(MathError::InvalidInput { .. })
        ));
        assert!(matches!(
            spline.fit(&[0.0, 1.0, 1.0], &[0.0, 1.0, 2.0]),
            Err(MathError::InvalidInput { .. })
        ));
        assert!(!spline.is_fitted());
    }

    #[test]
    fn test_refit_replaces_coefficients() {
        let mut spline = CubicSpline::new();
        spline.fit(&[0.0, 1.0, 2.0], &[0.0, 1.0, 0.0]).unwrap();
        spline.fit(&[0.0, 1.0], &[5.0, 5.0]).unwrap();

        assert_eq!(spline.knots().0.len(), 2);
        assert_eq!(spline.evaluate(0.5).unwrap(), 5.0);
    }
}
