//! Coupon bond market quotes used as bootstrap inputs.

use serde::{Deserialize, Serialize};

use crate::error::{CoreError, CoreResult};

/// Face value assumed when a quote does not carry one.
pub const DEFAULT_FACE_VALUE: f64 = 100.0;

/// Tolerance used when matching a coupon date against the maturity.
const SCHEDULE_TOLERANCE: f64 = 1e-10;

/// Longest payment schedule a bond may have.
pub const MAX_PAYMENTS: u32 = 10_000;

fn default_face_value() -> f64 {
    DEFAULT_FACE_VALUE
}

/// A fixed-coupon bond quoted at a market price.
///
/// Times are year fractions from the curve's reference point. Coupons are paid
/// `frequency` times a year; the final payment adds the face value.
///
/// # Example
///
/// ```rust
/// use zerocurve_core::BondSpecification;
///
/// // 2Y 4% semi-annual bond quoted at 99.25
/// let bond = BondSpecification::new(2.0, 0.04, 2, 99.25);
///
/// assert_eq!(bond.payment_times(), vec![0.5, 1.0, 1.5, 2.0]);
/// assert_eq!(bond.cash_flows(), vec![2.0, 2.0, 2.0, 102.0]);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BondSpecification {
    maturity: f64,
    coupon_rate: f64,
    frequency: u32,
    market_price: f64,
    #[serde(default = "default_face_value")]
    face_value: f64,
}

impl BondSpecification {
    /// Creates a bond with the default face value of 100.
    ///
    /// # Arguments
    ///
    /// * `maturity` - Time to maturity in years
    /// * `coupon_rate` - Annual coupon rate as a decimal (0.05 for 5%)
    /// * `frequency` - Coupon payments per year
    /// * `market_price` - Quoted price in the same units as the face value
    #[must_use]
    pub fn new(maturity: f64, coupon_rate: f64, frequency: u32, market_price: f64) -> Self {
        Self {
            maturity,
            coupon_rate,
            frequency,
            market_price,
            face_value: DEFAULT_FACE_VALUE,
        }
    }

    /// Creates a zero-coupon bond paying `face_value` at `maturity`.
    #[must_use]
    pub fn zero_coupon(maturity: f64, market_price: f64) -> Self {
        Self::new(maturity, 0.0, 1, market_price)
    }

    /// Sets the face value.
    #[must_use]
    pub fn with_face_value(mut self, face_value: f64) -> Self {
        self.face_value = face_value;
        self
    }

    /// Returns the maturity in years.
    pub fn maturity(&self) -> f64 {
        self.maturity
    }

    /// Returns the annual coupon rate.
    pub fn coupon_rate(&self) -> f64 {
        self.coupon_rate
    }

    /// Returns the number of coupon payments per year.
    pub fn frequency(&self) -> u32 {
        self.frequency
    }

    /// Returns the quoted market price.
    pub fn market_price(&self) -> f64 {
        self.market_price
    }

    /// Returns the face value.
    pub fn face_value(&self) -> f64 {
        self.face_value
    }

    /// Returns the coupon paid on each payment date.
    pub fn coupon_payment(&self) -> f64 {
        self.coupon_rate * self.face_value / f64::from(self.frequency)
    }

    /// Returns the payment times `{dt, 2dt, ..., maturity}` with `dt = 1/frequency`.
    ///
    /// Regular dates strictly before the maturity are followed by the maturity
    /// itself, so the schedule always ends on the maturity. The schedule never
    /// holds more than [`MAX_PAYMENTS`] dates.
    pub fn payment_times(&self) -> Vec<f64> {
        let dt = 1.0 / f64::from(self.frequency);
        let mut times: Vec<f64> = (1..MAX_PAYMENTS)
            .map(|k| f64::from(k) * dt)
            .take_while(|t| *t < self.maturity - SCHEDULE_TOLERANCE)
            .collect();
        times.push(self.maturity);
        times
    }

    /// Returns the cash flow paid at each of [`payment_times`](Self::payment_times).
    pub fn cash_flows(&self) -> Vec<f64> {
        let count = self.payment_times().len();
        let coupon = self.coupon_payment();
        let mut flows = vec![coupon; count];
        if let Some(last) = flows.last_mut() {
            *last += self.face_value;
        }
        flows
    }

    /// Checks the quote's invariants.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::InvalidBondSpec`] if any amount is not finite, the
    /// maturity, frequency or face value is not positive, the coupon is
    /// negative, the price is not in `(0, 2 × face value]`, or the schedule
    /// would exceed [`MAX_PAYMENTS`] dates.
    pub fn validate(&self) -> CoreResult<()> {
        for (name, value) in [
            ("maturity", self.maturity),
            ("coupon rate", self.coupon_rate),
            ("market price", self.market_price),
            ("face value", self.face_value),
        ] {
            if !value.is_finite() {
                return Err(CoreError::invalid_bond_spec(format!(
                    "{name} must be finite, got {value}"
                )));
            }
        }
        if !(self.maturity > 0.0) {
            return Err(CoreError::invalid_bond_spec(format!(
                "maturity must be positive, got {}",
                self.maturity
            )));
        }
        if !(self.coupon_rate >= 0.0) {
            return Err(CoreError::invalid_bond_spec(format!(
                "coupon rate must be non-negative, got {}",
                self.coupon_rate
            )));
        }
        if self.frequency == 0 {
            return Err(CoreError::invalid_bond_spec(
                "payment frequency must be positive",
            ));
        }
        let payments = (self.maturity * f64::from(self.frequency) - SCHEDULE_TOLERANCE).ceil();
        if payments > f64::from(MAX_PAYMENTS) {
            return Err(CoreError::invalid_bond_spec(format!(
                "schedule of {} payments exceeds the limit of {}",
                payments, MAX_PAYMENTS
            )));
        }
        if !(self.face_value > 0.0) {
            return Err(CoreError::invalid_bond_spec(format!(
                "face value must be positive, got {}",
                self.face_value
            )));
        }
        if !(self.market_price > 0.0) {
            return Err(CoreError::invalid_bond_spec(format!(
                "market price must be positive, got {}",
                self.market_price
            )));
        }
        if self.market_price > 2.0 * self.face_value {
            return Err(CoreError::invalid_bond_spec(format!(
                "market price {} exceeds twice the face value {}",
                self.market_price, self.face_value
            )));
        }
        Ok(())
    }

    /// Parses a JSON array of bond quotes.
    ///
    /// ```rust
    /// use zerocurve_core::BondSpecification;
    ///
    /// let json = r#"[
    ///     {"maturity": 0.5, "coupon_rate": 0.0, "frequency": 2, "market_price": 98.5},
    ///     {"maturity": 1.0, "coupon_rate": 0.02, "frequency": 2, "market_price": 99.0, "face_value": 100.0}
    /// ]"#;
    ///
    /// let bonds = BondSpecification::portfolio_from_json(json).unwrap();
    /// assert_eq!(bonds.len(), 2);
    /// assert_eq!(bonds[0].face_value(), 100.0);
    /// ```
    pub fn portfolio_from_json(json: &str) -> CoreResult<Vec<Self>> {
        let bonds: Vec<Self> = serde_json::from_str(json)?;
        log::debug!("parsed {} bond quotes", bonds.len());
        Ok(bonds)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_payment_times_semi_annual() {
        let bond = BondSpecification::new(2.0, 0.05, 2, 100.0);
        assert_eq!(bond.payment_times(), vec![0.5, 1.0, 1.5, 2.0]);
    }

    #[test]
    fn test_payment_times_inexact_step() {
        // 0.1 is not exact in binary; the last date must still be the maturity.
        let bond = BondSpecification::new(1.0, 0.05, 10, 100.0);
        let times = bond.payment_times();
        assert_eq!(times.len(), 10);
        assert_eq!(*times.last().unwrap(), 1.0);
        assert_relative_eq!(times[2], 0.3, epsilon = 1e-15);
    }

    #[test]
    fn test_payment_times_short_maturity() {
        let bond = BondSpecification::new(0.25, 0.04, 2, 99.0);
        assert_eq!(bond.payment_times(), vec![0.25]);
    }

    #[test]
    fn test_payment_times_broken_period() {
        let bond = BondSpecification::new(1.25, 0.04, 2, 99.0);
        assert_eq!(bond.payment_times(), vec![0.5, 1.0, 1.25]);
    }

    #[test]
    fn test_cash_flows() {
        let bond = BondSpecification::new(1.5, 0.06, 2, 101.0).with_face_value(1000.0);
        assert_relative_eq!(bond.coupon_payment(), 30.0, epsilon = 1e-12);
        assert_eq!(bond.cash_flows(), vec![30.0, 30.0, 1030.0]);
    }

    #[test]
    fn test_zero_coupon_cash_flows() {
        let bond = BondSpecification::zero_coupon(3.0, 88.0);
        assert_eq!(bond.payment_times(), vec![1.0, 2.0, 3.0]);
        assert_eq!(bond.cash_flows(), vec![0.0, 0.0, 100.0]);
    }

    #[test]
    fn test_validate() {
        assert!(BondSpecification::new(1.0, 0.05, 2, 100.0).validate().is_ok());

        let invalid = [
            BondSpecification::new(0.0, 0.05, 2, 100.0),
            BondSpecification::new(-1.0, 0.05, 2, 100.0),
            BondSpecification::new(1.0, -0.01, 2, 100.0),
            BondSpecification::new(1.0, 0.05, 0, 100.0),
            BondSpecification::new(1.0, 0.05, 2, 0.0),
            BondSpecification::new(1.0, 0.05, 2, 200.01),
            BondSpecification::new(1.0, 0.05, 2, 100.0).with_face_value(0.0),
            BondSpecification::new(f64::NAN, 0.05, 2, 100.0),
            BondSpecification::new(f64::INFINITY, 0.05, 2, 100.0),
            BondSpecification::new(1.0, f64::NAN, 2, 100.0),
            BondSpecification::new(1.0, 0.05, 2, f64::INFINITY),
            BondSpecification::new(1.0, 0.05, 2, 100.0).with_face_value(f64::INFINITY),
            BondSpecification::new(1.0, 0.05, u32::MAX, 100.0),
            BondSpecification::new(1_000.0, 0.05, 12, 100.0),
        ];
        for bond in invalid {
            assert!(
                matches!(bond.validate(), Err(CoreError::InvalidBondSpec { .. })),
                "{:?} should be rejected",
                bond
            );
        }
    }

    #[test]
    fn test_validate_schedule_limit() {
        // 30Y monthly is well inside the limit; 10_000 payments is the edge.
        assert!(BondSpecification::new(30.0, 0.05, 12, 100.0).validate().is_ok());
        assert!(BondSpecification::new(100.0, 0.05, 100, 100.0).validate().is_ok());
        assert!(BondSpecification::new(100.5, 0.05, 100, 100.0).validate().is_err());
    }

    #[test]
    fn test_payment_times_bounded_without_validation() {
        let bond = BondSpecification::new(f64::INFINITY, 0.0, 1, 99.0);
        let times = bond.payment_times();
        assert_eq!(times.len(), MAX_PAYMENTS as usize);
        assert_eq!(*times.last().unwrap(), f64::INFINITY);
    }

    #[test]
    fn test_portfolio_from_json_rejects_garbage() {
        let err = BondSpecification::portfolio_from_json("[{\"maturity\": 1.0}]").unwrap_err();
        assert!(matches!(err, CoreError::Parse { .. }));
    }
}
