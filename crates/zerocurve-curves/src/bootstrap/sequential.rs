//! Sequential bootstrap algorithm.
//!
//! Solves for one discount factor per bond, in maturity order, using the
//! discount factors already solved for shorter maturities.

use log::{debug, warn};
use zerocurve_core::rates::is_valid_discount_factor;
use zerocurve_core::{BondSpecification, Compounding};
use zerocurve_math::interpolation::InterpolationMethod;

use crate::bootstrap::BootstrapConfig;
use crate::curve::YieldCurve;
use crate::error::{CurveError, CurveResult};

/// Maturities closer than this are treated as the same knot.
const MATURITY_TOLERANCE: f64 = 1e-10;

/// Sequential bootstrapper for zero-coupon curves.
///
/// The algorithm:
/// 1. Validate every bond and reject duplicate maturities
/// 2. Sort the bonds by maturity
/// 3. For each bond, discount its intermediate cash flows on the partial curve
///    and solve the bond price equation for the discount factor at maturity
/// 4. Append that discount factor as the next knot
///
/// Coupon dates that fall between solved knots are priced through the
/// configured interpolation, so the method shapes the curve during
/// construction as well as afterwards.
///
/// # Example
///
/// ```rust
/// use zerocurve_core::{BondSpecification, Compounding};
/// use zerocurve_curves::Bootstrapper;
/// use zerocurve_math::interpolation::InterpolationMethod;
///
/// let bonds = [
///     BondSpecification::new(0.5, 0.0, 2, 98.5),
///     BondSpecification::new(1.0, 0.02, 2, 99.0),
/// ];
///
/// let curve = Bootstrapper::new(Compounding::Continuous, InterpolationMethod::LogLinear)
///     .bootstrap(&bonds)
///     .unwrap();
///
/// assert_eq!(curve.times(), &[0.5, 1.0]);
/// assert!((curve.discount_factor(0.5).unwrap() - 0.985).abs() < 1e-12);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Bootstrapper {
    config: BootstrapConfig,
}

impl Bootstrapper {
    /// Creates a bootstrapper producing curves with the given conventions.
    #[must_use]
    pub fn new(compounding: Compounding, interpolation: InterpolationMethod) -> Self {
        Self::from_config(BootstrapConfig::new(compounding, interpolation))
    }

    /// Creates a bootstrapper from a configuration.
    #[must_use]
    pub fn from_config(config: BootstrapConfig) -> Self {
        Self { config }
    }

    /// Returns the configuration.
    pub fn config(&self) -> &BootstrapConfig {
        &self.config
    }

    /// Bootstraps a curve from bond prices.
    ///
    /// The input order does not matter; the returned curve has one knot per
    /// bond at the bond's maturity.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - No bonds are provided, a bond is invalid, or two bonds share a maturity
    /// - A bond price implies a discount factor outside `(1e-10, 1]`
    /// - The first bond pays coupons before its maturity, since the curve is
    ///   still empty when those coupons are discounted
    pub fn bootstrap(&self, bonds: &[BondSpecification]) -> CurveResult<YieldCurve> {
        let sorted = Self::validate_and_sort(bonds)?;

        let mut curve = YieldCurve::new(self.config.compounding, self.config.interpolation);

        for bond in &sorted {
            let df = Self::solve_for_discount_factor(bond, &curve)?;
            curve.add_point(bond.maturity(), df)?;
            debug!(
                "bootstrapped knot {}: t = {:.4}, df = {:.10}",
                curve.len(),
                bond.maturity(),
                df
            );
        }

        debug!(
            "bootstrap complete: {} knots, {} compounding, {} interpolation",
            curve.len(),
            self.config.compounding,
            self.config.interpolation
        );

        Ok(curve)
    }

    /// Bootstraps a curve and fits a cubic spline through its zero rates.
    ///
    /// # Errors
    ///
    /// As [`bootstrap`](Self::bootstrap); smoothing also needs at least two bonds.
    pub fn bootstrap_with_spline(&self, bonds: &[BondSpecification]) -> CurveResult<YieldCurve> {
        let mut curve = self.bootstrap(bonds)?;
        curve.apply_cubic_spline_smoothing()?;
        Ok(curve)
    }

    /// Bootstraps a curve, smoothing it if the configuration asks for it.
    pub fn build_curve(&self, bonds: &[BondSpecification]) -> CurveResult<YieldCurve> {
        if self.config.apply_smoothing {
            self.bootstrap_with_spline(bonds)
        } else {
            self.bootstrap(bonds)
        }
    }

    fn validate_and_sort(bonds: &[BondSpecification]) -> CurveResult<Vec<BondSpecification>> {
        if bonds.is_empty() {
            warn!("bootstrap rejected: no bonds provided");
            return Err(CurveError::invalid_input("no bonds provided for bootstrap"));
        }

        for (i, bond) in bonds.iter().enumerate() {
            if let Err(e) = bond.validate() {
                warn!("bootstrap rejected: bond {} invalid: {}", i, e);
                return Err(e.into());
            }
        }

        let mut sorted = bonds.to_vec();
        sorted.sort_by(|a, b| a.maturity().total_cmp(&b.maturity()));

        if let Some(pair) = sorted
            .windows(2)
            .find(|pair| pair[1].maturity() - pair[0].maturity() < MATURITY_TOLERANCE)
        {
            warn!(
                "bootstrap rejected: duplicate maturity {}",
                pair[1].maturity()
            );
            return Err(CurveError::invalid_input(format!(
                "duplicate bond maturity {}",
                pair[1].maturity()
            )));
        }

        Ok(sorted)
    }

    /// Solves `price = sum(cf_i * DF(t_i)) + cf_n * DF(t_n)` for `DF(t_n)`.
    fn solve_for_discount_factor(bond: &BondSpecification, curve: &YieldCurve) -> CurveResult<f64> {
        let times = bond.payment_times();
        let flows = bond.cash_flows();

        let Some((&final_flow, intermediate)) = flows.split_last() else {
            return Err(CurveError::invalid_input("bond has no cash flows"));
        };

        let mut pv_known = 0.0;
        for (&t, &cf) in times.iter().zip(intermediate) {
            if cf == 0.0 {
                continue;
            }
            pv_known += cf * curve.discount_factor(t)?;
        }

        let df = (bond.market_price() - pv_known) / final_flow;

        if !is_valid_discount_factor(df) {
            warn!(
                "infeasible discount factor {} at maturity {} (price {}, known pv {})",
                df,
                bond.maturity(),
                bond.market_price(),
                pv_known
            );
            return Err(CurveError::infeasible(bond.maturity(), df));
        }

        Ok(df)
    }
}
