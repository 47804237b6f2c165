//! Compounding conventions and zero rate / discount factor conversion.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{CoreError, CoreResult};
use crate::rates::ZERO_TIME_THRESHOLD;

/// Interest compounding convention used to quote zero rates.
///
/// | Convention | DF(t, r) | r(t, DF) |
/// |---|---|---|
/// | Continuous | e^(−rt) | −ln(DF)/t |
/// | Annual | (1+r)^(−t) | DF^(−1/t) − 1 |
/// | Semi-annual | (1+r/2)^(−2t) | 2·(DF^(−1/(2t)) − 1) |
/// | Quarterly | (1+r/4)^(−4t) | 4·(DF^(−1/(4t)) − 1) |
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Compounding {
    /// Continuous compounding
    #[default]
    Continuous,
    /// Annual compounding (1x per year)
    Annual,
    /// Semi-annual compounding (2x per year)
    SemiAnnual,
    /// Quarterly compounding (4x per year)
    Quarterly,
}

impl Compounding {
    /// All supported conventions.
    pub const ALL: [Compounding; 4] = [
        Compounding::Continuous,
        Compounding::Annual,
        Compounding::SemiAnnual,
        Compounding::Quarterly,
    ];

    /// Compounding periods per year, `None` for continuous.
    fn periods_per_year(&self) -> Option<u32> {
        match self {
            Compounding::Continuous => None,
            Compounding::Annual => Some(1),
            Compounding::SemiAnnual => Some(2),
            Compounding::Quarterly => Some(4),
        }
    }

    /// Converts a zero rate into a discount factor.
    ///
    /// A time below `1e-10` is "now" and yields exactly 1.0 whatever the rate.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::InvalidInput`] if `time` is negative.
    pub fn discount_factor(&self, time: f64, rate: f64) -> CoreResult<f64> {
        if time < 0.0 {
            return Err(CoreError::invalid_input(format!(
                "time must be non-negative, got {time}"
            )));
        }
        if time < ZERO_TIME_THRESHOLD {
            return Ok(1.0);
        }

        let df = match self.periods_per_year() {
            None => (-rate * time).exp(),
            Some(m) => {
                let m = f64::from(m);
                (1.0 + rate / m).powf(-m * time)
            }
        };
        Ok(df)
    }

    /// Converts a discount factor into a zero rate.
    ///
    /// # Errors
    ///
    /// - [`CoreError::TimeTooSmall`] if `time < 1e-10`
    /// - [`CoreError::InvalidDiscountFactor`] if `df` is not in (0, 1]
    pub fn zero_rate(&self, time: f64, df: f64) -> CoreResult<f64> {
        if time < ZERO_TIME_THRESHOLD {
            return Err(CoreError::TimeTooSmall { time });
        }
        if df <= 0.0 || df > 1.0 || df.is_nan() {
            return Err(CoreError::InvalidDiscountFactor { value: df });
        }

        let rate = match self.periods_per_year() {
            None => -df.ln() / time,
            Some(m) => {
                let m = f64::from(m);
                m * (df.powf(-1.0 / (m * time)) - 1.0)
            }
        };
        Ok(rate)
    }
}

impl fmt::Display for Compounding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Compounding::Continuous => "Continuous",
            Compounding::Annual => "Annual",
            Compounding::SemiAnnual => "Semi-Annual",
            Compounding::Quarterly => "Quarterly",
        };
        write!(f, "{name}")
    }
}
