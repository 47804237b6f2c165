//! Bootstrap configuration.

use std::io::Read;

use serde::{Deserialize, Serialize};
use zerocurve_core::Compounding;
use zerocurve_math::interpolation::InterpolationMethod;

use crate::error::{CurveError, CurveResult};

/// Settings for a bootstrap run.
///
/// Every field has a default, so a partial (or empty) JSON object is valid:
///
/// ```rust
/// use zerocurve_core::Compounding;
/// use zerocurve_curves::BootstrapConfig;
/// use zerocurve_math::interpolation::InterpolationMethod;
///
/// let config = BootstrapConfig::from_json_str(r#"{"compounding": "SemiAnnual"}"#).unwrap();
/// assert_eq!(config.compounding, Compounding::SemiAnnual);
/// assert_eq!(config.interpolation, InterpolationMethod::LogLinear);
/// assert!(!config.apply_smoothing);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct BootstrapConfig {
    /// Compounding convention of the resulting curve.
    pub compounding: Compounding,

    /// Interpolation used between knots, during and after the bootstrap.
    pub interpolation: InterpolationMethod,

    /// Fit a cubic spline through the zero rates once all knots are solved.
    pub apply_smoothing: bool,
}

impl BootstrapConfig {
    /// Creates a configuration without smoothing.
    #[must_use]
    pub fn new(compounding: Compounding, interpolation: InterpolationMethod) -> Self {
        Self {
            compounding,
            interpolation,
            apply_smoothing: false,
        }
    }

    /// Enables or disables spline smoothing.
    #[must_use]
    pub fn with_smoothing(mut self, apply_smoothing: bool) -> Self {
        self.apply_smoothing = apply_smoothing;
        self
    }

    /// Parses a configuration from a JSON string.
    ///
    /// # Errors
    ///
    /// Returns `CurveError::Config` if the JSON is malformed or names an
    /// unknown compounding or interpolation method.
    pub fn from_json_str(json: &str) -> CurveResult<Self> {
        serde_json::from_str(json).map_err(|e| CurveError::config(e.to_string()))
    }

    /// Reads a configuration from JSON.
    ///
    /// # Errors
    ///
    /// Returns `CurveError::Config` if reading or parsing fails.
    pub fn from_reader<R: Read>(reader: R) -> CurveResult<Self> {
        serde_json::from_reader(reader).map_err(|e| CurveError::config(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = BootstrapConfig::default();
        assert_eq!(config.compounding, Compounding::Continuous);
        assert_eq!(config.interpolation, InterpolationMethod::LogLinear);
        assert!(!config.apply_smoothing);

        assert_eq!(BootstrapConfig::from_json_str("{}").unwrap(), config);
    }

    #[test]
    fn test_full_json() {
        let json = r#"{
            "compounding": "Quarterly",
            "interpolation": "FlatForward",
            "apply_smoothing": true
        }"#;
        let config = BootstrapConfig::from_json_str(json).unwrap();
        assert_eq!(
            config,
            BootstrapConfig::new(Compounding::Quarterly, InterpolationMethod::FlatForward)
                .with_smoothing(true)
        );
    }

    #[test]
    fn test_from_reader() {
        let json = br#"{"interpolation": "Linear"}"#;
        let config = BootstrapConfig::from_reader(&json[..]).unwrap();
        assert_eq!(config.interpolation, InterpolationMethod::Linear);
    }

    #[test]
    fn test_unknown_method_rejected() {
        let err = BootstrapConfig::from_json_str(r#"{"interpolation": "MonotoneConvex"}"#)
            .unwrap_err();
        assert!(matches!(err, CurveError::Config { .. }));
        assert!(err.is_invalid_input());
    }

    #[test]
    fn test_round_trip_through_json() {
        let config =
            BootstrapConfig::new(Compounding::Annual, InterpolationMethod::Linear).with_smoothing(true);
        let json = serde_json::to_string(&config).unwrap();
        assert_eq!(BootstrapConfig::from_json_str(&json).unwrap(), config);
    }
}
