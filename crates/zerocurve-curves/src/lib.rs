//! # Zerocurve Curves
//!
//! Zero-coupon curve construction from bond prices.
//!
//! This crate provides:
//!
//! - **Curve**: [`YieldCurve`], a growable sequence of `(time, DF)` knots
//!   answering discount factor, zero rate and forward rate queries, with an
//!   optional one-way switch to cubic-spline smoothing
//! - **Bootstrap**: [`Bootstrapper`], solving one knot per bond in maturity order
//! - **Configuration**: [`BootstrapConfig`], loadable from JSON
//! - **Forward View**: [`ForwardCurve`], a borrowed forward-rate projection
//!
//! ## Quick Start
//!
//! ```rust
//! use zerocurve_curves::prelude::*;
//!
//! let bonds = [
//!     BondSpecification::new(0.5, 0.0, 2, 98.5),
//!     BondSpecification::new(1.0, 0.02, 2, 99.0),
//!     BondSpecification::new(2.0, 0.03, 2, 99.5),
//! ];
//!
//! let curve = Bootstrapper::new(Compounding::Continuous, InterpolationMethod::LogLinear)
//!     .bootstrap(&bonds)
//!     .unwrap();
//!
//! let rate = curve.zero_rate(1.5).unwrap();
//! assert!(rate > 0.0);
//! assert!(!curve.has_arbitrage().unwrap());
//!
//! let forwards = ForwardCurve::new(&curve).forward_curve(&[0.5, 1.0, 2.0]).unwrap();
//! assert_eq!(forwards.len(), 2);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::doc_markdown)]
#![allow(clippy::float_cmp)]
#![allow(clippy::uninlined_format_args)]

pub mod bootstrap;
pub mod curve;
pub mod error;
pub mod forward;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::bootstrap::{BootstrapConfig, Bootstrapper};
    pub use crate::curve::{CurveKnot, YieldCurve};
    pub use crate::error::{CurveError, CurveResult};
    pub use crate::forward::ForwardCurve;
    pub use zerocurve_core::{BondSpecification, Compounding};
    pub use zerocurve_math::interpolation::{DiscountInterpolator, InterpolationMethod};
}

pub use bootstrap::{BootstrapConfig, Bootstrapper};
pub use curve::{CurveKnot, YieldCurve};
pub use error::{CurveError, CurveResult};
pub use forward::ForwardCurve;
