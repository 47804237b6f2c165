//! # Zerocurve Math
//!
//! Numerical building blocks for zero-curve construction.
//!
//! This crate provides:
//!
//! - **Interpolation**: Discount-factor interpolation strategies (Linear,
//!   Log-Linear, Flat-Forward), each with its own extrapolation policy
//! - **Splines**: A natural cubic spline with value and first-derivative evaluation
//! - **Linear Algebra**: A tridiagonal solver used by the spline fit
//!
//! ## Design Philosophy
//!
//! - **Stateless strategies**: Interpolators are evaluated against caller-owned
//!   knot slices, so a growing curve never needs to rebuild them
//! - **Explicit failures**: Every malformed input is reported through [`MathError`]

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::doc_markdown)]
#![allow(clippy::similar_names)]
#![allow(clippy::many_single_char_names)]
#![allow(clippy::uninlined_format_args)]

pub mod error;
pub mod interpolation;
pub mod linear_algebra;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::error::{MathError, MathResult};
    pub use crate::interpolation::{
        CubicSpline, DiscountInterpolator, FlatForwardInterpolator, InterpolationMethod,
        LinearInterpolator, LogLinearInterpolator,
    };
    pub use crate::linear_algebra::solve_tridiagonal;
}

pub use error::{MathError, MathResult};
