//! # Zerocurve Core
//!
//! Core types for the Zerocurve bootstrapping library.
//!
//! This crate provides the foundational building blocks used by the numerics
//! and curve crates:
//!
//! - **Compounding**: The four compounding conventions and the conversion
//!   between a zero rate and a discount factor
//! - **Bonds**: [`BondSpecification`], the immutable market input of a bootstrap,
//!   with its payment schedule and cash flows
//! - **Errors**: [`CoreError`] and the [`CoreResult`] alias
//!
//! ## Example
//!
//! ```rust
//! use zerocurve_core::prelude::*;
//!
//! let df = Compounding::Continuous.discount_factor(2.0, 0.05).unwrap();
//! let rate = Compounding::Continuous.zero_rate(2.0, df).unwrap();
//! assert!((rate - 0.05).abs() < 1e-12);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::doc_markdown)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_lossless)]
#![allow(clippy::uninlined_format_args)]

pub mod error;
pub mod rates;
pub mod types;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::error::{CoreError, CoreResult};
    pub use crate::rates::{
        discount_factor_from_rate, is_valid_discount_factor, rate_from_discount_factor,
    };
    pub use crate::types::{BondSpecification, Compounding};
}

pub use error::{CoreError, CoreResult};
pub use types::{BondSpecification, Compounding};
