//! Domain types for zero-curve bootstrapping.

mod bond;
mod compounding;

pub use bond::{BondSpecification, DEFAULT_FACE_VALUE, MAX_PAYMENTS};
pub use compounding::Compounding;
