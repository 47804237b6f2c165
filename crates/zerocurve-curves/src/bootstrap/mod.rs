//! Curve bootstrapping from bond prices.
//!
//! - [`Bootstrapper`]: sequential, one discount factor per bond
//! - [`BootstrapConfig`]: serializable settings for a bootstrap run

mod config;
mod sequential;

pub use config::BootstrapConfig;
pub use sequential::Bootstrapper;
