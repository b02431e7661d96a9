//! Pair analytics for statistical arbitrage.
//!
//! Every function here is pure and side-effect free: it takes price
//! series, returns a value or `None`, and touches no shared state. Any
//! I/O (websocket, storage, logging) lives outside this crate.
//!
//! Unavailability is a first-class outcome, not an error. Below its
//! minimum sample floor each signal reports `None`, and `None` flows
//! monotonically through every dependent stage. No stage substitutes a
//! numeric default for missing data.

pub mod adf;
pub mod alert;
pub mod align;
pub mod correlation;
pub mod hedge;
mod ols;
pub mod signal;
pub mod spread;
pub mod zscore;

pub use adf::adf_test;
pub use alert::{AlertThresholds, evaluate};
pub use correlation::rolling_correlation;
pub use hedge::hedge_ratio;
pub use signal::PairSignal;
pub use spread::spread;
pub use zscore::rolling_zscore;
