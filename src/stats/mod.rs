//! Streaming statistics for Monte Carlo estimation.
//!
//! [`RunningStats`] accumulates observations one at a time using
//! Welford's algorithm and produces normal-approximation confidence
//! intervals via [`normal_quantile`].
//!
//! # References
//!
//! - Welford (1962), "Note on a Method for Calculating Corrected Sums of
//!   Squares and Products"

mod collector;
mod quantile;

pub use collector::{RunningStats, StatsSummary};
pub use quantile::normal_quantile;

pub(crate) use quantile::validate_level;
