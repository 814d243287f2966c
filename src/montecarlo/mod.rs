//! Sequential Monte Carlo estimation.
//!
//! Runs a randomized [`Trial`] repeatedly and feeds every outcome into a
//! [`RunningStats`](crate::stats::RunningStats). Two modes are offered:
//!
//! - **Fixed**: exactly `n` trials.
//! - **Until precision**: an initial batch, a projection of the total
//!   number of trials needed for the target confidence-interval
//!   half-width, then further batches until the target is met.
//!
//! All randomness flows through one caller-supplied generator, drawn in
//! strict trial order, so equal seeds reproduce equal estimates.

mod config;
mod runner;
mod types;

pub use config::PrecisionConfig;
pub use runner::{MonteCarloRunner, PrecisionOutcome};
pub use types::Trial;
