//! Monte Carlo estimation of near-optimal TSP tour lengths.
//!
//! Estimates the expected length of good tours over random subsets of a
//! symmetric TSP instance, with a confidence interval of chosen precision:
//!
//! - **Oracles**: read-only distance access over a city index space, with
//!   precomputed or on-demand Euclidean distances.
//! - **Datasets**: loading of `<n>` + `<city> <x> <y>` text instances.
//! - **Tours**: canonical, random, and nearest-neighbor-from-both-ends
//!   construction; best-improvement 2-opt local search.
//! - **Sampling**: random city subsets that always contain a depot.
//! - **Statistics**: streaming mean and variance with normal confidence
//!   intervals.
//! - **Monte Carlo**: fixed-count and sequential stopping-rule runners.
//!
//! # Example
//!
//! ```
//! use rand::rngs::StdRng;
//! use rand::SeedableRng;
//! use tsp_montecarlo::dataset::TspDataSet;
//! use tsp_montecarlo::experiment::TspExperiment;
//! use tsp_montecarlo::montecarlo::{MonteCarloRunner, PrecisionConfig};
//! use tsp_montecarlo::stats::RunningStats;
//!
//! let data: TspDataSet = "5\n0 0 0\n1 0 10\n2 10 10\n3 10 0\n4 5 5\n".parse().unwrap();
//! let experiment = TspExperiment::new(&data, 0, 0.6).unwrap();
//! let config = PrecisionConfig::default()
//!     .with_max_half_width(2.0)
//!     .with_initial_runs(20)
//!     .with_batch_size(10);
//!
//! let mut rng = StdRng::seed_from_u64(20200525);
//! let mut stats = RunningStats::new();
//! let outcome = MonteCarloRunner::run_until_precision(&experiment, &config, &mut rng, &mut stats).unwrap();
//! assert!(outcome.converged);
//! assert!(stats.confidence_interval_half_width(0.95).unwrap() < 2.0);
//! ```
//!
//! # Architecture
//!
//! Everything runs on one thread with one caller-supplied random source,
//! drawn in a fixed order, so equal seeds reproduce equal estimates.

pub mod dataset;
pub mod error;
pub mod experiment;
pub mod montecarlo;
pub mod oracle;
pub mod sampling;
pub mod stats;
pub mod tour;

pub use error::{Result, TspError};
