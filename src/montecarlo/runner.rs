//! Monte Carlo execution loops.
//!
//! # Algorithm (sequential stopping rule)
//!
//! 1. Run `initial_runs` trials.
//! 2. Project the total number of trials needed,
//!    `N = ceil((z * sd / max_half_width)^2 / batch_size) * batch_size`,
//!    with `z` the normal quantile at `0.5 - level / 2`.
//! 3. Run trials until `N` have been made (none if `N <= initial_runs`).
//! 4. While the half-width at `level` is still `>= max_half_width`, run
//!    `batch_size` more trials.
//!
//! Step 4 has no built-in bound. It terminates because trial outcomes are
//! bounded, so the sample deviation settles while `sqrt(n)` keeps growing.
//! [`PrecisionConfig::max_runs`] adds an explicit cap.

use rand::Rng;
use tracing::{debug, info, trace, warn};

use super::config::PrecisionConfig;
use super::types::Trial;
use crate::error::Result;
use crate::stats::{normal_quantile, RunningStats};

/// Result of a [`MonteCarloRunner::run_until_precision`] call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrecisionOutcome {
    /// Trials executed by this call.
    pub runs: usize,

    /// Projected total from step 2, before any cap.
    pub estimated_runs: usize,

    /// Follow-up batches run in step 4.
    pub batches: usize,

    /// Whether the half-width target was met. Only `false` when
    /// [`PrecisionConfig::max_runs`] stopped the run.
    pub converged: bool,
}

/// Executes Monte Carlo trials.
pub struct MonteCarloRunner;

impl MonteCarloRunner {
    /// Runs `trial` exactly `n` times, adding every outcome to `stats`.
    pub fn run_fixed<T, R>(trial: &T, n: usize, rng: &mut R, stats: &mut RunningStats) -> Result<()>
    where
        T: Trial + ?Sized,
        R: Rng + ?Sized,
    {
        for _ in 0..n {
            let outcome = trial.execute(rng)?;
            trace!(run = stats.count() + 1, outcome, "trial finished");
            stats.add(outcome);
        }
        Ok(())
    }

    /// Runs `trial` until the confidence-interval half-width at
    /// `config.level` drops below `config.max_half_width`.
    ///
    /// `stats` may already hold observations; they count toward the
    /// estimate exactly like the ones added here.
    pub fn run_until_precision<T, R>(
        trial: &T,
        config: &PrecisionConfig,
        rng: &mut R,
        stats: &mut RunningStats,
    ) -> Result<PrecisionOutcome>
    where
        T: Trial + ?Sized,
        R: Rng + ?Sized,
    {
        config.validate()?;
        let cap = config.max_runs.unwrap_or(usize::MAX);

        Self::run_fixed(trial, config.initial_runs, rng, stats)?;
        let mut runs = config.initial_runs;

        let z = normal_quantile(0.5 - config.level / 2.0)?;
        let estimated_runs = estimate_total_runs(
            z,
            stats.standard_deviation(),
            config.max_half_width,
            config.batch_size,
        );
        info!(
            event = "precision_estimate",
            initial_runs = config.initial_runs,
            estimated_runs,
            z,
            standard_deviation = stats.standard_deviation(),
        );

        let remaining = estimated_runs.min(cap).saturating_sub(runs);
        Self::run_fixed(trial, remaining, rng, stats)?;
        runs += remaining;

        let mut batches = 0;
        loop {
            let half_width = stats.confidence_interval_half_width(config.level)?;
            if half_width < config.max_half_width {
                info!(
                    event = "precision_reached",
                    runs,
                    batches,
                    mean = stats.mean(),
                    half_width,
                );
                return Ok(PrecisionOutcome {
                    runs,
                    estimated_runs,
                    batches,
                    converged: true,
                });
            }

            if runs >= cap {
                warn!(event = "run_cap_reached", runs, half_width);
                return Ok(PrecisionOutcome {
                    runs,
                    estimated_runs,
                    batches,
                    converged: false,
                });
            }

            let batch = config.batch_size.min(cap - runs);
            Self::run_fixed(trial, batch, rng, stats)?;
            runs += batch;
            batches += 1;
            debug!(event = "batch", batch = batches, runs, half_width);
        }
    }
}

/// Total trials projected for the target half-width, rounded up to a
/// multiple of `batch_size`. Non-finite projections saturate.
fn estimate_total_runs(z: f64, standard_deviation: f64, max_half_width: f64, batch_size: usize) -> usize {
    let needed = (z * standard_deviation / max_half_width).powi(2);
    let batch = batch_size as f64;

    // Float-to-int casts saturate; NaN becomes 0.
    ((needed / batch).ceil() * batch) as usize
}
