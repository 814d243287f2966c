//! Stopping-rule configuration.

use crate::error::{Result, TspError};
use crate::stats::validate_level;

/// Configuration for [`MonteCarloRunner::run_until_precision`].
///
/// # Examples
///
/// ```
/// use tsp_montecarlo::montecarlo::PrecisionConfig;
///
/// let config = PrecisionConfig::default()
///     .with_level(0.99)
///     .with_max_half_width(50.0)
///     .with_initial_runs(30)
///     .with_batch_size(10);
/// assert!(config.validate().is_ok());
/// ```
///
/// [`MonteCarloRunner::run_until_precision`]: super::MonteCarloRunner::run_until_precision
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PrecisionConfig {
    /// Confidence level in (0, 1).
    pub level: f64,

    /// Target half-width of the confidence interval. Must be positive.
    pub max_half_width: f64,

    /// Trials run before the first projection. At least 2.
    pub initial_runs: usize,

    /// Granularity of the projection and size of every follow-up batch.
    pub batch_size: usize,

    /// Optional hard cap on total trials. `None` = unbounded.
    ///
    /// Without a cap the procedure relies on trial outcomes having bounded
    /// variance to terminate. A cap only changes the result of runs that
    /// would have exceeded it.
    pub max_runs: Option<usize>,
}

impl Default for PrecisionConfig {
    fn default() -> Self {
        Self {
            level: 0.95,
            max_half_width: 1.0,
            initial_runs: 100,
            batch_size: 100,
            max_runs: None,
        }
    }
}

impl PrecisionConfig {
    pub fn with_level(mut self, level: f64) -> Self {
        self.level = level;
        self
    }

    pub fn with_max_half_width(mut self, half_width: f64) -> Self {
        self.max_half_width = half_width;
        self
    }

    pub fn with_initial_runs(mut self, n: usize) -> Self {
        self.initial_runs = n;
        self
    }

    pub fn with_batch_size(mut self, n: usize) -> Self {
        self.batch_size = n;
        self
    }

    pub fn with_max_runs(mut self, n: usize) -> Self {
        self.max_runs = Some(n);
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<()> {
        validate_level(self.level)?;
        if self.max_half_width.is_nan() || self.max_half_width <= 0.0 {
            return Err(invalid(format!(
                "max_half_width must be positive, got {}",
                self.max_half_width
            )));
        }
        if self.initial_runs < 2 {
            return Err(invalid(format!(
                "initial_runs must be at least 2, got {}",
                self.initial_runs
            )));
        }
        if self.batch_size == 0 {
            return Err(invalid("batch_size must be at least 1".into()));
        }
        if let Some(cap) = self.max_runs {
            if cap < self.initial_runs {
                return Err(invalid(format!(
                    "max_runs ({cap}) must be at least initial_runs ({})",
                    self.initial_runs
                )));
            }
        }
        Ok(())
    }
}

fn invalid(message: String) -> TspError {
    TspError::InvalidArgument(message)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = PrecisionConfig::default();
        assert!((config.level - 0.95).abs() < 1e-12);
        assert_eq!(config.initial_runs, 100);
        assert_eq!(config.batch_size, 100);
        assert_eq!(config.max_runs, None);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_bad_level() {
        assert!(PrecisionConfig::default().with_level(1.0).validate().is_err());
        assert!(PrecisionConfig::default().with_level(0.0).validate().is_err());
    }

    #[test]
    fn test_validate_bad_half_width() {
        assert!(PrecisionConfig::default()
            .with_max_half_width(0.0)
            .validate()
            .is_err());
        assert!(PrecisionConfig::default()
            .with_max_half_width(f64::NAN)
            .validate()
            .is_err());
    }

    #[test]
    fn test_validate_initial_runs() {
        assert!(PrecisionConfig::default()
            .with_initial_runs(1)
            .validate()
            .is_err());
        assert!(PrecisionConfig::default()
            .with_initial_runs(2)
            .validate()
            .is_ok());
    }

    #[test]
    fn test_validate_batch_size() {
        assert!(PrecisionConfig::default()
            .with_batch_size(0)
            .validate()
            .is_err());
    }

    #[test]
    fn test_validate_max_runs_below_initial() {
        let config = PrecisionConfig::default()
            .with_initial_runs(50)
            .with_max_runs(10);
        assert!(matches!(config.validate(), Err(TspError::InvalidArgument(_))));
    }
}
