//! Welford accumulator and confidence intervals.

use super::quantile::{normal_quantile, validate_level};
use crate::error::{Result, TspError};

/// Online mean, variance, and extremes of a stream of observations.
///
/// Each [`add`](RunningStats::add) is O(1); every statistic is available
/// in O(1) at any time.
///
/// # Examples
///
/// ```
/// use tsp_montecarlo::stats::RunningStats;
///
/// let stats: RunningStats = [2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0].into_iter().collect();
/// assert_eq!(stats.count(), 8);
/// assert!((stats.mean() - 5.0).abs() < 1e-12);
/// assert!((stats.standard_deviation() - 2.138).abs() < 1e-3);
/// ```
#[derive(Debug, Clone)]
pub struct RunningStats {
    count: usize,
    mean: f64,
    // Sum of squared deviations from the running mean.
    m2: f64,
    min: f64,
    max: f64,
}

/// Snapshot of a [`RunningStats`] at a confidence level.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StatsSummary {
    pub count: usize,
    pub mean: f64,
    pub standard_deviation: f64,
    pub level: f64,
    /// `None` with fewer than two observations.
    pub half_width: Option<f64>,
}

impl Default for RunningStats {
    fn default() -> Self {
        Self::new()
    }
}

impl RunningStats {
    pub fn new() -> Self {
        Self {
            count: 0,
            mean: 0.0,
            m2: 0.0,
            min: f64::INFINITY,
            max: f64::NEG_INFINITY,
        }
    }

    /// Adds one observation.
    pub fn add(&mut self, observation: f64) {
        self.count += 1;
        let delta = observation - self.mean;
        self.mean += delta / self.count as f64;
        self.m2 += delta * (observation - self.mean);
        self.min = self.min.min(observation);
        self.max = self.max.max(observation);
    }

    pub fn count(&self) -> usize {
        self.count
    }

    /// Sample mean; NaN when empty.
    pub fn mean(&self) -> f64 {
        if self.count == 0 {
            f64::NAN
        } else {
            self.mean
        }
    }

    /// Sample variance `M2 / (n - 1)`; NaN with fewer than two observations.
    pub fn variance(&self) -> f64 {
        if self.count < 2 {
            f64::NAN
        } else {
            self.m2 / (self.count - 1) as f64
        }
    }

    /// Sample standard deviation; NaN with fewer than two observations.
    pub fn standard_deviation(&self) -> f64 {
        self.variance().sqrt()
    }

    pub fn min(&self) -> Option<f64> {
        (self.count > 0).then_some(self.min)
    }

    pub fn max(&self) -> Option<f64> {
        (self.count > 0).then_some(self.max)
    }

    /// Half-width of the normal-approximation confidence interval for the
    /// mean at `level`: `|z(0.5 - level/2)| * sd / sqrt(n)`.
    ///
    /// Requires `0 < level < 1` and at least two observations.
    pub fn confidence_interval_half_width(&self, level: f64) -> Result<f64> {
        validate_level(level)?;
        if self.count < 2 {
            return Err(TspError::InsufficientData {
                required: 2,
                available: self.count,
            });
        }

        let z = normal_quantile(0.5 - level / 2.0)?.abs();
        Ok(z * self.standard_deviation() / (self.count as f64).sqrt())
    }

    /// `(mean - half_width, mean + half_width)` at `level`.
    pub fn confidence_interval(&self, level: f64) -> Result<(f64, f64)> {
        let half_width = self.confidence_interval_half_width(level)?;
        Ok((self.mean - half_width, self.mean + half_width))
    }

    /// Summary at `level`; the half-width is omitted below two observations.
    pub fn summary(&self, level: f64) -> Result<StatsSummary> {
        validate_level(level)?;
        let half_width = match self.confidence_interval_half_width(level) {
            Ok(h) => Some(h),
            Err(TspError::InsufficientData { .. }) => None,
            Err(e) => return Err(e),
        };

        Ok(StatsSummary {
            count: self.count,
            mean: self.mean(),
            standard_deviation: self.standard_deviation(),
            level,
            half_width,
        })
    }
}

impl Extend<f64> for RunningStats {
    fn extend<I: IntoIterator<Item = f64>>(&mut self, iter: I) {
        for observation in iter {
            self.add(observation);
        }
    }
}

impl FromIterator<f64> for RunningStats {
    fn from_iter<I: IntoIterator<Item = f64>>(iter: I) -> Self {
        let mut stats = RunningStats::new();
        stats.extend(iter);
        stats
    }
}
