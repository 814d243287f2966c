//! Inverse standard normal CDF.

use statrs::function::erf::erf_inv;
use std::f64::consts::SQRT_2;

use crate::error::{Result, TspError};

/// Quantile of the standard normal distribution at lower-tail probability `p`.
///
/// Lower-tail convention: `normal_quantile(0.025) ≈ -1.96` and
/// `normal_quantile(0.975) ≈ 1.96`. Fails with `InvalidArgument` unless
/// `0 < p < 1`.
pub fn normal_quantile(p: f64) -> Result<f64> {
    if p.is_nan() || p <= 0.0 || p >= 1.0 {
        return Err(TspError::InvalidArgument(format!(
            "quantile probability must be in (0, 1), got {p}"
        )));
    }

    Ok(SQRT_2 * erf_inv(2.0 * p - 1.0))
}

/// Fails with `InvalidArgument` unless `0 < level < 1`.
pub(crate) fn validate_level(level: f64) -> Result<()> {
    if level > 0.0 && level < 1.0 {
        Ok(())
    } else {
        Err(TspError::InvalidArgument(format!(
            "confidence level must be in (0, 1), got {level}"
        )))
    }
}
