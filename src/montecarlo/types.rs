//! Core trait for Monte Carlo trials.

use rand::Rng;

use crate::error::Result;

/// One randomized experiment producing a scalar outcome.
///
/// The runner calls [`execute`](Trial::execute) once per trial, always
/// with the same generator, so an implementation must draw all of its
/// randomness from `rng`.
///
/// # Examples
///
/// ```
/// use rand::Rng;
/// use tsp_montecarlo::error::Result;
/// use tsp_montecarlo::montecarlo::Trial;
///
/// struct Die;
///
/// impl Trial for Die {
///     fn execute<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<f64> {
///         Ok(rng.random_range(1..=6) as f64)
///     }
/// }
/// ```
pub trait Trial {
    /// Runs the experiment once and returns its outcome.
    fn execute<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<f64>;
}

impl<T: Trial + ?Sized> Trial for &T {
    fn execute<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<f64> {
        (**self).execute(rng)
    }
}
