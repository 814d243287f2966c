//! The TSP sampling trial.
//!
//! Each execution keeps every non-depot city of the full instance with a
//! fixed probability, builds a nearest-neighbor-from-both-ends tour from
//! the depot, improves it with 2-Opt-Best, and reports its length.

use rand::Rng;
use tracing::trace;

use crate::error::Result;
use crate::montecarlo::Trial;
use crate::oracle::{check_index, DistanceOracle};
use crate::sampling::{validate_probability, SampledView};
use crate::tour::Tour;

/// Near-optimal tour length over a random subset of cities around a depot.
#[derive(Debug, Clone)]
pub struct TspExperiment<'a, O: DistanceOracle + ?Sized> {
    data: &'a O,
    depot: usize,
    sampling_probability: f64,
}

impl<'a, O: DistanceOracle + ?Sized> TspExperiment<'a, O> {
    /// Fails with `OutOfRange` for a bad depot and `InvalidArgument` when
    /// `sampling_probability` is not in `[0, 1]`.
    pub fn new(data: &'a O, depot: usize, sampling_probability: f64) -> Result<Self> {
        check_index("depot", depot, data.size())?;
        validate_probability(sampling_probability)?;

        Ok(TspExperiment {
            data,
            depot,
            sampling_probability,
        })
    }

    pub fn depot(&self) -> usize {
        self.depot
    }

    pub fn sampling_probability(&self) -> f64 {
        self.sampling_probability
    }
}

impl<O: DistanceOracle + ?Sized> Trial for TspExperiment<'_, O> {
    fn execute<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<f64> {
        let sample = SampledView::new(self.data, self.depot, self.sampling_probability, rng)?;

        let mut tour = Tour::new(&sample)?;
        // The depot is local city 0 of the sample.
        tour.nearest_neighbor_both_ends(0)?;
        let exchanges = tour.two_opt_best()?;

        trace!(
            cities = sample.size(),
            exchanges,
            length = tour.length(),
            "sampled tour"
        );
        Ok(tour.length() as f64)
    }
}
