//! Tour state, simple constructions, and accessors.

use std::fmt;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::error::{Result, TspError};
use crate::oracle::DistanceOracle;

/// A closed tour over every city of an oracle.
///
/// The tour owns its permutation and borrows the oracle. `length()` is
/// kept equal to the recomputed cycle length after every operation; an
/// operation that fails leaves the tour untouched.
#[derive(Debug, Clone)]
pub struct Tour<'a, O: DistanceOracle + ?Sized> {
    pub(super) oracle: &'a O,
    pub(super) cities: Vec<usize>,
    pub(super) length: u64,
}

impl<'a, O: DistanceOracle + ?Sized> Tour<'a, O> {
    /// Creates the canonical tour `0, 1, ..., n-1` over `oracle`.
    pub fn new(oracle: &'a O) -> Result<Self> {
        if oracle.size() == 0 {
            return Err(TspError::EmptyTour);
        }

        let mut tour = Tour {
            oracle,
            cities: Vec::new(),
            length: 0,
        };
        tour.canonical()?;
        Ok(tour)
    }

    /// Resets to the tour visiting cities in increasing index order.
    pub fn canonical(&mut self) -> Result<()> {
        let cities: Vec<usize> = (0..self.oracle.size()).collect();
        self.commit(cities)
    }

    /// Shuffles the current permutation with a generator seeded by `seed`.
    ///
    /// Equal seeds applied to equal permutations give equal results.
    pub fn randomize(&mut self, seed: u64) -> Result<()> {
        let mut rng = StdRng::seed_from_u64(seed);
        self.shuffle_with(&mut rng)
    }

    /// Fisher–Yates shuffle of the current permutation using `rng`.
    ///
    /// Positions are visited from `n-1` down to `1`; each is swapped with a
    /// uniformly drawn position in `[0, i]`.
    pub fn shuffle_with<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Result<()> {
        let mut cities = self.cities.clone();
        for i in (1..cities.len()).rev() {
            let j = rng.random_range(0..=i);
            cities.swap(i, j);
        }
        self.commit(cities)
    }

    /// Recomputes the cached length from the permutation.
    pub fn recompute_length(&mut self) -> Result<()> {
        self.length = cycle_length(self.oracle, &self.cities)?;
        Ok(())
    }

    /// Total length of the closed tour.
    pub fn length(&self) -> u64 {
        self.length
    }

    /// Number of cities in the tour.
    pub fn number_of_cities(&self) -> usize {
        self.cities.len()
    }

    /// City at a 1-based `position` in `[1, n]`.
    pub fn city_at(&self, position: usize) -> Result<usize> {
        let n = self.cities.len();
        if position == 0 || position > n {
            return Err(TspError::OutOfRange {
                what: "tour position",
                index: position,
                range: format!("1..={n}"),
            });
        }
        Ok(self.cities[position - 1])
    }

    /// The permutation, in visiting order.
    pub fn cities(&self) -> &[usize] {
        &self.cities
    }

    /// The oracle this tour measures distances with.
    pub fn oracle(&self) -> &'a O {
        self.oracle
    }

    // Installs a new permutation only once its length is known.
    pub(super) fn commit(&mut self, cities: Vec<usize>) -> Result<()> {
        let length = cycle_length(self.oracle, &cities)?;
        self.cities = cities;
        self.length = length;
        Ok(())
    }
}

impl<O: DistanceOracle + ?Sized> fmt::Display for Tour<'_, O> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self.cities)
    }
}

/// Sum of distances along `cities` including the closing edge.
pub(super) fn cycle_length<O: DistanceOracle + ?Sized>(oracle: &O, cities: &[usize]) -> Result<u64> {
    let (Some(&first), Some(&last)) = (cities.first(), cities.last()) else {
        return Ok(0);
    };

    let mut length = oracle.distance(last, first)?;
    for pair in cities.windows(2) {
        length += oracle.distance(pair[0], pair[1])?;
    }
    Ok(length)
}
