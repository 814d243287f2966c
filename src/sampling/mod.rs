//! Random city subsets around a depot.
//!
//! A [`SampledView`] keeps each non-depot city of a base oracle
//! independently with probability `p` and re-indexes the kept cities as
//! `[0, |S|)`, with the depot always at local index 0. Distance and
//! coordinate queries translate local indices and delegate to the base.

use rand::Rng;

use crate::error::{Result, TspError};
use crate::oracle::{check_index, DistanceOracle};

/// A dense re-indexing of a random subset of a base oracle's cities.
#[derive(Debug, Clone)]
pub struct SampledView<'a, O: DistanceOracle + ?Sized> {
    base: &'a O,
    // local index -> base index; entry 0 is the depot.
    base_index: Vec<usize>,
}

impl<'a, O: DistanceOracle + ?Sized> SampledView<'a, O> {
    /// Draws a sample from `base`.
    ///
    /// One uniform draw is consumed per non-depot city, in increasing base
    /// index order, so a seeded `rng` replays the same sample. Fails with
    /// `OutOfRange` for a bad depot and `InvalidArgument` when
    /// `probability` is not in `[0, 1]`.
    pub fn new<R: Rng + ?Sized>(
        base: &'a O,
        depot: usize,
        probability: f64,
        rng: &mut R,
    ) -> Result<Self> {
        let n = base.size();
        check_index("depot", depot, n)?;
        validate_probability(probability)?;

        let mut base_index = Vec::with_capacity(n);
        base_index.push(depot);
        for city in (0..n).filter(|&city| city != depot) {
            if rng.random::<f64>() < probability {
                base_index.push(city);
            }
        }

        Ok(SampledView { base, base_index })
    }

    /// Base index of the depot (local index 0).
    pub fn depot(&self) -> usize {
        self.base_index[0]
    }

    /// Base index of local city `local`.
    pub fn base_index(&self, local: usize) -> Result<usize> {
        check_index("city", local, self.base_index.len())?;
        Ok(self.base_index[local])
    }

    /// All sampled cities as base indices, in local index order.
    pub fn base_indices(&self) -> &[usize] {
        &self.base_index
    }
}

impl<O: DistanceOracle + ?Sized> DistanceOracle for SampledView<'_, O> {
    fn size(&self) -> usize {
        self.base_index.len()
    }

    fn distance(&self, i: usize, j: usize) -> Result<u64> {
        self.base.distance(self.base_index(i)?, self.base_index(j)?)
    }

    fn x(&self, i: usize) -> Result<i32> {
        self.base.x(self.base_index(i)?)
    }

    fn y(&self, i: usize) -> Result<i32> {
        self.base.y(self.base_index(i)?)
    }
}

pub(crate) fn validate_probability(probability: f64) -> Result<()> {
    if (0.0..=1.0).contains(&probability) {
        Ok(())
    } else {
        Err(TspError::InvalidArgument(format!(
            "sampling probability must be in [0, 1], got {probability}"
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::oracle::{LazyOracle, Point};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn cities(n: usize) -> LazyOracle {
        LazyOracle::new((0..n).map(|i| Point::new(i as i32 * 3, (i * i % 17) as i32)).collect())
    }

    #[test]
    fn test_full_probability_keeps_all() {
        let base = cities(10);
        let mut rng = StdRng::seed_from_u64(1);
        let view = SampledView::new(&base, 4, 1.0, &mut rng).unwrap();
        assert_eq!(view.size(), 10);
        assert_eq!(view.base_indices(), &[4, 0, 1, 2, 3, 5, 6, 7, 8, 9]);
        assert_eq!(view.distance(0, 1).unwrap(), base.distance(4, 0).unwrap());
        assert_eq!(view.coordinates(0).unwrap(), base.coordinates(4).unwrap());
    }

    #[test]
    fn test_zero_probability_keeps_depot_only() {
        let base = cities(10);
        let mut rng = StdRng::seed_from_u64(1);
        let view = SampledView::new(&base, 7, 0.0, &mut rng).unwrap();
        assert_eq!(view.size(), 1);
        assert_eq!(view.depot(), 7);
        assert_eq!(view.distance(0, 0).unwrap(), 0);
    }

    #[test]
    fn test_depot_first_and_subset() {
        let base = cities(200);
        let mut rng = StdRng::seed_from_u64(2024);
        let view = SampledView::new(&base, 13, 0.4, &mut rng).unwrap();

        assert_eq!(view.base_index(0).unwrap(), 13);
        assert!(view.size() <= base.size());
        // Non-depot cities are kept in increasing base order.
        let rest = &view.base_indices()[1..];
        assert!(rest.windows(2).all(|w| w[0] < w[1]));
        assert!(!rest.contains(&13));
        // Roughly 40% of 199 cities.
        assert!(view.size() > 40 && view.size() < 120, "size {}", view.size());
    }

    #[test]
    fn test_same_seed_same_sample() {
        let base = cities(100);
        let a = SampledView::new(&base, 0, 0.5, &mut StdRng::seed_from_u64(9)).unwrap();
        let b = SampledView::new(&base, 0, 0.5, &mut StdRng::seed_from_u64(9)).unwrap();
        assert_eq!(a.base_indices(), b.base_indices());
    }

    #[test]
    fn test_invalid_depot() {
        let base = cities(5);
        let mut rng = StdRng::seed_from_u64(1);
        let err = SampledView::new(&base, 5, 0.5, &mut rng).unwrap_err();
        assert!(matches!(err, TspError::OutOfRange { what: "depot", .. }));
    }

    #[test]
    fn test_invalid_probability() {
        let base = cities(5);
        let mut rng = StdRng::seed_from_u64(1);
        for p in [-0.1, 1.5, f64::NAN] {
            let err = SampledView::new(&base, 0, p, &mut rng).unwrap_err();
            assert!(matches!(err, TspError::InvalidArgument(_)), "p = {p}");
        }
    }

    #[test]
    fn test_local_index_out_of_range() {
        let base = cities(5);
        let mut rng = StdRng::seed_from_u64(1);
        let view = SampledView::new(&base, 0, 1.0, &mut rng).unwrap();
        assert!(matches!(view.distance(0, 5), Err(TspError::OutOfRange { .. })));
        assert!(matches!(view.x(5), Err(TspError::OutOfRange { .. })));
    }
}
