//! 2-Opt local search, best-improvement variant.

use tracing::trace;

use super::types::Tour;
use crate::error::Result;
use crate::oracle::DistanceOracle;

/// An improving 2-opt exchange.
///
/// Removes edges `(t[i], t[i+1])` and `(t[j], t[j+1])` and reconnects the
/// tour with `(t[i], t[j])` and `(t[i+1], t[j+1])` by reversing positions
/// `i+1 ..= j`. Indices wrap modulo `n`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Exchange {
    pub i: usize,
    pub j: usize,
    /// Length saved by the exchange. Always positive.
    pub improvement: u64,
}

impl<O: DistanceOracle + ?Sized> Tour<'_, O> {
    /// Applies best-improvement 2-opt until the tour is 2-opt optimal.
    ///
    /// Every applied exchange strictly shortens the tour, so the loop ends.
    /// Returns the number of exchanges applied.
    pub fn two_opt_best(&mut self) -> Result<usize> {
        let mut applied = 0;

        while let Some(exchange) = self.find_best_exchange()? {
            self.apply_exchange(exchange);
            applied += 1;
        }

        trace!(exchanges = applied, length = self.length, "2-opt converged");
        Ok(applied)
    }

    /// Scans every pair of non-adjacent edges and returns the exchange
    /// with the largest positive improvement, if any.
    ///
    /// Scan order is `i` ascending, then `j` ascending from `i + 2`; the
    /// first exchange found keeps a tie. The pair `(0, n-1)` shares city
    /// `t[0]` and is skipped.
    pub fn find_best_exchange(&self) -> Result<Option<Exchange>> {
        let n = self.cities.len();
        if n < 4 {
            return Ok(None);
        }

        let t = &self.cities;
        let d = |a: usize, b: usize| self.oracle.distance(a, b);
        let mut best: Option<Exchange> = None;

        for i in 0..n - 2 {
            let j_end = if i == 0 { n - 1 } else { n };

            for j in (i + 2)..j_end {
                let (a, b) = (t[i], t[i + 1]);
                let (c, e) = (t[j], t[(j + 1) % n]);

                let removed = d(a, b)? + d(c, e)?;
                let added = d(a, c)? + d(b, e)?;
                if removed <= added {
                    continue;
                }

                let improvement = removed - added;
                if best.is_none_or(|ex| improvement > ex.improvement) {
                    best = Some(Exchange { i, j, improvement });
                }
            }
        }

        Ok(best)
    }

    fn apply_exchange(&mut self, exchange: Exchange) {
        self.cities[exchange.i + 1..=exchange.j].reverse();
        self.length -= exchange.improvement;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::oracle::{DenseOracle, LazyOracle, Point};
    use proptest::prelude::*;

    fn oracle_from(coords: &[(i32, i32)]) -> DenseOracle {
        let points: Vec<Point> = coords.iter().map(|&(x, y)| Point::new(x, y)).collect();
        DenseOracle::try_new(&points).unwrap()
    }

    fn recomputed<O: DistanceOracle>(oracle: &O, cities: &[usize]) -> u64 {
        let n = cities.len();
        (0..n)
            .map(|k| oracle.distance(cities[k], cities[(k + 1) % n]).unwrap())
            .sum()
    }

    // Gain of every exchange between two non-adjacent edges, independent of
    // the scan bounds used by the search.
    fn brute_force_best_gain<O: DistanceOracle>(oracle: &O, t: &[usize]) -> i64 {
        let n = t.len();
        let d = |a: usize, b: usize| i64::try_from(oracle.distance(a, b).unwrap()).unwrap();
        let mut best = i64::MIN;
        for i in 0..n {
            for j in 0..n {
                let adjacent = i == j || (i + 1) % n == j || (j + 1) % n == i;
                if adjacent {
                    continue;
                }
                let (a, b, c, e) = (t[i], t[(i + 1) % n], t[j], t[(j + 1) % n]);
                best = best.max(d(a, b) + d(c, e) - d(a, c) - d(b, e));
            }
        }
        best
    }

    #[test]
    fn test_square_already_optimal() {
        let oracle = oracle_from(&[(0, 0), (0, 10), (10, 10), (10, 0)]);
        let mut tour = Tour::new(&oracle).unwrap();
        assert_eq!(tour.length(), 40);
        assert_eq!(tour.find_best_exchange().unwrap(), None);
        assert_eq!(tour.two_opt_best().unwrap(), 0);
        assert_eq!(tour.length(), 40);
    }

    #[test]
    fn test_uncrosses_first_edge_pair() {
        let oracle = oracle_from(&[(0, 0), (10, 10), (0, 10), (10, 0)]);
        let mut tour = Tour::new(&oracle).unwrap();
        assert_eq!(tour.length(), 48);

        let exchange = tour.find_best_exchange().unwrap().unwrap();
        assert_eq!(
            exchange,
            Exchange {
                i: 0,
                j: 2,
                improvement: 8
            }
        );

        assert_eq!(tour.two_opt_best().unwrap(), 1);
        assert_eq!(tour.length(), 40);
        assert_eq!(tour.cities(), &[0, 2, 1, 3]);
    }

    #[test]
    fn test_evaluates_last_edge_pair() {
        // The only improving exchange removes edges (t1, t2) and (t3, t0).
        let oracle = oracle_from(&[(0, 0), (10, 0), (0, 10), (10, 10)]);
        let mut tour = Tour::new(&oracle).unwrap();
        assert_eq!(tour.length(), 48);

        let exchange = tour.find_best_exchange().unwrap().unwrap();
        assert_eq!((exchange.i, exchange.j), (1, 3));

        tour.two_opt_best().unwrap();
        assert_eq!(tour.length(), 40);
        assert_eq!(tour.cities(), &[0, 1, 3, 2]);
    }

    #[test]
    fn test_tie_keeps_first_in_scan_order() {
        // Two identical crossed squares; several exchanges save 8.
        let oracle = oracle_from(&[
            (0, 0),
            (10, 10),
            (0, 10),
            (10, 0),
            (30, 0),
            (40, 10),
            (30, 10),
            (40, 0),
        ]);
        let tour = Tour::new(&oracle).unwrap();
        let exchange = tour.find_best_exchange().unwrap().unwrap();
        assert_eq!(
            exchange,
            Exchange {
                i: 0,
                j: 2,
                improvement: 8
            }
        );
    }

    #[test]
    fn test_small_tours_have_no_exchange() {
        let oracle = oracle_from(&[(0, 0), (5, 5), (9, 1)]);
        let mut tour = Tour::new(&oracle).unwrap();
        assert_eq!(tour.two_opt_best().unwrap(), 0);
        assert_eq!(tour.length(), recomputed(&oracle, tour.cities()));
    }

    proptest! {
        #[test]
        fn prop_two_opt_best_reaches_local_optimum(
            coords in prop::collection::vec((0i32..500, 0i32..500), 4..25),
            seed in any::<u64>(),
        ) {
            let points: Vec<Point> = coords.iter().map(|&(x, y)| Point::new(x, y)).collect();
            let oracle = LazyOracle::new(points);
            let mut tour = Tour::new(&oracle).unwrap();
            tour.randomize(seed).unwrap();
            let before = tour.length();

            tour.two_opt_best().unwrap();

            prop_assert!(tour.length() <= before);
            prop_assert_eq!(tour.length(), recomputed(&oracle, tour.cities()));
            prop_assert!(brute_force_best_gain(&oracle, tour.cities()) <= 0);

            let fixed_point = tour.cities().to_vec();
            prop_assert_eq!(tour.two_opt_best().unwrap(), 0);
            prop_assert_eq!(tour.cities(), fixed_point.as_slice());
        }
    }
}
