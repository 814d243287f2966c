//! Nearest neighbor construction growing from both ends of a path.

use super::types::Tour;
use crate::error::Result;
use crate::oracle::{check_index, DistanceOracle};

/// Which end of the working path to extend.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GrowEnd {
    /// The `S` end, written forward from position 1.
    S,
    /// The `T` end, written backward from position `n - 1`.
    T,
}

/// Tie-break between the two path ends.
///
/// The strictly shorter extension wins. On equal distances the `T` end is
/// grown unless `nearest_to_s < nearest_to_t`.
pub fn choose_end(
    dist_from_s: u64,
    dist_from_t: u64,
    nearest_to_s: usize,
    nearest_to_t: usize,
) -> GrowEnd {
    if dist_from_s < dist_from_t {
        GrowEnd::S
    } else if dist_from_t < dist_from_s {
        GrowEnd::T
    } else if nearest_to_s < nearest_to_t {
        GrowEnd::S
    } else {
        GrowEnd::T
    }
}

impl<O: DistanceOracle + ?Sized> Tour<'_, O> {
    /// Replaces the tour with the nearest-neighbor-from-both-ends tour
    /// starting at `start`.
    ///
    /// Each step scans all cities from both path ends, so the whole
    /// construction is O(n²). Fails with `OutOfRange` before touching the
    /// tour if `start` is not a city.
    pub fn nearest_neighbor_both_ends(&mut self, start: usize) -> Result<()> {
        let n = self.oracle.size();
        check_index("start city", start, n)?;

        let mut cities = vec![start; n];
        let mut visited = vec![false; n];
        visited[start] = true;

        let mut length = 0u64;
        let (mut city_s, mut city_t) = (start, start);
        // Last written position at each end.
        let (mut s_pos, mut t_pos) = (0, n);

        for _ in 1..n {
            let (Some((nearest_to_s, dist_from_s)), Some((nearest_to_t, dist_from_t))) = (
                nearest_unvisited(self.oracle, city_s, &visited)?,
                nearest_unvisited(self.oracle, city_t, &visited)?,
            ) else {
                break;
            };

            match choose_end(dist_from_s, dist_from_t, nearest_to_s, nearest_to_t) {
                GrowEnd::S => {
                    s_pos += 1;
                    cities[s_pos] = nearest_to_s;
                    visited[nearest_to_s] = true;
                    length += dist_from_s;
                    city_s = nearest_to_s;
                }
                GrowEnd::T => {
                    t_pos -= 1;
                    cities[t_pos] = nearest_to_t;
                    visited[nearest_to_t] = true;
                    length += dist_from_t;
                    city_t = nearest_to_t;
                }
            }
        }
        length += self.oracle.distance(city_s, city_t)?;

        self.cities = cities;
        self.length = length;
        Ok(())
    }
}

/// Nearest unvisited city to `city`; the lowest index wins among equals.
fn nearest_unvisited<O: DistanceOracle + ?Sized>(
    oracle: &O,
    city: usize,
    visited: &[bool],
) -> Result<Option<(usize, u64)>> {
    let mut nearest: Option<(usize, u64)> = None;

    for (candidate, &seen) in visited.iter().enumerate() {
        if seen {
            continue;
        }
        let dist = oracle.distance(city, candidate)?;
        if nearest.is_none_or(|(_, best)| dist < best) {
            nearest = Some((candidate, dist));
        }
    }

    Ok(nearest)
}
