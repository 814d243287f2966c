//! Core oracle trait and city coordinates.

use crate::error::{Result, TspError};

/// A city location on the integer plane.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub fn new(x: i32, y: i32) -> Point {
        Point { x, y }
    }

    /// Euclidean distance rounded to the nearest integer, halves rounded up.
    ///
    /// Exact for the whole `i32` plane; the widest span is about 6.07e9.
    pub fn distance_to(&self, other: &Point) -> u64 {
        let dx = f64::from(self.x) - f64::from(other.x);
        let dy = f64::from(self.y) - f64::from(other.y);

        dx.hypot(dy).round() as u64
    }
}

/// Read-only access to a symmetric distance table over cities `[0, size())`.
///
/// Every index-taking method fails with [`TspError::OutOfRange`] when an
/// index is not below [`size`](DistanceOracle::size). Implementations
/// guarantee `distance(i, j) == distance(j, i)` and `distance(i, i) == 0`.
pub trait DistanceOracle {
    /// Number of cities.
    fn size(&self) -> usize;

    /// Distance between cities `i` and `j`.
    fn distance(&self, i: usize, j: usize) -> Result<u64>;

    /// X coordinate of city `i`.
    fn x(&self, i: usize) -> Result<i32>;

    /// Y coordinate of city `i`.
    fn y(&self, i: usize) -> Result<i32>;

    /// Both coordinates of city `i`.
    fn coordinates(&self, i: usize) -> Result<(i32, i32)> {
        Ok((self.x(i)?, self.y(i)?))
    }
}

impl<O: DistanceOracle + ?Sized> DistanceOracle for &O {
    fn size(&self) -> usize {
        (**self).size()
    }

    fn distance(&self, i: usize, j: usize) -> Result<u64> {
        (**self).distance(i, j)
    }

    fn x(&self, i: usize) -> Result<i32> {
        (**self).x(i)
    }

    fn y(&self, i: usize) -> Result<i32> {
        (**self).y(i)
    }
}

/// Fails with `OutOfRange` unless `index < bound`.
pub(crate) fn check_index(what: &'static str, index: usize, bound: usize) -> Result<()> {
    if index < bound {
        Ok(())
    } else {
        Err(TspError::out_of_range(what, index, bound))
    }
}
