//! Euclidean oracles over a fixed set of points.

use std::collections::TryReserveError;

use super::matrix::SquareMatrix;
use super::types::{check_index, DistanceOracle, Point};
use crate::error::Result;

/// Oracle backed by a precomputed `n × n` distance table.
///
/// O(1) lookups at the cost of O(n²) memory.
#[derive(Debug, Clone)]
pub struct DenseOracle {
    points: Vec<Point>,
    distances: SquareMatrix<u64>,
}

impl DenseOracle {
    /// Builds the full distance table, or reports that it could not be
    /// allocated.
    pub fn try_new(points: &[Point]) -> std::result::Result<DenseOracle, TryReserveError> {
        let n = points.len();
        let mut distances = SquareMatrix::try_new(n, 0)?;

        for i in 0..n {
            for j in 0..i {
                let d = points[i].distance_to(&points[j]);
                distances[(i, j)] = d;
                distances[(j, i)] = d;
            }
        }

        Ok(DenseOracle {
            points: points.to_vec(),
            distances,
        })
    }
}

impl DistanceOracle for DenseOracle {
    fn size(&self) -> usize {
        self.points.len()
    }

    fn distance(&self, i: usize, j: usize) -> Result<u64> {
        check_index("city", i, self.points.len())?;
        check_index("city", j, self.points.len())?;
        Ok(self.distances[(i, j)])
    }

    fn x(&self, i: usize) -> Result<i32> {
        check_index("city", i, self.points.len())?;
        Ok(self.points[i].x)
    }

    fn y(&self, i: usize) -> Result<i32> {
        check_index("city", i, self.points.len())?;
        Ok(self.points[i].y)
    }
}

/// Oracle that recomputes every distance from coordinates.
///
/// O(1) extra memory; used when a full table does not fit.
#[derive(Debug, Clone)]
pub struct LazyOracle {
    points: Vec<Point>,
}

impl LazyOracle {
    pub fn new(points: Vec<Point>) -> LazyOracle {
        LazyOracle { points }
    }
}

impl DistanceOracle for LazyOracle {
    fn size(&self) -> usize {
        self.points.len()
    }

    fn distance(&self, i: usize, j: usize) -> Result<u64> {
        check_index("city", i, self.points.len())?;
        check_index("city", j, self.points.len())?;
        Ok(self.points[i].distance_to(&self.points[j]))
    }

    fn x(&self, i: usize) -> Result<i32> {
        check_index("city", i, self.points.len())?;
        Ok(self.points[i].x)
    }

    fn y(&self, i: usize) -> Result<i32> {
        check_index("city", i, self.points.len())?;
        Ok(self.points[i].y)
    }
}
