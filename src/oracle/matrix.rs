//! Fixed-size square matrix used for distance tables.

use std::collections::TryReserveError;
use std::ops::{Index, IndexMut};

// Row-major layout:
// [row, row, ..]
#[derive(Debug, Clone)]
pub struct SquareMatrix<T>
where
    T: Copy,
{
    data: Vec<T>,
    side_length: usize,
}

impl<T> SquareMatrix<T>
where
    T: Copy,
{
    /// Allocates a `side_length × side_length` matrix, reporting allocation
    /// failure instead of aborting.
    pub fn try_new(side_length: usize, init_value: T) -> Result<SquareMatrix<T>, TryReserveError> {
        // An overflowing size is requested as usize::MAX so that the
        // reservation itself reports the capacity overflow.
        let len = side_length.checked_mul(side_length).unwrap_or(usize::MAX);

        let mut data = Vec::new();
        data.try_reserve_exact(len)?;
        data.resize(len, init_value);

        Ok(SquareMatrix { data, side_length })
    }

    pub fn side_length(&self) -> usize {
        self.side_length
    }
}

impl<T> Index<(usize, usize)> for SquareMatrix<T>
where
    T: Copy,
{
    type Output = T;

    fn index(&self, (row, col): (usize, usize)) -> &Self::Output {
        &self.data[self.side_length * row + col]
    }
}

impl<T> IndexMut<(usize, usize)> for SquareMatrix<T>
where
    T: Copy,
{
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut Self::Output {
        &mut self.data[self.side_length * row + col]
    }
}
