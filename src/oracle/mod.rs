//! Distance oracles.
//!
//! A [`DistanceOracle`] gives uniform read-only access to pairwise
//! distances and coordinates over a dense city index space `[0, n)`.
//! Consumers never learn whether distances come from a precomputed
//! table ([`DenseOracle`]) or are recomputed on every query
//! ([`LazyOracle`]); both round Euclidean distances the same way and
//! therefore agree bit-for-bit.

mod euclidean;
mod matrix;
mod types;

pub use euclidean::{DenseOracle, LazyOracle};
pub use matrix::SquareMatrix;
pub use types::{DistanceOracle, Point};

pub(crate) use types::check_index;
