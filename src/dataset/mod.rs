//! City datasets.
//!
//! A [`TspDataSet`] is the full problem instance loaded from a
//! line-oriented text source:
//!
//! ```text
//! 4
//! 0 0 0
//! 1 0 10
//! 2 10 10
//! 3 10 0
//! ```
//!
//! The first token is the city count `n >= 3`, followed by `n` records
//! `<city number> <x> <y>` where the city number equals the record's
//! zero-based position. Any malformed input fails the whole load.
//!
//! The loaded set precomputes a dense distance table when one can be
//! allocated within [`LoadConfig::max_table_entries`], and otherwise
//! falls back to computing distances on demand.

mod config;
mod parser;

pub use config::LoadConfig;

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;
use std::str::FromStr;

use tracing::{info, warn};

use crate::error::{Result, TspError};
use crate::oracle::{DenseOracle, DistanceOracle, LazyOracle, Point};

#[derive(Debug, Clone)]
enum Storage {
    Dense(DenseOracle),
    Lazy(LazyOracle),
}

/// A complete TSP instance.
#[derive(Debug, Clone)]
pub struct TspDataSet {
    storage: Storage,
}

impl TspDataSet {
    /// Builds a dataset from points, choosing the storage per `config`.
    ///
    /// Never fails: when the distance table is over the configured limit
    /// or cannot be allocated, distances are computed lazily instead.
    pub fn from_points(points: Vec<Point>, config: &LoadConfig) -> TspDataSet {
        let n = points.len();
        let entries = n.checked_mul(n);

        let within_limit = match (config.max_table_entries, entries) {
            (_, None) => false,
            (None, Some(_)) => true,
            (Some(limit), Some(e)) => e <= limit,
        };

        let storage = if within_limit {
            match DenseOracle::try_new(&points) {
                Ok(dense) => Storage::Dense(dense),
                Err(err) => {
                    warn!(
                        event = "distance_table_fallback",
                        cities = n,
                        reason = %err,
                    );
                    Storage::Lazy(LazyOracle::new(points))
                }
            }
        } else {
            warn!(
                event = "distance_table_fallback",
                cities = n,
                reason = "table exceeds configured limit",
            );
            Storage::Lazy(LazyOracle::new(points))
        };

        let dataset = TspDataSet { storage };
        let kind = if dataset.is_dense() { "dense" } else { "lazy" };
        info!(event = "dataset_loaded", cities = n, storage = kind);
        dataset
    }

    /// Parses a dataset from any reader.
    pub fn from_reader<R: Read>(mut reader: R, config: &LoadConfig) -> Result<TspDataSet> {
        let mut text = String::new();
        reader.read_to_string(&mut text)?;
        let points = parser::parse_cities(&text)?;

        Ok(Self::from_points(points, config))
    }

    /// Loads a dataset from a file.
    pub fn from_path(path: impl AsRef<Path>, config: &LoadConfig) -> Result<TspDataSet> {
        let file = File::open(path)?;
        Self::from_reader(BufReader::new(file), config)
    }

    /// Whether distances come from a precomputed table.
    pub fn is_dense(&self) -> bool {
        matches!(self.storage, Storage::Dense(_))
    }

    fn oracle(&self) -> &dyn DistanceOracle {
        match &self.storage {
            Storage::Dense(dense) => dense,
            Storage::Lazy(lazy) => lazy,
        }
    }
}

impl FromStr for TspDataSet {
    type Err = TspError;

    fn from_str(s: &str) -> Result<Self> {
        let points = parser::parse_cities(s)?;
        Ok(Self::from_points(points, &LoadConfig::default()))
    }
}

impl DistanceOracle for TspDataSet {
    fn size(&self) -> usize {
        self.oracle().size()
    }

    fn distance(&self, i: usize, j: usize) -> Result<u64> {
        self.oracle().distance(i, j)
    }

    fn x(&self, i: usize) -> Result<i32> {
        self.oracle().x(i)
    }

    fn y(&self, i: usize) -> Result<i32> {
        self.oracle().y(i)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ParseError;

    const SQUARE: &str = "4\n0 0 0\n1 0 10\n2 10 10\n3 10 0\n";

    #[test]
    fn test_from_str_square() {
        let data: TspDataSet = SQUARE.parse().unwrap();
        assert_eq!(data.size(), 4);
        assert!(data.is_dense());
        assert_eq!(data.distance(0, 2).unwrap(), 14);
        assert_eq!(data.coordinates(2).unwrap(), (10, 10));
    }

    #[test]
    fn test_table_limit_forces_lazy() {
        let config = LoadConfig::default().with_max_table_entries(10);
        let data = TspDataSet::from_reader(SQUARE.as_bytes(), &config).unwrap();
        assert!(!data.is_dense());
        assert_eq!(data.distance(1, 3).unwrap(), 14);
    }

    #[test]
    fn test_unlimited_table() {
        let config = LoadConfig::default().without_table_limit();
        let data = TspDataSet::from_reader(SQUARE.as_bytes(), &config).unwrap();
        assert!(data.is_dense());
    }

    #[test]
    fn test_dense_and_lazy_datasets_agree() {
        let dense: TspDataSet = SQUARE.parse().unwrap();
        let lazy = TspDataSet::from_reader(
            SQUARE.as_bytes(),
            &LoadConfig::default().with_max_table_entries(0),
        )
        .unwrap();

        for i in 0..4 {
            for j in 0..4 {
                assert_eq!(dense.distance(i, j).unwrap(), lazy.distance(i, j).unwrap());
            }
        }
    }

    #[test]
    fn test_parse_failure_propagates() {
        let err = "2\n0 0 0\n1 1 1\n".parse::<TspDataSet>().unwrap_err();
        assert!(matches!(err, TspError::Parse(ParseError::TooFewCities(2))));
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let err = TspDataSet::from_path("does/not/exist.dat", &LoadConfig::default()).unwrap_err();
        assert!(matches!(err, TspError::Io(_)));
    }
}
