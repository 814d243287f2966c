//! Error types for tour construction, sampling, and estimation.

use thiserror::Error;

/// Result type alias for crate operations.
pub type Result<T> = std::result::Result<T, TspError>;

/// Unified error type for the crate.
#[derive(Debug, Error)]
pub enum TspError {
    /// An index lies outside its valid range.
    ///
    /// `what` names the kind of index (city, tour position, depot).
    #[error("{what} index {index} out of range (valid range is {range})")]
    OutOfRange {
        /// Kind of index that was rejected.
        what: &'static str,
        /// The offending index.
        index: usize,
        /// Human-readable valid range, e.g. `0..5` or `1..=5`.
        range: String,
    },

    /// A probability, confidence level, or configuration value is invalid.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// Not enough observations to compute the requested statistic.
    #[error("insufficient data: {required} observations required, {available} available")]
    InsufficientData {
        /// Minimum number of observations needed.
        required: usize,
        /// Observations collected so far.
        available: usize,
    },

    /// A tour cannot be built over an empty city set.
    #[error("cannot build a tour over zero cities")]
    EmptyTour,

    /// The city dataset is malformed.
    #[error("parse error: {0}")]
    Parse(#[from] ParseError),

    /// The city dataset could not be read.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl TspError {
    /// Out-of-range error for a half-open range `0..bound`.
    pub(crate) fn out_of_range(what: &'static str, index: usize, bound: usize) -> Self {
        TspError::OutOfRange {
            what,
            index,
            range: format!("0..{bound}"),
        }
    }
}

/// Malformed dataset input. Each case is reported distinctly.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseError {
    /// The input contains no tokens at all.
    #[error("empty data")]
    Empty,

    /// The first token is not a valid city count.
    #[error("invalid number of cities '{0}'")]
    InvalidCityCount(String),

    /// Fewer than three cities were declared.
    #[error("number of cities should be at least 3, got {0}")]
    TooFewCities(usize),

    /// A record's city number does not match its position.
    #[error("invalid city number: {expected} expected, {found} read")]
    CityNumberMismatch {
        /// Zero-based position of the record.
        expected: usize,
        /// City number found in the record.
        found: usize,
    },

    /// A token is not a non-negative integer.
    #[error("record {record}: '{token}' is not a non-negative integer")]
    InvalidValue {
        /// Zero-based record index.
        record: usize,
        /// Offending token.
        token: String,
    },

    /// The input ended in the middle of a record.
    #[error("record {record} is incomplete: expected \"<city number> <x> <y>\"")]
    IncompleteRecord {
        /// Zero-based record index.
        record: usize,
    },
}
