//! Dataset loading configuration.

/// Largest distance table built by default: 2^27 entries (1 GiB of `u64`).
pub const DEFAULT_MAX_TABLE_ENTRIES: usize = 1 << 27;

/// Controls how a loaded dataset stores its distances.
///
/// # Examples
///
/// ```
/// use tsp_montecarlo::dataset::LoadConfig;
///
/// let config = LoadConfig::default().with_max_table_entries(1_000_000);
/// assert_eq!(config.max_table_entries, Some(1_000_000));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LoadConfig {
    /// Maximum number of `n × n` table entries to precompute.
    ///
    /// Larger instances compute distances on demand. `None` always
    /// attempts the table; allocation failure still falls back.
    pub max_table_entries: Option<usize>,
}

impl Default for LoadConfig {
    fn default() -> Self {
        Self {
            max_table_entries: Some(DEFAULT_MAX_TABLE_ENTRIES),
        }
    }
}

impl LoadConfig {
    pub fn with_max_table_entries(mut self, entries: usize) -> Self {
        self.max_table_entries = Some(entries);
        self
    }

    pub fn without_table_limit(mut self) -> Self {
        self.max_table_entries = None;
        self
    }
}
