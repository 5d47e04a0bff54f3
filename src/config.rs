//! Construction parameters for a [`KeyValueTable`].
//!
//! [`KeyValueTable`]: crate::collections::chained_table::KeyValueTable

use std::env;

use crate::error::{Result, TableError};

/// Bucket count used when nothing else is configured.
pub const DEFAULT_BUCKETS: usize = 8;

/// Environment variable overriding the bucket count.
pub const BUCKETS_ENV: &str = "KVTABLE_BUCKETS";

/// Parameters fixed at table construction.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct TableConfig {
    /// Number of buckets. Never changes after the table is built.
    pub buckets: usize,
}

impl TableConfig {
    /// Creates a configuration with the given bucket count.
    ///
    /// # Errors
    ///
    /// Returns [`TableError::ZeroBuckets`] if `buckets` is zero.
    ///
    /// # Examples
    ///
    /// ```
    /// use kvtable::config::TableConfig;
    ///
    /// assert_eq!(TableConfig::new(16).unwrap().buckets, 16);
    /// assert!(TableConfig::new(0).is_err());
    /// ```
    pub fn new(buckets: usize) -> Result<Self> {
        if buckets == 0 {
            return Err(TableError::ZeroBuckets);
        }

        Ok(Self { buckets })
    }

    /// Builds a configuration from the defaults, overridden by
    /// `KVTABLE_BUCKETS` when it is set.
    ///
    /// # Errors
    ///
    /// Returns [`TableError::InvalidConfig`] if the variable is not a number,
    /// and [`TableError::ZeroBuckets`] if it is zero.
    pub fn from_env() -> Result<Self> {
        match env::var(BUCKETS_ENV) {
            Ok(raw) => Self::parse_buckets(&raw),
            Err(env::VarError::NotPresent) => Ok(Self::default()),
            Err(env::VarError::NotUnicode(_)) => Err(TableError::InvalidConfig(format!(
                "{BUCKETS_ENV} is not valid unicode"
            ))),
        }
    }

    /// Parses a bucket count as it would appear in the environment.
    fn parse_buckets(raw: &str) -> Result<Self> {
        let buckets = raw
            .trim()
            .parse::<usize>()
            .map_err(|e| TableError::InvalidConfig(format!("{BUCKETS_ENV}={raw:?}: {e}")))?;

        Self::new(buckets)
    }
}

impl Default for TableConfig {
    fn default() -> Self {
        Self {
            buckets: DEFAULT_BUCKETS,
        }
    }
}
