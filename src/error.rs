//! Error type for the checked table API.
//!
//! A missing key is never an error: lookups report absence through [`Option`].

use thiserror::Error;

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, TableError>;

/// Conditions reported by the checked constructors and the `try_*` methods of
/// [`KeyValueTable`](crate::collections::chained_table::KeyValueTable).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TableError {
    /// A table was requested with no buckets.
    #[error("bucket count must be greater than zero")]
    ZeroBuckets,

    /// The bucket hasher returned an index outside `0..buckets`.
    #[error("hasher returned bucket {index}, but the table has {buckets} buckets")]
    BucketOutOfRange {
        /// Index returned by the hasher.
        index: usize,
        /// Number of buckets in the table.
        buckets: usize,
    },

    /// A configuration value could not be used.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        assert_eq!(
            TableError::ZeroBuckets.to_string(),
            "bucket count must be greater than zero"
        );
        assert_eq!(
            TableError::BucketOutOfRange { index: 9, buckets: 8 }.to_string(),
            "hasher returned bucket 9, but the table has 8 buckets"
        );
        assert_eq!(
            TableError::InvalidConfig("KVTABLE_BUCKETS=abc".into()).to_string(),
            "invalid configuration: KVTABLE_BUCKETS=abc"
        );
    }
}
