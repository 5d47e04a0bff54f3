//! Fixed-bucket key/value table with separate chaining.
//!
//! A [`KeyValueTable`] owns a fixed number of buckets and asks a
//! caller-supplied [`BucketHasher`] which bucket a key belongs to. Entries in
//! a bucket are kept in insertion order; inserting an existing key replaces
//! its value in place. There is no resizing and no removal.
//!
//! ```
//! use kvtable::prelude::*;
//!
//! let mut table = KeyValueTable::new(8);
//! table.insert("foo", 0);
//! table.insert("bar", 1);
//! table.insert("baz", 2);
//!
//! assert_eq!(table.get_or_default(&"foo"), (0, true));
//! assert_eq!(table.get_or_default(&"nope!"), (0, false));
//! ```
//!
//! [`KeyValueTable`]: collections::chained_table::KeyValueTable
//! [`BucketHasher`]: collections::hasher::BucketHasher

#![deny(missing_docs)]
#![warn(missing_debug_implementations)]
#![warn(rust_2018_idioms)]

pub mod algorithms;
pub mod collections;
pub mod config;
pub mod error;
pub mod logger;

/// Key/Value Table Prelude
pub mod prelude {
    #[doc(no_inline)]
    pub use super::collections::prelude::*;

    #[doc(no_inline)]
    pub use super::algorithms::linear_search::*;

    #[doc(no_inline)]
    pub use super::config::TableConfig;
    #[doc(no_inline)]
    pub use super::error::TableError;
}
