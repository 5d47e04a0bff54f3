//! Collection Types.

pub mod chained_table;
pub mod hasher;

/// Collections Prelude
pub mod prelude {
    #[doc(no_inline)]
    pub use super::chained_table::KeyValueTable;
    #[doc(no_inline)]
    pub use super::hasher::{BucketHasher, FnvBuildHasher, FnvHasher, ModuloHasher, byte_sum};
}
