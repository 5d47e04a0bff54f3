//! Bucket hash functions.
//!
//! A [`KeyValueTable`] never hashes keys itself. It asks a [`BucketHasher`]
//! for the bucket a key lives in, given the fixed bucket count. Any
//! `Fn(&K, usize) -> usize` qualifies, and [`ModuloHasher`] adapts a regular
//! [`BuildHasher`] by reducing its output modulo the bucket count.
//!
//! [`KeyValueTable`]: crate::collections::chained_table::KeyValueTable

use core::hash::{BuildHasher, Hash, Hasher};

/// Maps a key to a bucket index.
///
/// Implementations must be pure and must return a value in `0..buckets` for
/// every key and for the bucket count the table was built with. The table
/// rejects anything else.
pub trait BucketHasher<K: ?Sized> {
    /// Returns the bucket index for `key` in a table with `buckets` buckets.
    fn bucket(&self, key: &K, buckets: usize) -> usize;
}

impl<K, F> BucketHasher<K> for F
where
    K: ?Sized,
    F: Fn(&K, usize) -> usize,
{
    #[inline]
    fn bucket(&self, key: &K, buckets: usize) -> usize {
        self(key, buckets)
    }
}

/// Fowler–Noll–Vo (FNV-1a) non-cryptographic hash function
#[derive(Debug, Copy, Clone)]
pub struct FnvHasher {
    hash: u64,
}

impl FnvHasher {
    const FNV_PRIME: u64 = 0x100000001B3;
    const FNV_OFFSET_BASIS: u64 = 0xCBF29CE484222325;

    /// Creates a new [`FnvHasher`], initialized with `FNV_OFFSET_BASIS`.
    pub fn new() -> Self {
        Self {
            hash: FnvHasher::FNV_OFFSET_BASIS,
        }
    }
}

impl Default for FnvHasher {
    fn default() -> Self {
        Self::new()
    }
}

impl Hasher for FnvHasher {
    fn finish(&self) -> u64 {
        self.hash
    }

    fn write(&mut self, bytes: &[u8]) {
        for byte in bytes {
            self.hash ^= *byte as u64;
            self.hash = self.hash.wrapping_mul(Self::FNV_PRIME);
        }
    }
}

/// Builder for [`FnvHasher`]
#[derive(Debug, Default, Copy, Clone)]
pub struct FnvBuildHasher {}

impl BuildHasher for FnvBuildHasher {
    type Hasher = FnvHasher;

    fn build_hasher(&self) -> Self::Hasher {
        Self::Hasher::new()
    }
}

/// Reduces the output of a [`BuildHasher`] modulo the bucket count.
///
/// Always in range for a non-zero bucket count.
///
/// # Examples
///
/// ```
/// use kvtable::prelude::*;
///
/// let hasher: ModuloHasher = ModuloHasher::default();
/// let bucket = hasher.bucket("foo", 8);
/// assert!(bucket < 8);
/// assert_eq!(bucket, hasher.bucket("foo", 8));
/// ```
#[derive(Debug, Default, Copy, Clone)]
pub struct ModuloHasher<S = FnvBuildHasher> {
    build_hasher: S,
}

impl<S> ModuloHasher<S> {
    /// Creates a `ModuloHasher` on top of `build_hasher`.
    ///
    /// # Examples
    ///
    /// ```
    /// use std::hash::RandomState;
    ///
    /// use kvtable::prelude::*;
    ///
    /// let mut table = KeyValueTable::with_hasher(4, ModuloHasher::new(RandomState::new()));
    /// table.insert("a", 1);
    /// assert_eq!(table.get(&"a"), Some(&1));
    /// ```
    #[inline]
    pub fn new(build_hasher: S) -> Self {
        Self { build_hasher }
    }

    /// Returns a reference to the underlying [`BuildHasher`].
    #[inline]
    pub fn build_hasher(&self) -> &S {
        &self.build_hasher
    }
}

impl<K, S> BucketHasher<K> for ModuloHasher<S>
where
    K: Hash + ?Sized,
    S: BuildHasher,
{
    #[inline]
    fn bucket(&self, key: &K, buckets: usize) -> usize {
        (self.build_hasher.hash_one(key) % buckets as u64) as usize
    }
}

/// Sums the bytes of `key` modulo `buckets`.
///
/// A deliberately weak hash: anagrams collide. Handy for demonstrating
/// chaining.
///
/// # Examples
///
/// ```
/// use kvtable::prelude::*;
///
/// assert_eq!(byte_sum("ab", 8), byte_sum("ba", 8));
///
/// let mut table = KeyValueTable::with_hasher(8, byte_sum::<&str>);
/// table.insert("ab", 1);
/// table.insert("ba", 2);
/// assert_eq!(table.bucket_of(&"ab"), table.bucket_of(&"ba"));
/// assert_eq!(table.get(&"ab"), Some(&1));
/// assert_eq!(table.get(&"ba"), Some(&2));
/// ```
pub fn byte_sum<K: AsRef<[u8]> + ?Sized>(key: &K, buckets: usize) -> usize {
    key.as_ref()
        .iter()
        .fold(0usize, |sum, byte| sum.wrapping_add(*byte as usize))
        % buckets
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fnv_empty_input() {
        let hasher = FnvHasher::new();
        assert_eq!(hasher.finish(), 0xCBF29CE484222325);
    }

    #[test]
    fn test_fnv_known_vectors() {
        // Reference values for 64-bit FNV-1a.
        let mut h = FnvHasher::new();
        h.write(b"a");
        assert_eq!(h.finish(), 0xAF63DC4C8601EC8C);

        let mut h = FnvHasher::new();
        h.write(b"foobar");
        assert_eq!(h.finish(), 0x85944171F73967E8);
    }

    #[test]
    fn test_modulo_in_range() {
        let hasher: ModuloHasher = ModuloHasher::default();
        for buckets in 1..64 {
            for key in 0..500u32 {
                assert!(hasher.bucket(&key, buckets) < buckets);
            }
        }
    }

    #[test]
    fn test_modulo_single_bucket() {
        let hasher: ModuloHasher = ModuloHasher::default();
        assert_eq!(hasher.bucket("anything", 1), 0);
        assert_eq!(hasher.bucket(&12345u64, 1), 0);
    }

    #[test]
    fn test_modulo_deterministic() {
        let a = ModuloHasher::<FnvBuildHasher>::default();
        let b = ModuloHasher::new(FnvBuildHasher {});
        assert_eq!(a.bucket("baz", 8), b.bucket("baz", 8));
    }

    #[test]
    fn test_closure_is_bucket_hasher() {
        let f = |key: &u32, buckets: usize| *key as usize % buckets;
        assert_eq!(f.bucket(&13, 8), 5);
    }

    #[test]
    fn test_byte_sum() {
        assert_eq!(byte_sum("", 8), 0);
        // 'a' = 97, 'b' = 98
        assert_eq!(byte_sum("ab", 8), 195 % 8);
        assert_eq!(byte_sum(&String::from("ab"), 8), 195 % 8);
        assert_eq!(byte_sum(&[1u8, 2, 3][..], 4), 2);
    }
}
