//! [Hash Table] with a fixed number of buckets and separate chaining.
//!
//! Each bucket is an ordered chain of key/value entries. A new key is appended
//! to the end of its chain; an existing key has its value replaced in place.
//! The bucket count is chosen at construction and never changes, so there is
//! no rehashing and no bound on chain length: an under-provisioned table or a
//! poor hash function degrades to a linear scan. There is no removal.
//!
//! Just use [`HashMap`].
//!
//! [Hash Table]: https://en.wikipedia.org/wiki/Hash_table#Separate_chaining
//! [`HashMap`]: std::collections::HashMap

use std::fmt;

use core::hash::Hash;
use core::iter::FusedIterator;
use core::mem;
use core::ops::Index;

use log::{debug, trace};

use crate::algorithms::linear_search::linear_search_by;
use crate::collections::hasher::{BucketHasher, ModuloHasher};
use crate::config::TableConfig;
use crate::error::{Result, TableError};

/// [Hash Table] with a fixed number of buckets and separate chaining.
///
/// The bucket for a key is whatever the hasher `H` says it is. See
/// [`BucketHasher`] for the contract.
///
/// [Hash Table]: https://en.wikipedia.org/wiki/Hash_table#Separate_chaining
#[derive(Clone)]
pub struct KeyValueTable<K, V, H = ModuloHasher> {
    /// One chain per bucket, in insertion order.
    buckets: Box<[Vec<(K, V)>]>,
    /// Number of entries across all buckets.
    entries: usize,
    /// Maps a key to its bucket.
    hasher: H,
}

/// An iterator over the entries of a `KeyValueTable`, in bucket order and
/// then insertion order.
#[derive(Debug)]
pub struct Iter<'a, K, V> {
    buckets: core::slice::Iter<'a, Vec<(K, V)>>,
    chain: core::slice::Iter<'a, (K, V)>,
    remaining: usize,
}

/// An owning iterator over the entries of a `KeyValueTable`.
#[derive(Debug)]
pub struct IntoIter<K, V> {
    buckets: std::vec::IntoIter<Vec<(K, V)>>,
    chain: std::vec::IntoIter<(K, V)>,
    remaining: usize,
}

impl<K: Eq + Hash, V> KeyValueTable<K, V, ModuloHasher> {
    /// Creates an empty `KeyValueTable` with `buckets` buckets, hashing keys
    /// with FNV-1a modulo the bucket count.
    ///
    /// # Panics
    ///
    /// Panics if `buckets` is zero.
    ///
    /// # Examples
    ///
    /// ```
    /// use kvtable::prelude::*;
    ///
    /// let table: KeyValueTable<&str, i32> = KeyValueTable::new(8);
    /// assert_eq!(table.bucket_count(), 8);
    /// ```
    #[inline]
    pub fn new(buckets: usize) -> Self {
        Self::with_hasher(buckets, ModuloHasher::default())
    }

    /// Like [`new`](Self::new), but reports a zero bucket count as an error.
    ///
    /// # Examples
    ///
    /// ```
    /// use kvtable::prelude::*;
    ///
    /// let table: Result<KeyValueTable<u8, u8>, _> = KeyValueTable::try_new(0);
    /// assert_eq!(table.unwrap_err(), TableError::ZeroBuckets);
    /// ```
    #[inline]
    pub fn try_new(buckets: usize) -> Result<Self> {
        Self::try_with_hasher(buckets, ModuloHasher::default())
    }
}

impl<K: Eq, V, F> KeyValueTable<K, V, F>
where
    F: Fn(&K, usize) -> usize,
{
    /// Creates an empty `KeyValueTable` that places keys with the closure
    /// `f(key, buckets)`.
    ///
    /// Same as [`with_hasher`](Self::with_hasher), restricted to closures and
    /// function items.
    ///
    /// # Panics
    ///
    /// Panics if `buckets` is zero.
    ///
    /// # Examples
    ///
    /// ```
    /// use kvtable::prelude::*;
    ///
    /// let mut table = KeyValueTable::from_fn(8, |k: &u32, m: usize| *k as usize % m);
    /// table.insert(0, "foo");
    /// assert_eq!(table.get_or_default(&0), ("foo", true));
    /// assert_eq!(table.get_or_default(&3), ("", false));
    /// ```
    #[inline]
    pub fn from_fn(buckets: usize, f: F) -> Self {
        Self::with_hasher(buckets, f)
    }
}

impl<K: Eq, V, H: BucketHasher<K>> KeyValueTable<K, V, H> {
    /// Creates an empty `KeyValueTable` with `buckets` buckets which will use
    /// `hasher` to place keys.
    ///
    /// # Panics
    ///
    /// Panics if `buckets` is zero.
    ///
    /// # Examples
    ///
    /// ```
    /// use kvtable::prelude::*;
    ///
    /// let hash = |key: &&str, m: usize| key.len() % m;
    /// let mut table = KeyValueTable::with_hasher(8, hash);
    /// table.insert("foo", 0);
    /// assert_eq!(table.get(&"foo"), Some(&0));
    /// ```
    pub fn with_hasher(buckets: usize, hasher: H) -> Self {
        match Self::try_with_hasher(buckets, hasher) {
            Ok(table) => table,
            Err(e) => panic!("{e}"),
        }
    }

    /// Creates an empty `KeyValueTable` with `buckets` buckets which will use
    /// `hasher` to place keys.
    ///
    /// # Errors
    ///
    /// Returns [`TableError::ZeroBuckets`] if `buckets` is zero.
    pub fn try_with_hasher(buckets: usize, hasher: H) -> Result<Self> {
        if buckets == 0 {
            return Err(TableError::ZeroBuckets);
        }

        debug!("creating table with {buckets} buckets");

        Ok(Self {
            buckets: (0..buckets).map(|_| Vec::new()).collect(),
            entries: 0,
            hasher,
        })
    }

    /// Creates an empty `KeyValueTable` sized by `config`.
    ///
    /// # Errors
    ///
    /// Returns [`TableError::ZeroBuckets`] if the configured bucket count is
    /// zero.
    ///
    /// # Examples
    ///
    /// ```
    /// use kvtable::prelude::*;
    ///
    /// let config = TableConfig::default();
    /// let table: KeyValueTable<u32, u32> =
    ///     KeyValueTable::with_config(&config, ModuloHasher::default()).unwrap();
    /// assert_eq!(table.bucket_count(), config.buckets);
    /// ```
    #[inline]
    pub fn with_config(config: &TableConfig, hasher: H) -> Result<Self> {
        Self::try_with_hasher(config.buckets, hasher)
    }

    /// Inserts a key-value pair into the table.
    ///
    /// If the table did not have this key present, the pair is appended to the
    /// end of its bucket and [`None`] is returned.
    ///
    /// If the table did have this key present, the value is replaced in place,
    /// and the old value is returned. The stored key is not updated.
    ///
    /// # Time Complexity
    ///
    /// Takes *O*(*chain*) time, where *chain* is the length of the key's
    /// bucket.
    ///
    /// # Panics
    ///
    /// Panics if the hasher returns a bucket index out of range.
    ///
    /// # Examples
    ///
    /// ```
    /// use kvtable::prelude::*;
    ///
    /// let mut table = KeyValueTable::new(8);
    /// assert_eq!(table.insert(37, "a"), None);
    /// assert_eq!(table.is_empty(), false);
    ///
    /// table.insert(37, "b");
    /// assert_eq!(table.insert(37, "c"), Some("b"));
    /// assert_eq!(table.len(), 1);
    /// ```
    pub fn insert(&mut self, key: K, value: V) -> Option<V> {
        let index = self.bucket_of(&key);
        self.insert_at(index, key, value)
    }

    /// Like [`insert`](Self::insert), but reports a misbehaving hasher
    /// instead of panicking.
    ///
    /// # Errors
    ///
    /// Returns [`TableError::BucketOutOfRange`] if the hasher returns an
    /// index outside `0..bucket_count()`. The table is left unchanged.
    ///
    /// # Examples
    ///
    /// ```
    /// use kvtable::prelude::*;
    ///
    /// let mut table = KeyValueTable::from_fn(4, |_: &u8, m: usize| m);
    /// assert_eq!(
    ///     table.try_insert(1, 'x'),
    ///     Err(TableError::BucketOutOfRange { index: 4, buckets: 4 })
    /// );
    /// assert!(table.is_empty());
    /// ```
    pub fn try_insert(&mut self, key: K, value: V) -> Result<Option<V>> {
        let index = self.try_bucket_of(&key)?;
        Ok(self.insert_at(index, key, value))
    }

    /// Returns a reference to the value corresponding to the key.
    ///
    /// # Time Complexity
    ///
    /// Takes *O*(*chain*) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use kvtable::prelude::*;
    ///
    /// let mut table = KeyValueTable::new(8);
    /// table.insert(1, "a");
    /// assert_eq!(table.get(&1), Some(&"a"));
    /// assert_eq!(table.get(&2), None);
    /// ```
    #[inline]
    pub fn get(&self, key: &K) -> Option<&V> {
        self.get_key_value(key).map(|(_, v)| v)
    }

    /// Returns a clone of the value for `key` and `true`, or the value type's
    /// default and `false` when the key is absent.
    ///
    /// Prefer [`get`](Self::get) when "absent" and "present but default" must
    /// be told apart by the value alone.
    ///
    /// # Examples
    ///
    /// ```
    /// use kvtable::prelude::*;
    ///
    /// let mut table = KeyValueTable::new(8);
    /// table.insert("foo", 0);
    /// assert_eq!(table.get_or_default(&"foo"), (0, true));
    /// assert_eq!(table.get_or_default(&"nope!"), (0, false));
    /// ```
    pub fn get_or_default(&self, key: &K) -> (V, bool)
    where
        V: Default + Clone,
    {
        match self.get(key) {
            Some(value) => (value.clone(), true),
            None => (V::default(), false),
        }
    }

    /// Returns a mutable reference to the value corresponding to the key.
    ///
    /// # Examples
    ///
    /// ```
    /// use kvtable::prelude::*;
    ///
    /// let mut table = KeyValueTable::new(8);
    /// table.insert(1, "a");
    /// if let Some(x) = table.get_mut(&1) {
    ///     *x = "b";
    /// }
    /// assert_eq!(table[&1], "b");
    /// ```
    pub fn get_mut(&mut self, key: &K) -> Option<&mut V> {
        let index = self.bucket_of(key);
        let chain = &mut self.buckets[index];
        let pos = linear_search_by(chain, |(k, _)| k == key)?;

        Some(&mut chain[pos].1)
    }

    /// Returns the key-value pair corresponding to the supplied key.
    ///
    /// The returned key is the one stored by the first insert, which matters
    /// for keys whose equality ignores some of their fields.
    ///
    /// # Examples
    ///
    /// ```
    /// use kvtable::prelude::*;
    ///
    /// let mut table = KeyValueTable::new(8);
    /// table.insert(1, "a");
    /// assert_eq!(table.get_key_value(&1), Some((&1, &"a")));
    /// assert_eq!(table.get_key_value(&2), None);
    /// ```
    pub fn get_key_value(&self, key: &K) -> Option<(&K, &V)> {
        let chain = &self.buckets[self.bucket_of(key)];
        let pos = linear_search_by(chain, |(k, _)| k == key)?;
        let (k, v) = &chain[pos];

        Some((k, v))
    }

    /// Returns `true` if the table contains a value for the specified key.
    ///
    /// # Examples
    ///
    /// ```
    /// use kvtable::prelude::*;
    ///
    /// let mut table = KeyValueTable::new(8);
    /// table.insert(1, "a");
    /// assert_eq!(table.contains_key(&1), true);
    /// assert_eq!(table.contains_key(&2), false);
    /// ```
    #[inline]
    pub fn contains_key(&self, key: &K) -> bool {
        self.get(key).is_some()
    }

    /// Returns the bucket `key` belongs to.
    ///
    /// # Panics
    ///
    /// Panics if the hasher returns a bucket index out of range.
    pub fn bucket_of(&self, key: &K) -> usize {
        match self.try_bucket_of(key) {
            Ok(index) => index,
            Err(e) => panic!("{e}"),
        }
    }

    /// Returns the bucket `key` belongs to.
    ///
    /// # Errors
    ///
    /// Returns [`TableError::BucketOutOfRange`] if the hasher returns an
    /// index outside `0..bucket_count()`.
    pub fn try_bucket_of(&self, key: &K) -> Result<usize> {
        let buckets = self.bucket_count();
        let index = self.hasher.bucket(key, buckets);

        if index >= buckets {
            return Err(TableError::BucketOutOfRange { index, buckets });
        }

        Ok(index)
    }

    /// Appends to or overwrites within an already validated bucket.
    fn insert_at(&mut self, index: usize, key: K, value: V) -> Option<V> {
        let chain = &mut self.buckets[index];

        match linear_search_by(chain, |(k, _)| *k == key) {
            Some(pos) => {
                trace!("bucket {index}: overwrote entry {pos}");
                Some(mem::replace(&mut chain[pos].1, value))
            }
            None => {
                chain.push((key, value));
                self.entries += 1;
                trace!("bucket {index}: appended, chain length {}", chain.len());
                None
            }
        }
    }
}

impl<K, V, H> KeyValueTable<K, V, H> {
    /// Returns the number of elements in the table.
    #[inline]
    pub fn len(&self) -> usize {
        self.entries
    }

    /// Returns `true` if the table contains no elements.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries == 0
    }

    /// Returns the number of buckets, fixed at construction.
    #[inline]
    pub fn bucket_count(&self) -> usize {
        self.buckets.len()
    }

    /// Returns the number of entries chained in bucket `index`, or [`None`]
    /// if there is no such bucket.
    ///
    /// # Examples
    ///
    /// ```
    /// use kvtable::prelude::*;
    ///
    /// let mut table = KeyValueTable::from_fn(2, |_: &&str, _: usize| 1);
    /// table.insert("a", 1);
    /// table.insert("b", 2);
    /// assert_eq!(table.bucket_len(0), Some(0));
    /// assert_eq!(table.bucket_len(1), Some(2));
    /// assert_eq!(table.bucket_len(2), None);
    /// ```
    #[inline]
    pub fn bucket_len(&self, index: usize) -> Option<usize> {
        self.buckets.get(index).map(Vec::len)
    }

    /// Returns the chains of the table, one slice per bucket.
    #[inline]
    pub fn buckets(&self) -> impl ExactSizeIterator<Item = &[(K, V)]> {
        self.buckets.iter().map(Vec::as_slice)
    }

    /// Returns a reference to the table's hasher.
    #[inline]
    pub fn hasher(&self) -> &H {
        &self.hasher
    }

    /// Returns an iterator referencing the table, in bucket order and then
    /// insertion order within each bucket.
    ///
    /// # Examples
    ///
    /// ```
    /// use kvtable::prelude::*;
    ///
    /// let table: KeyValueTable<i32, &str> = KeyValueTable::new(4);
    ///
    /// let mut iter = table.iter();
    ///
    /// assert_eq!(iter.next(), None);
    /// ```
    #[inline]
    pub fn iter(&self) -> Iter<'_, K, V> {
        Iter {
            buckets: self.buckets.iter(),
            chain: Default::default(),
            remaining: self.entries,
        }
    }
}

impl<K, V, H> fmt::Debug for KeyValueTable<K, V, H>
where
    K: fmt::Debug,
    V: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

impl<K, V, H> Index<&K> for KeyValueTable<K, V, H>
where
    K: Eq,
    H: BucketHasher<K>,
{
    type Output = V;

    /// Returns a reference to the value corresponding to the supplied key.
    ///
    /// # Panics
    ///
    /// Panics if the key is not present in the `KeyValueTable`.
    #[inline]
    fn index(&self, key: &K) -> &V {
        self.get(key).expect("no entry found for key")
    }
}

impl<K, V, H> Extend<(K, V)> for KeyValueTable<K, V, H>
where
    K: Eq,
    H: BucketHasher<K>,
{
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (k, v) in iter {
            self.insert(k, v);
        }
    }
}

impl<'a, K, V, H> IntoIterator for &'a KeyValueTable<K, V, H> {
    type IntoIter = Iter<'a, K, V>;
    type Item = (&'a K, &'a V);

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<K, V, H> IntoIterator for KeyValueTable<K, V, H> {
    type IntoIter = IntoIter<K, V>;
    type Item = (K, V);

    fn into_iter(self) -> Self::IntoIter {
        IntoIter {
            buckets: self.buckets.into_vec().into_iter(),
            chain: Vec::new().into_iter(),
            remaining: self.entries,
        }
    }
}

impl<'a, K, V> Iterator for Iter<'a, K, V> {
    type Item = (&'a K, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some((k, v)) = self.chain.next() {
                self.remaining -= 1;
                return Some((k, v));
            }

            self.chain = self.buckets.next()?.iter();
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<K, V> ExactSizeIterator for Iter<'_, K, V> {}

impl<K, V> FusedIterator for Iter<'_, K, V> {}

impl<K, V> Iterator for IntoIter<K, V> {
    type Item = (K, V);

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(entry) = self.chain.next() {
                self.remaining -= 1;
                return Some(entry);
            }

            self.chain = self.buckets.next()?.into_iter();
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<K, V> ExactSizeIterator for IntoIter<K, V> {}

impl<K, V> FusedIterator for IntoIter<K, V> {}
