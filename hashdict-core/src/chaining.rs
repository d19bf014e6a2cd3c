//! Separate-chaining dictionary
//!
//! Provides:
//! - Fixed number of buckets chosen at construction
//! - Collisions appended to the bucket's chain in insertion order
//! - Duplicate keys rejected within the selected bucket
//! - Chain-length statistics for judging a hash function

use crate::entry::Entry;
use crate::error::{Result, TableError};
use crate::hashing::HashFunction;
use crate::key::{TableKey, DEFAULT_MAX_KEY_LEN};
use log::debug;

/// Hash table resolving collisions with per-bucket chains
#[derive(Clone, Debug)]
pub struct ChainingTable<K, V> {
    /// One chain per index of the hash function's range
    pub(crate) buckets: Vec<Vec<Entry<K, V>>>,

    /// Number of stored entries
    pub(crate) count: usize,

    pub(crate) hash_fn: HashFunction,

    pub(crate) max_key_len: usize,
}

impl<K, V> ChainingTable<K, V>
where
    K: TableKey,
{
    /// Create a table with `capacity` buckets
    ///
    /// # Arguments
    /// * `capacity` - Number of buckets, fixed for the table's lifetime
    /// * `hash_fn` - Reducer from key to bucket index
    pub fn new(capacity: usize, hash_fn: impl Into<HashFunction>) -> Result<Self> {
        if capacity == 0 {
            return Err(TableError::InvalidCapacity(capacity));
        }
        let hash_fn = hash_fn.into();
        debug!("chaining table: {} buckets, hash {}", capacity, hash_fn);

        let mut buckets = Vec::with_capacity(capacity);
        buckets.resize_with(capacity, Vec::new);

        Ok(ChainingTable {
            buckets,
            count: 0,
            hash_fn,
            max_key_len: DEFAULT_MAX_KEY_LEN,
        })
    }

    /// Override the maximum accepted key length
    pub fn with_max_key_len(mut self, max_key_len: usize) -> Self {
        self.max_key_len = max_key_len;
        self
    }

    #[inline]
    fn bucket_index(&self, key: &K) -> usize {
        self.hash_fn.index(key, self.buckets.len())
    }

    fn position(&self, key: &K) -> (usize, Option<usize>) {
        let bucket = self.bucket_index(key);
        let pos = self.buckets[bucket].iter().position(|e| e.key() == key);
        (bucket, pos)
    }

    /// Insert a new entry
    ///
    /// Fails with `InvalidKey` or `DuplicateKey`; the table is unchanged on failure.
    pub fn add(&mut self, key: K, value: V) -> Result<()> {
        key.validate(self.max_key_len)?;

        let (bucket, pos) = self.position(&key);
        if pos.is_some() {
            debug!("rejected duplicate key in bucket {}", bucket);
            return Err(TableError::DuplicateKey);
        }

        self.buckets[bucket].push(Entry::new(key, value));
        self.count += 1;
        Ok(())
    }

    /// Value for `key`, or `None` when absent
    pub fn get(&self, key: &K) -> Option<&V> {
        let (bucket, pos) = self.position(key);
        pos.map(|i| self.buckets[bucket][i].value())
    }

    /// Like `get`, but an invalid key is reported instead of treated as absent
    pub fn try_get(&self, key: &K) -> Result<Option<&V>> {
        key.validate(self.max_key_len)?;
        Ok(self.get(key))
    }

    pub fn get_mut(&mut self, key: &K) -> Option<&mut V> {
        let (bucket, pos) = self.position(key);
        pos.map(move |i| self.buckets[bucket][i].value_mut())
    }

    /// Replace the value stored under `key`, keeping the entry's chain position
    pub fn set_value(&mut self, key: &K, value: V) -> Result<()> {
        key.validate(self.max_key_len)?;
        match self.get_mut(key) {
            Some(slot) => {
                *slot = value;
                Ok(())
            }
            None => Err(TableError::KeyNotFound),
        }
    }

    /// Remove the entry for `key`; `Ok(false)` when there was none
    pub fn remove(&mut self, key: &K) -> Result<bool> {
        key.validate(self.max_key_len)?;
        let (bucket, pos) = self.position(key);
        match pos {
            Some(i) => {
                // keep the remaining chain in insertion order
                self.buckets[bucket].remove(i);
                self.count -= 1;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    pub fn contains_key(&self, key: &K) -> Result<bool> {
        key.validate(self.max_key_len)?;
        Ok(self.position(key).1.is_some())
    }
}

impl<K, V> ChainingTable<K, V> {
    /// Number of stored entries
    pub fn len(&self) -> usize {
        self.count
    }

    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// Number of buckets
    pub fn capacity(&self) -> usize {
        self.buckets.len()
    }

    pub fn hash_function(&self) -> HashFunction {
        self.hash_fn
    }

    pub fn max_key_len(&self) -> usize {
        self.max_key_len
    }

    /// Drop every entry; the bucket count is unchanged
    pub fn clear(&mut self) {
        self.buckets.iter_mut().for_each(Vec::clear);
        self.count = 0;
    }

    // === Statistics ===

    /// Entries per bucket, `count / capacity`
    pub fn fill_factor(&self) -> f64 {
        self.count as f64 / self.buckets.len() as f64
    }

    /// Lengths of the non-empty chains in bucket order
    pub fn chain_lengths(&self) -> impl Iterator<Item = usize> + '_ {
        self.buckets.iter().map(Vec::len).filter(|&len| len > 0)
    }

    /// Longest chain, `None` for an empty table
    pub fn max_chain_length(&self) -> Option<usize> {
        self.chain_lengths().max()
    }

    /// Shortest non-empty chain, `None` for an empty table
    pub fn min_chain_length(&self) -> Option<usize> {
        self.chain_lengths().min()
    }

    /// Iterate over all entries in bucket order, then chain order
    pub fn iter(&self) -> impl Iterator<Item = (&K, &V)> {
        self.buckets
            .iter()
            .flat_map(|bucket| bucket.iter().map(Entry::as_pair))
    }

    pub fn keys(&self) -> impl Iterator<Item = &K> {
        self.iter().map(|(k, _)| k)
    }

    pub fn values(&self) -> impl Iterator<Item = &V> {
        self.iter().map(|(_, v)| v)
    }
}

impl<'a, K, V> IntoIterator for &'a ChainingTable<K, V> {
    type Item = (&'a K, &'a V);
    type IntoIter = Box<dyn Iterator<Item = (&'a K, &'a V)> + 'a>;

    fn into_iter(self) -> Self::IntoIter {
        Box::new(self.iter())
    }
}
