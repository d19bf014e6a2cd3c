//! Open-addressing hash table
//!
//! Provides:
//! - Linear, quadratic and double-hash probe sequences
//! - Tombstone deletion so later lookups still reach entries past a removed slot
//! - Tombstoned slots reused by later inserts
//! - Cluster-length statistic for comparing probing modes
//!
//! Every probe sequence is cut off after `capacity` attempts. Inserts never place
//! an entry later than that, so a bounded lookup misses nothing, and an insert
//! whose sequence cannot reach the remaining vacancies fails instead of spinning.

use crate::entry::Entry;
use crate::error::{Result, TableError};
use crate::hashing::{HashFunction, HashMethod};
use crate::key::{TableKey, DEFAULT_MAX_KEY_LEN};
use crate::slot::Slot;
use log::{debug, trace};
use std::fmt;

/// Collision-resolution strategy
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ProbingMode {
    /// `h1 + i`
    Linear,
    /// `h1 + i²`
    Quadratic,
    /// `h1 + i·h2`
    Double,
}

impl ProbingMode {
    pub const ALL: [ProbingMode; 3] = [
        ProbingMode::Linear,
        ProbingMode::Quadratic,
        ProbingMode::Double,
    ];

    /// Slot for attempt `attempt`, given the two base indices
    #[inline(always)]
    pub fn slot(self, h1: usize, h2: usize, attempt: usize, capacity: usize) -> usize {
        let c = capacity as u128;
        let i = attempt as u128;
        let offset = match self {
            ProbingMode::Linear => i,
            ProbingMode::Quadratic => (i * i) % c,
            ProbingMode::Double => (i * h2 as u128) % c,
        };
        ((h1 as u128 + offset) % c) as usize
    }

    pub fn name(self) -> &'static str {
        match self {
            ProbingMode::Linear => "linear",
            ProbingMode::Quadratic => "quadratic",
            ProbingMode::Double => "double",
        }
    }
}

impl fmt::Display for ProbingMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Where a probe for a key ended
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Probe {
    /// Occupied slot holding the key
    Hit(usize),
    /// Reached an empty slot or ran out of attempts
    Miss,
}

/// Hash table resolving collisions by probing a flat slot array
#[derive(Clone, Debug)]
pub struct ProbingTable<K, V> {
    pub(crate) slots: Vec<Slot<K, V>>,

    /// Occupied slots
    pub(crate) count: usize,

    /// Tombstoned slots
    pub(crate) tombstones: usize,

    pub(crate) mode: ProbingMode,

    pub(crate) primary: HashFunction,

    /// Step function, consulted only in `Double` mode
    pub(crate) secondary: HashFunction,

    pub(crate) max_key_len: usize,
}

impl<K, V> ProbingTable<K, V>
where
    K: TableKey,
{
    /// Secondary function used by `Double` mode when none is given
    pub const DEFAULT_SECONDARY: HashMethod = HashMethod::Multiplicative;

    /// Create a table with `capacity` slots
    ///
    /// # Arguments
    /// * `capacity` - Number of slots, fixed for the table's lifetime
    /// * `mode` - Probe sequence used by every operation
    /// * `primary` - Base index `h1`
    /// * `secondary` - Step `h2` for `Double` mode; defaults to `DEFAULT_SECONDARY`
    pub fn new(
        capacity: usize,
        mode: ProbingMode,
        primary: impl Into<HashFunction>,
        secondary: Option<HashFunction>,
    ) -> Result<Self> {
        if capacity == 0 {
            return Err(TableError::InvalidCapacity(capacity));
        }
        let primary = primary.into();
        let secondary = secondary.unwrap_or_else(|| Self::DEFAULT_SECONDARY.into());
        debug!(
            "probing table: {} slots, {} probing, h1 {}, h2 {}",
            capacity, mode, primary, secondary
        );

        let mut slots = Vec::with_capacity(capacity);
        slots.resize_with(capacity, Slot::default);

        Ok(ProbingTable {
            slots,
            count: 0,
            tombstones: 0,
            mode,
            primary,
            secondary,
            max_key_len: DEFAULT_MAX_KEY_LEN,
        })
    }

    /// Override the maximum accepted key length
    pub fn with_max_key_len(mut self, max_key_len: usize) -> Self {
        self.max_key_len = max_key_len;
        self
    }

    /// Generate the probe sequence for `key`
    ///
    /// Both hash functions are evaluated once; each attempt is arithmetic.
    #[inline(always)]
    fn probe_sequence(&self, key: &K) -> impl Iterator<Item = usize> {
        let capacity = self.slots.len();
        let mode = self.mode;
        let h1 = self.primary.index(key, capacity);
        let h2 = match mode {
            ProbingMode::Double => self.secondary.index(key, capacity),
            _ => 0,
        };
        (0..capacity).map(move |i| mode.slot(h1, h2, i, capacity))
    }

    /// Follow the probe sequence until the key or an empty slot
    fn find(&self, key: &K) -> Probe {
        for (attempt, slot) in self.probe_sequence(key).enumerate() {
            match &self.slots[slot] {
                Slot::Occupied(entry) if entry.key() == key => {
                    trace!("hit at slot {} after {} attempts", slot, attempt + 1);
                    return Probe::Hit(slot);
                }
                Slot::Empty => return Probe::Miss,
                // tombstones and other keys: keep going
                _ => {}
            }
        }
        Probe::Miss
    }

    /// Insert a new entry
    ///
    /// Fails with `InvalidKey`, `TableFull`, `DuplicateKey` or `ProbeExhausted`;
    /// the table is unchanged on failure.
    pub fn add(&mut self, key: K, value: V) -> Result<()> {
        key.validate(self.max_key_len)?;

        if !self.has_vacancy() {
            debug!("rejected add: all {} slots occupied", self.slots.len());
            return Err(TableError::TableFull {
                capacity: self.slots.len(),
            });
        }

        if self.slots.iter().any(|s| matches!(s, Slot::Occupied(e) if e.key() == &key)) {
            debug!("rejected duplicate key");
            return Err(TableError::DuplicateKey);
        }

        let target = self.probe_sequence(&key).find(|&slot| self.slots[slot].is_vacant());
        let Some(slot) = target else {
            debug!(
                "rejected add: probe sequence missed every vacancy in {} slots",
                self.slots.len()
            );
            return Err(TableError::ProbeExhausted {
                attempts: self.slots.len(),
            });
        };

        if self.slots[slot].is_tombstone() {
            self.tombstones -= 1;
        }
        trace!("insert at slot {}", slot);
        self.slots[slot] = Slot::Occupied(Entry::new(key, value));
        self.count += 1;
        Ok(())
    }

    /// Value for `key`, or `None` when absent
    pub fn get(&self, key: &K) -> Option<&V> {
        match self.find(key) {
            Probe::Hit(slot) => self.slots[slot].entry().map(Entry::value),
            Probe::Miss => None,
        }
    }

    /// Like `get`, but an invalid key is reported instead of treated as absent
    pub fn try_get(&self, key: &K) -> Result<Option<&V>> {
        key.validate(self.max_key_len)?;
        Ok(self.get(key))
    }

    /// Get mutable value by key
    pub fn get_mut(&mut self, key: &K) -> Option<&mut V> {
        match self.find(key) {
            Probe::Hit(slot) => self.slots[slot].entry_mut().map(Entry::value_mut),
            Probe::Miss => None,
        }
    }

    /// Replace the value stored under `key` in place
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

    /// Remove the entry for `key`, leaving a tombstone; `Ok(false)` when absent
    pub fn remove(&mut self, key: &K) -> Result<bool> {
        key.validate(self.max_key_len)?;
        match self.find(key) {
            Probe::Hit(slot) => {
                self.slots[slot].bury();
                self.count -= 1;
                self.tombstones += 1;
                Ok(true)
            }
            Probe::Miss => Ok(false),
        }
    }

    pub fn contains_key(&self, key: &K) -> Result<bool> {
        key.validate(self.max_key_len)?;
        Ok(matches!(self.find(key), Probe::Hit(_)))
    }
}

impl<K, V> ProbingTable<K, V> {
    /// Any slot an insert could write to
    fn has_vacancy(&self) -> bool {
        self.count < self.slots.len()
    }

    /// Number of stored entries
    pub fn len(&self) -> usize {
        self.count
    }

    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// Number of slots
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    pub fn mode(&self) -> ProbingMode {
        self.mode
    }

    pub fn primary(&self) -> HashFunction {
        self.primary
    }

    pub fn secondary(&self) -> HashFunction {
        self.secondary
    }

    pub fn max_key_len(&self) -> usize {
        self.max_key_len
    }

    /// Number of tombstoned slots
    pub fn tombstones(&self) -> usize {
        self.tombstones
    }

    /// Get load factor
    pub fn fill_factor(&self) -> f64 {
        self.count as f64 / self.slots.len() as f64
    }

    /// Reset every slot to empty, dropping tombstones too
    pub fn clear(&mut self) {
        self.slots.iter_mut().for_each(|s| *s = Slot::Empty);
        self.count = 0;
        self.tombstones = 0;
    }

    /// Longest run of adjacent occupied slots in the raw array
    ///
    /// Empty and tombstoned slots both end a run.
    pub fn max_cluster_length(&self) -> usize {
        let (longest, current) = self.slots.iter().fold((0, 0), |(longest, current), slot| {
            if slot.is_occupied() {
                (longest, current + 1)
            } else {
                (longest.max(current), 0)
            }
        });
        longest.max(current)
    }

    /// Raw slot array, in index order
    pub fn slots(&self) -> &[Slot<K, V>] {
        &self.slots
    }

    /// Iterate over all entries in slot order
    pub fn iter(&self) -> impl Iterator<Item = (&K, &V)> {
        self.slots
            .iter()
            .filter_map(|slot| slot.entry().map(Entry::as_pair))
    }

    pub fn keys(&self) -> impl Iterator<Item = &K> {
        self.iter().map(|(k, _)| k)
    }

    pub fn values(&self) -> impl Iterator<Item = &V> {
        self.iter().map(|(_, v)| v)
    }
}

impl<'a, K, V> IntoIterator for &'a ProbingTable<K, V> {
    type Item = (&'a K, &'a V);
    type IntoIter = Box<dyn Iterator<Item = (&'a K, &'a V)> + 'a>;

    fn into_iter(self) -> Self::IntoIter {
        Box::new(self.iter())
    }
}

impl<K, V> fmt::Display for ProbingTable<K, V> {
    /// One character per slot: `#` occupied, `x` tombstone, `.` empty
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.slots.iter().try_for_each(|slot| write!(f, "{}", slot))
    }
}
