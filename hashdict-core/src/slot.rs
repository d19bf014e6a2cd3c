//! Slot state for open addressing
//!
//! A slot is one of:
//! - `Empty`: never written since construction (or `clear`); ends a probe scan
//! - `Occupied`: holds a live entry
//! - `Tombstone`: held an entry that was removed; a scan must step over it

use crate::entry::Entry;
use std::fmt;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Slot<K, V> {
    Empty,
    Occupied(Entry<K, V>),
    Tombstone,
}

impl<K, V> Default for Slot<K, V> {
    fn default() -> Self {
        Slot::Empty
    }
}

impl<K, V> Slot<K, V> {
    #[inline]
    pub fn is_empty(&self) -> bool {
        matches!(self, Slot::Empty)
    }

    #[inline]
    pub fn is_occupied(&self) -> bool {
        matches!(self, Slot::Occupied(_))
    }

    #[inline]
    pub fn is_tombstone(&self) -> bool {
        matches!(self, Slot::Tombstone)
    }

    /// Empty or tombstoned: `add` may write here
    #[inline]
    pub fn is_vacant(&self) -> bool {
        !self.is_occupied()
    }

    pub fn entry(&self) -> Option<&Entry<K, V>> {
        match self {
            Slot::Occupied(entry) => Some(entry),
            _ => None,
        }
    }

    pub fn entry_mut(&mut self) -> Option<&mut Entry<K, V>> {
        match self {
            Slot::Occupied(entry) => Some(entry),
            _ => None,
        }
    }

    /// Take the entry out, leaving a tombstone behind
    pub fn bury(&mut self) -> Option<Entry<K, V>> {
        match std::mem::replace(self, Slot::Tombstone) {
            Slot::Occupied(entry) => Some(entry),
            other => {
                *self = other;
                None
            }
        }
    }
}

impl<K, V> fmt::Display for Slot<K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let symbol = match self {
            Slot::Empty => '.',
            Slot::Occupied(_) => '#',
            Slot::Tombstone => 'x',
        };
        write!(f, "{}", symbol)
    }
}
