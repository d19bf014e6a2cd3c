//! hashdict - fixed-capacity dictionaries with pluggable hash functions
//!
//! Core library providing:
//! - Separate chaining table with chain-length statistics
//! - Open-addressing table with linear, quadratic and double probing
//! - Tombstone deletion that keeps probe chains intact
//! - Hash functions composed from a source (intrinsic, keyed digest, SHA-256, FNV)
//!   and a reduction (division or Fibonacci multiplication)

pub mod chaining;
pub mod digest;
pub mod entry;
pub mod error;
pub mod hashing;
pub mod key;
pub mod probing;
pub mod slot;

pub use chaining::ChainingTable;
pub use entry::Entry;
pub use error::{KeyViolation, Result, TableError};
pub use hashing::{HashFunction, HashMethod, HashSource, Reduction};
pub use key::{TableKey, DEFAULT_MAX_KEY_LEN};
pub use probing::{ProbingMode, ProbingTable};
pub use slot::Slot;

#[cfg(test)]
mod tests;

#[cfg(test)]
mod proptests;
