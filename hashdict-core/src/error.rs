use thiserror::Error;

/// Why a key was refused
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyViolation {
    #[error("key is empty")]
    Empty,
    #[error("key length {len} exceeds the maximum of {max}")]
    TooLong { len: usize, max: usize },
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TableError {
    #[error("invalid key: {0}")]
    InvalidKey(#[from] KeyViolation),
    #[error("an entry with the same key already exists")]
    DuplicateKey,
    #[error("no entry with the given key")]
    KeyNotFound,
    #[error("capacity must be positive, got {0}")]
    InvalidCapacity(usize),
    #[error("table is full ({capacity} slots occupied)")]
    TableFull { capacity: usize },
    #[error("probe sequence exhausted after {attempts} attempts without reaching a vacant slot")]
    ProbeExhausted { attempts: usize },
}

pub type Result<T> = std::result::Result<T, TableError>;
