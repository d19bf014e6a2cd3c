use hashdict_core::TableError;
use thiserror::Error;

/// Error type for lab runs
#[derive(Error, Debug)]
pub enum LabError {
    #[error("table error: {0}")]
    Table(#[from] TableError),
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid survey configuration: {0}")]
    Config(String),
}
