//! Error type for the todo store.
//!
//! # Design
//! Every store operation maps to a single SQLite statement, so the only
//! failure source is the underlying driver. The wrapper still exists as the
//! crate's error boundary: callers match on `StoreError` instead of naming
//! `rusqlite` types directly.

use std::error::Error;
use std::fmt;

/// Errors returned by `TodoStore` operations.
#[derive(Debug)]
pub enum StoreError {
    /// The underlying SQLite open, statement, or row read failed.
    Sqlite(rusqlite::Error),
}

pub type StoreResult<T> = Result<T, StoreError>;

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StoreError::Sqlite(err) => write!(f, "sqlite error: {err}"),
        }
    }
}

impl Error for StoreError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            StoreError::Sqlite(err) => Some(err),
        }
    }
}

impl From<rusqlite::Error> for StoreError {
    fn from(err: rusqlite::Error) -> Self {
        StoreError::Sqlite(err)
    }
}
