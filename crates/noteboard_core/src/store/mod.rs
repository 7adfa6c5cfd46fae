//! Note store: owned state, hydration and write-through persistence.
//!
//! # Responsibility
//! - Own the note list and its one-way hydration lifecycle.
//! - Serialize every mutation back to the injected storage backend.
//!
//! # Invariants
//! - The store is explicitly constructed and owned by its embedder;
//!   there is no process-wide instance.
//! - Each mutating operation performs at most one storage write.

use crate::storage::StorageError;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub mod note_store;

pub use note_store::{NoteStore, NOTES_STORAGE_KEY};

pub type StoreResult<T> = Result<T, StoreError>;

/// Store failure for hydration and write-through operations.
#[derive(Debug)]
pub enum StoreError {
    /// Backend-level open/read/write failure.
    Storage(StorageError),
    /// Persisted value under `key` is not a valid serialized note list.
    ///
    /// Fatal by design: hydration does not fall back to an empty list
    /// when stored data cannot be parsed.
    CorruptData {
        key: &'static str,
        source: serde_json::Error,
    },
    /// In-memory note list could not be serialized for write-through.
    Encode(serde_json::Error),
}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Storage(err) => write!(f, "{err}"),
            Self::CorruptData { key, source } => {
                write!(f, "corrupt note data under key `{key}`: {source}")
            }
            Self::Encode(source) => write!(f, "failed to encode note list: {source}"),
        }
    }
}

impl Error for StoreError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Storage(err) => Some(err),
            Self::CorruptData { source, .. } => Some(source),
            Self::Encode(source) => Some(source),
        }
    }
}

impl From<StorageError> for StoreError {
    fn from(value: StorageError) -> Self {
        Self::Storage(value)
    }
}
