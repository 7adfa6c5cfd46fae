//! Key/value storage capability behind the note store.
//!
//! # Responsibility
//! - Define the storage capability contract injected into the store.
//! - Provide file-backed, in-memory and unavailable implementations.
//!
//! # Invariants
//! - Values are written and read wholesale; there are no partial updates.
//! - An unavailable backend must never be read from or written to by
//!   store code; availability is checked first.
//! - Keys are restricted to `[a-z0-9_-]` so file-backed keys can never
//!   escape the backend root.

use std::error::Error;
use std::fmt::{Display, Formatter};
use std::io;
use std::path::PathBuf;

mod file;
mod memory;
mod noop;

pub use file::FileBackend;
pub use memory::MemoryBackend;
pub use noop::NoopBackend;

pub type StorageResult<T> = Result<T, StorageError>;

/// Storage backend failure for open/read/write operations.
#[derive(Debug)]
pub enum StorageError {
    /// Key contains characters outside the supported set.
    InvalidKey(String),
    /// Backend root directory could not be prepared.
    Root { path: PathBuf, source: io::Error },
    /// Read or write of one key failed.
    Io { key: String, source: io::Error },
}

impl Display for StorageError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidKey(key) => write!(f, "invalid storage key: `{key}`"),
            Self::Root { path, source } => write!(
                f,
                "failed to prepare storage root `{}`: {source}",
                path.display()
            ),
            Self::Io { key, source } => write!(f, "storage i/o failed for key `{key}`: {source}"),
        }
    }
}

impl Error for StorageError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::InvalidKey(_) => None,
            Self::Root { source, .. } => Some(source),
            Self::Io { source, .. } => Some(source),
        }
    }
}

/// Injected storage capability.
///
/// Implementations are synchronous; calls run to completion within the
/// caller's event handling.
pub trait StorageBackend {
    /// Reports whether persistent storage can be accessed at all.
    ///
    /// Hydration and write-through are skipped entirely while this
    /// returns `false`.
    fn is_available(&self) -> bool;

    /// Reads the full value stored under `key`, or `None` when absent.
    fn get(&self, key: &str) -> StorageResult<Option<String>>;

    /// Replaces the full value stored under `key`.
    fn set(&mut self, key: &str, value: &str) -> StorageResult<()>;
}

pub(crate) fn is_valid_key(key: &str) -> bool {
    if key.is_empty() {
        return false;
    }
    key.chars()
        .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '_' || c == '-')
}

#[cfg(test)]
mod tests {
    use super::is_valid_key;

    #[test]
    fn valid_key_accepts_lowercase_digits_and_separators() {
        assert!(is_valid_key("notes"));
        assert!(is_valid_key("notes_v2"));
        assert!(is_valid_key("a-b-1"));
    }

    #[test]
    fn valid_key_rejects_empty_uppercase_and_path_characters() {
        assert!(!is_valid_key(""));
        assert!(!is_valid_key("Notes"));
        assert!(!is_valid_key("../notes"));
        assert!(!is_valid_key("no tes"));
    }
}
