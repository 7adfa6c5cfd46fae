//! File-backed storage: one file per key under a root directory.
//!
//! # Responsibility
//! - Map storage keys onto `<root>/<key>.json` files.
//! - Prepare the root directory on open and report open events.
//!
//! # Invariants
//! - Keys are validated before touching the filesystem.
//! - A missing key file reads as `None`, never as an error.

use super::{is_valid_key, StorageBackend, StorageError, StorageResult};
use log::{error, info};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::time::Instant;

/// Storage backend persisting each key as a JSON file in one directory.
pub struct FileBackend {
    root: PathBuf,
}

impl FileBackend {
    /// Opens a backend rooted at `root`, creating the directory as needed.
    ///
    /// # Side effects
    /// - Creates the root directory and any missing parents.
    /// - Emits `storage_open` logging events with duration and status.
    pub fn open(root: impl AsRef<Path>) -> StorageResult<Self> {
        let started_at = Instant::now();
        let root = root.as_ref().to_path_buf();
        info!("event=storage_open module=storage status=start mode=file");

        if let Err(source) = fs::create_dir_all(&root) {
            error!(
                "event=storage_open module=storage status=error mode=file duration_ms={} error={}",
                started_at.elapsed().as_millis(),
                source
            );
            return Err(StorageError::Root { path: root, source });
        }

        info!(
            "event=storage_open module=storage status=ok mode=file duration_ms={}",
            started_at.elapsed().as_millis()
        );
        Ok(Self { root })
    }

    /// Returns the backend root directory.
    pub fn root(&self) -> &Path {
        &self.root
    }

    fn key_path(&self, key: &str) -> StorageResult<PathBuf> {
        if !is_valid_key(key) {
            return Err(StorageError::InvalidKey(key.to_string()));
        }
        Ok(self.root.join(format!("{key}.json")))
    }
}

impl StorageBackend for FileBackend {
    fn is_available(&self) -> bool {
        true
    }

    fn get(&self, key: &str) -> StorageResult<Option<String>> {
        let path = self.key_path(key)?;
        match fs::read_to_string(&path) {
            Ok(value) => Ok(Some(value)),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(source) => Err(StorageError::Io {
                key: key.to_string(),
                source,
            }),
        }
    }

    fn set(&mut self, key: &str, value: &str) -> StorageResult<()> {
        let path = self.key_path(key)?;
        fs::write(&path, value).map_err(|source| StorageError::Io {
            key: key.to_string(),
            source,
        })
    }
}
