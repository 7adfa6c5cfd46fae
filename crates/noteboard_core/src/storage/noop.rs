//! Unavailable-storage backend for environments without persistence.
//!
//! Stands in for non-interactive rendering contexts: the store treats it
//! as "no storage access yet", skipping hydration and write-through
//! without erroring.

use super::{StorageBackend, StorageResult};

/// Backend reporting no storage capability; reads and writes do nothing.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopBackend;

impl NoopBackend {
    pub fn new() -> Self {
        Self
    }
}

impl StorageBackend for NoopBackend {
    fn is_available(&self) -> bool {
        false
    }

    fn get(&self, _key: &str) -> StorageResult<Option<String>> {
        Ok(None)
    }

    fn set(&mut self, _key: &str, _value: &str) -> StorageResult<()> {
        Ok(())
    }
}
