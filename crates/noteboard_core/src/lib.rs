//! Core note/todo store for Noteboard.
//! This crate is the single source of truth for note list behavior.

pub mod logging;
pub mod model;
pub mod storage;
pub mod store;

pub use logging::{default_log_level, init_logging, logging_status};
pub use model::note::{Note, NoteId, Todo, TodoId};
pub use storage::{
    FileBackend, MemoryBackend, NoopBackend, StorageBackend, StorageError, StorageResult,
};
pub use store::{NoteStore, StoreError, StoreResult, NOTES_STORAGE_KEY};

/// Minimal health-check API for early integration.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::{core_version, ping};

    #[test]
    fn ping_returns_pong() {
        assert_eq!(ping(), "pong");
    }

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
