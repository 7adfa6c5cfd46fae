//! Owned note store over an injected storage backend.
//!
//! # Responsibility
//! - Hold the note list, hydrate it once from storage and keep it
//!   written through on every mutation.
//! - Notify registered change observers after each committed mutation.
//!
//! # Invariants
//! - Hydration is one-way: the latch is set on success and never reset.
//! - The latch stays unset while the backend reports no storage access,
//!   so hydration may still run later.
//! - Mutations apply in memory even without storage access; only the
//!   write is skipped.
//! - Note ids are matched by linear scan; duplicates match the first
//!   occurrence on update and every occurrence on delete.

use crate::model::note::{Note, NoteId};
use crate::storage::StorageBackend;
use crate::store::{StoreError, StoreResult};
use log::{debug, info};

/// Storage key holding the serialized note list.
pub const NOTES_STORAGE_KEY: &str = "notes";

/// Callback invoked with the post-mutation note list after every commit.
pub type ChangeObserver = Box<dyn FnMut(&[Note])>;

/// Explicitly owned note list with hydration and write-through.
pub struct NoteStore<B: StorageBackend> {
    backend: B,
    notes: Vec<Note>,
    hydrated: bool,
    observers: Vec<ChangeObserver>,
}

impl<B: StorageBackend> NoteStore<B> {
    /// Creates an empty, unhydrated store over the given backend.
    pub fn new(backend: B) -> Self {
        Self {
            backend,
            notes: Vec::new(),
            hydrated: false,
            observers: Vec::new(),
        }
    }

    /// Loads the persisted note list into memory, once.
    ///
    /// # Contract
    /// - Idempotent: after a successful run, further calls are no-ops
    ///   and never re-read storage.
    /// - Without storage access this is a no-op and the latch stays
    ///   unset, so a later call may still hydrate.
    /// - A missing `notes` entry hydrates to an empty list.
    /// - A present entry replaces in-memory content wholesale.
    ///
    /// # Errors
    /// - `StoreError::CorruptData` when the stored value does not parse
    ///   as a note list; no fallback, the latch stays unset.
    /// - `StoreError::Storage` when the backend read fails.
    pub fn hydrate(&mut self) -> StoreResult<()> {
        if self.hydrated {
            return Ok(());
        }
        if !self.backend.is_available() {
            info!("event=store_hydrate module=store status=skipped reason=storage_unavailable");
            return Ok(());
        }

        self.notes = match self.backend.get(NOTES_STORAGE_KEY)? {
            Some(raw) => serde_json::from_str(&raw).map_err(|source| StoreError::CorruptData {
                key: NOTES_STORAGE_KEY,
                source,
            })?,
            None => Vec::new(),
        };
        self.hydrated = true;
        info!(
            "event=store_hydrate module=store status=ok count={}",
            self.notes.len()
        );
        Ok(())
    }

    /// Prepends a note, making it the most recent entry.
    ///
    /// No id uniqueness check is performed.
    pub fn add_note(&mut self, note: Note) -> StoreResult<()> {
        self.notes.insert(0, note);
        self.commit()
    }

    /// Replaces the first note whose id matches, preserving its position.
    ///
    /// Returns `Ok(false)` when no note matches; the list is left
    /// unchanged and nothing is written.
    pub fn update_note(&mut self, updated: Note) -> StoreResult<bool> {
        match self.notes.iter().position(|note| note.id == updated.id) {
            Some(index) => {
                self.notes[index] = updated;
                self.commit()?;
                Ok(true)
            }
            None => {
                debug!(
                    "event=store_update module=store status=miss id={}",
                    updated.id
                );
                Ok(false)
            }
        }
    }

    /// Removes every note with the given id and returns the removed count.
    ///
    /// An unknown id is a non-error no-op for the list; the current list
    /// is still written through.
    pub fn delete_note(&mut self, id: NoteId) -> StoreResult<usize> {
        let before = self.notes.len();
        self.notes.retain(|note| note.id != id);
        let removed = before - self.notes.len();
        self.commit()?;
        Ok(removed)
    }

    /// Edits the first note with the given id in place, then commits.
    ///
    /// This is the entry point for nested mutations (todo toggles, text
    /// edits) so they reach storage without any change diffing. Returns
    /// `Ok(false)` when no note matches.
    pub fn edit_note(&mut self, id: NoteId, edit: impl FnOnce(&mut Note)) -> StoreResult<bool> {
        match self.notes.iter_mut().find(|note| note.id == id) {
            Some(note) => {
                edit(note);
                self.commit()?;
                Ok(true)
            }
            None => {
                debug!("event=store_edit module=store status=miss id={id}");
                Ok(false)
            }
        }
    }

    /// Current note list, most recent first.
    pub fn notes(&self) -> &[Note] {
        &self.notes
    }

    /// Whether hydration has completed.
    pub fn is_hydrated(&self) -> bool {
        self.hydrated
    }

    /// Read access to the injected backend.
    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// Registers an observer called with the list after every commit.
    pub fn subscribe(&mut self, observer: impl FnMut(&[Note]) + 'static) {
        self.observers.push(Box::new(observer));
    }

    /// Serializes the full list to storage and notifies observers.
    ///
    /// Exactly one write per call; skipped (but still notifying) while
    /// the backend reports no storage access.
    fn commit(&mut self) -> StoreResult<()> {
        if self.backend.is_available() {
            let raw = serde_json::to_string(&self.notes).map_err(StoreError::Encode)?;
            self.backend.set(NOTES_STORAGE_KEY, &raw)?;
            debug!(
                "event=store_commit module=store status=ok count={}",
                self.notes.len()
            );
        } else {
            debug!("event=store_commit module=store status=skipped reason=storage_unavailable");
        }

        for observer in &mut self.observers {
            observer(&self.notes);
        }
        Ok(())
    }
}
