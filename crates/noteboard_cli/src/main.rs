//! CLI smoke entry point.
//!
//! # Responsibility
//! - Provide a minimal executable to verify `noteboard_core` linkage.
//! - Keep output deterministic for quick local sanity checks.

use noteboard_core::{MemoryBackend, Note, NoteStore, Todo};

fn main() {
    println!("noteboard_core ping={}", noteboard_core::ping());
    println!("noteboard_core version={}", noteboard_core::core_version());

    if let Err(err) = store_smoke() {
        eprintln!("noteboard_core store smoke failed: {err}");
        std::process::exit(1);
    }
}

fn store_smoke() -> noteboard_core::StoreResult<()> {
    let mut store = NoteStore::new(MemoryBackend::new());
    store.hydrate()?;

    let mut note = Note::new(1, "smoke");
    note.todos.push(Todo::new(1, "verify core wiring"));
    store.add_note(note)?;

    println!("noteboard_core notes={}", store.notes().len());
    Ok(())
}
