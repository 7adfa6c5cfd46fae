//! Domain model for notes and their todo items.
//!
//! # Responsibility
//! - Define the canonical data structures held by the note store.
//! - Keep serialized field names stable against the persisted JSON shape.
//!
//! # Invariants
//! - A `Note` owns its `todos` exclusively; todo items are never shared
//!   across notes.
//! - `todos` order is insertion order and is preserved end to end.

pub mod note;
