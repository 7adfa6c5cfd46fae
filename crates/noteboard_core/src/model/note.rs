//! Note/todo domain records.
//!
//! # Responsibility
//! - Define the `Note` and `Todo` shapes persisted as a single JSON list.
//! - Provide small lifecycle helpers for the todo editing workflow.
//!
//! # Invariants
//! - `id` uniqueness is assumed by callers, not enforced here; lookup
//!   helpers match the first occurrence.
//! - `edit_text`/`is_editing` are transient UI staging fields and are
//!   omitted from serialized output while unset.

use serde::{Deserialize, Serialize};

/// Integer identifier for a note, expected unique across the note list.
pub type NoteId = i64;

/// Integer identifier for a todo, unique within its parent note.
pub type TodoId = i64;

/// A single task belonging to a note.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Todo {
    pub id: TodoId,
    /// Display text for the task.
    pub text: String,
    /// Staging text while the task is being edited.
    #[serde(rename = "editText", default, skip_serializing_if = "Option::is_none")]
    pub edit_text: Option<String>,
    pub completed: bool,
    /// Transient UI edit-mode flag.
    #[serde(rename = "isEditing", default, skip_serializing_if = "Option::is_none")]
    pub is_editing: Option<bool>,
}

impl Todo {
    /// Creates an open todo with no transient editing state.
    pub fn new(id: TodoId, text: impl Into<String>) -> Self {
        Self {
            id,
            text: text.into(),
            edit_text: None,
            completed: false,
            is_editing: None,
        }
    }

    /// Flips the completion flag.
    pub fn toggle_completed(&mut self) {
        self.completed = !self.completed;
    }

    /// Enters edit mode, staging the current text for in-place editing.
    pub fn begin_edit(&mut self) {
        self.edit_text = Some(self.text.clone());
        self.is_editing = Some(true);
    }

    /// Commits staged text (when any) and leaves edit mode.
    pub fn commit_edit(&mut self) {
        if let Some(staged) = self.edit_text.take() {
            self.text = staged;
        }
        self.is_editing = None;
    }

    /// Discards staged text and leaves edit mode.
    pub fn cancel_edit(&mut self) {
        self.edit_text = None;
        self.is_editing = None;
    }
}

/// A titled container of tasks.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Note {
    pub id: NoteId,
    pub title: String,
    /// Ordered task list; order reflects UI display order.
    pub todos: Vec<Todo>,
}

impl Note {
    /// Creates a note with an empty task list.
    pub fn new(id: NoteId, title: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
            todos: Vec::new(),
        }
    }

    /// Creates a note with a pre-filled task list.
    pub fn with_todos(id: NoteId, title: impl Into<String>, todos: Vec<Todo>) -> Self {
        Self {
            id,
            title: title.into(),
            todos,
        }
    }

    /// Returns the first todo with the given id.
    pub fn todo(&self, id: TodoId) -> Option<&Todo> {
        self.todos.iter().find(|todo| todo.id == id)
    }

    /// Returns the first todo with the given id for in-place editing.
    pub fn todo_mut(&mut self, id: TodoId) -> Option<&mut Todo> {
        self.todos.iter_mut().find(|todo| todo.id == id)
    }
}
