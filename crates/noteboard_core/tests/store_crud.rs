use noteboard_core::{MemoryBackend, Note, NoteStore, Todo};

fn store_with_notes(notes: Vec<Note>) -> NoteStore<MemoryBackend> {
    let mut store = NoteStore::new(MemoryBackend::new());
    store.hydrate().expect("empty backend should hydrate");
    for note in notes.into_iter().rev() {
        store.add_note(note).expect("seeding should succeed");
    }
    store
}

#[test]
fn add_note_prepends_most_recent_first() {
    let mut store = store_with_notes(vec![Note::new(1, "a"), Note::new(2, "b")]);

    store.add_note(Note::new(3, "newest")).unwrap();

    let ids: Vec<_> = store.notes().iter().map(|note| note.id).collect();
    assert_eq!(ids, vec![3, 1, 2]);
}

#[test]
fn add_note_does_not_enforce_id_uniqueness() {
    let mut store = store_with_notes(vec![Note::new(1, "a")]);
    store.add_note(Note::new(1, "duplicate")).unwrap();
    assert_eq!(store.notes().len(), 2);
}

#[test]
fn update_note_replaces_matching_entry_in_place() {
    let mut store = store_with_notes(vec![Note::new(1, "a"), Note::new(2, "b")]);

    let replaced = store
        .update_note(Note::with_todos(2, "X", vec![]))
        .unwrap();

    assert!(replaced);
    let ids: Vec<_> = store.notes().iter().map(|note| note.id).collect();
    assert_eq!(ids, vec![1, 2]);
    assert_eq!(store.notes()[0].title, "a");
    assert_eq!(store.notes()[1].title, "X");
}

#[test]
fn update_note_with_duplicate_ids_touches_first_occurrence_only() {
    let mut store = store_with_notes(vec![Note::new(1, "first"), Note::new(1, "second")]);

    store.update_note(Note::new(1, "patched")).unwrap();

    assert_eq!(store.notes()[0].title, "patched");
    assert_eq!(store.notes()[1].title, "second");
}

#[test]
fn update_note_miss_leaves_list_unchanged() {
    let mut store = store_with_notes(vec![Note::new(1, "a"), Note::new(2, "b")]);
    let snapshot = store.notes().to_vec();

    let replaced = store.update_note(Note::new(99, "ghost")).unwrap();

    assert!(!replaced);
    assert_eq!(store.notes(), snapshot.as_slice());
}

#[test]
fn delete_note_removes_all_matches() {
    let mut store = store_with_notes(vec![Note::new(1, "a"), Note::new(2, "b"), Note::new(1, "c")]);

    let removed = store.delete_note(1).unwrap();

    assert_eq!(removed, 2);
    let ids: Vec<_> = store.notes().iter().map(|note| note.id).collect();
    assert_eq!(ids, vec![2]);
}

#[test]
fn delete_note_unknown_id_is_a_non_error_no_op() {
    let mut store = store_with_notes(vec![Note::new(1, "a")]);

    let removed = store.delete_note(42).unwrap();

    assert_eq!(removed, 0);
    assert_eq!(store.notes().len(), 1);
}

#[test]
fn edit_note_mutates_nested_todo_in_place() {
    let note = Note::with_todos(5, "chores", vec![Todo::new(1, "dishes")]);
    let mut store = store_with_notes(vec![note]);

    let edited = store
        .edit_note(5, |note| {
            if let Some(todo) = note.todo_mut(1) {
                todo.toggle_completed();
            }
        })
        .unwrap();

    assert!(edited);
    assert!(store.notes()[0].todos[0].completed);
}

#[test]
fn edit_note_miss_reports_false() {
    let mut store = store_with_notes(vec![Note::new(1, "a")]);
    let edited = store.edit_note(9, |note| note.title.clear()).unwrap();
    assert!(!edited);
    assert_eq!(store.notes()[0].title, "a");
}
