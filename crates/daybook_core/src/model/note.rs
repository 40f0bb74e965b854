//! Note domain model.
//!
//! # Responsibility
//! - Define the note record rendered in the home-screen list.
//! - Own the id allocation rule and the title acceptance rule.
//!
//! # Invariants
//! - `id` is unique among the notes of one collection at any time.
//! - Titles are accepted only when non-empty after trimming; the untrimmed
//!   value is what gets stored.

use serde::{Deserialize, Serialize};

/// Integer identifier of a note, unique within one collection.
///
/// Kept as a type alias to make semantic intent explicit in signatures.
pub type NoteId = u32;

/// Id handed out for the first note of an empty collection.
pub const FIRST_NOTE_ID: NoteId = 1;

/// A user-created titled list item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Note {
    /// Collection-unique id assigned at creation time.
    pub id: NoteId,
    /// User-entered title, stored exactly as typed (untrimmed).
    pub title: String,
}

impl Note {
    /// Creates a note with a caller-provided id.
    ///
    /// Id allocation lives with the collection (`next_note_id`); this
    /// constructor does not check uniqueness or title validity.
    pub fn new(id: NoteId, title: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
        }
    }
}

/// Returns whether `title` is acceptable for create or save.
///
/// Whitespace-only input is rejected; anything else passes. No further
/// validation is applied.
pub fn is_acceptable_title(title: &str) -> bool {
    !title.trim().is_empty()
}

/// Allocates the next note id as `max(existing ids) + 1`, or
/// [`FIRST_NOTE_ID`] when the collection is empty.
///
/// Removing the highest-id note and adding again hands the same id out a
/// second time. That reuse is part of the observable contract; callers that
/// need globally stable identity must not rely on this scheme.
pub fn next_note_id(notes: &[Note]) -> NoteId {
    notes
        .iter()
        .map(|note| note.id)
        .max()
        .map_or(FIRST_NOTE_ID, |highest| highest + 1)
}
