//! Note collection store and edit-mode tracking.
//!
//! # Responsibility
//! - Provide add/update/remove over the ordered in-memory note list.
//! - Track the single in-progress edit as one optional draft value.
//!
//! # Invariants
//! - No two notes share an id at any time; ids come from `next_note_id`.
//! - Collection order is insertion order; `update` preserves position.
//! - At most one note is in edit mode; starting a new edit abandons the
//!   previous draft without saving.

use crate::model::note::{is_acceptable_title, next_note_id, Note, NoteId};
use log::{debug, info};
use serde::{Deserialize, Serialize};

/// The one in-progress edit: which note, and the draft text typed so far.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EditDraft {
    /// Id of the note being edited.
    pub id: NoteId,
    /// Current draft text, seeded from the note title at `begin_edit`.
    pub text: String,
}

/// Ordered in-memory note collection with single-slot edit mode.
///
/// Every operation completes immediately; invalid input (empty trimmed
/// title, unknown id) is a silent no-op observable through the return
/// value. Contents live only in process memory.
#[derive(Debug, Clone, Default)]
pub struct NoteStore {
    notes: Vec<Note>,
    editing: Option<EditDraft>,
}

impl NoteStore {
    /// Creates an empty store with no edit in progress.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a note with the next available id.
    ///
    /// # Contract
    /// - Whitespace-only `title` is a no-op returning `None`.
    /// - Otherwise stores the untrimmed title under `max(ids)+1` (or 1 on
    ///   an empty collection) and returns the new id.
    pub fn add(&mut self, title: &str) -> Option<NoteId> {
        if !is_acceptable_title(title) {
            debug!("event=note_add module=notes status=noop reason=empty_title");
            return None;
        }

        let id = next_note_id(&self.notes);
        self.notes.push(Note::new(id, title));
        info!(
            "event=note_add module=notes status=ok id={id} title_len={}",
            title.len()
        );
        Some(id)
    }

    /// Replaces the title of the note with `id`, in place.
    ///
    /// # Contract
    /// - Unknown id or whitespace-only `new_title` is a no-op returning
    ///   `false` (a discarded edit, not an error).
    /// - Id and list position are preserved on success.
    pub fn update(&mut self, id: NoteId, new_title: &str) -> bool {
        if !is_acceptable_title(new_title) {
            debug!("event=note_update module=notes status=noop reason=empty_title id={id}");
            return false;
        }

        match self.notes.iter_mut().find(|note| note.id == id) {
            Some(note) => {
                note.title = new_title.to_string();
                info!(
                    "event=note_update module=notes status=ok id={id} title_len={}",
                    new_title.len()
                );
                true
            }
            None => {
                debug!("event=note_update module=notes status=noop reason=unknown_id id={id}");
                false
            }
        }
    }

    /// Deletes the note with `id` if present.
    ///
    /// Returns whether a note was removed; a second call with the same id
    /// is a no-op, not an error.
    pub fn remove(&mut self, id: NoteId) -> bool {
        let before = self.notes.len();
        self.notes.retain(|note| note.id != id);
        let removed = self.notes.len() < before;
        if removed {
            info!("event=note_remove module=notes status=ok id={id}");
        } else {
            debug!("event=note_remove module=notes status=noop reason=unknown_id id={id}");
        }
        removed
    }

    /// Pure read of one note by id.
    pub fn get(&self, id: NoteId) -> Option<&Note> {
        self.notes.iter().find(|note| note.id == id)
    }

    /// Pure read of the whole collection in insertion order.
    pub fn notes(&self) -> &[Note] {
        &self.notes
    }

    /// Number of notes in the collection.
    pub fn len(&self) -> usize {
        self.notes.len()
    }

    /// Whether the collection holds no notes.
    pub fn is_empty(&self) -> bool {
        self.notes.is_empty()
    }

    /// Starts editing the note with `id`, seeding the draft from its
    /// current title.
    ///
    /// Any edit already in progress on another note is silently abandoned.
    /// Unknown id is a no-op returning `false`.
    pub fn begin_edit(&mut self, id: NoteId) -> bool {
        match self.get(id) {
            Some(note) => {
                self.editing = Some(EditDraft {
                    id,
                    text: note.title.clone(),
                });
                debug!("event=edit_begin module=notes status=ok id={id}");
                true
            }
            None => {
                debug!("event=edit_begin module=notes status=noop reason=unknown_id id={id}");
                false
            }
        }
    }

    /// Replaces the draft text of the active edit.
    ///
    /// Returns whether a draft was active; with no edit in progress the
    /// call is a no-op returning `false`.
    pub fn set_draft(&mut self, text: &str) -> bool {
        match self.editing.as_mut() {
            Some(draft) => {
                draft.text = text.to_string();
                true
            }
            None => false,
        }
    }

    /// Commits the active draft through the `update` contract and leaves
    /// edit mode.
    ///
    /// A whitespace-only draft, or a draft for a note removed since
    /// `begin_edit`, is discarded. Returns whether a title changed.
    pub fn save_edit(&mut self) -> bool {
        match self.editing.take() {
            Some(draft) => self.update(draft.id, &draft.text),
            None => false,
        }
    }

    /// Leaves edit mode, discarding the draft.
    ///
    /// Returns whether an edit was in progress; calling again is a no-op
    /// returning `false`.
    pub fn cancel_edit(&mut self) -> bool {
        match self.editing.take() {
            Some(_) => {
                debug!("event=edit_cancel module=notes status=ok");
                true
            }
            None => false,
        }
    }

    /// Pure read of the in-progress edit, if any.
    pub fn editing(&self) -> Option<&EditDraft> {
        self.editing.as_ref()
    }
}
