//! Application shell composing the session and note stores.
//!
//! # Responsibility
//! - Wire the two independent state containers the way the app's provider
//!   tree does, so UI-facing layers hold one value.
//! - Seed the welcome notes once, on the first successful login.
//! - Gate note reads behind the authentication flag.
//!
//! # Invariants
//! - The stores stay independent: logout never clears notes.
//! - Seeding runs at most once per shell and only into an empty collection.

use crate::model::note::Note;
use crate::session::store::SessionStore;
use crate::store::note_store::NoteStore;
use log::info;

/// Titles planted on first login, matching the app's welcome content.
const WELCOME_TITLES: [&str; 2] = ["Note 1", "Note 2"];

/// One session store plus one note store, with login-triggered seeding.
///
/// The shell is the unit UI-facing layers own: the FFI surface keeps a
/// single process-wide instance, the CLI builds a local one.
#[derive(Debug, Clone, Default)]
pub struct AppShell {
    session: SessionStore,
    notes: NoteStore,
    seeded: bool,
}

impl AppShell {
    /// Creates a logged-out shell with an empty, unseeded collection.
    pub fn new() -> Self {
        Self::default()
    }

    /// Attempts a login; on first success into an empty collection, plants
    /// the welcome notes.
    pub fn login(&mut self, username: &str, password: &str) -> bool {
        let accepted = self.session.login(username, password);
        if accepted {
            self.seed_welcome_notes();
        }
        accepted
    }

    /// Logs out. Notes stay in memory; only the flag is cleared.
    pub fn logout(&mut self) {
        self.session.logout();
    }

    pub fn is_authenticated(&self) -> bool {
        self.session.is_authenticated()
    }

    /// Notes visible to the UI: `None` while logged out.
    ///
    /// This is the only coupling between the two stores, mirroring the
    /// screen-level gate of the app.
    pub fn visible_notes(&self) -> Option<&[Note]> {
        if self.session.is_authenticated() {
            Some(self.notes.notes())
        } else {
            None
        }
    }

    /// Direct access to the note store for mutation calls.
    pub fn notes_mut(&mut self) -> &mut NoteStore {
        &mut self.notes
    }

    /// Read access to the note store (ungated; UI uses `visible_notes`).
    pub fn notes(&self) -> &NoteStore {
        &self.notes
    }

    fn seed_welcome_notes(&mut self) {
        if self.seeded || !self.notes.is_empty() {
            return;
        }
        for title in WELCOME_TITLES {
            self.notes.add(title);
        }
        self.seeded = true;
        info!(
            "event=seed_welcome module=shell status=ok count={}",
            WELCOME_TITLES.len()
        );
    }
}
