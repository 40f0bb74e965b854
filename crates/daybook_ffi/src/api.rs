//! FFI use-case API for the mobile UI.
//!
//! # Responsibility
//! - Expose stable, use-case-level functions to Dart via FRB.
//! - Own the single process-wide [`AppShell`] behind a mutex.
//!
//! # Invariants
//! - Exported functions must not panic across the FFI boundary; lock
//!   poisoning surfaces through the envelope `message`.
//! - All calls are sync and complete immediately.

use daybook_core::{
    core_version as core_version_inner, init_logging as init_logging_inner, ping as ping_inner,
    AppShell, NoteId,
};
use std::sync::{Mutex, MutexGuard, OnceLock};

static SHELL: OnceLock<Mutex<AppShell>> = OnceLock::new();

const LOCK_POISONED: &str = "app state lock poisoned";

fn shell() -> Result<MutexGuard<'static, AppShell>, &'static str> {
    SHELL
        .get_or_init(|| Mutex::new(AppShell::new()))
        .lock()
        .map_err(|_| {
            log::warn!("event=shell_lock module=ffi status=error reason=poisoned");
            LOCK_POISONED
        })
}

/// Minimal health-check API for FRB smoke integration.
///
/// # FFI contract
/// - Sync call, non-blocking, UI-thread safe.
/// - Never throws; always returns a UTF-8 string.
#[flutter_rust_bridge::frb(sync)]
pub fn ping() -> String {
    ping_inner().to_owned()
}

/// Exposes the core crate version through FFI.
#[flutter_rust_bridge::frb(sync)]
pub fn core_version() -> String {
    core_version_inner().to_owned()
}

/// Initializes Rust core logging once per process.
///
/// # FFI contract
/// - Safe to call repeatedly with the same `level + log_dir` (idempotent).
/// - Reconfiguration attempts return the error message.
/// - Never panics; returns empty string on success.
#[flutter_rust_bridge::frb(sync)]
pub fn init_logging(level: String, log_dir: String) -> String {
    match init_logging_inner(level.as_str(), log_dir.as_str()) {
        Ok(()) => String::new(),
        Err(err) => err,
    }
}

/// Session state envelope for login/logout/status flows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionResponse {
    /// Whether the requested operation took effect.
    pub ok: bool,
    /// Authentication flag after the call.
    pub authenticated: bool,
    /// Human-readable message for diagnostics/UI.
    pub message: String,
}

/// One note row for list rendering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NoteItem {
    pub id: u32,
    pub title: String,
    /// Whether this note is the one currently in edit mode.
    pub editing: bool,
}

/// Note list envelope; `items` is empty when not authenticated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotesListResponse {
    pub ok: bool,
    pub items: Vec<NoteItem>,
    /// Draft text of the in-progress edit, if any.
    pub draft: Option<String>,
    pub message: String,
}

/// Generic action envelope for note mutations and edit-mode toggles.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NoteActionResponse {
    /// Whether the operation changed state (no-op fallbacks report `false`).
    pub ok: bool,
    /// Created/affected note id when one applies.
    pub note_id: Option<u32>,
    pub message: String,
}

impl NoteActionResponse {
    fn changed(message: impl Into<String>, note_id: Option<u32>) -> Self {
        Self {
            ok: true,
            note_id,
            message: message.into(),
        }
    }

    fn noop(message: impl Into<String>) -> Self {
        Self {
            ok: false,
            note_id: None,
            message: message.into(),
        }
    }
}

/// Attempts a login with the given pair.
///
/// # FFI contract
/// - `ok == false` with message `invalid credentials` on rejection; the
///   caller shows a generic notice, as the login screen does.
#[flutter_rust_bridge::frb(sync)]
pub fn login(username: String, password: String) -> SessionResponse {
    let mut shell = match shell() {
        Ok(shell) => shell,
        Err(err) => {
            return SessionResponse {
                ok: false,
                authenticated: false,
                message: err.to_string(),
            }
        }
    };

    let accepted = shell.login(&username, &password);
    SessionResponse {
        ok: accepted,
        authenticated: shell.is_authenticated(),
        message: if accepted {
            "logged in".to_string()
        } else {
            "invalid credentials".to_string()
        },
    }
}

/// Logs out unconditionally (idempotent).
#[flutter_rust_bridge::frb(sync)]
pub fn logout() -> SessionResponse {
    match shell() {
        Ok(mut shell) => {
            shell.logout();
            SessionResponse {
                ok: true,
                authenticated: false,
                message: "logged out".to_string(),
            }
        }
        Err(err) => SessionResponse {
            ok: false,
            authenticated: false,
            message: err.to_string(),
        },
    }
}

/// Pure read of the authentication flag.
#[flutter_rust_bridge::frb(sync)]
pub fn session_status() -> SessionResponse {
    match shell() {
        Ok(shell) => SessionResponse {
            ok: true,
            authenticated: shell.is_authenticated(),
            message: String::new(),
        },
        Err(err) => SessionResponse {
            ok: false,
            authenticated: false,
            message: err.to_string(),
        },
    }
}

/// Lists notes for the home screen.
///
/// # FFI contract
/// - While logged out, returns `ok == false` with an empty list; the UI
///   renders the login prompt instead.
#[flutter_rust_bridge::frb(sync)]
pub fn notes_list() -> NotesListResponse {
    let shell = match shell() {
        Ok(shell) => shell,
        Err(err) => {
            return NotesListResponse {
                ok: false,
                items: Vec::new(),
                draft: None,
                message: err.to_string(),
            }
        }
    };

    match shell.visible_notes() {
        Some(notes) => {
            let editing = shell.notes().editing();
            let editing_id = editing.map(|draft| draft.id);
            NotesListResponse {
                ok: true,
                items: notes
                    .iter()
                    .map(|note| NoteItem {
                        id: note.id,
                        title: note.title.clone(),
                        editing: editing_id == Some(note.id),
                    })
                    .collect(),
                draft: editing.map(|draft| draft.text.clone()),
                message: String::new(),
            }
        }
        None => NotesListResponse {
            ok: false,
            items: Vec::new(),
            draft: None,
            message: "not authenticated".to_string(),
        },
    }
}

/// Adds a note with the given title.
#[flutter_rust_bridge::frb(sync)]
pub fn note_add(title: String) -> NoteActionResponse {
    match shell() {
        Ok(mut shell) => match shell.notes_mut().add(&title) {
            Some(id) => NoteActionResponse::changed("note added", Some(id)),
            None => NoteActionResponse::noop("empty title"),
        },
        Err(err) => NoteActionResponse::noop(err),
    }
}

/// Replaces one note title in place.
#[flutter_rust_bridge::frb(sync)]
pub fn note_update(id: NoteId, title: String) -> NoteActionResponse {
    match shell() {
        Ok(mut shell) => {
            if shell.notes_mut().update(id, &title) {
                NoteActionResponse::changed("note updated", Some(id))
            } else {
                NoteActionResponse::noop("update discarded")
            }
        }
        Err(err) => NoteActionResponse::noop(err),
    }
}

/// Removes one note by id (idempotent).
#[flutter_rust_bridge::frb(sync)]
pub fn note_remove(id: NoteId) -> NoteActionResponse {
    match shell() {
        Ok(mut shell) => {
            if shell.notes_mut().remove(id) {
                NoteActionResponse::changed("note removed", Some(id))
            } else {
                NoteActionResponse::noop("unknown id")
            }
        }
        Err(err) => NoteActionResponse::noop(err),
    }
}

/// Starts editing one note, abandoning any other edit in progress.
#[flutter_rust_bridge::frb(sync)]
pub fn edit_begin(id: NoteId) -> NoteActionResponse {
    match shell() {
        Ok(mut shell) => {
            if shell.notes_mut().begin_edit(id) {
                NoteActionResponse::changed("editing", Some(id))
            } else {
                NoteActionResponse::noop("unknown id")
            }
        }
        Err(err) => NoteActionResponse::noop(err),
    }
}

/// Replaces the draft text of the active edit; a no-op without one.
#[flutter_rust_bridge::frb(sync)]
pub fn edit_set_draft(text: String) -> NoteActionResponse {
    match shell() {
        Ok(mut shell) => {
            if shell.notes_mut().set_draft(&text) {
                NoteActionResponse::changed("draft updated", None)
            } else {
                NoteActionResponse::noop("no edit in progress")
            }
        }
        Err(err) => NoteActionResponse::noop(err),
    }
}

/// Commits the active draft; empty drafts are discarded.
#[flutter_rust_bridge::frb(sync)]
pub fn edit_save() -> NoteActionResponse {
    match shell() {
        Ok(mut shell) => {
            if shell.notes_mut().save_edit() {
                NoteActionResponse::changed("edit saved", None)
            } else {
                NoteActionResponse::noop("edit discarded")
            }
        }
        Err(err) => NoteActionResponse::noop(err),
    }
}

/// Leaves edit mode without saving; a no-op when nothing is being edited.
#[flutter_rust_bridge::frb(sync)]
pub fn edit_cancel() -> NoteActionResponse {
    match shell() {
        Ok(mut shell) => {
            if shell.notes_mut().cancel_edit() {
                NoteActionResponse::changed("edit cancelled", None)
            } else {
                NoteActionResponse::noop("no edit in progress")
            }
        }
        Err(err) => NoteActionResponse::noop(err),
    }
}
