//! Core domain logic for Daybook.
//! This crate is the single source of truth for business invariants.

pub mod logging;
pub mod model;
pub mod session;
pub mod shell;
pub mod store;

pub use logging::{default_log_level, init_logging, logging_status};
pub use model::note::{is_acceptable_title, next_note_id, Note, NoteId, FIRST_NOTE_ID};
pub use session::store::SessionStore;
pub use session::verifier::{
    CredentialVerifier, FixedCredentials, DEFAULT_PASSWORD, DEFAULT_USERNAME,
};
pub use shell::AppShell;
pub use store::note_store::{EditDraft, NoteStore};

/// Minimal health-check API for early integration.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
