//! Domain model for the Daybook core.
//!
//! # Responsibility
//! - Define the canonical data structures shared by session and note logic.
//! - Keep one record shape for everything the home screen renders.
//!
//! # Invariants
//! - Every note carries a collection-unique integer `NoteId`.
//! - A stored title is never empty after trimming.

pub mod note;
