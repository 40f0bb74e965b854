//! In-memory state containers consumed by the presentation layer.
//!
//! # Responsibility
//! - Own the ordered note collection and its mutation API.
//! - Keep the single-slot edit mode structurally impossible to duplicate.
//!
//! # Invariants
//! - All mutations are synchronous `&mut self` calls; there is no interior
//!   mutability and no cross-thread sharing inside core.
//! - Invalid inputs fall back to silent no-ops, never errors.

pub mod note_store;
