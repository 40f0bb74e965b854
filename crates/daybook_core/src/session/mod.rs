//! Session state machine and credential verification.
//!
//! # Responsibility
//! - Hold the single authentication flag gating the note UI.
//! - Keep credential checking behind a trait so the fixed demo pair can be
//!   swapped for a real backend without touching the state machine.
//!
//! # Invariants
//! - `authenticated` moves `false -> true` only through a successful
//!   `login`, and `true -> false` only through `logout`.
//! - Credential values are never logged.

pub mod store;
pub mod verifier;
