//! FFI crate exposing the Daybook core to the mobile UI.

pub mod api;
