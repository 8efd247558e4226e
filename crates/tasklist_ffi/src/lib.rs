//! Flutter-facing bindings for the tasklist core.

pub mod api;
