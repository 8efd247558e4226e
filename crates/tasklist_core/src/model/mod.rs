//! Domain model for the todo list.
//!
//! # Responsibility
//! - Define the canonical todo record shared by store, storage and views.
//! - Keep record-level invariants next to the data they protect.
//!
//! # Invariants
//! - Every record is identified by a stable, non-empty `TodoId`.
//! - Record text is trimmed and never empty.

pub mod todo;
