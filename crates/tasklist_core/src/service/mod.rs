//! Use-case services over the todo list.
//!
//! # Responsibility
//! - Own application state and route every mutation through one writer.
//! - Keep presentation and FFI layers unaware of storage details.

pub mod todo_store;
