//! Todo record model.
//!
//! # Responsibility
//! - Define the persisted `{ id, text, completed }` record.
//! - Generate collision-resistant identifiers for new records.
//!
//! # Invariants
//! - `id` is non-empty and never changes after construction.
//! - `text` is trimmed and non-empty.
//! - Deserialized records go through the same checks as constructed ones.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::error::Error;
use std::fmt::{Display, Formatter};
use uuid::Uuid;

/// Opaque record identifier.
///
/// Persisted as a plain string, so identifiers produced by other generators
/// (for example millisecond timestamps) load unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TodoId(String);

impl TodoId {
    /// Generates a fresh random identifier.
    pub fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    /// Wraps an existing identifier.
    ///
    /// # Errors
    /// - Returns `TodoValidationError::EmptyId` for blank input.
    pub fn parse(value: impl Into<String>) -> Result<Self, TodoValidationError> {
        let value = value.into();
        if value.trim().is_empty() {
            return Err(TodoValidationError::EmptyId);
        }
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for TodoId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Record and list invariant violations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TodoValidationError {
    EmptyId,
    EmptyText,
    DuplicateId(TodoId),
}

impl Display for TodoValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyId => write!(f, "todo id must not be empty"),
            Self::EmptyText => write!(f, "todo text must not be empty after trimming"),
            Self::DuplicateId(id) => write!(f, "duplicate todo id `{id}`"),
        }
    }
}

impl Error for TodoValidationError {}

/// One todo entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "TodoRecord")]
pub struct Todo {
    pub id: TodoId,
    pub text: String,
    pub completed: bool,
}

impl Todo {
    /// Creates an open todo with a generated id.
    ///
    /// Returns `None` when `text` is blank after trimming.
    pub fn new(text: &str) -> Option<Self> {
        let text = normalize_text(text)?;
        Some(Self {
            id: TodoId::generate(),
            text,
            completed: false,
        })
    }

    /// Creates a todo with a caller-provided id.
    ///
    /// Used by import paths where the identity already exists.
    ///
    /// # Errors
    /// - Returns `TodoValidationError::EmptyText` for blank text.
    pub fn with_id(
        id: TodoId,
        text: &str,
        completed: bool,
    ) -> Result<Self, TodoValidationError> {
        let text = normalize_text(text).ok_or(TodoValidationError::EmptyText)?;
        Ok(Self {
            id,
            text,
            completed,
        })
    }

    /// Flips the completion flag.
    pub fn toggle(&mut self) {
        self.completed = !self.completed;
    }
}

/// Checks list-level invariants (unique ids).
///
/// # Errors
/// - Returns the first duplicated id in list order.
pub fn validate_list(todos: &[Todo]) -> Result<(), TodoValidationError> {
    let mut seen = HashSet::with_capacity(todos.len());
    for todo in todos {
        if !seen.insert(todo.id.as_str()) {
            return Err(TodoValidationError::DuplicateId(todo.id.clone()));
        }
    }
    Ok(())
}

// U+FEFF counts as blank too; `str::trim` keeps it.
fn normalize_text(text: &str) -> Option<String> {
    let trimmed = text.trim_matches(|c: char| c.is_whitespace() || c == '\u{feff}');
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

// Wire shape before invariant checks.
#[derive(Deserialize)]
struct TodoRecord {
    id: String,
    text: String,
    completed: bool,
}

impl TryFrom<TodoRecord> for Todo {
    type Error = TodoValidationError;

    fn try_from(value: TodoRecord) -> Result<Self, Self::Error> {
        let id = TodoId::parse(value.id)?;
        Self::with_id(id, &value.text, value.completed)
    }
}

#[cfg(test)]
mod tests {
    use super::{validate_list, Todo, TodoId, TodoValidationError};

    #[test]
    fn new_trims_text_and_starts_open() {
        let todo = Todo::new("  buy milk \n").expect("non-blank text");
        assert_eq!(todo.text, "buy milk");
        assert!(!todo.completed);
        assert!(!todo.id.as_str().is_empty());
    }

    #[test]
    fn new_rejects_blank_text() {
        assert!(Todo::new("   ").is_none());
        assert!(Todo::new("").is_none());
        assert!(Todo::new("\u{feff}").is_none());
        assert!(Todo::new(" \u{feff}\t").is_none());
    }

    #[test]
    fn new_strips_byte_order_marks() {
        let todo = Todo::new("\u{feff} tea \u{feff}").expect("non-blank text");
        assert_eq!(todo.text, "tea");
    }

    #[test]
    fn with_id_rejects_byte_order_mark_text() {
        let id = TodoId::parse("1").unwrap();
        assert_eq!(
            Todo::with_id(id, "\u{feff}", false),
            Err(TodoValidationError::EmptyText)
        );
    }

    #[test]
    fn generated_ids_are_distinct() {
        let first = TodoId::generate();
        let second = TodoId::generate();
        assert_ne!(first, second);
    }

    #[test]
    fn parse_rejects_blank_id() {
        assert_eq!(TodoId::parse(" "), Err(TodoValidationError::EmptyId));
    }

    #[test]
    fn validate_list_reports_duplicate() {
        let id = TodoId::parse("1700000000000").unwrap();
        let todos = vec![
            Todo::with_id(id.clone(), "a", false).unwrap(),
            Todo::with_id(id.clone(), "b", true).unwrap(),
        ];
        assert_eq!(
            validate_list(&todos),
            Err(TodoValidationError::DuplicateId(id))
        );
    }
}
