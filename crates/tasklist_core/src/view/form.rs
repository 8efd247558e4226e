//! Add-todo input form state.

use crate::service::todo_store::TodoCommand;

/// Editable input buffer behind the add form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AddTodoForm {
    input: String,
}

impl AddTodoForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    /// Replaces the buffer, as on every keystroke.
    pub fn set_input(&mut self, value: impl Into<String>) {
        self.input = value.into();
    }

    /// Submits the form.
    ///
    /// Blank input yields `None` and keeps the buffer; otherwise the trimmed
    /// text becomes an add command and the buffer is cleared.
    pub fn submit(&mut self) -> Option<TodoCommand> {
        let trimmed = self.input.trim();
        if trimmed.is_empty() {
            return None;
        }
        let command = TodoCommand::Add(trimmed.to_string());
        self.input.clear();
        Some(command)
    }
}
