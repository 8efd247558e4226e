//! Todo store: the single writer of the todo list.
//!
//! # Responsibility
//! - Hold the ordered in-memory list and apply add/toggle/delete.
//! - Hydrate from storage once, then persist after every change.
//!
//! # Invariants
//! - List order is insertion order.
//! - Ids stay unique; new ids come from `TodoId::generate`.
//! - Mutations never return errors: blank text, unknown ids and calls made
//!   before hydration are silent no-ops.
//! - Storage is written only when the list differs from the last snapshot
//!   that was saved successfully.
//! - After a failed storage read the slot is never written for the rest of
//!   the page lifecycle; it may still hold data this store has not seen.

use crate::hydration::HydrationGate;
use crate::model::todo::{Todo, TodoId};
use crate::storage::TodoStorage;
use log::{debug, error, info, warn};

/// Fire-and-forget command issued by the presentation layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TodoCommand {
    Add(String),
    Toggle(TodoId),
    Delete(TodoId),
}

/// Ordered todo list plus its persistence wiring.
pub struct TodoStore<S: TodoStorage> {
    todos: Vec<Todo>,
    storage: S,
    gate: HydrationGate,
    persisted: Option<Vec<Todo>>,
    read_failed: bool,
}

impl<S: TodoStorage> TodoStore<S> {
    /// Creates an empty, not yet hydrated store.
    pub fn new(storage: S) -> Self {
        Self {
            todos: Vec::new(),
            storage,
            gate: HydrationGate::new(),
            persisted: None,
            read_failed: false,
        }
    }

    /// Opens the hydration gate and loads persisted todos.
    ///
    /// Only the first call reads storage; later calls return `false` and leave
    /// state untouched. An absent or corrupt slot hydrates to an empty list,
    /// which is then written back so the slot holds valid data again. A failed
    /// read also hydrates to an empty list but leaves the slot alone.
    pub fn hydrate(&mut self) -> bool {
        if !self.gate.open() {
            return false;
        }

        match self.storage.load() {
            Ok(Some(todos)) => {
                info!(
                    "event=store_hydrate module=store status=ok source=storage count={}",
                    todos.len()
                );
                self.persisted = Some(todos.clone());
                self.todos = todos;
            }
            Ok(None) => {
                info!("event=store_hydrate module=store status=ok source=empty count=0");
                self.todos.clear();
            }
            Err(err) => {
                warn!(
                    "event=store_hydrate module=store status=degraded source=empty writes=suspended error={err}"
                );
                self.todos.clear();
                self.read_failed = true;
                return true;
            }
        }
        self.persist_if_changed();
        true
    }

    /// `true` when hydration could not read storage and writes are suspended.
    pub fn is_read_only(&self) -> bool {
        self.read_failed
    }

    pub fn is_hydrated(&self) -> bool {
        self.gate.is_hydrated()
    }

    pub fn gate(&self) -> HydrationGate {
        self.gate
    }

    /// Current list in insertion order.
    pub fn todos(&self) -> &[Todo] {
        &self.todos
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    /// Appends a new open todo with trimmed `text`.
    pub fn add(&mut self, text: &str) {
        if !self.accepts_mutation("add") {
            return;
        }
        let Some(todo) = Todo::new(text) else {
            debug!("event=todo_add module=store status=skipped reason=blank_text");
            return;
        };
        debug!("event=todo_add module=store status=ok id={}", todo.id);
        self.todos.push(todo);
        self.persist_if_changed();
    }

    /// Flips `completed` on the todo with `id`.
    pub fn toggle(&mut self, id: &str) {
        if !self.accepts_mutation("toggle") {
            return;
        }
        match self.todos.iter_mut().find(|todo| todo.id.as_str() == id) {
            Some(todo) => {
                todo.toggle();
                debug!(
                    "event=todo_toggle module=store status=ok id={id} completed={}",
                    todo.completed
                );
            }
            None => {
                debug!("event=todo_toggle module=store status=skipped reason=unknown_id");
                return;
            }
        }
        self.persist_if_changed();
    }

    /// Removes the todo with `id`.
    pub fn delete(&mut self, id: &str) {
        if !self.accepts_mutation("delete") {
            return;
        }
        let before = self.todos.len();
        self.todos.retain(|todo| todo.id.as_str() != id);
        if self.todos.len() == before {
            debug!("event=todo_delete module=store status=skipped reason=unknown_id");
            return;
        }
        debug!("event=todo_delete module=store status=ok id={id}");
        self.persist_if_changed();
    }

    /// Applies one presentation command.
    pub fn apply(&mut self, command: TodoCommand) {
        match command {
            TodoCommand::Add(text) => self.add(&text),
            TodoCommand::Toggle(id) => self.toggle(id.as_str()),
            TodoCommand::Delete(id) => self.delete(id.as_str()),
        }
    }

    /// `(completed, total)`, recomputed from the list on every call.
    pub fn derived_counts(&self) -> (usize, usize) {
        let completed = self.todos.iter().filter(|todo| todo.completed).count();
        (completed, self.todos.len())
    }

    fn accepts_mutation(&self, op: &str) -> bool {
        if self.gate.is_hydrated() {
            return true;
        }
        debug!("event=todo_{op} module=store status=skipped reason=not_hydrated");
        false
    }

    fn persist_if_changed(&mut self) {
        if self.read_failed {
            debug!("event=store_persist module=store status=skipped reason=read_failed");
            return;
        }
        if self.persisted.as_deref() == Some(self.todos.as_slice()) {
            return;
        }
        match self.storage.save(&self.todos) {
            Ok(()) => self.persisted = Some(self.todos.clone()),
            // Snapshot stays stale, so the next change retries the write.
            Err(err) => error!(
                "event=store_persist module=store status=error count={} error={err}",
                self.todos.len()
            ),
        }
    }
}
