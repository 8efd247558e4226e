//! Presentation layer: pure projections of store state into view models.
//!
//! # Responsibility
//! - Render the page as a placeholder until hydration, then as the list.
//! - Translate user input into `TodoCommand`s; never touch the list itself.
//!
//! # Invariants
//! - `render_page` output before hydration does not depend on storage.
//! - Counts are derived from the store on every render.

use crate::service::todo_store::TodoStore;
use crate::storage::TodoStorage;

mod config_panel;
mod form;
mod text;

pub use config_panel::{render_config_panel, ConfigEntryView, ConfigPanelView};
pub use form::AddTodoForm;
pub use text::render_page_text;

pub const PAGE_HEADING: &str = "My Todo List";
pub const PAGE_TAGLINE: &str = "Stay organized and get things done";
pub const CARD_TITLE: &str = "Todo List";
pub const LOADING_DESCRIPTION: &str = "Loading...";
pub const LOADING_BODY: &str = "Loading your todos...";
pub const ADD_PLACEHOLDER: &str = "Add a new todo...";
pub const NO_TASKS_HEADER: &str = "No tasks yet. Add one to get started!";
pub const EMPTY_LIST_TITLE: &str = "Your todo list is empty";
pub const EMPTY_LIST_HINT: &str = "Add a task above to get started!";

/// Whole-page view model.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PageView {
    /// Pre-hydration placeholder; identical for every persisted state.
    Loading(LoadingView),
    Ready(TodoListView),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadingView {
    pub title: &'static str,
    pub description: &'static str,
    pub body: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TodoListView {
    pub title: &'static str,
    pub header: String,
    pub input_placeholder: &'static str,
    pub items: Vec<TodoItemView>,
    /// Set only when `items` is empty.
    pub empty_state: Option<EmptyStateView>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TodoItemView {
    pub id: String,
    pub text: String,
    pub completed: bool,
    /// Completed items render dimmed with struck-through text.
    pub struck: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmptyStateView {
    pub title: &'static str,
    pub hint: &'static str,
}

/// Header line for the list card.
pub fn header_text(completed: usize, total: usize) -> String {
    if total > 0 {
        format!("{completed} of {total} tasks completed")
    } else {
        NO_TASKS_HEADER.to_string()
    }
}

/// Projects the store into a page view.
pub fn render_page<S: TodoStorage>(store: &TodoStore<S>) -> PageView {
    if !store.is_hydrated() {
        return PageView::Loading(LoadingView {
            title: CARD_TITLE,
            description: LOADING_DESCRIPTION,
            body: LOADING_BODY,
        });
    }

    let (completed, total) = store.derived_counts();
    let items = store
        .todos()
        .iter()
        .map(|todo| TodoItemView {
            id: todo.id.to_string(),
            text: todo.text.clone(),
            completed: todo.completed,
            struck: todo.completed,
        })
        .collect::<Vec<_>>();
    let empty_state = items.is_empty().then_some(EmptyStateView {
        title: EMPTY_LIST_TITLE,
        hint: EMPTY_LIST_HINT,
    });

    PageView::Ready(TodoListView {
        title: CARD_TITLE,
        header: header_text(completed, total),
        input_placeholder: ADD_PLACEHOLDER,
        items,
        empty_state,
    })
}
