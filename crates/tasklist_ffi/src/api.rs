//! FFI page API for the Flutter UI host.
//!
//! # Responsibility
//! - Hold the one page-scoped todo store for this process.
//! - Expose mount/render/command calls that return flat view envelopes.
//!
//! # Invariants
//! - Exported functions never panic across the FFI boundary.
//! - Commands are fire-and-forget; the returned page is a fresh render, not a
//!   result of the command.
//! - Storage is read only by the first `page_mount` call.

use log::warn;
use std::path::PathBuf;
use std::sync::{Mutex, OnceLock, PoisonError};
use tasklist_core::view::{render_config_panel, render_page, PageView};
use tasklist_core::{
    core_version as core_version_inner, init_logging as init_logging_inner, ping as ping_inner,
    DAppConfig, SlotStorage, SqliteKeyValueStore, TodoCommand, TodoId, TodoStore,
};

const PAGE_DB_FILE_NAME: &str = "tasklist_slots.sqlite3";

type PageStore = TodoStore<SlotStorage<SqliteKeyValueStore>>;

static PAGE_DB_PATH: OnceLock<PathBuf> = OnceLock::new();
static PAGE: OnceLock<Mutex<Option<PageStore>>> = OnceLock::new();

/// Minimal health-check API for FRB smoke integration.
///
/// # FFI contract
/// - Sync call, non-blocking.
/// - Never throws; always returns a UTF-8 string.
#[flutter_rust_bridge::frb(sync)]
pub fn ping() -> String {
    ping_inner().to_owned()
}

/// Core crate version.
#[flutter_rust_bridge::frb(sync)]
pub fn core_version() -> String {
    core_version_inner().to_owned()
}

/// Initializes core logging once per process.
///
/// Returns an empty string on success, otherwise the error message.
#[flutter_rust_bridge::frb(sync)]
pub fn init_logging(level: String, log_dir: String) -> String {
    match init_logging_inner(level.as_str(), log_dir.as_str()) {
        Ok(()) => String::new(),
        Err(err) => err,
    }
}

/// One rendered todo row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TodoItemResponse {
    pub id: String,
    pub text: String,
    pub completed: bool,
}

/// Flat page envelope for the UI host.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageResponse {
    /// `false` while the page shows the loading placeholder.
    pub hydrated: bool,
    pub title: String,
    /// Count header once hydrated, loading description before.
    pub header: String,
    pub items: Vec<TodoItemResponse>,
    /// Empty-state or loading lines; empty when items are shown.
    pub notice: Vec<String>,
    /// Non-empty when the page store could not be opened.
    pub message: String,
}

impl PageResponse {
    fn from_view(view: PageView) -> Self {
        match view {
            PageView::Loading(loading) => Self {
                hydrated: false,
                title: loading.title.to_string(),
                header: loading.description.to_string(),
                items: Vec::new(),
                notice: vec![loading.body.to_string()],
                message: String::new(),
            },
            PageView::Ready(list) => Self {
                hydrated: true,
                title: list.title.to_string(),
                header: list.header,
                items: list
                    .items
                    .into_iter()
                    .map(|item| TodoItemResponse {
                        id: item.id,
                        text: item.text,
                        completed: item.completed,
                    })
                    .collect(),
                notice: list
                    .empty_state
                    .map(|empty| vec![empty.title.to_string(), empty.hint.to_string()])
                    .unwrap_or_default(),
                message: String::new(),
            },
        }
    }

    fn failure(message: String) -> Self {
        Self {
            hydrated: false,
            title: String::new(),
            header: String::new(),
            items: Vec::new(),
            notice: Vec::new(),
            message,
        }
    }
}

/// Read-only configuration panel envelope.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigPanelResponse {
    pub title: String,
    /// Row labels; `values[i]` belongs to `labels[i]`.
    pub labels: Vec<String>,
    pub values: Vec<String>,
    pub warnings: Vec<String>,
}

/// Renders the page without touching storage.
///
/// Before `page_mount` this is always the loading placeholder.
#[flutter_rust_bridge::frb(sync)]
pub fn page_render() -> PageResponse {
    with_page(|store| render_page(store))
}

/// Opens the hydration gate after the host's first paint.
///
/// Safe to call repeatedly; only the first call loads storage.
#[flutter_rust_bridge::frb(sync)]
pub fn page_mount() -> PageResponse {
    with_page(|store| {
        store.hydrate();
        render_page(store)
    })
}

#[flutter_rust_bridge::frb(sync)]
pub fn todo_add(text: String) -> PageResponse {
    dispatch(TodoCommand::Add(text))
}

#[flutter_rust_bridge::frb(sync)]
pub fn todo_toggle(id: String) -> PageResponse {
    match TodoId::parse(id) {
        Ok(id) => dispatch(TodoCommand::Toggle(id)),
        Err(_) => page_render(),
    }
}

#[flutter_rust_bridge::frb(sync)]
pub fn todo_delete(id: String) -> PageResponse {
    match TodoId::parse(id) {
        Ok(id) => dispatch(TodoCommand::Delete(id)),
        Err(_) => page_render(),
    }
}

/// Environment-derived configuration with validation warnings.
#[flutter_rust_bridge::frb(sync)]
pub fn config_panel() -> ConfigPanelResponse {
    let panel = render_config_panel(&DAppConfig::from_env());
    let (labels, values) = panel
        .entries
        .into_iter()
        .map(|entry| (entry.label, entry.value))
        .unzip();
    ConfigPanelResponse {
        title: panel.title,
        labels,
        values,
        warnings: panel.warnings,
    }
}

fn dispatch(command: TodoCommand) -> PageResponse {
    with_page(|store| {
        store.apply(command);
        render_page(store)
    })
}

fn with_page(f: impl FnOnce(&mut PageStore) -> PageView) -> PageResponse {
    let mut guard = PAGE
        .get_or_init(|| Mutex::new(None))
        .lock()
        .unwrap_or_else(PoisonError::into_inner);

    if guard.is_none() {
        let db_path = resolve_page_db_path();
        match SqliteKeyValueStore::open(&db_path) {
            Ok(backend) => *guard = Some(TodoStore::new(SlotStorage::new(backend))),
            Err(err) => {
                warn!("event=page_open module=ffi status=error error={err}");
                return PageResponse::failure(format!("page store open failed: {err}"));
            }
        }
    }

    match guard.as_mut() {
        Some(store) => PageResponse::from_view(f(store)),
        None => PageResponse::failure("page store unavailable".to_string()),
    }
}

fn resolve_page_db_path() -> PathBuf {
    PAGE_DB_PATH
        .get_or_init(|| {
            if let Ok(raw) = std::env::var("TASKLIST_DB_PATH") {
                let trimmed = raw.trim();
                if !trimmed.is_empty() {
                    return PathBuf::from(trimmed);
                }
            }
            std::env::temp_dir().join(PAGE_DB_FILE_NAME)
        })
        .clone()
}
