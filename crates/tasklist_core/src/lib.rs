//! Core logic for the tasklist app.
//! The todo store here is the only writer of application state; UI shells
//! render view models and send commands.

pub mod config;
pub mod db;
pub mod hydration;
pub mod logging;
pub mod model;
pub mod service;
pub mod storage;
pub mod view;

pub use config::{ConfigValidation, ContractAddresses, ContractName, DAppConfig, NetworkConfig};
pub use hydration::HydrationGate;
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::todo::{Todo, TodoId, TodoValidationError};
pub use service::todo_store::{TodoCommand, TodoStore};
pub use storage::{
    KeyValueStore, MemoryKeyValueStore, SlotStorage, SqliteKeyValueStore, StorageError,
    StorageResult, TodoStorage, TODOS_SLOT_KEY,
};
pub use view::{render_page, AddTodoForm, PageView};

/// Minimal health-check API for shell wiring.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::{core_version, ping};

    #[test]
    fn ping_returns_pong() {
        assert_eq!(ping(), "pong");
    }

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
