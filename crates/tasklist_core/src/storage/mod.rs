//! Durable slot storage for the todo list.
//!
//! # Responsibility
//! - Model the local key-value store as an injectable `KeyValueStore`.
//! - Expose `TodoStorage` (`load`/`save`) to the todo store, hiding the
//!   slot key and the JSON wire format.
//!
//! # Invariants
//! - Corrupt slots load as absent; only backend read failures are errors.
//! - `save` overwrites the whole slot; there are no partial writes.

use crate::db::DbError;
use crate::model::todo::Todo;
use std::error::Error;
use std::fmt::{Display, Formatter};

mod adapter;
mod kv;

pub use adapter::{decode_todos, encode_todos, SlotStorage, TODOS_SLOT_KEY};
pub use kv::{MemoryKeyValueStore, SqliteKeyValueStore};

pub type StorageResult<T> = Result<T, StorageError>;

/// Failures of the slot backend or the slot codec.
#[derive(Debug)]
pub enum StorageError {
    Db(DbError),
    Corrupt(String),
    Encode(String),
}

impl Display for StorageError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Db(err) => write!(f, "{err}"),
            Self::Corrupt(message) => write!(f, "corrupt slot data: {message}"),
            Self::Encode(message) => write!(f, "failed to encode slot data: {message}"),
        }
    }
}

impl Error for StorageError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Db(err) => Some(err),
            Self::Corrupt(_) | Self::Encode(_) => None,
        }
    }
}

impl From<DbError> for StorageError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for StorageError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}

/// Synchronous string key-value store, shaped like browser local storage.
pub trait KeyValueStore {
    fn get_item(&self, key: &str) -> StorageResult<Option<String>>;
    fn set_item(&mut self, key: &str, value: &str) -> StorageResult<()>;
}

/// Persistence contract consumed by `TodoStore`.
pub trait TodoStorage {
    /// Reads the persisted list; `Ok(None)` when absent or corrupt.
    ///
    /// # Errors
    /// - The backend could not be read. The slot may still hold valid data.
    fn load(&self) -> StorageResult<Option<Vec<Todo>>>;
    /// Replaces the persisted list with `todos`.
    fn save(&mut self, todos: &[Todo]) -> StorageResult<()>;
}
