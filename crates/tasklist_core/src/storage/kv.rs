//! `KeyValueStore` backends.

use super::{KeyValueStore, StorageResult};
use crate::db::{open_db, open_db_in_memory};
use rusqlite::{params, Connection, OptionalExtension};
use std::collections::HashMap;
use std::path::Path;

/// Process-local store; contents vanish with the value.
#[derive(Debug, Clone, Default)]
pub struct MemoryKeyValueStore {
    items: HashMap<String, String>,
}

impl MemoryKeyValueStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seeds a store with one raw slot value.
    pub fn with_item(key: &str, value: &str) -> Self {
        let mut store = Self::new();
        store.items.insert(key.to_string(), value.to_string());
        store
    }

    /// Raw slot contents, for inspection.
    pub fn raw(&self, key: &str) -> Option<&str> {
        self.items.get(key).map(String::as_str)
    }
}

impl KeyValueStore for MemoryKeyValueStore {
    fn get_item(&self, key: &str) -> StorageResult<Option<String>> {
        Ok(self.items.get(key).cloned())
    }

    fn set_item(&mut self, key: &str, value: &str) -> StorageResult<()> {
        self.items.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// SQLite-backed store; one row per slot key in `kv_slots`.
pub struct SqliteKeyValueStore {
    conn: Connection,
}

impl SqliteKeyValueStore {
    /// Opens (and migrates) the slot database at `path`.
    pub fn open(path: impl AsRef<Path>) -> StorageResult<Self> {
        Ok(Self::new(open_db(path)?))
    }

    pub fn open_in_memory() -> StorageResult<Self> {
        Ok(Self::new(open_db_in_memory()?))
    }

    /// Wraps an already migrated connection.
    pub fn new(conn: Connection) -> Self {
        Self { conn }
    }
}

impl KeyValueStore for SqliteKeyValueStore {
    fn get_item(&self, key: &str) -> StorageResult<Option<String>> {
        let value = self
            .conn
            .query_row("SELECT value FROM kv_slots WHERE key = ?1;", [key], |row| {
                row.get::<_, String>(0)
            })
            .optional()?;
        Ok(value)
    }

    fn set_item(&mut self, key: &str, value: &str) -> StorageResult<()> {
        self.conn.execute(
            "INSERT INTO kv_slots (key, value) VALUES (?1, ?2)
             ON CONFLICT(key) DO UPDATE SET
                value = excluded.value,
                updated_at = (strftime('%s', 'now') * 1000);",
            params![key, value],
        )?;
        Ok(())
    }
}
