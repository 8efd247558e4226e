//! JSON slot adapter: `TodoStorage` over any `KeyValueStore`.

use super::{KeyValueStore, StorageError, StorageResult, TodoStorage};
use crate::model::todo::{validate_list, Todo};
use log::{debug, error, warn};

/// Slot key holding the serialized list.
pub const TODOS_SLOT_KEY: &str = "todos";

/// Stores the whole list as one JSON array under a single key.
#[derive(Debug, Clone)]
pub struct SlotStorage<S: KeyValueStore> {
    backend: S,
    key: String,
}

impl<S: KeyValueStore> SlotStorage<S> {
    /// Uses the default `todos` slot.
    pub fn new(backend: S) -> Self {
        Self::with_key(backend, TODOS_SLOT_KEY)
    }

    pub fn with_key(backend: S, key: impl Into<String>) -> Self {
        Self {
            backend,
            key: key.into(),
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn backend(&self) -> &S {
        &self.backend
    }

    pub fn backend_mut(&mut self) -> &mut S {
        &mut self.backend
    }
}

impl<S: KeyValueStore> TodoStorage for SlotStorage<S> {
    fn load(&self) -> StorageResult<Option<Vec<Todo>>> {
        let raw = match self.backend.get_item(&self.key) {
            Ok(Some(raw)) => raw,
            Ok(None) => {
                debug!("event=slot_load module=storage status=absent key={}", self.key);
                return Ok(None);
            }
            Err(err) => {
                warn!(
                    "event=slot_load module=storage status=error key={} error={err}",
                    self.key
                );
                return Err(err);
            }
        };

        match decode_todos(&raw) {
            Ok(todos) => {
                debug!(
                    "event=slot_load module=storage status=ok key={} count={}",
                    self.key,
                    todos.len()
                );
                Ok(Some(todos))
            }
            Err(err) => {
                error!(
                    "event=slot_load module=storage status=corrupt key={} bytes={} error={err}",
                    self.key,
                    raw.len()
                );
                Ok(None)
            }
        }
    }

    fn save(&mut self, todos: &[Todo]) -> StorageResult<()> {
        let raw = encode_todos(todos)?;
        self.backend.set_item(&self.key, &raw)?;
        debug!(
            "event=slot_save module=storage status=ok key={} count={}",
            self.key,
            todos.len()
        );
        Ok(())
    }
}

/// Serializes a list into the slot wire format.
pub fn encode_todos(todos: &[Todo]) -> StorageResult<String> {
    serde_json::to_string(todos).map_err(|err| StorageError::Encode(err.to_string()))
}

/// Parses the slot wire format.
///
/// # Errors
/// - `StorageError::Corrupt` for non-JSON input, a non-array root, records
///   missing `id`/`text`/`completed` or carrying wrong types, blank text or
///   ids, and duplicate ids.
pub fn decode_todos(raw: &str) -> StorageResult<Vec<Todo>> {
    let todos: Vec<Todo> =
        serde_json::from_str(raw).map_err(|err| StorageError::Corrupt(err.to_string()))?;
    validate_list(&todos).map_err(|err| StorageError::Corrupt(err.to_string()))?;
    Ok(todos)
}

#[cfg(test)]
mod tests {
    use super::{decode_todos, encode_todos};
    use crate::model::todo::{Todo, TodoId};
    use crate::storage::StorageError;

    #[test]
    fn encode_uses_plain_field_names() {
        let todo = Todo::with_id(TodoId::parse("42").unwrap(), "walk dog", true).unwrap();
        let raw = encode_todos(&[todo]).unwrap();
        assert_eq!(raw, r#"[{"id":"42","text":"walk dog","completed":true}]"#);
    }

    #[test]
    fn decode_accepts_timestamp_ids_and_extra_fields() {
        let raw = r#"[{"id":"1700000000000","text":"x","completed":false,"extra":1}]"#;
        let todos = decode_todos(raw).unwrap();
        assert_eq!(todos.len(), 1);
        assert_eq!(todos[0].id.as_str(), "1700000000000");
    }

    #[test]
    fn decode_rejects_wrong_shapes() {
        for raw in [
            "not json",
            "null",
            "{}",
            r#"[{"id":"1","text":"x"}]"#,
            r#"[{"id":1,"text":"x","completed":false}]"#,
            r#"[{"id":"1","text":"   ","completed":false}]"#,
            r#"[{"id":"1","text":"a","completed":false},{"id":"1","text":"b","completed":true}]"#,
        ] {
            let err = decode_todos(raw).unwrap_err();
            assert!(matches!(err, StorageError::Corrupt(_)), "{raw}: {err}");
        }
    }
}
