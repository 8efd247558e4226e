use rusqlite::Connection;
use tasklist_core::db::migrations::latest_version;
use tasklist_core::db::{open_db, open_db_in_memory, DbError};

#[test]
fn open_db_in_memory_applies_all_migrations() {
    let conn = open_db_in_memory().unwrap();
    assert_eq!(schema_version(&conn), latest_version());
    assert_table_exists(&conn, "kv_slots");
}

#[test]
fn reopening_file_database_is_idempotent() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("tasklist.db");

    drop(open_db(&path).unwrap());
    let conn = open_db(&path).unwrap();
    assert_eq!(schema_version(&conn), latest_version());
    assert_table_exists(&conn, "kv_slots");
}

#[test]
fn newer_schema_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("future.db");
    Connection::open(&path)
        .unwrap()
        .execute_batch("PRAGMA user_version = 999;")
        .unwrap();

    match open_db(&path).unwrap_err() {
        DbError::UnsupportedSchemaVersion { found, supported } => {
            assert_eq!(found, 999);
            assert_eq!(supported, latest_version());
        }
        other => panic!("unexpected error: {other}"),
    }
}

fn schema_version(conn: &Connection) -> u32 {
    conn.query_row("PRAGMA user_version;", [], |row| row.get(0))
        .unwrap()
}

fn assert_table_exists(conn: &Connection, table_name: &str) {
    let exists: i64 = conn
        .query_row(
            "SELECT EXISTS(SELECT 1 FROM sqlite_master WHERE type = 'table' AND name = ?1);",
            [table_name],
            |row| row.get(0),
        )
        .unwrap();
    assert_eq!(exists, 1, "table {table_name} does not exist");
}
