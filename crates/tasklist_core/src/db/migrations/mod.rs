//! Ordered schema migrations for the slot database.
//!
//! # Invariants
//! - `version` values are strictly increasing.
//! - Pending migrations run in one transaction and bump `PRAGMA user_version`.

use crate::db::{DbError, DbResult};
use log::info;
use rusqlite::Connection;

struct Migration {
    version: u32,
    sql: &'static str,
}

const MIGRATIONS: &[Migration] = &[Migration {
    version: 1,
    sql: include_str!("0001_kv_slots.sql"),
}];

/// Latest schema version this build understands.
pub fn latest_version() -> u32 {
    MIGRATIONS.last().map_or(0, |migration| migration.version)
}

/// Brings `conn` up to `latest_version()`.
///
/// # Errors
/// - `DbError::UnsupportedSchemaVersion` when the file is newer than this build.
pub fn apply_migrations(conn: &mut Connection) -> DbResult<()> {
    let current = conn.query_row("PRAGMA user_version;", [], |row| row.get::<_, u32>(0))?;
    let latest = latest_version();

    if current > latest {
        return Err(DbError::UnsupportedSchemaVersion {
            found: current,
            supported: latest,
        });
    }
    if current == latest {
        return Ok(());
    }

    let tx = conn.transaction()?;
    for migration in MIGRATIONS.iter().filter(|m| m.version > current) {
        tx.execute_batch(migration.sql)?;
        tx.execute_batch(&format!("PRAGMA user_version = {};", migration.version))?;
    }
    tx.commit()?;

    info!("event=db_migrate module=db status=ok from={current} to={latest}");
    Ok(())
}
