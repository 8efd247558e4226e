//! Connection bootstrap for the slot database.
//!
//! # Invariants
//! - Returned connections have every migration applied.
//! - Every open attempt emits exactly one terminal `db_open` event.

use super::migrations::apply_migrations;
use super::DbResult;
use log::{error, info};
use rusqlite::Connection;
use std::path::Path;
use std::time::{Duration, Instant};

const BUSY_TIMEOUT: Duration = Duration::from_secs(5);

/// Opens (or creates) a slot database file and migrates it.
///
/// # Side effects
/// - Emits `db_open` events with mode, duration and status.
pub fn open_db(path: impl AsRef<Path>) -> DbResult<Connection> {
    open_with("file", || Connection::open(path))
}

/// Opens a private in-memory slot database and migrates it.
pub fn open_db_in_memory() -> DbResult<Connection> {
    open_with("memory", Connection::open_in_memory)
}

fn open_with(
    mode: &str,
    connect: impl FnOnce() -> rusqlite::Result<Connection>,
) -> DbResult<Connection> {
    let started_at = Instant::now();
    info!("event=db_open module=db status=start mode={mode}");

    let result = connect_and_bootstrap(connect);

    match &result {
        Ok(_) => info!(
            "event=db_open module=db status=ok mode={mode} duration_ms={}",
            started_at.elapsed().as_millis()
        ),
        Err(err) => error!(
            "event=db_open module=db status=error mode={mode} duration_ms={} error={err}",
            started_at.elapsed().as_millis()
        ),
    }
    result
}

fn connect_and_bootstrap(
    connect: impl FnOnce() -> rusqlite::Result<Connection>,
) -> DbResult<Connection> {
    let mut conn = connect()?;
    bootstrap_connection(&mut conn)?;
    Ok(conn)
}

fn bootstrap_connection(conn: &mut Connection) -> DbResult<()> {
    conn.busy_timeout(BUSY_TIMEOUT)?;
    apply_migrations(conn)
}
