//! Connection bootstrap for the snapshot store.
//!
//! # Responsibility
//! - Open file or in-memory SQLite connections.
//! - Create the key-value schema idempotently before returning.
//!
//! # Invariants
//! - The `snapshots` table exists on every returned connection.
//! - No schema versioning: snapshot payloads are whole-collection JSON with
//!   last-writer-wins semantics, and stale shapes simply fail to parse.

use super::DbResult;
use log::{error, info};
use rusqlite::Connection;
use std::path::Path;
use std::time::{Duration, Instant};

const SNAPSHOT_SCHEMA_SQL: &str = "CREATE TABLE IF NOT EXISTS snapshots (
    key TEXT PRIMARY KEY,
    value TEXT NOT NULL
);";

/// Opens the snapshot database file and prepares the key-value schema.
///
/// # Side effects
/// - Emits `db_open` logging events with duration and status.
pub fn open_db(path: impl AsRef<Path>) -> DbResult<Connection> {
    let started_at = Instant::now();
    info!("event=db_open module=db status=start mode=file");

    let conn = match Connection::open(path) {
        Ok(conn) => conn,
        Err(err) => {
            error!(
                "event=db_open module=db status=error mode=file duration_ms={} error={}",
                started_at.elapsed().as_millis(),
                err
            );
            return Err(err.into());
        }
    };

    match bootstrap_connection(&conn) {
        Ok(()) => {
            info!(
                "event=db_open module=db status=ok mode=file duration_ms={}",
                started_at.elapsed().as_millis()
            );
            Ok(conn)
        }
        Err(err) => {
            error!(
                "event=db_open module=db status=error mode=file duration_ms={} error={}",
                started_at.elapsed().as_millis(),
                err
            );
            Err(err)
        }
    }
}

/// Opens an in-memory snapshot database, mainly for tests and demos.
pub fn open_db_in_memory() -> DbResult<Connection> {
    let started_at = Instant::now();
    info!("event=db_open module=db status=start mode=memory");

    let conn = Connection::open_in_memory()?;
    bootstrap_connection(&conn)?;

    info!(
        "event=db_open module=db status=ok mode=memory duration_ms={}",
        started_at.elapsed().as_millis()
    );
    Ok(conn)
}

fn bootstrap_connection(conn: &Connection) -> DbResult<()> {
    conn.busy_timeout(Duration::from_secs(5))?;
    conn.execute_batch(SNAPSHOT_SCHEMA_SQL)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::open_db_in_memory;

    #[test]
    fn open_creates_snapshots_table() {
        let conn = open_db_in_memory().unwrap();
        let count: u32 = conn
            .query_row(
                "SELECT count(*) FROM sqlite_master WHERE type = 'table' AND name = 'snapshots';",
                [],
                |row| row.get(0),
            )
            .unwrap();
        assert_eq!(count, 1);
    }

    #[test]
    fn bootstrap_is_idempotent() {
        let conn = open_db_in_memory().unwrap();
        conn.execute_batch(super::SNAPSHOT_SCHEMA_SQL).unwrap();
    }
}
