//! Whole-snapshot persistence mirror.
//!
//! # Responsibility
//! - Write each collection as one JSON array under its fixed key, replacing
//!   any prior snapshot.
//! - Load a collection back at startup, treating missing and unparsable
//!   snapshots the same way (caller falls back to seed data).
//!
//! # Invariants
//! - Writes are whole-collection, last-writer-wins. No deltas, no versioning.
//! - `load` never fails on bad payloads; it logs and reports "no snapshot".

use log::{debug, warn};
use rusqlite::{params, Connection, OptionalExtension};
use serde::de::DeserializeOwned;
use serde::Serialize;

use super::StoreResult;

/// Mirrors one collection to a fixed key in the `snapshots` table.
pub struct SnapshotMirror<'conn> {
    conn: &'conn Connection,
    key: &'static str,
}

impl<'conn> SnapshotMirror<'conn> {
    pub fn new(conn: &'conn Connection, key: &'static str) -> Self {
        Self { conn, key }
    }

    /// Storage key this mirror owns.
    pub fn key(&self) -> &'static str {
        self.key
    }

    /// Loads the persisted collection, if a usable snapshot exists.
    ///
    /// Returns `Ok(None)` when no snapshot is stored or when the stored text
    /// does not parse as the expected shape. Storage-level failures are
    /// returned as errors.
    pub fn load<T: DeserializeOwned>(&self) -> StoreResult<Option<Vec<T>>> {
        let stored: Option<String> = self
            .conn
            .query_row(
                "SELECT value FROM snapshots WHERE key = ?1;",
                params![self.key],
                |row| row.get(0),
            )
            .optional()?;

        let Some(raw) = stored else {
            debug!(
                "event=snapshot_load module=mirror status=empty key={}",
                self.key
            );
            return Ok(None);
        };

        match serde_json::from_str(&raw) {
            Ok(records) => Ok(Some(records)),
            Err(err) => {
                warn!(
                    "event=snapshot_load module=mirror status=unparsable key={} error={}",
                    self.key, err
                );
                Ok(None)
            }
        }
    }

    /// Serializes the entire collection and overwrites the stored snapshot.
    pub fn save<T: Serialize>(&self, records: &[T]) -> StoreResult<()> {
        let payload = serde_json::to_string(records)?;
        self.conn.execute(
            "INSERT INTO snapshots (key, value) VALUES (?1, ?2)
             ON CONFLICT(key) DO UPDATE SET value = excluded.value;",
            params![self.key, payload],
        )?;
        debug!(
            "event=snapshot_save module=mirror status=ok key={} records={}",
            self.key,
            records.len()
        );
        Ok(())
    }
}
