//! In-memory authoritative stores with snapshot persistence.
//!
//! # Responsibility
//! - Hold the task and list collections and expose their CRUD contracts.
//! - Mirror every mutation to durable storage as a whole-collection snapshot.
//!
//! # Invariants
//! - Lookups by unknown id return `Ok(None)`, never an error.
//! - Every returned record is a point-in-time copy; callers cannot reach the
//!   store's own state through it.

use std::error::Error;
use std::fmt::{Display, Formatter};

use crate::db::DbError;

pub mod latency;
pub mod list_store;
pub mod mirror;
pub mod task_store;

pub use latency::Latency;
pub use list_store::ListStore;
pub use mirror::SnapshotMirror;
pub use task_store::TaskStore;

pub type StoreResult<T> = Result<T, StoreError>;

/// Store failure taxonomy. Missing records are not failures.
#[derive(Debug)]
pub enum StoreError {
    /// Underlying key-value storage failed.
    Db(DbError),
    /// A collection could not be serialized for the snapshot write.
    Snapshot(serde_json::Error),
}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Db(err) => write!(f, "{err}"),
            Self::Snapshot(err) => write!(f, "snapshot serialization failed: {err}"),
        }
    }
}

impl Error for StoreError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Db(err) => Some(err),
            Self::Snapshot(err) => Some(err),
        }
    }
}

impl From<DbError> for StoreError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for StoreError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}

impl From<serde_json::Error> for StoreError {
    fn from(value: serde_json::Error) -> Self {
        Self::Snapshot(value)
    }
}
