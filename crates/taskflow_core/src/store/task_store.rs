//! In-memory authoritative task collection.
//!
//! # Responsibility
//! - Own the task records and assign their ids.
//! - Persist a whole-collection snapshot after every mutation.
//!
//! # Invariants
//! - Next id is `max(existing ids) + 1`, or 1 when the collection is empty.
//! - Records are kept and returned in insertion order.
//! - Unknown ids yield `Ok(None)`; not-found is data, not an error.

use chrono::Utc;
use log::debug;
use rusqlite::Connection;

use crate::model::task::{Task, TaskDraft, TaskId, TaskPatch};
use crate::seed::seed_tasks;
use crate::store::latency::Latency;
use crate::store::mirror::SnapshotMirror;
use crate::store::StoreResult;

/// Storage key for the task snapshot.
pub const TASKS_SNAPSHOT_KEY: &str = "tasks";

/// Authoritative task store.
///
/// Single-threaded by construction: mutations take `&mut self`, so no two
/// operations ever interleave on one store.
pub struct TaskStore<'conn> {
    tasks: Vec<Task>,
    mirror: SnapshotMirror<'conn>,
    latency: Latency,
}

impl<'conn> TaskStore<'conn> {
    /// Opens the store from the persisted snapshot, falling back to the
    /// bundled seed when the snapshot is absent or unparsable.
    pub fn open(conn: &'conn Connection, latency: Latency) -> StoreResult<Self> {
        let mirror = SnapshotMirror::new(conn, TASKS_SNAPSHOT_KEY);
        let tasks = match mirror.load()? {
            Some(tasks) => tasks,
            None => seed_tasks()?,
        };
        debug!(
            "event=store_open module=task_store status=ok records={}",
            tasks.len()
        );
        Ok(Self {
            tasks,
            mirror,
            latency,
        })
    }

    /// Creates a store over injected records, for tests and tooling.
    pub fn with_tasks(
        conn: &'conn Connection,
        latency: Latency,
        tasks: Vec<Task>,
    ) -> Self {
        Self {
            tasks,
            mirror: SnapshotMirror::new(conn, TASKS_SNAPSHOT_KEY),
            latency,
        }
    }

    /// Returns a point-in-time copy of every task, in insertion order.
    pub fn get_all(&self) -> Vec<Task> {
        self.latency.wait();
        self.tasks.clone()
    }

    /// Returns a copy of the matching task.
    pub fn get_by_id(&self, id: TaskId) -> Option<Task> {
        self.latency.wait();
        self.tasks.iter().find(|task| task.id == id).cloned()
    }

    /// Assigns the next id, applies draft defaults, appends and persists.
    pub fn create(&mut self, draft: TaskDraft) -> StoreResult<Task> {
        self.latency.wait();
        let task = Task::from_draft(self.next_id(), draft, Utc::now());
        self.tasks.push(task.clone());
        self.mirror.save(&self.tasks)?;
        debug!(
            "event=task_create module=task_store status=ok id={}",
            task.id
        );
        Ok(task)
    }

    /// Merges a patch over the matching task and persists.
    ///
    /// Returns `Ok(None)` when the id is unknown; nothing is written then.
    pub fn update(&mut self, id: TaskId, patch: TaskPatch) -> StoreResult<Option<Task>> {
        self.latency.wait();
        let Some(task) = self.tasks.iter_mut().find(|task| task.id == id) else {
            debug!(
                "event=task_update module=task_store status=not_found id={}",
                id
            );
            return Ok(None);
        };

        task.apply_patch(patch, Utc::now());
        let updated = task.clone();
        self.mirror.save(&self.tasks)?;
        debug!("event=task_update module=task_store status=ok id={}", id);
        Ok(Some(updated))
    }

    /// Removes the matching task, persists, and returns the removed copy.
    pub fn delete(&mut self, id: TaskId) -> StoreResult<Option<Task>> {
        self.latency.wait();
        let Some(index) = self.tasks.iter().position(|task| task.id == id) else {
            debug!(
                "event=task_delete module=task_store status=not_found id={}",
                id
            );
            return Ok(None);
        };

        let removed = self.tasks.remove(index);
        self.mirror.save(&self.tasks)?;
        debug!("event=task_delete module=task_store status=ok id={}", id);
        Ok(Some(removed))
    }

    fn next_id(&self) -> TaskId {
        self.tasks.iter().map(|task| task.id).max().unwrap_or(0) + 1
    }
}
