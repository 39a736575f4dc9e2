//! Workspace: both stores plus the change bus, wired the way views expect.
//!
//! Every mutating entry point runs the same pipeline: apply the store write,
//! recompute and push the per-list incomplete-task counts, then broadcast on
//! the bus so mounted views re-fetch. Lookups that find nothing skip the
//! refresh and the broadcast, since no state changed.

use log::info;
use rusqlite::Connection;

use crate::bus::ChangeBus;
use crate::model::list::{ListDraft, ListId, ListPatch, TaskList};
use crate::model::task::{Task, TaskDraft, TaskId, TaskPatch};
use crate::store::latency::Latency;
use crate::store::list_store::ListStore;
use crate::store::task_store::TaskStore;
use crate::store::StoreResult;

/// Single-user workspace over one snapshot database.
pub struct Workspace<'conn> {
    tasks: TaskStore<'conn>,
    lists: ListStore<'conn>,
    bus: ChangeBus,
}

impl<'conn> Workspace<'conn> {
    /// Opens both stores from their snapshots (or seeds) on one connection.
    pub fn open(conn: &'conn Connection, latency: Latency) -> StoreResult<Self> {
        let tasks = TaskStore::open(conn, latency)?;
        let lists = ListStore::open(conn, latency)?;
        info!("event=workspace_open module=service status=ok");
        Ok(Self {
            tasks,
            lists,
            bus: ChangeBus::new(),
        })
    }

    /// Composes a workspace from already-constructed stores, for tests and
    /// tooling that inject their own initial state.
    pub fn from_parts(tasks: TaskStore<'conn>, lists: ListStore<'conn>) -> Self {
        Self {
            tasks,
            lists,
            bus: ChangeBus::new(),
        }
    }

    /// The bus views subscribe to for invalidation signals.
    pub fn bus(&self) -> &ChangeBus {
        &self.bus
    }

    /// Point-in-time copy of all tasks.
    pub fn get_tasks(&self) -> Vec<Task> {
        self.tasks.get_all()
    }

    /// Point-in-time copy of one task.
    pub fn get_task(&self, id: TaskId) -> Option<Task> {
        self.tasks.get_by_id(id)
    }

    /// Point-in-time copy of all lists, including cached counts.
    pub fn get_lists(&self) -> Vec<TaskList> {
        self.lists.get_all()
    }

    /// Point-in-time copy of one list.
    pub fn get_list(&self, id: ListId) -> Option<TaskList> {
        self.lists.get_by_id(id)
    }

    pub fn create_task(&mut self, draft: TaskDraft) -> StoreResult<Task> {
        let created = self.tasks.create(draft)?;
        self.after_mutation()?;
        Ok(created)
    }

    pub fn update_task(&mut self, id: TaskId, patch: TaskPatch) -> StoreResult<Option<Task>> {
        let updated = self.tasks.update(id, patch)?;
        if updated.is_some() {
            self.after_mutation()?;
        }
        Ok(updated)
    }

    /// Convenience for the checkbox toggle every view exposes.
    pub fn set_task_completion(
        &mut self,
        id: TaskId,
        completed: bool,
    ) -> StoreResult<Option<Task>> {
        self.update_task(id, TaskPatch::completion(completed))
    }

    pub fn delete_task(&mut self, id: TaskId) -> StoreResult<Option<Task>> {
        let removed = self.tasks.delete(id)?;
        if removed.is_some() {
            self.after_mutation()?;
        }
        Ok(removed)
    }

    pub fn create_list(&mut self, draft: ListDraft) -> StoreResult<TaskList> {
        let created = self.lists.create(draft)?;
        self.after_mutation()?;
        Ok(created)
    }

    pub fn update_list(&mut self, id: ListId, patch: ListPatch) -> StoreResult<Option<TaskList>> {
        let updated = self.lists.update(id, patch)?;
        if updated.is_some() {
            self.after_mutation()?;
        }
        Ok(updated)
    }

    /// Deletes a list without cascading; its tasks become tolerated orphans.
    pub fn delete_list(&mut self, id: ListId) -> StoreResult<Option<TaskList>> {
        let removed = self.lists.delete(id)?;
        if removed.is_some() {
            self.after_mutation()?;
        }
        Ok(removed)
    }

    /// Recomputes each list's incomplete-task count from the task collection
    /// and pushes it into the list store's cached field.
    ///
    /// Owned here so the list store never has to know about tasks. Counts
    /// that did not change are not re-written.
    pub fn refresh_list_counts(&mut self) -> StoreResult<()> {
        let tasks = self.tasks.get_all();
        for list in self.lists.get_all() {
            let wanted = list.id.to_string();
            let count = tasks
                .iter()
                .filter(|task| task.list_id == wanted && !task.completed)
                .count() as u32;
            if count != list.task_count {
                self.lists.update_task_count(list.id, count)?;
            }
        }
        Ok(())
    }

    fn after_mutation(&mut self) -> StoreResult<()> {
        self.refresh_list_counts()?;
        self.bus.publish();
        Ok(())
    }
}
