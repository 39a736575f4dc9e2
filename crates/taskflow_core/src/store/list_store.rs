//! In-memory authoritative list collection.
//!
//! Same contract shape as the task store, plus a direct cache-set for the
//! derived `task_count` field. The list store never looks at the task store;
//! the composing layer computes counts and pushes them in.

use chrono::Utc;
use log::debug;
use rusqlite::Connection;

use crate::model::list::{ListDraft, ListId, ListPatch, TaskList};
use crate::seed::seed_lists;
use crate::store::latency::Latency;
use crate::store::mirror::SnapshotMirror;
use crate::store::StoreResult;

/// Storage key for the list snapshot.
pub const LISTS_SNAPSHOT_KEY: &str = "lists";

/// Authoritative list store.
pub struct ListStore<'conn> {
    lists: Vec<TaskList>,
    mirror: SnapshotMirror<'conn>,
    latency: Latency,
}

impl<'conn> ListStore<'conn> {
    /// Opens the store from the persisted snapshot, falling back to the
    /// bundled seed when the snapshot is absent or unparsable.
    pub fn open(conn: &'conn Connection, latency: Latency) -> StoreResult<Self> {
        let mirror = SnapshotMirror::new(conn, LISTS_SNAPSHOT_KEY);
        let lists = match mirror.load()? {
            Some(lists) => lists,
            None => seed_lists()?,
        };
        debug!(
            "event=store_open module=list_store status=ok records={}",
            lists.len()
        );
        Ok(Self {
            lists,
            mirror,
            latency,
        })
    }

    /// Creates a store over injected records, for tests and tooling.
    pub fn with_lists(
        conn: &'conn Connection,
        latency: Latency,
        lists: Vec<TaskList>,
    ) -> Self {
        Self {
            lists,
            mirror: SnapshotMirror::new(conn, LISTS_SNAPSHOT_KEY),
            latency,
        }
    }

    /// Returns a point-in-time copy of every list, in insertion order.
    pub fn get_all(&self) -> Vec<TaskList> {
        self.latency.wait();
        self.lists.clone()
    }

    /// Returns a copy of the matching list.
    pub fn get_by_id(&self, id: ListId) -> Option<TaskList> {
        self.latency.wait();
        self.lists.iter().find(|list| list.id == id).cloned()
    }

    /// Assigns the next id, applies draft defaults, appends and persists.
    pub fn create(&mut self, draft: ListDraft) -> StoreResult<TaskList> {
        self.latency.wait();
        let list = TaskList::from_draft(self.next_id(), draft, Utc::now());
        self.lists.push(list.clone());
        self.mirror.save(&self.lists)?;
        debug!(
            "event=list_create module=list_store status=ok id={}",
            list.id
        );
        Ok(list)
    }

    /// Merges a patch over the matching list and persists.
    pub fn update(&mut self, id: ListId, patch: ListPatch) -> StoreResult<Option<TaskList>> {
        self.latency.wait();
        let Some(list) = self.lists.iter_mut().find(|list| list.id == id) else {
            return Ok(None);
        };

        list.apply_patch(patch);
        let updated = list.clone();
        self.mirror.save(&self.lists)?;
        debug!("event=list_update module=list_store status=ok id={}", id);
        Ok(Some(updated))
    }

    /// Removes the matching list, persists, and returns the removed copy.
    ///
    /// No cascade: tasks referencing the removed list keep their `list_id`
    /// and become tolerated orphans.
    pub fn delete(&mut self, id: ListId) -> StoreResult<Option<TaskList>> {
        self.latency.wait();
        let Some(index) = self.lists.iter().position(|list| list.id == id) else {
            return Ok(None);
        };

        let removed = self.lists.remove(index);
        self.mirror.save(&self.lists)?;
        debug!("event=list_delete module=list_store status=ok id={}", id);
        Ok(Some(removed))
    }

    /// Direct cache-set of the derived incomplete-task count.
    ///
    /// The caller computes the count by cross-referencing the task store;
    /// this store only records it.
    pub fn update_task_count(&mut self, id: ListId, count: u32) -> StoreResult<Option<TaskList>> {
        self.latency.wait();
        let Some(list) = self.lists.iter_mut().find(|list| list.id == id) else {
            return Ok(None);
        };

        list.task_count = count;
        let updated = list.clone();
        self.mirror.save(&self.lists)?;
        Ok(Some(updated))
    }

    fn next_id(&self) -> ListId {
        self.lists.iter().map(|list| list.id).max().unwrap_or(0) + 1
    }
}
