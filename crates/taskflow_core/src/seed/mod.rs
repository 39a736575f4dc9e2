//! Bundled starter dataset.
//!
//! Used whenever a store finds no usable persisted snapshot. The JSON shape
//! is identical to what the snapshot mirror writes, so seed and snapshot go
//! through the same serde path.

use crate::model::list::TaskList;
use crate::model::task::Task;
use crate::store::StoreResult;

const SEED_TASKS_JSON: &str = include_str!("tasks.json");
const SEED_LISTS_JSON: &str = include_str!("lists.json");

/// Parses the bundled task dataset.
pub fn seed_tasks() -> StoreResult<Vec<Task>> {
    Ok(serde_json::from_str(SEED_TASKS_JSON)?)
}

/// Parses the bundled list dataset.
pub fn seed_lists() -> StoreResult<Vec<TaskList>> {
    Ok(serde_json::from_str(SEED_LISTS_JSON)?)
}

#[cfg(test)]
mod tests {
    use super::{seed_lists, seed_tasks};
    use crate::model::task::Priority;

    #[test]
    fn seed_tasks_parse_and_keep_unique_ids() {
        let tasks = seed_tasks().unwrap();
        assert!(!tasks.is_empty());

        let mut ids: Vec<u32> = tasks.iter().map(|task| task.id).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), tasks.len());
        assert!(tasks.iter().any(|task| task.priority == Priority::High));
    }

    #[test]
    fn seed_lists_reference_matches_seed_tasks() {
        let lists = seed_lists().unwrap();
        let tasks = seed_tasks().unwrap();
        assert!(!lists.is_empty());

        // Every seeded task points at a seeded list; orphans are tolerated at
        // runtime but the bundled data should start consistent.
        for task in &tasks {
            assert!(lists
                .iter()
                .any(|list| list.id.to_string() == task.list_id));
        }
    }
}
