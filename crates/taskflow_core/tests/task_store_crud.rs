use chrono::Utc;
use taskflow_core::db::open_db_in_memory;
use taskflow_core::model::task::{Priority, Task, TaskDraft, TaskPatch, DEFAULT_LIST_REF};
use taskflow_core::store::{Latency, TaskStore};

fn injected_task(id: u32, title: &str) -> Task {
    Task::from_draft(id, TaskDraft::titled(title), Utc::now())
}

#[test]
fn create_on_empty_store_starts_at_id_one() {
    let conn = open_db_in_memory().unwrap();
    let mut store = TaskStore::with_tasks(&conn, Latency::none(), Vec::new());

    let first = store.create(TaskDraft::titled("first")).unwrap();
    let second = store.create(TaskDraft::titled("second")).unwrap();

    assert_eq!(first.id, 1);
    assert_eq!(second.id, 2);
}

#[test]
fn next_id_is_max_plus_one_over_sparse_ids() {
    let conn = open_db_in_memory().unwrap();
    let seeded = vec![injected_task(2, "a"), injected_task(7, "b")];
    let mut store = TaskStore::with_tasks(&conn, Latency::none(), seeded);

    let created = store.create(TaskDraft::titled("c")).unwrap();
    assert_eq!(created.id, 8);
}

#[test]
fn buy_milk_scenario_applies_all_defaults() {
    let conn = open_db_in_memory().unwrap();
    let mut store = TaskStore::with_tasks(&conn, Latency::none(), Vec::new());

    store.create(TaskDraft::titled("Buy milk")).unwrap();

    let all = store.get_all();
    assert_eq!(all.len(), 1);
    let task = &all[0];
    assert_eq!(task.id, 1);
    assert_eq!(task.title, "Buy milk");
    assert_eq!(task.description, "");
    assert_eq!(task.priority, Priority::Medium);
    assert_eq!(task.due_date, None);
    assert!(!task.completed);
    assert_eq!(task.completed_at, None);
    assert_eq!(task.list_id, DEFAULT_LIST_REF);
}

#[test]
fn update_merges_and_preserves_id_and_created_at() {
    let conn = open_db_in_memory().unwrap();
    let mut store = TaskStore::with_tasks(&conn, Latency::none(), Vec::new());
    let created = store.create(TaskDraft::titled("draft")).unwrap();

    let updated = store
        .update(
            created.id,
            TaskPatch {
                title: Some("final".to_string()),
                priority: Some(Priority::High),
                ..TaskPatch::default()
            },
        )
        .unwrap()
        .unwrap();

    assert_eq!(updated.id, created.id);
    assert_eq!(updated.created_at, created.created_at);
    assert_eq!(updated.title, "final");
    assert_eq!(updated.priority, Priority::High);
    assert!(updated.updated_at >= created.updated_at);

    let fetched = store.get_by_id(created.id).unwrap();
    assert_eq!(fetched, updated);
}

#[test]
fn completion_transitions_maintain_completed_at() {
    let conn = open_db_in_memory().unwrap();
    let mut store = TaskStore::with_tasks(&conn, Latency::none(), Vec::new());
    let created = store.create(TaskDraft::titled("t")).unwrap();

    let done = store
        .update(created.id, TaskPatch::completion(true))
        .unwrap()
        .unwrap();
    assert!(done.completed);
    assert!(done.completed_at.is_some());

    // Completing an already-completed task keeps the pair in sync.
    let done_again = store
        .update(created.id, TaskPatch::completion(true))
        .unwrap()
        .unwrap();
    assert!(done_again.completed_at.is_some());

    let reopened = store
        .update(created.id, TaskPatch::completion(false))
        .unwrap()
        .unwrap();
    assert!(!reopened.completed);
    assert_eq!(reopened.completed_at, None);
}

#[test]
fn unrelated_update_leaves_completion_untouched() {
    let conn = open_db_in_memory().unwrap();
    let mut store = TaskStore::with_tasks(&conn, Latency::none(), Vec::new());
    let created = store.create(TaskDraft::titled("t")).unwrap();
    store
        .update(created.id, TaskPatch::completion(true))
        .unwrap();

    let retitled = store
        .update(
            created.id,
            TaskPatch {
                title: Some("renamed".to_string()),
                ..TaskPatch::default()
            },
        )
        .unwrap()
        .unwrap();

    assert!(retitled.completed);
    assert!(retitled.completed_at.is_some());
}

#[test]
fn update_unknown_id_is_none_not_error() {
    let conn = open_db_in_memory().unwrap();
    let mut store = TaskStore::with_tasks(&conn, Latency::none(), Vec::new());

    let result = store.update(42, TaskPatch::completion(true)).unwrap();
    assert_eq!(result, None);
}

#[test]
fn delete_returns_removed_copy_and_forgets_id() {
    let conn = open_db_in_memory().unwrap();
    let mut store = TaskStore::with_tasks(&conn, Latency::none(), Vec::new());
    let created = store.create(TaskDraft::titled("gone soon")).unwrap();

    let removed = store.delete(created.id).unwrap().unwrap();
    assert_eq!(removed.id, created.id);
    assert_eq!(removed.title, "gone soon");

    assert_eq!(store.get_by_id(created.id), None);
    assert_eq!(store.delete(created.id).unwrap(), None);
}

#[test]
fn get_all_is_a_defensive_copy() {
    let conn = open_db_in_memory().unwrap();
    let mut store = TaskStore::with_tasks(&conn, Latency::none(), Vec::new());
    store.create(TaskDraft::titled("original")).unwrap();

    let mut copy = store.get_all();
    copy[0].title = "mutated".to_string();
    copy.clear();

    let fresh = store.get_all();
    assert_eq!(fresh.len(), 1);
    assert_eq!(fresh[0].title, "original");
}

#[test]
fn get_all_preserves_insertion_order() {
    let conn = open_db_in_memory().unwrap();
    let mut store = TaskStore::with_tasks(&conn, Latency::none(), Vec::new());
    for title in ["a", "b", "c"] {
        store.create(TaskDraft::titled(title)).unwrap();
    }

    let titles: Vec<String> = store.get_all().into_iter().map(|task| task.title).collect();
    assert_eq!(titles, ["a", "b", "c"]);
}
