//! Pure task filters backing the today/important/list/main views.

use chrono::{DateTime, Local, NaiveDate, Utc};

use crate::model::list::ListId;
use crate::model::task::{Priority, Task};

/// The main view's single active-filter slot.
///
/// Status values and priority values share one slot: selecting a priority
/// replaces the status filter rather than combining with it. Kept as observed
/// in the source design; flagged as an open product question in DESIGN.md.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ActiveFilter {
    #[default]
    All,
    Active,
    Completed,
    Priority(Priority),
}

/// Combined main-view filter: one active-filter slot plus free-text search.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskQuery {
    pub filter: ActiveFilter,
    /// Case-insensitive substring over title or description. Empty matches
    /// everything.
    pub search: String,
}

/// Tallies shown on the main view's filter buttons.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatusCounts {
    pub all: usize,
    pub active: usize,
    pub completed: usize,
}

impl ActiveFilter {
    fn matches(self, task: &Task) -> bool {
        match self {
            Self::All => true,
            Self::Active => !task.completed,
            Self::Completed => task.completed,
            Self::Priority(priority) => task.priority == priority,
        }
    }
}

impl TaskQuery {
    /// Applies the status/priority slot and the search text together.
    pub fn apply(&self, tasks: &[Task]) -> Vec<Task> {
        tasks
            .iter()
            .filter(|task| self.filter.matches(task) && matches_search(task, &self.search))
            .cloned()
            .collect()
    }
}

/// Tasks whose due date falls on the given local calendar day, regardless of
/// time of day.
pub fn due_on(tasks: &[Task], date: NaiveDate) -> Vec<Task> {
    tasks
        .iter()
        .filter(|task| task.due_date.is_some_and(|due| local_day(due) == date))
        .cloned()
        .collect()
}

/// Tasks due on the current calendar day in the local timezone.
pub fn due_today(tasks: &[Task]) -> Vec<Task> {
    due_on(tasks, Local::now().date_naive())
}

/// Tasks with high priority.
pub fn important(tasks: &[Task]) -> Vec<Task> {
    tasks
        .iter()
        .filter(|task| task.priority == Priority::High)
        .cloned()
        .collect()
}

/// Tasks belonging to the given list.
///
/// `list_id` on a task is stored as text, so the list's numeric id is
/// rendered to a string for the comparison.
pub fn for_list(tasks: &[Task], list_id: ListId) -> Vec<Task> {
    let wanted = list_id.to_string();
    tasks
        .iter()
        .filter(|task| task.list_id == wanted)
        .cloned()
        .collect()
}

/// Splits tasks into (active, completed), both in source order.
pub fn partition_by_status(tasks: &[Task]) -> (Vec<Task>, Vec<Task>) {
    tasks
        .iter()
        .cloned()
        .partition(|task| !task.completed)
}

/// Case-insensitive substring match over title or description. An empty
/// query matches every task.
pub fn search(tasks: &[Task], query: &str) -> Vec<Task> {
    tasks
        .iter()
        .filter(|task| matches_search(task, query))
        .cloned()
        .collect()
}

/// All/active/completed tallies for the filter bar.
pub fn status_counts(tasks: &[Task]) -> StatusCounts {
    let completed = tasks.iter().filter(|task| task.completed).count();
    StatusCounts {
        all: tasks.len(),
        active: tasks.len() - completed,
        completed,
    }
}

fn matches_search(task: &Task, query: &str) -> bool {
    if query.is_empty() {
        return true;
    }
    let needle = query.to_lowercase();
    task.title.to_lowercase().contains(&needle)
        || task.description.to_lowercase().contains(&needle)
}

fn local_day(instant: DateTime<Utc>) -> NaiveDate {
    instant.with_timezone(&Local).date_naive()
}
