//! Core data and state layer for the taskflow to-do app.
//! This crate is the single source of truth for task/list records, their
//! snapshot persistence, the derived view filters, and the change bus.

pub mod bus;
pub mod db;
pub mod filter;
pub mod logging;
pub mod model;
pub mod seed;
pub mod service;
pub mod store;

pub use bus::{ChangeBus, Subscription};
pub use db::{open_db, open_db_in_memory, DbError};
pub use filter::{ActiveFilter, StatusCounts, TaskQuery};
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::list::{ListDraft, ListId, ListPatch, ListValidationError, TaskList};
pub use model::task::{Priority, Task, TaskDraft, TaskId, TaskPatch, TaskValidationError};
pub use service::Workspace;
pub use store::{Latency, ListStore, StoreError, StoreResult, TaskStore};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::core_version;

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
