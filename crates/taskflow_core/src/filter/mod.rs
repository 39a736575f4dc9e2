//! Derived view projections over the task collection.
//!
//! # Responsibility
//! - Provide the pure filter functions each view runs after `get_all`.
//!
//! # Invariants
//! - Deterministic: same input slice and parameters, same output.
//! - Order-preserving: results keep the source collection's insertion order.
//! - No store access; callers fetch first, filter second.

pub mod task_filters;

pub use task_filters::{
    due_on, due_today, for_list, important, partition_by_status, search, status_counts,
    ActiveFilter, StatusCounts, TaskQuery,
};
