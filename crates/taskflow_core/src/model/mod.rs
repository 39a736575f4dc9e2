//! Domain model for tasks and task lists.
//!
//! # Responsibility
//! - Define the canonical records held by the in-memory stores.
//! - Define typed create/patch inputs with explicit updatable field sets.
//!
//! # Invariants
//! - Ids are store-assigned positive integers, unique per collection.
//! - `Task::completed_at` is non-absent exactly when `completed` is true.

pub mod list;
pub mod task;
