//! Task domain model.
//!
//! # Responsibility
//! - Define the canonical task record shared by all views.
//! - Provide the typed create draft and partial-update patch.
//!
//! # Invariants
//! - `id` is assigned by the store and never changed afterwards.
//! - `completed_at` is `Some` exactly when `completed` is true; every update
//!   that touches `completed` maintains this as one atomic step.
//! - `list_id` may reference a list that no longer exists; consumers treat an
//!   unresolvable reference as an unstyled default.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Store-assigned task identifier. Positive, unique within the collection.
pub type TaskId = u32;

/// List id value a task is created with when no list is chosen.
pub const DEFAULT_LIST_REF: &str = "1";

/// Task urgency level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    Low,
    #[default]
    Medium,
    High,
}

/// Canonical task record.
///
/// Stored in insertion order; all timestamps are UTC and rendered to local
/// time only at the view layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    pub id: TaskId,
    pub title: String,
    /// Free-form detail text. Empty string means "no description".
    pub description: String,
    pub priority: Priority,
    /// Absent means the task has no due date and never matches the today view.
    pub due_date: Option<DateTime<Utc>>,
    pub completed: bool,
    /// Set when `completed` flips to true, cleared when it flips back.
    pub completed_at: Option<DateTime<Utc>>,
    /// List reference kept as the string form of the list id. Not checked
    /// against the list collection.
    pub list_id: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Input for creating a task. Unset fields receive the documented defaults.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskDraft {
    pub title: String,
    pub description: Option<String>,
    pub priority: Option<Priority>,
    pub due_date: Option<DateTime<Utc>>,
    pub list_id: Option<String>,
}

/// Partial task update with merge semantics: `None` fields keep their current
/// value. This is the complete set of caller-updatable fields; `id`,
/// `created_at`, `updated_at` and `completed_at` are store-managed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskPatch {
    pub title: Option<String>,
    pub description: Option<String>,
    pub priority: Option<Priority>,
    /// Outer `Some` means "change the due date"; the inner option allows
    /// clearing it (`Some(None)`).
    pub due_date: Option<Option<DateTime<Utc>>>,
    pub completed: Option<bool>,
    pub list_id: Option<String>,
}

/// Boundary validation failure for task input.
///
/// The stores accept any structurally valid record; callers are expected to
/// validate drafts before handing them over.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TaskValidationError {
    EmptyTitle,
}

impl Display for TaskValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyTitle => write!(f, "task title must not be empty"),
        }
    }
}

impl Error for TaskValidationError {}

impl TaskDraft {
    /// Creates a draft with only a title set.
    pub fn titled(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Self::default()
        }
    }

    /// Presentation-boundary validation. The store itself never calls this.
    pub fn validate(&self) -> Result<(), TaskValidationError> {
        if self.title.trim().is_empty() {
            return Err(TaskValidationError::EmptyTitle);
        }
        Ok(())
    }
}

impl TaskPatch {
    /// Patch that only flips completion state.
    pub fn completion(completed: bool) -> Self {
        Self {
            completed: Some(completed),
            ..Self::default()
        }
    }

    /// Returns true when no field is set; applying it only bumps
    /// `updated_at`.
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

impl Task {
    /// Materializes a draft into a full record.
    ///
    /// # Invariants
    /// - `completed` starts false and `completed_at` absent.
    /// - `created_at == updated_at == now`.
    pub fn from_draft(id: TaskId, draft: TaskDraft, now: DateTime<Utc>) -> Self {
        Self {
            id,
            title: draft.title,
            description: draft.description.unwrap_or_default(),
            priority: draft.priority.unwrap_or_default(),
            due_date: draft.due_date,
            completed: false,
            completed_at: None,
            list_id: draft.list_id.unwrap_or_else(|| DEFAULT_LIST_REF.to_string()),
            created_at: now,
            updated_at: now,
        }
    }

    /// Merges a patch over this record and refreshes `updated_at`.
    ///
    /// When the patch sets `completed`, `completed_at` is set to `now` or
    /// cleared in the same step so the record never leaves this function with
    /// the pair out of sync.
    pub fn apply_patch(&mut self, patch: TaskPatch, now: DateTime<Utc>) {
        if let Some(title) = patch.title {
            self.title = title;
        }
        if let Some(description) = patch.description {
            self.description = description;
        }
        if let Some(priority) = patch.priority {
            self.priority = priority;
        }
        if let Some(due_date) = patch.due_date {
            self.due_date = due_date;
        }
        if let Some(completed) = patch.completed {
            self.completed = completed;
            self.completed_at = if completed { Some(now) } else { None };
        }
        if let Some(list_id) = patch.list_id {
            self.list_id = list_id;
        }
        self.updated_at = now;
    }
}
