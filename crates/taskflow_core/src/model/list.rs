//! Task list domain model.
//!
//! # Invariants
//! - `task_count` is a cached derived value pushed in by the composing layer;
//!   the list store never computes it.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Store-assigned list identifier. Positive, unique within the collection.
pub type ListId = u32;

/// Color token applied to lists created without one.
pub const DEFAULT_LIST_COLOR: &str = "#6366F1";

/// Named, colored grouping of tasks.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskList {
    pub id: ListId,
    pub name: String,
    /// Display color token, e.g. `#6366F1`.
    pub color: String,
    /// Count of incomplete tasks referencing this list. Derived, not
    /// authoritative; see `ListStore::update_task_count`.
    pub task_count: u32,
    pub created_at: DateTime<Utc>,
}

/// Input for creating a list.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListDraft {
    pub name: String,
    pub color: Option<String>,
}

/// Partial list update with merge semantics. `task_count` is excluded here;
/// it has its own dedicated store operation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListPatch {
    pub name: Option<String>,
    pub color: Option<String>,
}

/// Boundary validation failure for list input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListValidationError {
    EmptyName,
}

impl Display for ListValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyName => write!(f, "list name must not be empty"),
        }
    }
}

impl Error for ListValidationError {}

impl ListDraft {
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Presentation-boundary validation. The store itself never calls this.
    pub fn validate(&self) -> Result<(), ListValidationError> {
        if self.name.trim().is_empty() {
            return Err(ListValidationError::EmptyName);
        }
        Ok(())
    }
}

impl TaskList {
    /// Materializes a draft into a full record with `task_count = 0`.
    pub fn from_draft(id: ListId, draft: ListDraft, now: DateTime<Utc>) -> Self {
        Self {
            id,
            name: draft.name,
            color: draft.color.unwrap_or_else(|| DEFAULT_LIST_COLOR.to_string()),
            task_count: 0,
            created_at: now,
        }
    }

    /// Merges a patch over this record.
    pub fn apply_patch(&mut self, patch: ListPatch) {
        if let Some(name) = patch.name {
            self.name = name;
        }
        if let Some(color) = patch.color {
            self.color = color;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{ListDraft, ListPatch, ListValidationError, TaskList, DEFAULT_LIST_COLOR};
    use chrono::Utc;

    #[test]
    fn draft_defaults_color_and_zero_count() {
        let list = TaskList::from_draft(1, ListDraft::named("Work"), Utc::now());
        assert_eq!(list.color, DEFAULT_LIST_COLOR);
        assert_eq!(list.task_count, 0);
    }

    #[test]
    fn patch_merge_keeps_unset_fields() {
        let mut list = TaskList::from_draft(2, ListDraft::named("Home"), Utc::now());
        list.apply_patch(ListPatch {
            color: Some("#EF4444".to_string()),
            ..ListPatch::default()
        });
        assert_eq!(list.name, "Home");
        assert_eq!(list.color, "#EF4444");
    }

    #[test]
    fn validate_rejects_blank_name() {
        assert_eq!(
            ListDraft::named(" ").validate(),
            Err(ListValidationError::EmptyName)
        );
    }
}
