//! Partial task update payloads.
//!
//! # Responsibility
//! - Represent "any subset of task fields" without ambiguity between an
//!   absent field and a field explicitly cleared to `null`.
//! - Apply payloads onto existing records with a pure shallow merge.
//!
//! # Invariants
//! - Present fields override the base record; absent fields never do.
//! - `id` is not part of the payload, so identity cannot change through it.
//! - `updated_at` is stamped by the caller of `apply`, never taken from input.

use crate::model::task::{Tag, Task, TaskPriority, TaskStatus, TaskType};
use serde::{Deserialize, Deserializer, Serialize};

/// Partial update for one task.
///
/// Non-nullable fields use `Option<T>` (`None` = absent). Nullable fields use
/// `Option<Option<T>>`: `None` = absent, `Some(None)` = clear, `Some(Some(v))`
/// = set. JSON `null` on a nullable field decodes to `Some(None)`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskPatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<TaskStatus>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub task_type: Option<TaskType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub priority: Option<TaskPriority>,
    #[serde(default, deserialize_with = "explicit", skip_serializing_if = "Option::is_none")]
    pub due_date: Option<Option<String>>,
    #[serde(default, deserialize_with = "explicit", skip_serializing_if = "Option::is_none")]
    pub started_at: Option<Option<i64>>,
    #[serde(default, deserialize_with = "explicit", skip_serializing_if = "Option::is_none")]
    pub ended_at: Option<Option<i64>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<i64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub photo_count: Option<u32>,
    #[serde(default, deserialize_with = "explicit", skip_serializing_if = "Option::is_none")]
    pub featured_photo_url: Option<Option<String>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<Tag>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updates_count: Option<u32>,
    #[serde(default, deserialize_with = "explicit", skip_serializing_if = "Option::is_none")]
    pub last_comment_created_at: Option<Option<i64>>,

    #[serde(default, deserialize_with = "explicit", skip_serializing_if = "Option::is_none")]
    pub coordinator_id: Option<Option<String>>,
    #[serde(default, deserialize_with = "explicit", skip_serializing_if = "Option::is_none")]
    pub coordinator_name: Option<Option<String>>,
    #[serde(default, deserialize_with = "explicit", skip_serializing_if = "Option::is_none")]
    pub coordinator_initials: Option<Option<String>>,
    #[serde(default, deserialize_with = "explicit", skip_serializing_if = "Option::is_none")]
    pub assigned_to_id: Option<Option<String>>,
    #[serde(default, deserialize_with = "explicit", skip_serializing_if = "Option::is_none")]
    pub assigned_to_name: Option<Option<String>>,
    #[serde(default, deserialize_with = "explicit", skip_serializing_if = "Option::is_none")]
    pub assigned_to_initials: Option<Option<String>>,

    #[serde(default, deserialize_with = "explicit", skip_serializing_if = "Option::is_none")]
    pub project_id: Option<Option<String>>,
    #[serde(default, deserialize_with = "explicit", skip_serializing_if = "Option::is_none")]
    pub project_name: Option<Option<String>>,

    #[serde(default, deserialize_with = "explicit", skip_serializing_if = "Option::is_none")]
    pub work_order_id: Option<Option<String>>,
    #[serde(default, deserialize_with = "explicit", skip_serializing_if = "Option::is_none")]
    pub work_order_number: Option<Option<String>>,

    #[serde(default, deserialize_with = "explicit", skip_serializing_if = "Option::is_none")]
    pub area_name: Option<Option<String>>,

    #[serde(default, deserialize_with = "explicit", skip_serializing_if = "Option::is_none")]
    pub number: Option<Option<String>>,
}

/// Applies every present patch field onto `target`.
macro_rules! merge_present {
    ($patch:expr, $target:expr, $($field:ident),+ $(,)?) => {
        $(
            if let Some(value) = &$patch.$field {
                $target.$field = value.clone();
            }
        )+
    };
}

impl TaskPatch {
    /// Payload that only sets `title`.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Payload that only sets `status`.
    pub fn with_status(mut self, status: TaskStatus) -> Self {
        self.status = Some(status);
        self
    }

    /// Sets or clears the flattened assignee tuple in one step.
    pub fn with_assignee(mut self, assignee: Option<(String, String, String)>) -> Self {
        match assignee {
            Some((id, name, initials)) => {
                self.assigned_to_id = Some(Some(id));
                self.assigned_to_name = Some(Some(name));
                self.assigned_to_initials = Some(Some(initials));
            }
            None => {
                self.assigned_to_id = Some(None);
                self.assigned_to_name = Some(None);
                self.assigned_to_initials = Some(None);
            }
        }
        self
    }

    /// Returns whether no field is present.
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Merges this payload over `base` and stamps `updated_at`.
    ///
    /// Pure: `base` is not modified and no clock is read.
    pub fn apply(&self, base: &Task, updated_at: i64) -> Task {
        let mut next = base.clone();
        merge_present!(
            self,
            next,
            title,
            status,
            task_type,
            priority,
            due_date,
            started_at,
            ended_at,
            created_at,
            photo_count,
            featured_photo_url,
            tags,
            updates_count,
            last_comment_created_at,
            coordinator_id,
            coordinator_name,
            coordinator_initials,
            assigned_to_id,
            assigned_to_name,
            assigned_to_initials,
            project_id,
            project_name,
            work_order_id,
            work_order_number,
            area_name,
            number,
        );
        next.updated_at = updated_at;
        next
    }
}

// Wraps any present value (including JSON null) in `Some`, so that only a
// missing key falls back to the `default` of `None`.
fn explicit<'de, T, D>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    T: Deserialize<'de>,
    D: Deserializer<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}
