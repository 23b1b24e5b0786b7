//! Task record model.
//!
//! # Responsibility
//! - Define the canonical task record used by list projections.
//! - Provide constructors with stable identity and fresh timestamps.
//!
//! # Invariants
//! - `id` is never empty and never changes after construction.
//! - `updated_at` is refreshed on every applied update (see `TaskPatch::apply`).

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::time::{SystemTime, UNIX_EPOCH};
use uuid::Uuid;

/// Stable identifier for a task record.
///
/// Kept as a type alias to make semantic intent explicit in signatures.
pub type TaskId = String;

const GENERATED_ID_PREFIX: &str = "task-";

/// Workflow state shown by the status badge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TaskStatus {
    Open,
    InProgress,
    InReview,
    Completed,
    Canceled,
}

/// Task category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TaskType {
    Todo,
    ScheduledTask,
    PunchItem,
    WarrantyItem,
}

/// Task urgency.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TaskPriority {
    Normal,
    Urgent,
}

/// Colored label attached to a task.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Tag {
    pub id: String,
    pub name: String,
    /// CSS color string, e.g. `#2f855a`.
    pub background_color: String,
}

impl Tag {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        background_color: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            background_color: background_color.into(),
        }
    }
}

/// Error raised by task constructors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TaskError {
    EmptyId,
}

impl Display for TaskError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyId => write!(f, "task id cannot be empty"),
        }
    }
}

impl Error for TaskError {}

/// Flattened task record as rendered by the task table.
///
/// Serialized in camelCase to match the UI wire shape.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    pub id: TaskId,
    pub title: String,
    pub status: TaskStatus,
    pub task_type: TaskType,
    pub priority: TaskPriority,
    /// ISO-8601 calendar date, e.g. `2024-03-01`.
    pub due_date: Option<String>,
    /// Unix epoch milliseconds.
    pub started_at: Option<i64>,
    /// Unix epoch milliseconds.
    pub ended_at: Option<i64>,
    /// Unix epoch milliseconds.
    pub created_at: i64,
    /// Unix epoch milliseconds. Refreshed on every applied update.
    pub updated_at: i64,

    pub photo_count: u32,
    pub featured_photo_url: Option<String>,

    pub tags: Vec<Tag>,

    pub updates_count: u32,
    pub last_comment_created_at: Option<i64>,

    pub coordinator_id: Option<String>,
    pub coordinator_name: Option<String>,
    pub coordinator_initials: Option<String>,
    pub assigned_to_id: Option<String>,
    pub assigned_to_name: Option<String>,
    pub assigned_to_initials: Option<String>,

    pub project_id: Option<String>,
    pub project_name: Option<String>,

    pub work_order_id: Option<String>,
    pub work_order_number: Option<String>,

    pub area_name: Option<String>,

    /// Human-facing task number, e.g. `T-0042`.
    pub number: Option<String>,
}

impl Task {
    /// Creates an open todo task with a generated stable ID.
    pub fn new(title: impl Into<String>) -> Self {
        Self::build(
            format!("{GENERATED_ID_PREFIX}{}", Uuid::new_v4()),
            title.into(),
        )
    }

    /// Creates an open todo task with a caller-provided ID.
    ///
    /// Used by seed/import paths where identity already exists externally.
    ///
    /// # Errors
    /// - Returns `TaskError::EmptyId` when `id` is empty or whitespace.
    pub fn with_id(id: impl Into<String>, title: impl Into<String>) -> Result<Self, TaskError> {
        let id = id.into();
        if id.trim().is_empty() {
            return Err(TaskError::EmptyId);
        }
        Ok(Self::build(id, title.into()))
    }

    fn build(id: TaskId, title: String) -> Self {
        let now = now_epoch_ms();
        Self {
            id,
            title,
            status: TaskStatus::Open,
            task_type: TaskType::Todo,
            priority: TaskPriority::Normal,
            due_date: None,
            started_at: None,
            ended_at: None,
            created_at: now,
            updated_at: now,
            photo_count: 0,
            featured_photo_url: None,
            tags: Vec::new(),
            updates_count: 0,
            last_comment_created_at: None,
            coordinator_id: None,
            coordinator_name: None,
            coordinator_initials: None,
            assigned_to_id: None,
            assigned_to_name: None,
            assigned_to_initials: None,
            project_id: None,
            project_name: None,
            work_order_id: None,
            work_order_number: None,
            area_name: None,
            number: None,
        }
    }

    /// Returns whether the task reached a terminal workflow state.
    pub fn is_closed(&self) -> bool {
        matches!(self.status, TaskStatus::Completed | TaskStatus::Canceled)
    }
}

/// Current wall-clock time in Unix epoch milliseconds.
///
/// Clamps to `0` if the system clock reports a time before the epoch.
pub fn now_epoch_ms() -> i64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| i64::try_from(elapsed.as_millis()).unwrap_or(i64::MAX))
        .unwrap_or(0)
}
