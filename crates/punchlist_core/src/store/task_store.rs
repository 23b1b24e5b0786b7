//! Task store keyed by stable task ID.

use crate::model::task::{Task, TaskId};
use std::collections::HashMap;

/// Mapping from task ID to the latest persisted task record.
#[derive(Debug, Clone, Default)]
pub struct TaskStore {
    tasks: HashMap<TaskId, Task>,
}

impl TaskStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Populates a store wholesale; a later record with a repeated ID
    /// replaces the earlier one.
    pub fn from_tasks<I>(tasks: I) -> Self
    where
        I: IntoIterator<Item = Task>,
    {
        let mut store = Self::new();
        for task in tasks {
            store.put(task);
        }
        store
    }

    /// Looks up one record. Unknown IDs yield `None`.
    pub fn get(&self, id: &str) -> Option<&Task> {
        self.tasks.get(id)
    }

    /// Returns a snapshot of every record in unspecified order.
    pub fn get_all(&self) -> Vec<Task> {
        self.tasks.values().cloned().collect()
    }

    /// Inserts or replaces the record stored under `task.id`.
    pub fn put(&mut self, task: Task) {
        self.tasks.insert(task.id.clone(), task);
    }

    pub fn contains(&self, id: &str) -> bool {
        self.tasks.contains_key(id)
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }
}
