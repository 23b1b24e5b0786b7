//! Mock task API with simulated latency and failures.
//!
//! # Responsibility
//! - Serve reads straight from the task store.
//! - Run writes through the network policy, existence checks and payload
//!   validation before persisting merged records.
//!
//! # Invariants
//! - The store lock is never held across the simulated delay.
//! - Existence and validation are evaluated after the delay, against the
//!   store state at that moment.
//! - Every persisted record gets its own `updated_at` stamp.

use crate::api::{ApiError, ApiResult};
use crate::config::{ConfigError, NetworkConfig};
use crate::model::patch::TaskPatch;
use crate::model::task::{now_epoch_ms, Task};
use crate::model::validation::validate_patch;
use crate::network::{NetworkPolicy, RandomNetworkPolicy};
use crate::store::task_store::TaskStore;
use log::{info, warn};
use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

/// In-memory task backend standing in for the remote task service.
#[derive(Debug)]
pub struct MockApi {
    store: RwLock<TaskStore>,
    policy: Arc<dyn NetworkPolicy>,
}

impl MockApi {
    /// Creates an API over `tasks` with the default randomized policy.
    pub fn new<I>(tasks: I) -> Self
    where
        I: IntoIterator<Item = Task>,
    {
        Self::with_policy(tasks, Arc::new(RandomNetworkPolicy::default()))
    }

    /// Creates an API over `tasks` with a caller-supplied network policy.
    pub fn with_policy<I>(tasks: I, policy: Arc<dyn NetworkPolicy>) -> Self
    where
        I: IntoIterator<Item = Task>,
    {
        Self {
            store: RwLock::new(TaskStore::from_tasks(tasks)),
            policy,
        }
    }

    /// Creates an API whose randomized policy follows `config`.
    ///
    /// # Errors
    /// - Returns the config validation error when `config` is invalid.
    pub fn from_config<I>(tasks: I, config: &NetworkConfig) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = Task>,
    {
        let policy = RandomNetworkPolicy::new(*config)?;
        Ok(Self::with_policy(tasks, Arc::new(policy)))
    }

    /// Gets one task by ID. Never fails and never waits.
    pub fn get_task(&self, id: &str) -> Option<Task> {
        self.read_store().get(id).cloned()
    }

    /// Lists every task in unspecified order. Never fails and never waits.
    pub fn get_all_tasks(&self) -> Vec<Task> {
        self.read_store().get_all()
    }

    pub fn task_count(&self) -> usize {
        self.read_store().len()
    }

    /// Merges `patch` into one task after the simulated network step.
    ///
    /// # Errors
    /// - `ApiError::Network` when the policy fails the call.
    /// - `ApiError::NotFound` when `id` is unknown at resolution time.
    /// - `ApiError::Validation` when `patch` violates a content rule.
    pub async fn update_task(&self, id: &str, patch: &TaskPatch) -> ApiResult<Task> {
        if let Err(err) = self.simulate_network().await {
            warn!("event=task_update module=api status=error task_id={id} reason=network");
            return Err(err);
        }

        let updated = {
            let mut store = self.write_store()?;
            let current = store
                .get(id)
                .ok_or_else(|| ApiError::NotFound(id.to_string()))?;
            validate_patch(patch)?;

            let updated = patch.apply(current, now_epoch_ms());
            store.put(updated.clone());
            updated
        };

        info!(
            "event=task_update module=api status=ok task_id={} payload={}",
            id,
            payload_summary(patch)
        );
        Ok(updated)
    }

    /// Merges `patch` into every task in `ids`, all or nothing.
    ///
    /// The network step runs even when `ids` is empty. Results follow the
    /// order of `ids`; a repeated ID yields one entry per occurrence.
    ///
    /// # Errors
    /// - `ApiError::Network` when the policy fails the call.
    /// - `ApiError::NotFound` naming the first unknown ID; nothing is written.
    /// - `ApiError::Validation` when `patch` violates a content rule.
    pub async fn update_tasks_batch<S>(&self, ids: &[S], patch: &TaskPatch) -> ApiResult<Vec<Task>>
    where
        S: AsRef<str> + Sync,
    {
        if let Err(err) = self.simulate_network().await {
            warn!(
                "event=task_batch_update module=api status=error count={} reason=network",
                ids.len()
            );
            return Err(err);
        }

        if ids.is_empty() {
            return Ok(Vec::new());
        }

        let updated = {
            let mut store = self.write_store()?;

            let mut selected = Vec::with_capacity(ids.len());
            for id in ids {
                let id = id.as_ref();
                let task = store
                    .get(id)
                    .ok_or_else(|| ApiError::NotFound(id.to_string()))?;
                selected.push(task.clone());
            }

            validate_patch(patch)?;

            selected
                .iter()
                .map(|task| {
                    let next = patch.apply(task, now_epoch_ms());
                    store.put(next.clone());
                    next
                })
                .collect::<Vec<_>>()
        };

        info!(
            "event=task_batch_update module=api status=ok task_ids={:?} payload={}",
            ids.iter().map(AsRef::as_ref).collect::<Vec<&str>>(),
            payload_summary(patch)
        );
        Ok(updated)
    }

    async fn simulate_network(&self) -> ApiResult<()> {
        let delay = self.policy.next_delay();
        tokio::time::sleep(delay).await;

        if self.policy.should_fail() {
            return Err(ApiError::Network);
        }
        Ok(())
    }

    fn read_store(&self) -> RwLockReadGuard<'_, TaskStore> {
        // Reads must always succeed; writers only replace whole records.
        self.store.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write_store(&self) -> ApiResult<RwLockWriteGuard<'_, TaskStore>> {
        self.store.write().map_err(|_| ApiError::StorePoisoned)
    }
}

fn payload_summary(patch: &TaskPatch) -> String {
    serde_json::to_string(patch).unwrap_or_else(|_| "<unserializable>".to_string())
}
