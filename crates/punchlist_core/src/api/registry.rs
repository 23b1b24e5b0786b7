//! Process-wide mock API slot.
//!
//! Prefer constructing `MockApi` and passing it to callers. This slot exists
//! for collaborators that cannot be wired explicitly.
//!
//! # Invariants
//! - The slot holds at most one instance.
//! - Initializing again replaces the instance without migrating its state.

use crate::api::mock_api::MockApi;
use crate::api::{ApiError, ApiResult};
use crate::model::task::Task;
use crate::network::NetworkPolicy;
use log::info;
use once_cell::sync::Lazy;
use std::sync::{Arc, PoisonError, RwLock};

static MOCK_API: Lazy<RwLock<Option<Arc<MockApi>>>> = Lazy::new(|| RwLock::new(None));

/// Replaces the process-wide instance with a fresh API over `tasks`, using
/// the default randomized network policy.
pub fn initialize_mock_api<I>(tasks: I) -> Arc<MockApi>
where
    I: IntoIterator<Item = Task>,
{
    install(MockApi::new(tasks))
}

/// Same as `initialize_mock_api`, with an explicit network policy.
pub fn initialize_mock_api_with<I>(tasks: I, policy: Arc<dyn NetworkPolicy>) -> Arc<MockApi>
where
    I: IntoIterator<Item = Task>,
{
    install(MockApi::with_policy(tasks, policy))
}

/// Returns the current process-wide instance.
///
/// # Errors
/// - `ApiError::NotInitialized` before the first initialize call or after
///   `reset_mock_api`.
pub fn mock_api() -> ApiResult<Arc<MockApi>> {
    MOCK_API
        .read()
        .unwrap_or_else(PoisonError::into_inner)
        .clone()
        .ok_or(ApiError::NotInitialized)
}

/// Drops the process-wide instance. Returns whether one was installed.
pub fn reset_mock_api() -> bool {
    let previous = MOCK_API
        .write()
        .unwrap_or_else(PoisonError::into_inner)
        .take();
    previous.is_some()
}

fn install(api: MockApi) -> Arc<MockApi> {
    let api = Arc::new(api);
    let task_count = api.task_count();
    let replaced = MOCK_API
        .write()
        .unwrap_or_else(PoisonError::into_inner)
        .replace(Arc::clone(&api))
        .is_some();
    info!("event=mock_api_init module=api status=ok task_count={task_count} replaced={replaced}");
    api
}
