//! Core task backend for the Punchlist task table.
//! This crate is the single source of truth for task update invariants.

pub mod api;
pub mod config;
pub mod fixtures;
pub mod logging;
pub mod model;
pub mod network;
pub mod store;

pub use api::mock_api::MockApi;
pub use api::registry::{
    initialize_mock_api, initialize_mock_api_with, mock_api, reset_mock_api,
};
pub use api::{ApiError, ApiResult, NETWORK_ERROR_MESSAGE, NOT_INITIALIZED_MESSAGE};
pub use config::{ConfigError, NetworkConfig};
pub use logging::{default_log_level, init_logging, logging_status, LogTarget};
pub use model::patch::TaskPatch;
pub use model::task::{now_epoch_ms, Tag, Task, TaskError, TaskId, TaskPriority, TaskStatus, TaskType};
pub use model::validation::{
    validate_patch, ApiResponse, ValidationError, EMPTY_TITLE_MESSAGE, UNKNOWN_ERROR_MESSAGE,
};
pub use network::{FixedNetworkPolicy, NetworkPolicy, RandomNetworkPolicy, ScriptedNetworkPolicy};
pub use store::task_store::TaskStore;

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
