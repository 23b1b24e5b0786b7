//! Mock task API consumed by the task-list UI.
//!
//! # Responsibility
//! - Expose synchronous reads and simulated-network writes over a task store.
//! - Provide a process-wide accessor for callers without explicit wiring.
//!
//! # Invariants
//! - Writes run the network step first, then existence, then validation.
//! - A failed write leaves the store unchanged.
//! - Batch writes are all-or-nothing.

pub mod mock_api;
pub mod registry;

use crate::model::task::TaskId;
use crate::model::validation::ValidationError;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Message reported by simulated network failures.
pub const NETWORK_ERROR_MESSAGE: &str = "Network error: Unable to save changes";
/// Message reported when the process-wide API is used before initialization.
pub const NOT_INITIALIZED_MESSAGE: &str =
    "Mock API not initialized. Call initialize_mock_api() first.";

pub type ApiResult<T> = Result<T, ApiError>;

/// Error surface of the mock task API.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// Simulated transient transport failure. Not retried by the API.
    Network,
    /// Update targeted an unknown task (first unknown ID for batches).
    NotFound(TaskId),
    /// Payload violated a content rule.
    Validation(ValidationError),
    /// Process-wide accessor used before `initialize_mock_api`.
    NotInitialized,
    /// A writer panicked while holding the store lock.
    StorePoisoned,
}

impl ApiError {
    /// Flattens the error into the message list rendered by UI callers.
    pub fn messages(&self) -> Vec<String> {
        match self {
            Self::Validation(err) => err.messages.clone(),
            other => vec![other.to_string()],
        }
    }

    /// Returns whether retrying the same call may succeed.
    pub fn is_transient(&self) -> bool {
        matches!(self, Self::Network)
    }
}

impl Display for ApiError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Network => write!(f, "{NETWORK_ERROR_MESSAGE}"),
            Self::NotFound(id) => write!(f, "Task not found: {id}"),
            Self::Validation(err) => write!(f, "{err}"),
            Self::NotInitialized => write!(f, "{NOT_INITIALIZED_MESSAGE}"),
            Self::StorePoisoned => write!(f, "task store lock poisoned"),
        }
    }
}

impl Error for ApiError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Validation(err) => Some(err),
            _ => None,
        }
    }
}

impl From<ValidationError> for ApiError {
    fn from(value: ValidationError) -> Self {
        Self::Validation(value)
    }
}

#[cfg(test)]
mod tests {
    use super::{ApiError, NETWORK_ERROR_MESSAGE};
    use crate::model::validation::ValidationError;
    use std::error::Error;

    #[test]
    fn messages_flatten_validation_and_wrap_others() {
        let err = ApiError::from(ValidationError::new(["a", "b"]));
        assert_eq!(err.messages(), vec!["a".to_string(), "b".to_string()]);
        assert!(err.source().is_some());

        assert_eq!(
            ApiError::Network.messages(),
            vec![NETWORK_ERROR_MESSAGE.to_string()]
        );
        assert_eq!(
            ApiError::NotFound("t9".to_string()).to_string(),
            "Task not found: t9"
        );
    }

    #[test]
    fn only_network_errors_are_transient() {
        assert!(ApiError::Network.is_transient());
        assert!(!ApiError::NotFound("t1".to_string()).is_transient());
    }
}
