//! Update-payload validation and the UI-facing validation error.
//!
//! # Responsibility
//! - Check update payloads against content rules before they are applied.
//! - Translate failed HTTP-style responses into validation errors.
//!
//! # Invariants
//! - Validation looks at the payload only, never at the merged record.
//! - A `ValidationError` renders as its messages joined with `", "`.

use crate::model::patch::TaskPatch;
use serde_json::Value;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Message reported when a payload sets a blank title.
pub const EMPTY_TITLE_MESSAGE: &str = "Title cannot be empty";
/// Fallback message when a failed response carries no readable error list.
pub const UNKNOWN_ERROR_MESSAGE: &str = "Unknown error";

/// Human-readable validation failure carrying one or more messages.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    pub messages: Vec<String>,
}

impl ValidationError {
    pub fn new<I, S>(messages: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            messages: messages.into_iter().map(Into::into).collect(),
        }
    }

    /// Single-message convenience constructor.
    pub fn single(message: impl Into<String>) -> Self {
        Self {
            messages: vec![message.into()],
        }
    }

    /// Returns whether any message equals `message`.
    pub fn contains(&self, message: &str) -> bool {
        self.messages.iter().any(|item| item == message)
    }

    /// Converts a completed response into a validation result.
    ///
    /// Rules:
    /// - `ok` responses yield `Ok(())`.
    /// - Otherwise the body is parsed as JSON; an `errors` string list becomes
    ///   the message list.
    /// - Unparseable bodies and missing/null `errors` yield `"Unknown error"`.
    pub fn check_response(response: &ApiResponse) -> Result<(), ValidationError> {
        if response.ok {
            return Ok(());
        }

        // `Value::get` only matches object keys, so arrays and scalars fall
        // through to the unknown-error message.
        let messages = serde_json::from_str::<Value>(&response.body)
            .ok()
            .and_then(|body| body.get("errors").cloned())
            .and_then(|errors| serde_json::from_value::<Option<Vec<String>>>(errors).ok())
            .flatten();
        match messages {
            Some(messages) => Err(Self { messages }),
            None => Err(Self::single(UNKNOWN_ERROR_MESSAGE)),
        }
    }
}

impl Display for ValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.messages.join(", "))
    }
}

impl Error for ValidationError {}

/// Completed network response as seen by the error-translation helper.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiResponse {
    pub ok: bool,
    /// Raw response body, expected to be JSON on failures.
    pub body: String,
}

impl ApiResponse {
    pub fn new(ok: bool, body: impl Into<String>) -> Self {
        Self {
            ok,
            body: body.into(),
        }
    }

    /// Builds a response whose `ok` flag follows HTTP 2xx semantics.
    pub fn from_status(status: u16, body: impl Into<String>) -> Self {
        Self::new((200..300).contains(&status), body)
    }
}

type PatchRule = fn(&TaskPatch) -> Option<String>;

const PATCH_RULES: &[PatchRule] = &[title_not_blank];

/// Validates an update payload against every content rule.
///
/// # Errors
/// - Returns all violated rule messages at once, in rule order.
pub fn validate_patch(patch: &TaskPatch) -> Result<(), ValidationError> {
    let messages = PATCH_RULES
        .iter()
        .filter_map(|rule| rule(patch))
        .collect::<Vec<_>>();
    if messages.is_empty() {
        Ok(())
    } else {
        Err(ValidationError { messages })
    }
}

fn title_not_blank(patch: &TaskPatch) -> Option<String> {
    match patch.title.as_deref() {
        Some(title) if title.trim().is_empty() => Some(EMPTY_TITLE_MESSAGE.to_string()),
        _ => None,
    }
}
