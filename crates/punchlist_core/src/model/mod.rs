//! Task domain model shared by the store, the mock API and UI callers.
//!
//! # Responsibility
//! - Define the flattened task record rendered by list views.
//! - Define partial update payloads and the pure merge applied on writes.
//! - Define payload validation rules and the UI-facing validation error.
//!
//! # Invariants
//! - Every task is identified by a stable, non-empty `TaskId`.
//! - Relationship fields are denormalized id/name/initials values, never joins.

pub mod patch;
pub mod task;
pub mod validation;
