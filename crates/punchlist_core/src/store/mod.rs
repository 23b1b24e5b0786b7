//! In-memory task storage.
//!
//! # Responsibility
//! - Own all task state for the lifetime of one mock API instance.
//! - Keep lookup and replacement details out of API orchestration.
//!
//! # Invariants
//! - Keys are unique task IDs; each key maps to the record with that `id`.
//! - Iteration order is unspecified.

pub mod task_store;
