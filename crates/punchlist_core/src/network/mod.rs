//! Simulated network behavior for mock writes.
//!
//! # Responsibility
//! - Decide how long a simulated write waits and whether it fails.
//! - Let tests swap randomized behavior for deterministic policies.
//!
//! # Invariants
//! - Policies never touch task state.
//! - The delay is drawn before the failure decision, once per write.

pub mod policy;

pub use policy::{FixedNetworkPolicy, NetworkPolicy, RandomNetworkPolicy, ScriptedNetworkPolicy};
