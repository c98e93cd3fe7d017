//! Session data models.
//!
//! Type-safe wrappers over values stored in the Valkey-backed `tower-sessions` store.

pub mod agent;
