//! Data access layer repositories.
//!
//! One repository per store collection. Each repository owns the reads and writes of its
//! collection, including the ordered reference lists attached to its documents.

pub mod agent;
pub mod arsenal;
pub mod event;
