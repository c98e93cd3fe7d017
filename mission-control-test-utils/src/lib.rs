//! Shared test setup for the mission control crates.
//!
//! Tests are written in two phases: a [`TestBuilder`] declares the tables and fixtures a
//! test needs, then `build()` returns a [`TestContext`] holding an in-memory SQLite
//! database and a session backed by an in-memory store.

pub mod builder;
pub mod context;
pub mod error;
pub mod fixtures;
pub mod redis;

pub use builder::TestBuilder;
pub use context::TestContext;
pub use error::TestError;

pub mod prelude {
    pub use crate::{redis::RedisTest, TestBuilder, TestContext, TestError};
}
