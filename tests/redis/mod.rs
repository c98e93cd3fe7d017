//! Tests touching a live Valkey/Redis instance at `127.0.0.1:6379`.
//!
//! Run with `--features redis-test`.

mod chat;
