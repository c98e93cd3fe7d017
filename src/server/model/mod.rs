//! Server application models.
//!
//! Application state shared by the HTTP handlers, the session-stored viewer and the
//! documents written to the real-time store.

pub mod app;
pub mod chat;
pub mod session;
