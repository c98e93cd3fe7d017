//! Data transfer objects shared between the server API and the web client.

pub mod agent;
pub mod api;
pub mod arsenal;
pub mod event;
