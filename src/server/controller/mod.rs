//! HTTP controller endpoints for the mission control API.
//!
//! Axum handlers resolve the viewer from the session, delegate to the services and
//! return JSON responses. Every handler is annotated for utoipa so the OpenAPI document
//! served at `/api/docs` stays in sync with the routes.

pub mod agent;
pub mod arsenal;
pub mod auth;
pub mod event;
pub mod util;
