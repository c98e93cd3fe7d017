//! Tests for HTTP controller endpoints.
//!
//! Handlers are called directly with extractors built from a [`TestContext`], then
//! converted into responses to check status codes and bodies.

mod agent;
mod arsenal;
mod auth;
mod event;

use axum::{body::to_bytes, response::Response};
use mission_control::server::model::session::agent::SessionAgentId;
use mission_control_test_utils::prelude::*;

/// Insert an agent with the given role and store them in the test session
async fn sign_in(test: &TestContext, role: &str) -> Result<entity::agent::Model, TestError> {
    let agent = test.fixtures().insert_agent("Ana", "Reyes", role).await?;

    SessionAgentId::insert(&test.session, agent.id)
        .await
        .expect("session insert should succeed");

    Ok(agent)
}

/// Read a response body as JSON
async fn json_body(resp: Response) -> serde_json::Value {
    let bytes = to_bytes(resp.into_body(), usize::MAX)
        .await
        .expect("body should be readable");

    serde_json::from_slice(&bytes).expect("body should be JSON")
}
