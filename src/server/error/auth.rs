use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use dioxus_logger::tracing;
use thiserror::Error;

use crate::server::error::error_response;

#[derive(Error, Debug)]
pub enum AuthError {
    #[error("Agent ID is not present in session")]
    AgentNotInSession,
    #[error("Agent ID {0:?} not found in database despite having an active session")]
    AgentNotInDatabase(i32),
    #[error("Agent ID {agent_id:?} with role {role:?} is not permitted to {action}")]
    Forbidden {
        agent_id: i32,
        role: String,
        action: String,
    },
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        match self {
            Self::AgentNotInSession => {
                tracing::debug!("{}", self);

                error_response(StatusCode::NOT_FOUND, "User not found")
            }
            Self::AgentNotInDatabase(agent_id) => {
                tracing::debug!(agent_id = %agent_id, "{}", self);

                error_response(StatusCode::NOT_FOUND, "User not found")
            }
            Self::Forbidden { .. } => {
                tracing::debug!("{}", self);

                error_response(
                    StatusCode::FORBIDDEN,
                    "You do not have permission to perform this action",
                )
            }
        }
    }
}
