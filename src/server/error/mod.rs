//! Error types for the mission control server.
//!
//! Domain errors (configuration, authentication, equipment, events) live in their own
//! submodules and are aggregated by [`Error`]. Every error converts into an Axum response
//! so controllers can return `Result<_, Error>` and rely on `?`.

pub mod arsenal;
pub mod auth;
pub mod config;
pub mod event;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use dioxus_logger::tracing;
use thiserror::Error;

use crate::{
    model::api::ErrorDto,
    server::error::{
        arsenal::ArsenalError, auth::AuthError, config::ConfigError, event::EventError,
    },
};

/// Main error type for the mission control server.
///
/// Library errors are wrapped transparently so the `?` operator works across the data,
/// service and controller layers. None of them are retried; they are logged once when
/// converted into a response.
#[derive(Error, Debug)]
pub enum Error {
    /// Configuration error (missing or invalid environment variables).
    #[error(transparent)]
    ConfigError(#[from] ConfigError),
    /// Authentication error (no viewer in session, insufficient role).
    #[error(transparent)]
    AuthError(#[from] AuthError),
    /// Equipment registry error (validation, missing item).
    #[error(transparent)]
    ArsenalError(#[from] ArsenalError),
    /// Event board error (form validation, missing event).
    #[error(transparent)]
    EventError(#[from] EventError),
    /// Parse error (failed to parse a value from string or other format).
    #[error("Failed to parse value: {0:?}")]
    ParseError(String),
    /// Database error (query failures, connection issues, constraint violations).
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),
    /// Session error (session retrieval, storage, serialization).
    #[error(transparent)]
    SessionError(#[from] tower_sessions::session::Error),
    /// Valkey/Redis error from the session store or the chat store.
    #[error(transparent)]
    RedisError(#[from] fred::error::Error),
    /// Failed to serialize a document written to the real-time store.
    #[error(transparent)]
    SerializationError(#[from] serde_json::Error),
}

/// Converts application errors into HTTP responses.
///
/// Domain errors choose their own status codes; library errors become a logged
/// 500 Internal Server Error with a generic body.
impl IntoResponse for Error {
    fn into_response(self) -> Response {
        match self {
            Self::ConfigError(err) => err.into_response(),
            Self::AuthError(err) => err.into_response(),
            Self::ArsenalError(err) => err.into_response(),
            Self::EventError(err) => err.into_response(),
            err => InternalServerError(err).into_response(),
        }
    }
}

/// Wrapper type for converting any displayable error into a 500 Internal Server Error response.
///
/// Logs the full error and returns a generic message so implementation details are not
/// leaked to the client.
pub struct InternalServerError<E>(pub E);

impl<E: std::fmt::Display> IntoResponse for InternalServerError<E> {
    fn into_response(self) -> Response {
        tracing::error!("{}", self.0);

        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorDto {
                error: "Internal server error".to_string(),
            }),
        )
            .into_response()
    }
}

/// Builds a JSON error response with the provided status and message.
pub(crate) fn error_response(status: StatusCode, message: impl Into<String>) -> Response {
    (
        status,
        Json(ErrorDto {
            error: message.into(),
        }),
    )
        .into_response()
}
