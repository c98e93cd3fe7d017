use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::server::error::error_response;

#[derive(Error, Debug)]
pub enum EventError {
    /// Shown inline on the create event form
    #[error("Both event name and date are required.")]
    MissingNameOrDate,
    #[error("Invalid event date {0:?}, expected YYYY-MM-DD")]
    InvalidDate(String),
    #[error("Event ID {0:?} not found")]
    NotFound(i32),
}

impl IntoResponse for EventError {
    fn into_response(self) -> Response {
        match self {
            Self::MissingNameOrDate | Self::InvalidDate(_) => {
                error_response(StatusCode::BAD_REQUEST, self.to_string())
            }
            Self::NotFound(_) => error_response(StatusCode::NOT_FOUND, self.to_string()),
        }
    }
}
