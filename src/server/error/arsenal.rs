use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::server::error::{error_response, InternalServerError};

#[derive(Error, Debug)]
pub enum ArsenalError {
    #[error("Equipment name must not be empty")]
    EmptyName,
    #[error("Unknown arsenal type: {0:?}")]
    UnknownKind(String),
    #[error("Equipment ID {0:?} not found")]
    NotFound(i32),
    #[error("Equipment ID {id:?} has unknown stored type {kind:?}")]
    CorruptKind { id: i32, kind: String },
}

impl IntoResponse for ArsenalError {
    fn into_response(self) -> Response {
        match self {
            Self::EmptyName | Self::UnknownKind(_) => {
                error_response(StatusCode::BAD_REQUEST, self.to_string())
            }
            Self::NotFound(_) => error_response(StatusCode::NOT_FOUND, self.to_string()),
            Self::CorruptKind { .. } => {
                InternalServerError(self).into_response()
            }
        }
    }
}
