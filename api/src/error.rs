//! Error types for the card validator API
//!
//! Only the HTTP layer can fail. A malformed or unrecognised card number is a
//! normal negative result and never surfaces here.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

/// Application layer errors - used by HTTP handlers
#[derive(Debug, Error)]
pub enum AppError {
    /// Request body is not the expected JSON shape.
    /// Only the error category and position are displayed, since serde's own
    /// message can echo the rejected card number.
    #[error(
        "Invalid JSON payload: {:?} error at line {} column {}",
        .0.classify(),
        .0.line(),
        .0.column()
    )]
    BadRequest(#[source] serde_json::Error),

    #[error("Method not allowed: {0}")]
    MethodNotAllowed(String),

    /// Response body could not be serialized
    #[error("Error encoding response: {0}")]
    Encoding(#[source] serde_json::Error),
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::MethodNotAllowed(_) => StatusCode::METHOD_NOT_ALLOWED,
            AppError::Encoding(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Plain text body returned to the client
    fn message(&self) -> &'static str {
        match self {
            AppError::BadRequest(_) => "Invalid JSON payload",
            AppError::MethodNotAllowed(_) => "Method not allowed",
            AppError::Encoding(_) => "Error encoding response",
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();

        if status.is_server_error() {
            tracing::error!("{}", self);
        } else {
            tracing::warn!("{}", self);
        }

        (status, self.message()).into_response()
    }
}
