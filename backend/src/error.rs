//! Error types and error handling for the application
//!
//! This module defines transport-level error types that can be converted to HTTP
//! responses. Business errors from the string service never reach this type;
//! endpoints fold them into the response body instead.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Application-level error types
///
/// Each variant implements automatic conversion to HTTP responses via `IntoResponse`.
#[derive(Error, Debug)]
pub enum AppError {
    /// Request body could not be decoded
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    /// Internal server error (catch-all for unexpected errors)
    #[error("Internal server error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl AppError {
    /// HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::InvalidRequest(_) => StatusCode::BAD_REQUEST,
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

/// JSON body returned for every transport-level failure
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorBody {
    /// Human-readable error message
    pub error: String,
    /// HTTP status code, repeated from the response line
    pub status: u16,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        match &self {
            AppError::Internal(e) => tracing::error!(error = %e, "Request failed"),
            AppError::InvalidRequest(msg) => tracing::debug!(reason = %msg, "Rejected request"),
        }

        let body = Json(ErrorBody {
            error: self.to_string(),
            status: status.as_u16(),
        });

        (status, body).into_response()
    }
}
