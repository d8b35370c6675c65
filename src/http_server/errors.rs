//! # HTTP API Errors
//!
//! Maps validation and store failures onto status codes and a `{error}`
//! body. Store failures are logged with their cause and answered with a
//! generic message.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use thiserror::Error;

use crate::observability::{log_event, Event};
use crate::storage::StoreError;
use crate::validation::ValidationError;

/// Result type for handlers
pub type ApiResult<T> = Result<T, ApiError>;

#[derive(Debug, Error)]
pub enum ApiError {
    // ==================
    // Client Errors (4xx)
    // ==================
    /// Candidate or reference coordinate rejected
    #[error("{0}")]
    Validation(#[from] ValidationError),

    /// Body is not parseable JSON
    #[error("Invalid request body: {0}")]
    InvalidBody(String),

    /// Query string could not be decoded
    #[error("Invalid query string: {0}")]
    InvalidQuery(String),

    // ==================
    // Server Errors (5xx)
    // ==================
    /// The store failed; the cause is logged, not returned
    #[error("Database error")]
    Store(#[from] StoreError),
}

impl ApiError {
    /// Get HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::Validation(_) => StatusCode::BAD_REQUEST,
            ApiError::InvalidBody(_) => StatusCode::BAD_REQUEST,
            ApiError::InvalidQuery(_) => StatusCode::BAD_REQUEST,
            ApiError::Store(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn log(&self) {
        match self {
            ApiError::Validation(err) => {
                let message = err.to_string();
                log_event(
                    Event::ValidationRejected,
                    &[("code", err.code()), ("field", err.field().key()), ("error", message.as_str())],
                );
            }
            ApiError::InvalidBody(reason) | ApiError::InvalidQuery(reason) => {
                log_event(Event::ValidationRejected, &[("error", reason.as_str())]);
            }
            ApiError::Store(err) => {
                let cause = err.to_string();
                log_event(
                    Event::StoreFailed,
                    &[("code", err.code().code()), ("cause", cause.as_str())],
                );
            }
        }
    }
}

/// Error response body
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        self.log();
        let status = self.status_code();
        let body = Json(ErrorResponse {
            error: self.to_string(),
        });
        (status, body).into_response()
    }
}
