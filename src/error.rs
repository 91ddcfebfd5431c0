//! Error handling module
//!
//! Centralized error types and HTTP response conversion.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;

use crate::domain::TrackError;

/// Application-wide Result type
pub type AppResult<T> = Result<T, AppError>;

/// Application error types
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    // Client errors (4xx): validation, lookup failures, duplicates
    #[error(transparent)]
    Track(#[from] TrackError),

    // Server errors (5xx): the store is the only infrastructure dependency
    #[error("Store unavailable: {0}")]
    Database(#[from] sqlx::Error),
}

/// Error response body, matching the write-endpoint envelope
#[derive(Debug, Serialize)]
pub struct ErrorEnvelope {
    pub status: &'static str,
    pub message: String,
}

/// Error wrapper for the read endpoints, which reply with a bare
/// `{error}` body instead of the write envelope.
#[derive(Debug)]
pub struct ReadError(AppError);

/// Error response body for the read endpoints
#[derive(Debug, Serialize)]
pub struct ReadErrorBody {
    pub error: String,
}

impl From<AppError> for ReadError {
    fn from(err: AppError) -> Self {
        Self(err)
    }
}

impl From<TrackError> for ReadError {
    fn from(err: TrackError) -> Self {
        Self(AppError::Track(err))
    }
}

/// Classify an error and produce the caller-safe message for it.
fn status_and_message(err: &AppError) -> (StatusCode, String) {
    match err {
        AppError::Track(err) => (StatusCode::BAD_REQUEST, err.to_string()),

        // Infrastructure details are logged, never sent to the caller
        AppError::Database(err) => {
            tracing::error!("Store error: {:?}", err);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Internal server error".to_string(),
            )
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = status_and_message(&self);

        let body = ErrorEnvelope {
            status: "error",
            message,
        };

        (status, Json(body)).into_response()
    }
}

impl IntoResponse for ReadError {
    fn into_response(self) -> Response {
        let (status, message) = status_and_message(&self.0);

        (status, Json(ReadErrorBody { error: message })).into_response()
    }
}
