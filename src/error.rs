//! Error types for HTTP handlers.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

/// Plain-text body for a missing task.
pub const TASK_NOT_FOUND: &str = "task not found";

/// Errors a request can end in.
#[derive(Debug, Error)]
pub enum AppError {
    /// The requested task id does not exist (or is not an id at all).
    #[error("task not found")]
    NotFound,

    /// The store failed (I/O, lock contention, corrupt file).
    #[error("storage error: {0}")]
    Storage(#[from] anyhow::Error),

    /// The blocking store call panicked or was cancelled.
    #[error("background task failed: {0}")]
    Join(#[from] tokio::task::JoinError),
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::NotFound => StatusCode::NOT_FOUND,
            AppError::Storage(_) | AppError::Join(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        match self {
            AppError::NotFound => (status, TASK_NOT_FOUND).into_response(),
            err => {
                tracing::error!(error = %err, "Request failed");
                (status, "internal server error").into_response()
            }
        }
    }
}

/// Result type for handlers.
pub type AppResult<T> = std::result::Result<T, AppError>;
