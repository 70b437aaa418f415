use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;
use thiserror::Error;

/// Errors surfaced to API clients.
///
/// Upstream failures are logged in full where they happen; the variant only
/// carries the message that is safe to show a client.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Upstream error: {0}")]
    Upstream(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Validation error: {0}")]
    Validation(String),
}

impl AppError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::Upstream(_) => StatusCode::BAD_GATEWAY,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Validation(_) => StatusCode::BAD_REQUEST,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let message = match self {
            AppError::Upstream(msg) | AppError::NotFound(msg) | AppError::Validation(msg) => msg,
        };

        let body = json!({ "message": message });
        (status, Json(body)).into_response()
    }
}
