//! API error types and handling.

use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use toolbench::ToolbenchError;

/// API error type.
#[derive(Debug)]
pub enum ApiError {
    /// Request body could not be read as the expected JSON shape.
    BadRequest(String),
    /// Error from the toolbench library.
    Toolbench(ToolbenchError),
}

#[derive(Serialize)]
struct ErrorResponse {
    error: String,
    message: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (error, message) = match self {
            ApiError::BadRequest(msg) => ("bad_request", msg),
            ApiError::Toolbench(e) => {
                let code = match e {
                    ToolbenchError::EmptyInput(_) => "empty_input",
                    ToolbenchError::InvalidInput(_) => "invalid_input",
                    ToolbenchError::InsufficientData(_) => "insufficient_data",
                    ToolbenchError::Json(_) => "invalid_json",
                    ToolbenchError::WorkerClosed => "worker_closed",
                };
                (code, e.to_string())
            }
        };

        (
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse {
                error: error.to_string(),
                message,
            }),
        )
            .into_response()
    }
}

impl From<ToolbenchError> for ApiError {
    fn from(err: ToolbenchError) -> Self {
        ApiError::Toolbench(err)
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::BadRequest(rejection.body_text())
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ApiError::BadRequest(msg) => write!(f, "Bad request: {}", msg),
            ApiError::Toolbench(e) => write!(f, "Toolbench error: {}", e),
        }
    }
}

impl std::error::Error for ApiError {}
