//! Type generation handler.

use axum::{extract::rejection::JsonRejection, Json};
use toolbench::worker::generate_types;
use toolbench::{TypeRequest, TypeResponse};

use crate::server::error::ApiError;

/// Generate a declaration off the request task.
///
/// Inference failures are reported in the body (`success: false`), not as
/// an HTTP error.
pub async fn create_types(
    payload: Result<Json<TypeRequest>, JsonRejection>,
) -> Result<Json<TypeResponse>, ApiError> {
    let Json(request) = payload?;
    Ok(Json(generate_types(request).await))
}
