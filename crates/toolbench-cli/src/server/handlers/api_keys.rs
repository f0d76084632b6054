//! API-key calculator handler.

use axum::{extract::rejection::JsonRejection, Json};
use toolbench::api_keys::calculate;
use toolbench::{ApiKeysInput, ApiKeysOutput};

use crate::server::error::ApiError;

pub async fn calculate_api_keys(
    payload: Result<Json<ApiKeysInput>, JsonRejection>,
) -> Result<Json<ApiKeysOutput>, ApiError> {
    let Json(input) = payload?;
    Ok(Json(calculate(&input)?))
}
