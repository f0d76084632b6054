//! Slug handler.

use axum::{extract::rejection::JsonRejection, Json};
use serde::{Deserialize, Serialize};
use toolbench::{generate_slug, SlugOptions};

use crate::server::error::ApiError;

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SlugRequest {
    pub text: String,
    #[serde(default)]
    pub use_underscore: bool,
}

#[derive(Serialize)]
pub struct SlugResponse {
    pub slug: String,
}

pub async fn create_slug(
    payload: Result<Json<SlugRequest>, JsonRejection>,
) -> Result<Json<SlugResponse>, ApiError> {
    let Json(request) = payload?;
    let options = SlugOptions {
        use_underscore: request.use_underscore,
    };
    Ok(Json(SlugResponse {
        slug: generate_slug(&request.text, &options),
    }))
}
