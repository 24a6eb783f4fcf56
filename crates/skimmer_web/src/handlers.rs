use axum::{
    extract::{Query, State},
    response::IntoResponse,
    Json,
};
use serde::Deserialize;
use serde_json::json;
use std::sync::Arc;
use tracing::warn;

use crate::error::ApiError;
use crate::AppState;
use skimmer_core::{Error, ExtractResponse};

#[derive(Debug, Deserialize)]
pub struct ExtractParams {
    pub url: Option<String>,
}

pub async fn extract_articles(
    State(state): State<Arc<AppState>>,
    Query(params): Query<ExtractParams>,
) -> Result<Json<ExtractResponse>, ApiError> {
    let url = params
        .url
        .ok_or_else(|| Error::Validation("url query parameter is required".to_string()))?;

    let response = state.pipeline.extract(&url).await.map_err(|err| {
        warn!("extraction failed for {}: {}", url, err);
        ApiError(err)
    })?;

    Ok(Json(response))
}

pub async fn health() -> impl IntoResponse {
    Json(json!({ "status": "operational" }))
}
