//! AI assistant handlers
//!
//! Endpoints for tag, SEO metadata and summary generation.

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};

use crate::app::GeneratedMetadata;
use crate::error::AppError;
use crate::AppState;

/// Request body shared by the generation endpoints
#[derive(Debug, Deserialize)]
pub struct GenerateRequest {
    pub text: String,
}

#[derive(Serialize)]
pub struct TagsResponse {
    pub tags: Vec<String>,
}

#[derive(Serialize)]
pub struct SummaryResponse {
    pub summary: String,
}

/// POST /ai/tags
pub async fn generate_tags(
    State(state): State<AppState>,
    Json(body): Json<GenerateRequest>,
) -> Result<Json<TagsResponse>, AppError> {
    let tags = state.ai_service.generate_tags(&body.text).await?;
    Ok(Json(TagsResponse { tags }))
}

/// POST /ai/metadata
pub async fn generate_metadata(
    State(state): State<AppState>,
    Json(body): Json<GenerateRequest>,
) -> Result<Json<GeneratedMetadata>, AppError> {
    let metadata = state.ai_service.generate_metadata(&body.text).await?;
    Ok(Json(metadata))
}

/// POST /ai/summary
pub async fn generate_summary(
    State(state): State<AppState>,
    Json(body): Json<GenerateRequest>,
) -> Result<Json<SummaryResponse>, AppError> {
    let summary = state.ai_service.generate_summary(&body.text).await?;
    Ok(Json(SummaryResponse { summary }))
}
