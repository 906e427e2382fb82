//! SEO handlers
//!
//! Endpoints for scoring ad-hoc content and stored posts.

use axum::{
    extract::{Path, State},
    Json,
};
use serde::Serialize;

use crate::app::score_content;
use crate::domain::entities::{ContentSeoInput, SeoGrade, SeoScoreResult};
use crate::error::AppError;
use crate::AppState;

/// JSON response for SEO scores
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SeoScoreResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub post_id: Option<i64>,
    pub score: u32,
    pub suggestions: Vec<String>,
    pub grade: SeoGrade,
}

impl From<SeoScoreResult> for SeoScoreResponse {
    fn from(result: SeoScoreResult) -> Self {
        Self {
            post_id: None,
            grade: result.grade(),
            score: result.score,
            suggestions: result.suggestions,
        }
    }
}

/// POST /seo/score
///
/// Score title, meta fields, body and OG image sent by the editor.
pub async fn score_seo(Json(input): Json<ContentSeoInput>) -> Json<SeoScoreResponse> {
    Json(score_content(&input).into())
}

/// GET /seo/posts/:id
///
/// Score a stored post, drafts included.
pub async fn get_post_seo(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<SeoScoreResponse>, AppError> {
    let (post, result) = state.post_service.seo_report(id).await?;

    Ok(Json(SeoScoreResponse {
        post_id: Some(post.id),
        ..result.into()
    }))
}
