//! Post handlers
//!
//! Public read endpoints for published posts.

use axum::{
    extract::{Path, Query, State},
    Json,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::entities::Post;
use crate::error::AppError;
use crate::AppState;

/// Characters of body text shown in listings when there is no meta description
const LIST_EXCERPT_CHARS: usize = 160;

/// Query params for GET /posts
#[derive(Debug, Deserialize)]
pub struct ListParams {
    #[serde(default = "default_limit")]
    pub limit: u64,
}

fn default_limit() -> u64 {
    20
}

/// Post card for listings
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PostCard {
    pub id: i64,
    pub slug: String,
    pub title: String,
    pub excerpt: String,
    pub og_image: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl From<Post> for PostCard {
    fn from(p: Post) -> Self {
        Self {
            excerpt: p.excerpt(LIST_EXCERPT_CHARS),
            id: p.id,
            slug: p.slug,
            title: p.title,
            og_image: p.og_image,
            created_at: p.created_at,
        }
    }
}

/// GET /posts
pub async fn list_posts(
    State(state): State<AppState>,
    Query(params): Query<ListParams>,
) -> Result<Json<Vec<PostCard>>, AppError> {
    let posts = state.post_service.list_published(params.limit).await?;
    Ok(Json(posts.into_iter().map(PostCard::from).collect()))
}

/// GET /posts/:slug
pub async fn get_post(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> Result<Json<Post>, AppError> {
    Ok(Json(state.post_service.get_by_slug(&slug).await?))
}
