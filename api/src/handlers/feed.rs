//! Feed handlers
//!
//! sitemap.xml and RSS endpoints.

use axum::{
    extract::State,
    http::header,
    response::{IntoResponse, Response},
};

use crate::error::AppError;
use crate::feed::{render_rss, render_sitemap};
use crate::AppState;

/// GET /sitemap.xml
pub async fn get_sitemap(State(state): State<AppState>) -> Result<Response, AppError> {
    let posts = state.post_service.list_for_sitemap().await?;

    Ok((
        [(header::CONTENT_TYPE, "application/xml; charset=utf-8")],
        render_sitemap(&state.site, &posts),
    )
        .into_response())
}

/// GET /rss.xml
pub async fn get_rss(State(state): State<AppState>) -> Result<Response, AppError> {
    let posts = state.post_service.list_for_rss().await?;

    Ok((
        [(header::CONTENT_TYPE, "application/rss+xml; charset=utf-8")],
        render_rss(&state.site, &posts),
    )
        .into_response())
}
