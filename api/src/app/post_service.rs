//! Post service
//!
//! Read access to published posts plus SEO reports for stored posts.

use std::sync::Arc;

use crate::app::seo_scorer::score_content;
use crate::domain::entities::{Post, SeoScoreResult};
use crate::domain::ports::PostRepository;
use crate::error::AppError;

/// Largest page a listing may request
pub const MAX_LIST_LIMIT: u64 = 100;

/// Most URLs a single sitemap file may hold
pub const SITEMAP_MAX_URLS: u64 = 50_000;

/// Items carried by the RSS feed
pub const RSS_ITEM_LIMIT: u64 = 30;

/// Service for post reads
pub struct PostService<PR>
where
    PR: PostRepository,
{
    posts: Arc<PR>,
}

impl<PR> PostService<PR>
where
    PR: PostRepository,
{
    pub fn new(posts: Arc<PR>) -> Self {
        Self { posts }
    }

    /// Published posts, newest first
    pub async fn list_published(&self, limit: u64) -> Result<Vec<Post>, AppError> {
        let limit = limit.clamp(1, MAX_LIST_LIMIT);
        Ok(self.posts.list_published(limit).await?)
    }

    /// Published posts for the sitemap, capped at the per-file URL limit
    pub async fn list_for_sitemap(&self) -> Result<Vec<Post>, AppError> {
        // The site root takes one slot
        Ok(self.posts.list_published(SITEMAP_MAX_URLS - 1).await?)
    }

    /// Newest published posts for the RSS feed
    pub async fn list_for_rss(&self) -> Result<Vec<Post>, AppError> {
        Ok(self.posts.list_published(RSS_ITEM_LIMIT).await?)
    }

    /// A published post by slug
    pub async fn get_by_slug(&self, slug: &str) -> Result<Post, AppError> {
        self.posts
            .find_by_slug(slug)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Post '{}' not found", slug)))
    }

    /// Score a stored post, drafts included
    pub async fn seo_report(&self, id: i64) -> Result<(Post, SeoScoreResult), AppError> {
        let post = self
            .posts
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Post {} not found", id)))?;

        let result = score_content(&post.seo_input());
        tracing::debug!(post_id = id, score = result.score, grade = %result.grade(), "Scored post");
        Ok((post, result))
    }
}
