//! Repository port traits
//!
//! These traits define the interface for data persistence.
//! Implementations are provided by adapters (e.g., PostgreSQL).

use async_trait::async_trait;
use chrono::NaiveDate;

use crate::domain::entities::{ContentType, Post, ViewStatRow, ViewStatsFilter};
use crate::error::DomainError;

/// Repository for Post entities (read side)
#[async_trait]
pub trait PostRepository: Send + Sync {
    /// Find a post by ID, published or not
    async fn find_by_id(&self, id: i64) -> Result<Option<Post>, DomainError>;

    /// Find a published post by slug
    async fn find_by_slug(&self, slug: &str) -> Result<Option<Post>, DomainError>;

    /// Published posts, newest first
    async fn list_published(&self, limit: u64) -> Result<Vec<Post>, DomainError>;
}

/// Repository for daily view rows
#[async_trait]
pub trait ViewStatRepository: Send + Sync {
    /// Load daily rows matching the filter
    async fn find_rows(&self, filter: &ViewStatsFilter) -> Result<Vec<ViewStatRow>, DomainError>;

    /// Add one view to the item's row for `date`, creating the row if needed
    async fn increment(
        &self,
        content_type: &ContentType,
        content_id: i64,
        date: NaiveDate,
    ) -> Result<(), DomainError>;
}
