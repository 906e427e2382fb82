//! Mock implementations of port traits
//!
//! These are in-memory implementations that can be configured for testing.
//! They store data in memory and allow tests to verify behavior.

use async_trait::async_trait;
use chrono::NaiveDate;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use crate::domain::entities::{ContentType, Post, ViewStatRow, ViewStatsFilter};
use crate::domain::ports::{PostRepository, PromptKind, TextGenerator, ViewStatRepository};
use crate::error::{DomainError, ExternalServiceError};

// ============================================================================
// In-Memory Post Repository
// ============================================================================

#[derive(Default)]
pub struct InMemoryPostRepository {
    posts: Arc<RwLock<HashMap<i64, Post>>>,
}

impl InMemoryPostRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-populate with a post for testing
    pub fn with_post(self, post: Post) -> Self {
        self.posts.write().unwrap().insert(post.id, post);
        self
    }
}

#[async_trait]
impl PostRepository for InMemoryPostRepository {
    async fn find_by_id(&self, id: i64) -> Result<Option<Post>, DomainError> {
        let posts = self.posts.read().unwrap();
        Ok(posts.get(&id).cloned())
    }

    async fn find_by_slug(&self, slug: &str) -> Result<Option<Post>, DomainError> {
        let posts = self.posts.read().unwrap();
        Ok(posts
            .values()
            .find(|p| p.published && p.slug == slug)
            .cloned())
    }

    async fn list_published(&self, limit: u64) -> Result<Vec<Post>, DomainError> {
        let posts = self.posts.read().unwrap();
        let mut published: Vec<Post> = posts.values().filter(|p| p.published).cloned().collect();
        published.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        published.truncate(limit as usize);
        Ok(published)
    }
}

// ============================================================================
// In-Memory View Stat Repository
// ============================================================================

#[derive(Default)]
pub struct InMemoryViewStatRepository {
    rows: Arc<RwLock<HashMap<(ContentType, i64, NaiveDate), i64>>>,
    fail: bool,
}

impl InMemoryViewStatRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-populate with a daily row
    pub fn with_row(self, row: ViewStatRow) -> Self {
        self.rows
            .write()
            .unwrap()
            .insert((row.content_type, row.content_id, row.date), row.view_count);
        self
    }

    /// Make every call fail with a database error
    pub fn failing(mut self) -> Self {
        self.fail = true;
        self
    }

    /// Stored count for one day, for assertions
    pub fn count_on(&self, content_type: &ContentType, content_id: i64, date: NaiveDate) -> i64 {
        self.rows
            .read()
            .unwrap()
            .get(&(content_type.clone(), content_id, date))
            .copied()
            .unwrap_or(0)
    }

    fn check(&self) -> Result<(), DomainError> {
        if self.fail {
            Err(DomainError::Database("connection refused".to_string()))
        } else {
            Ok(())
        }
    }
}

#[async_trait]
impl ViewStatRepository for InMemoryViewStatRepository {
    async fn find_rows(&self, filter: &ViewStatsFilter) -> Result<Vec<ViewStatRow>, DomainError> {
        self.check()?;
        let rows = self.rows.read().unwrap();
        Ok(rows
            .iter()
            .filter(|((_, _, date), _)| *date >= filter.since)
            .filter(|((ct, _, _), _)| filter.content_type.as_ref().map_or(true, |f| f == ct))
            .filter(|((_, id, _), _)| {
                filter
                    .content_ids
                    .as_ref()
                    .map_or(true, |ids| ids.contains(id))
            })
            .map(|((ct, id, date), count)| ViewStatRow {
                content_type: ct.clone(),
                content_id: *id,
                date: *date,
                view_count: *count,
            })
            .collect())
    }

    async fn increment(
        &self,
        content_type: &ContentType,
        content_id: i64,
        date: NaiveDate,
    ) -> Result<(), DomainError> {
        self.check()?;
        let mut rows = self.rows.write().unwrap();
        *rows
            .entry((content_type.clone(), content_id, date))
            .or_insert(0) += 1;
        Ok(())
    }
}

// ============================================================================
// Mock Text Generator
// ============================================================================

#[derive(Default)]
pub struct MockTextGenerator {
    response: String,
    fail: bool,
    calls: Arc<RwLock<Vec<(PromptKind, String)>>>,
}

impl MockTextGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Return this text for every call
    pub fn with_response(mut self, response: &str) -> Self {
        self.response = response.to_string();
        self
    }

    /// Fail every call as if the provider returned a 500
    pub fn failing(mut self) -> Self {
        self.fail = true;
        self
    }

    pub fn calls(&self) -> Vec<(PromptKind, String)> {
        self.calls.read().unwrap().clone()
    }

    pub fn call_count(&self) -> usize {
        self.calls.read().unwrap().len()
    }
}

#[async_trait]
impl TextGenerator for MockTextGenerator {
    async fn generate(&self, kind: PromptKind, text: &str) -> Result<String, ExternalServiceError> {
        self.calls.write().unwrap().push((kind, text.to_string()));
        if self.fail {
            return Err(ExternalServiceError::Api {
                status: 500,
                message: "upstream failure".to_string(),
            });
        }
        Ok(self.response.clone())
    }
}
