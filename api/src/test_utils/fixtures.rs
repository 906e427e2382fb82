//! Test fixtures
//!
//! Factory functions for creating test data with sensible defaults.
//! Each fixture function creates a valid entity that can be customized.

use std::sync::Arc;

use chrono::{Duration, NaiveDate, TimeZone, Utc};
use sea_orm::{DatabaseBackend, MockDatabase};

use crate::adapters::{
    NoopTextGenerator, PostgresPostRepository, PostgresViewStatRepository, TextGeneratorImpl,
};
use crate::app::{AiService, PostService, ViewStatsService};
use crate::domain::entities::{ContentType, Post, ViewStatRow};
use crate::entity::view_stats;
use crate::feed::SiteInfo;
use crate::AppState;

/// Create a published test post with the given id and slug
pub fn test_post(id: i64, slug: &str) -> Post {
    let created_at = Utc.with_ymd_and_hms(2024, 1, 15, 9, 30, 0).unwrap() + Duration::days(id);
    Post {
        id,
        slug: slug.to_string(),
        title: format!("Post number {}", id),
        meta_title: Some(format!("Post {}", id)),
        meta_description: Some("A short description of the post for search engines.".into()),
        content: "Post body about Rust and web services.".to_string(),
        og_image: Some(format!("https://cdn.example.com/og/{}.png", id)),
        published: true,
        created_at,
        updated_at: created_at + Duration::hours(6),
    }
}

/// Create a post that earns every SEO rule
pub fn test_post_full_seo(id: i64) -> Post {
    let mut post = test_post(id, &format!("complete-{}", id));
    post.title = "Understanding Rust ownership".to_string();
    post.meta_description = Some("m".repeat(120));
    post.content = "Ownership keeps Rust programs memory safe. ".repeat(10);
    post
}

/// Site info pointing at a fixed test domain
pub fn test_site() -> SiteInfo {
    SiteInfo {
        url: "https://blog.example.com".to_string(),
        title: "Example Blog".to_string(),
        description: "Notes on Rust".to_string(),
    }
}

/// Create a daily view row
pub fn view_row(content_type: ContentType, content_id: i64, date: NaiveDate, views: i64) -> ViewStatRow {
    ViewStatRow {
        content_type,
        content_id,
        date,
        view_count: views,
    }
}

/// App state over SeaORM mock connections
///
/// The view stats connection answers its first query with `view_rows`.
/// The AI service has no provider configured.
pub fn test_app_state(view_rows: Vec<view_stats::Model>) -> AppState {
    let views_db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([view_rows])
        .into_connection();
    let posts_db = MockDatabase::new(DatabaseBackend::Postgres).into_connection();

    AppState {
        post_service: Arc::new(PostService::new(Arc::new(PostgresPostRepository::new(
            posts_db,
        )))),
        view_stats_service: Arc::new(ViewStatsService::new(Arc::new(
            PostgresViewStatRepository::new(views_db),
        ))),
        ai_service: Arc::new(AiService::new(Arc::new(TextGeneratorImpl::Noop(
            NoopTextGenerator,
        )))),
        site: test_site(),
    }
}
