//! HTTP handlers
//!
//! Axum request handlers for the API endpoints.

pub mod ai;
pub mod feed;
pub mod posts;
pub mod seo;
pub mod views;

pub use ai::{generate_metadata, generate_summary, generate_tags};
pub use feed::{get_rss, get_sitemap};
pub use posts::{get_post, list_posts};
pub use seo::{get_post_seo, score_seo};
pub use views::{get_view_stats, record_view};
