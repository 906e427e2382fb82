//! Application layer
//!
//! Contains use cases and service orchestration.
//! Services coordinate between domain entities, ports, and external systems.

pub mod ai_service;
pub mod post_service;
pub mod seo_scorer;
pub mod view_aggregator;
pub mod view_stats_service;

pub use ai_service::{AiService, GeneratedMetadata};
pub use post_service::PostService;
pub use seo_scorer::score_content;
pub use view_aggregator::aggregate_views;
pub use view_stats_service::{ViewStatsService, DEFAULT_LOOKBACK_DAYS};
