//! Blog API Server
//!
//! Content service for a personal blog: SEO scoring, view statistics,
//! AI writing assistance and public feeds.
//! Uses hexagonal (ports & adapters) architecture for clean separation of concerns.

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Context;
use axum::{
    routing::{get, post},
    Json, Router,
};
use sea_orm::Database;
use serde::Serialize;
use tower_governor::governor::GovernorConfigBuilder;
use tower_governor::key_extractor::PeerIpKeyExtractor;
use tower_governor::GovernorLayer;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod adapters;
mod app;
mod config;
mod domain;
mod entity;
mod error;
mod feed;
mod handlers;

#[cfg(test)]
mod test_utils;


use adapters::{
    NoopTextGenerator, OpenAiTextGenerator, PostgresPostRepository, PostgresViewStatRepository,
    TextGeneratorImpl,
};
use app::{AiService, PostService, ViewStatsService};
use config::Config;
use feed::SiteInfo;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub post_service: Arc<PostService<PostgresPostRepository>>,
    pub view_stats_service: Arc<ViewStatsService<PostgresViewStatRepository>>,
    pub ai_service: Arc<AiService<TextGeneratorImpl>>,
    pub site: SiteInfo,
}

#[derive(Serialize)]
struct HealthResponse {
    status: &'static str,
    version: &'static str,
}

async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
    })
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,blog_api=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting blog API...");

    // Load configuration
    let config = Config::from_env()?;
    tracing::info!(
        site = %config.site_url,
        ai_enabled = config.ai_enabled(),
        "Configuration loaded"
    );

    // Connect to PostgreSQL
    tracing::info!("Connecting to database...");
    let db = Database::connect(&config.database_url)
        .await
        .context("Failed to connect to database")?;
    tracing::info!("Database connected");

    // Create adapters
    #[cfg(not(test))]
    let post_repo = Arc::new(PostgresPostRepository::new(db.clone()));
    #[cfg(not(test))]
    let view_stat_repo = Arc::new(PostgresViewStatRepository::new(db.clone()));
    // sea-orm's `mock` feature (dev-dependency) removes `Clone` from
    // `DatabaseConnection`; `main` never runs under `cargo test`.
    #[cfg(test)]
    let post_repo = Arc::new(PostgresPostRepository::new(
        Database::connect(&config.database_url).await?,
    ));
    #[cfg(test)]
    let view_stat_repo = Arc::new(PostgresViewStatRepository::new(db));

    let generator = match &config.ai_api_key {
        Some(key) => {
            tracing::info!(model = %config.ai_model, "AI text generation enabled");
            TextGeneratorImpl::OpenAi(
                OpenAiTextGenerator::new(
                    config.ai_base_url.clone(),
                    key.clone(),
                    config.ai_model.clone(),
                    config.ai_timeout,
                )
                .context("Failed to build AI client")?,
            )
        }
        None => {
            tracing::warn!("AI_API_KEY not set, AI endpoints will return 503");
            TextGeneratorImpl::Noop(NoopTextGenerator)
        }
    };

    // Create app state
    let state = AppState {
        post_service: Arc::new(PostService::new(post_repo)),
        view_stats_service: Arc::new(ViewStatsService::new(view_stat_repo)),
        ai_service: Arc::new(AiService::new(Arc::new(generator))),
        site: SiteInfo {
            url: config.site_url.clone(),
            title: config.site_title.clone(),
            description: config.site_description.clone(),
        },
    };

    // Rate limiting config: 2 req/sec sustained, burst of 5
    // Uses PeerIpKeyExtractor to get client IP from socket connection
    let governor_config = Arc::new(
        GovernorConfigBuilder::default()
            .key_extractor(PeerIpKeyExtractor)
            .per_second(2)
            .burst_size(5)
            .finish()
            .context("Failed to build governor config")?,
    );

    // Rate-limited routes (view counting)
    let rate_limited_routes = Router::new()
        .route(
            "/views/:content_type/:content_id",
            post(handlers::record_view),
        )
        .layer(GovernorLayer {
            config: governor_config,
        });

    // Build router
    let app = Router::new()
        .route("/health", get(health))
        // SEO
        .route("/seo/score", post(handlers::score_seo))
        .route("/seo/posts/:id", get(handlers::get_post_seo))
        // Posts (public read-only)
        .route("/posts", get(handlers::list_posts))
        .route("/posts/:slug", get(handlers::get_post))
        // View stats
        .route("/views", get(handlers::get_view_stats))
        .merge(rate_limited_routes)
        // AI assistant
        .route("/ai/tags", post(handlers::generate_tags))
        .route("/ai/metadata", post(handlers::generate_metadata))
        .route("/ai/summary", post(handlers::generate_summary))
        // Feeds
        .route("/sitemap.xml", get(handlers::get_sitemap))
        .route("/rss.xml", get(handlers::get_rss))
        // Middleware
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    // Start server
    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .await?;

    Ok(())
}
