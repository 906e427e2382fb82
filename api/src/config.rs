use std::env;
use std::time::Duration;

#[derive(Clone)]
pub struct Config {
    pub database_url: String,
    pub port: u16,
    /// Public base URL of the blog (used for sitemap and RSS links)
    pub site_url: String,
    pub site_title: String,
    pub site_description: String,
    /// API key for the AI provider. Text generation is disabled when unset.
    pub ai_api_key: Option<String>,
    pub ai_base_url: String,
    pub ai_model: String,
    pub ai_timeout: Duration,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();

        Ok(Self {
            database_url: env::var("DATABASE_URL")
                .map_err(|_| anyhow::anyhow!("DATABASE_URL must be set"))?,
            port: env::var("PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(8080),
            site_url: env::var("SITE_URL")
                .unwrap_or_else(|_| "http://localhost:3000".to_string())
                .trim_end_matches('/')
                .to_string(),
            site_title: env::var("SITE_TITLE").unwrap_or_else(|_| "Blog".to_string()),
            site_description: env::var("SITE_DESCRIPTION").unwrap_or_default(),
            ai_api_key: env::var("AI_API_KEY").ok().filter(|k| !k.is_empty()),
            ai_base_url: env::var("AI_BASE_URL")
                .unwrap_or_else(|_| "https://api.openai.com/v1".to_string()),
            ai_model: env::var("AI_MODEL").unwrap_or_else(|_| "gpt-4o-mini".to_string()),
            ai_timeout: Duration::from_secs(
                env::var("AI_TIMEOUT_SECS")
                    .ok()
                    .and_then(|s| s.parse().ok())
                    .unwrap_or(30),
            ),
        })
    }

    /// Check if the AI provider is configured
    pub fn ai_enabled(&self) -> bool {
        self.ai_api_key.is_some()
    }
}
