//! Text generator port trait
//!
//! Defines the interface to the AI provider that writes tags, metadata and
//! summaries. Model behaviour is entirely the provider's concern.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::error::ExternalServiceError;

/// What the provider is asked to produce
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PromptKind {
    Tags,
    Metadata,
    Summary,
}

impl PromptKind {
    /// Minimum body length (in characters) a caller must supply
    pub fn min_text_chars(&self) -> usize {
        match self {
            PromptKind::Tags => 50,
            PromptKind::Metadata => 100,
            PromptKind::Summary => 10,
        }
    }
}

impl std::fmt::Display for PromptKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PromptKind::Tags => write!(f, "tags"),
            PromptKind::Metadata => write!(f, "metadata"),
            PromptKind::Summary => write!(f, "summary"),
        }
    }
}

/// Port trait for AI text generation
#[async_trait]
pub trait TextGenerator: Send + Sync {
    /// Run the prompt of the given kind over `text` and return the raw output
    async fn generate(&self, kind: PromptKind, text: &str) -> Result<String, ExternalServiceError>;
}
