//! AI writing assistant service
//!
//! Validates input, asks the text generator for tags, SEO metadata or a
//! summary, and shapes the raw model output into typed results.
//! Failures from the provider are passed through without retrying.

use std::collections::HashSet;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::domain::ports::{PromptKind, TextGenerator};
use crate::error::{AppError, DomainError, ExternalServiceError};

/// Most tags returned for a single body
pub const MAX_TAGS: usize = 10;

/// SEO metadata suggested by the model
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeneratedMetadata {
    pub meta_title: String,
    pub meta_description: String,
}

/// Service for AI-assisted metadata
pub struct AiService<TG>
where
    TG: TextGenerator,
{
    generator: Arc<TG>,
}

impl<TG> AiService<TG>
where
    TG: TextGenerator,
{
    pub fn new(generator: Arc<TG>) -> Self {
        Self { generator }
    }

    /// Suggest tags for a body of text
    pub async fn generate_tags(&self, text: &str) -> Result<Vec<String>, AppError> {
        let raw = self.run(PromptKind::Tags, text).await?;
        let tags = parse_tags(&raw);
        if tags.is_empty() {
            return Err(ExternalServiceError::InvalidResponse("no tags in response".into()).into());
        }
        Ok(tags)
    }

    /// Suggest a meta title and description
    pub async fn generate_metadata(&self, text: &str) -> Result<GeneratedMetadata, AppError> {
        let raw = self.run(PromptKind::Metadata, text).await?;
        Ok(parse_metadata(&raw)?)
    }

    /// Write a short social-media style summary
    pub async fn generate_summary(&self, text: &str) -> Result<String, AppError> {
        let raw = self.run(PromptKind::Summary, text).await?;
        let summary = raw.trim();
        if summary.is_empty() {
            return Err(ExternalServiceError::InvalidResponse("empty summary".into()).into());
        }
        Ok(summary.to_string())
    }

    async fn run(&self, kind: PromptKind, text: &str) -> Result<String, AppError> {
        let text = text.trim();
        validate_length(kind, text)?;

        tracing::debug!(kind = %kind, chars = text.chars().count(), "Requesting generation");
        self.generator.generate(kind, text).await.map_err(|e| {
            tracing::warn!(kind = %kind, error = %e, "Text generation failed");
            AppError::External(e)
        })
    }
}

fn validate_length(kind: PromptKind, text: &str) -> Result<(), DomainError> {
    let min = kind.min_text_chars();
    if text.chars().count() < min {
        return Err(DomainError::Validation(format!(
            "text must be at least {} characters for {} generation",
            min, kind
        )));
    }
    Ok(())
}

/// Split model output into unique tags, first occurrence wins
pub fn parse_tags(raw: &str) -> Vec<String> {
    let mut seen = HashSet::new();
    raw.split([',', '\n'])
        .map(|t| t.trim().trim_start_matches('#').trim())
        .filter(|t| !t.is_empty())
        .filter(|t| seen.insert(t.to_lowercase()))
        .take(MAX_TAGS)
        .map(str::to_string)
        .collect()
}

/// Parse the JSON object the metadata prompt asks for
pub fn parse_metadata(raw: &str) -> Result<GeneratedMetadata, ExternalServiceError> {
    let body = strip_code_fence(raw);
    let meta: GeneratedMetadata = serde_json::from_str(body)
        .map_err(|e| ExternalServiceError::InvalidResponse(format!("metadata JSON: {}", e)))?;

    let meta = GeneratedMetadata {
        meta_title: meta.meta_title.trim().to_string(),
        meta_description: meta.meta_description.trim().to_string(),
    };
    if meta.meta_title.is_empty() || meta.meta_description.is_empty() {
        return Err(ExternalServiceError::InvalidResponse(
            "metadata fields are empty".into(),
        ));
    }
    Ok(meta)
}

/// Remove a surrounding markdown code fence such as ```json ... ```
fn strip_code_fence(raw: &str) -> &str {
    let trimmed = raw.trim();
    let Some(rest) = trimmed.strip_prefix("```") else {
        return trimmed;
    };
    let body = match rest.split_once('\n') {
        // Drop the info string (e.g. "json") on the opening line
        Some((_, body)) => body,
        // Single-line fence: ```{...}```
        None => rest,
    };
    body.trim_end().trim_end_matches("```").trim()
}
