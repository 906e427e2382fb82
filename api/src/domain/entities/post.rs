//! Post domain entity
//!
//! Read model of a blog article, used for SEO reports and feeds.

use chrono::{DateTime, Utc};
use serde::Serialize;

use super::ContentSeoInput;

/// A blog article
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    pub id: i64,
    pub slug: String,
    pub title: String,
    pub meta_title: Option<String>,
    pub meta_description: Option<String>,
    pub content: String,
    pub og_image: Option<String>,
    pub published: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Post {
    /// Fields the SEO scorer looks at
    pub fn seo_input(&self) -> ContentSeoInput {
        ContentSeoInput {
            title: self.title.clone(),
            meta_title: self.meta_title.clone(),
            meta_description: self.meta_description.clone(),
            content: self.content.clone(),
            og_image: self.og_image.clone(),
        }
    }

    /// Short description for listings: meta description, else the body's opening
    pub fn excerpt(&self, max_chars: usize) -> String {
        match self.meta_description.as_deref().map(str::trim) {
            Some(desc) if !desc.is_empty() => desc.to_string(),
            _ => self.content.chars().take(max_chars).collect(),
        }
    }
}
