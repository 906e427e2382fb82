//! SEO domain entities
//!
//! Input and output values of the on-page SEO scorer.

use serde::{Deserialize, Serialize};

/// On-page fields of a content item, as seen by the SEO scorer
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentSeoInput {
    pub title: String,
    #[serde(default)]
    pub meta_title: Option<String>,
    #[serde(default)]
    pub meta_description: Option<String>,
    pub content: String,
    #[serde(default)]
    pub og_image: Option<String>,
}

/// Composite score plus remediation hints
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeoScoreResult {
    /// Always within 0..=100
    pub score: u32,
    /// One entry per failed rule, in rule-table order
    pub suggestions: Vec<String>,
}

impl SeoScoreResult {
    pub fn grade(&self) -> SeoGrade {
        SeoGrade::from_score(self.score)
    }
}

/// Coarse rating derived from the score
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SeoGrade {
    Excellent,
    Good,
    Fair,
    Poor,
}

impl SeoGrade {
    pub fn from_score(score: u32) -> Self {
        match score {
            90.. => SeoGrade::Excellent,
            70..=89 => SeoGrade::Good,
            50..=69 => SeoGrade::Fair,
            _ => SeoGrade::Poor,
        }
    }
}

impl std::fmt::Display for SeoGrade {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SeoGrade::Excellent => write!(f, "excellent"),
            SeoGrade::Good => write!(f, "good"),
            SeoGrade::Fair => write!(f, "fair"),
            SeoGrade::Poor => write!(f, "poor"),
        }
    }
}
