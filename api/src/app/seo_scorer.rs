//! On-page SEO scorer
//!
//! Scores a content item against a fixed rule table. Each rule is worth a
//! fixed number of points and carries the hint shown when it is not met.
//! Scoring is pure: no I/O, no shared state.

use std::collections::HashSet;
use std::sync::OnceLock;

use regex::Regex;

use crate::domain::entities::{ContentSeoInput, SeoScoreResult};

/// Title length bounds, in characters
pub const TITLE_MIN_CHARS: usize = 10;
pub const TITLE_MAX_CHARS: usize = 60;

/// Meta description length bounds, in characters
pub const META_DESCRIPTION_MIN_CHARS: usize = 50;
pub const META_DESCRIPTION_MAX_CHARS: usize = 160;

/// Minimum body length, in characters
pub const CONTENT_MIN_CHARS: usize = 300;

/// Shortest token that counts as a keyword
pub const KEYWORD_MIN_CHARS: usize = 2;

/// Upper bound of the composite score
pub const MAX_SCORE: u32 = 100;

/// The on-page rules, in the order suggestions are reported
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeoRule {
    TitleLength,
    MetaTitlePresent,
    MetaDescriptionLength,
    ContentLength,
    KeywordInContent,
    OgImagePresent,
}

/// Rule table in reporting order
pub const SEO_RULES: [SeoRule; 6] = [
    SeoRule::TitleLength,
    SeoRule::MetaTitlePresent,
    SeoRule::MetaDescriptionLength,
    SeoRule::ContentLength,
    SeoRule::KeywordInContent,
    SeoRule::OgImagePresent,
];

impl SeoRule {
    pub fn points(&self) -> u32 {
        match self {
            SeoRule::TitleLength => 15,
            SeoRule::MetaTitlePresent => 15,
            SeoRule::MetaDescriptionLength => 20,
            SeoRule::ContentLength => 20,
            SeoRule::KeywordInContent => 15,
            SeoRule::OgImagePresent => 15,
        }
    }

    pub fn suggestion(&self) -> &'static str {
        match self {
            SeoRule::TitleLength => "제목을 10~60자 사이로 조정하세요.",
            SeoRule::MetaTitlePresent => "메타 제목을 설정하세요.",
            SeoRule::MetaDescriptionLength => "메타 설명을 50~160자 사이로 작성하세요.",
            SeoRule::ContentLength => "본문을 최소 300자 이상 작성하세요.",
            SeoRule::KeywordInContent => "제목의 핵심 키워드가 본문에도 포함되도록 작성하세요.",
            SeoRule::OgImagePresent => "OG 이미지를 설정하세요.",
        }
    }

    /// Whether the input earns this rule's points
    pub fn is_satisfied(&self, input: &ContentSeoInput) -> bool {
        match self {
            SeoRule::TitleLength => {
                (TITLE_MIN_CHARS..=TITLE_MAX_CHARS).contains(&char_len(&input.title))
            }
            SeoRule::MetaTitlePresent => is_present(input.meta_title.as_deref()),
            SeoRule::MetaDescriptionLength => input
                .meta_description
                .as_deref()
                .map(|d| {
                    (META_DESCRIPTION_MIN_CHARS..=META_DESCRIPTION_MAX_CHARS)
                        .contains(&char_len(d))
                })
                .unwrap_or(false),
            SeoRule::ContentLength => char_len(&input.content) >= CONTENT_MIN_CHARS,
            SeoRule::KeywordInContent => shares_keyword(&input.title, &input.content),
            SeoRule::OgImagePresent => is_present(input.og_image.as_deref()),
        }
    }
}

/// Score a content item against the rule table
pub fn score_content(input: &ContentSeoInput) -> SeoScoreResult {
    let mut score = 0;
    let mut suggestions = Vec::new();

    for rule in SEO_RULES {
        if rule.is_satisfied(input) {
            score += rule.points();
        } else {
            suggestions.push(rule.suggestion().to_string());
        }
    }

    SeoScoreResult {
        score: score.min(MAX_SCORE),
        suggestions,
    }
}

/// Lower-cased keyword set of `text`, punctuation treated as a separator
pub fn keywords(text: &str) -> HashSet<String> {
    static SEPARATOR: OnceLock<Regex> = OnceLock::new();
    let separator =
        SEPARATOR.get_or_init(|| Regex::new(r"[^\p{L}\p{N}]+").expect("valid separator pattern"));

    let lowered = text.to_lowercase();
    separator
        .split(&lowered)
        .filter(|t| char_len(t) >= KEYWORD_MIN_CHARS)
        .map(str::to_string)
        .collect()
}

fn shares_keyword(title: &str, content: &str) -> bool {
    let title_words = keywords(title);
    if title_words.is_empty() {
        return false;
    }
    let content_words = keywords(content);
    !title_words.is_disjoint(&content_words)
}

fn char_len(s: &str) -> usize {
    s.chars().count()
}

fn is_present(value: Option<&str>) -> bool {
    value.map(|v| !v.is_empty()).unwrap_or(false)
}
