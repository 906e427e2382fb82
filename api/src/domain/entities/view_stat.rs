//! View statistics domain entities
//!
//! Daily view rows as stored, and the per-item totals built from them.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::Serialize;

use super::ContentType;

/// One day's view count for one content item
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewStatRow {
    pub content_type: ContentType,
    pub content_id: i64,
    pub date: NaiveDate,
    pub view_count: i64,
}

/// Filter for loading view rows from storage
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewStatsFilter {
    /// Inclusive lower bound on the row date
    pub since: NaiveDate,
    pub content_type: Option<ContentType>,
    /// Restrict to these content ids; `None` means all ids
    pub content_ids: Option<Vec<i64>>,
}

/// Summed views keyed by content type, then content id
///
/// Serializes as `{ "post": { "1": 8 }, "faq": {}, ... }`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ViewStatsMap(BTreeMap<ContentType, BTreeMap<i64, i64>>);

impl ViewStatsMap {
    /// Map with an empty bucket for every recognised content type
    pub fn seeded() -> Self {
        Self(
            ContentType::RECOGNIZED
                .into_iter()
                .map(|t| (t, BTreeMap::new()))
                .collect(),
        )
    }

    /// Add views to an item, creating missing buckets on the way; saturates at `i64::MAX`
    pub fn add(&mut self, content_type: ContentType, content_id: i64, views: i64) {
        let total = self
            .0
            .entry(content_type)
            .or_default()
            .entry(content_id)
            .or_insert(0);
        *total = total.saturating_add(views);
    }

    pub fn get(&self, content_type: &ContentType) -> Option<&BTreeMap<i64, i64>> {
        self.0.get(content_type)
    }

    /// Total views for one item, zero when absent
    pub fn total_for(&self, content_type: &ContentType, content_id: i64) -> i64 {
        self.get(content_type)
            .and_then(|m| m.get(&content_id))
            .copied()
            .unwrap_or(0)
    }
}
