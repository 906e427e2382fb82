//! View stats service
//!
//! Records page views and reports per-item totals over a lookback window.

use std::sync::Arc;

use chrono::{Duration, NaiveDate, Utc};

use crate::app::view_aggregator::aggregate_views;
use crate::domain::entities::{ContentType, ViewStatsFilter, ViewStatsMap};
use crate::domain::ports::ViewStatRepository;
use crate::error::{AppError, DomainError};

/// Lookback used when the caller does not pass one
pub const DEFAULT_LOOKBACK_DAYS: i64 = 30;

/// Longest lookback a caller may request
pub const MAX_LOOKBACK_DAYS: i64 = 365;

/// Service for view counting and reporting
pub struct ViewStatsService<VR>
where
    VR: ViewStatRepository,
{
    views: Arc<VR>,
}

impl<VR> ViewStatsService<VR>
where
    VR: ViewStatRepository,
{
    pub fn new(views: Arc<VR>) -> Self {
        Self { views }
    }

    /// Totals per item for the last `days` days, counted from today (UTC)
    pub async fn get_view_stats(
        &self,
        content_type: Option<ContentType>,
        content_ids: Option<Vec<i64>>,
        days: i64,
    ) -> Result<ViewStatsMap, AppError> {
        self.get_view_stats_as_of(Utc::now().date_naive(), content_type, content_ids, days)
            .await
    }

    /// Same as `get_view_stats`, with an explicit reference date
    pub async fn get_view_stats_as_of(
        &self,
        today: NaiveDate,
        content_type: Option<ContentType>,
        content_ids: Option<Vec<i64>>,
        days: i64,
    ) -> Result<ViewStatsMap, AppError> {
        let filter = ViewStatsFilter {
            since: window_start(today, days)?,
            content_type,
            content_ids,
        };

        // An explicit empty id list can never match anything
        if matches!(&filter.content_ids, Some(ids) if ids.is_empty()) {
            return Ok(ViewStatsMap::seeded());
        }

        let rows = self.views.find_rows(&filter).await?;
        tracing::debug!(
            since = %filter.since,
            content_type = ?filter.content_type.as_ref().map(|t| t.as_str()),
            rows = rows.len(),
            "Aggregating view rows"
        );

        Ok(aggregate_views(&rows))
    }

    /// Count one view of an item for today (UTC)
    pub async fn record_view(
        &self,
        content_type: ContentType,
        content_id: i64,
    ) -> Result<(), AppError> {
        if !content_type.is_recognized() {
            return Err(DomainError::Validation(format!(
                "Unknown content type: {}",
                content_type
            ))
            .into());
        }
        if content_id <= 0 {
            return Err(
                DomainError::Validation(format!("Invalid content id: {}", content_id)).into(),
            );
        }

        let today = Utc::now().date_naive();
        self.views
            .increment(&content_type, content_id, today)
            .await?;

        tracing::debug!(content_type = %content_type, content_id, "Recorded view");
        Ok(())
    }
}

/// First date included in a `days`-long lookback ending today
pub fn window_start(today: NaiveDate, days: i64) -> Result<NaiveDate, DomainError> {
    if !(1..=MAX_LOOKBACK_DAYS).contains(&days) {
        return Err(DomainError::Validation(format!(
            "days must be between 1 and {}, got {}",
            MAX_LOOKBACK_DAYS, days
        )));
    }
    Ok(today - Duration::days(days))
}
