//! View aggregation
//!
//! Folds daily view rows into per-item totals.

use crate::domain::entities::{ViewStatRow, ViewStatsMap};

/// Sum daily rows per (content type, content id)
///
/// The result always carries the recognised content types, empty or not.
/// Unrecognised types get their own bucket. Row order does not matter.
pub fn aggregate_views<'a, I>(rows: I) -> ViewStatsMap
where
    I: IntoIterator<Item = &'a ViewStatRow>,
{
    rows.into_iter()
        .fold(ViewStatsMap::seeded(), |mut stats, row| {
            stats.add(row.content_type.clone(), row.content_id, row.view_count);
            stats
        })
}
