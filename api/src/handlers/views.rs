//! View stats handlers
//!
//! Endpoints for recording page views and reading per-item totals.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use serde::Deserialize;

use crate::app::DEFAULT_LOOKBACK_DAYS;
use crate::domain::entities::{ContentType, ViewStatsMap};
use crate::error::AppError;
use crate::AppState;

/// Query params for GET /views
#[derive(Debug, Deserialize)]
pub struct ViewStatsParams {
    #[serde(default = "default_days")]
    pub days: i64,
    pub content_type: Option<String>,
    /// Comma-separated content ids, e.g. `1,2,3`
    pub ids: Option<String>,
}

fn default_days() -> i64 {
    DEFAULT_LOOKBACK_DAYS
}

/// Parse a comma-separated id list
pub fn parse_ids(raw: &str) -> Result<Vec<i64>, AppError> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(|s| {
            s.parse::<i64>()
                .map_err(|_| AppError::BadRequest(format!("Invalid content id: {}", s)))
        })
        .collect()
}

/// GET /views
///
/// Summed views per content type and id over the last `days` days.
/// Every recognised content type is present in the response, even when empty.
/// `content_type` is matched exactly against the stored value.
pub async fn get_view_stats(
    State(state): State<AppState>,
    Query(params): Query<ViewStatsParams>,
) -> Result<Json<ViewStatsMap>, AppError> {
    let content_type = params
        .content_type
        .as_deref()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(ContentType::from);
    // `?ids=` with nothing in it means no id filter
    let ids = params
        .ids
        .as_deref()
        .map(parse_ids)
        .transpose()?
        .filter(|ids| !ids.is_empty());

    let stats = state
        .view_stats_service
        .get_view_stats(content_type, ids, params.days)
        .await?;

    Ok(Json(stats))
}

/// POST /views/:content_type/:content_id
///
/// Count one view of a content item for today.
pub async fn record_view(
    State(state): State<AppState>,
    Path((content_type, content_id)): Path<(String, i64)>,
) -> Result<StatusCode, AppError> {
    state
        .view_stats_service
        .record_view(ContentType::from(content_type.as_str()), content_id)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}

#[cfg(test)]
mod tests {
    use axum::{http::StatusCode, routing::get, Router};
    use axum_test::TestServer;
    use chrono::{Duration, Utc};
    use serde_json::{json, Value};

    use super::*;
    use crate::entity::view_stats;
    use crate::test_utils::test_app_state;

    fn stored_row(id: i64, content_type: &str, content_id: i64, views: i64) -> view_stats::Model {
        view_stats::Model {
            id,
            content_type: content_type.to_string(),
            content_id,
            date: Utc::now().date_naive() - Duration::days(1),
            view_count: views,
        }
    }

    fn server(rows: Vec<view_stats::Model>) -> TestServer {
        let app = Router::new()
            .route("/views", get(get_view_stats))
            .with_state(test_app_state(rows));
        TestServer::new(app).unwrap()
    }

    #[test]
    fn parse_ids_accepts_spaces_and_trailing_commas() {
        assert_eq!(parse_ids("1, 2,3,").unwrap(), vec![1, 2, 3]);
        assert!(parse_ids("").unwrap().is_empty());
    }

    #[test]
    fn parse_ids_rejects_non_numbers() {
        assert!(matches!(parse_ids("1,abc"), Err(AppError::BadRequest(_))));
    }

    #[tokio::test]
    async fn view_stats_always_carry_the_four_recognised_types() {
        let response = server(vec![
            stored_row(1, "post", 1, 3),
            stored_row(2, "post", 1, 5),
            stored_row(3, "Video", 4, 2),
        ])
        .get("/views")
        .add_query_param("days", 7)
        .await;

        response.assert_status_ok();
        let body: Value = response.json();
        assert_eq!(body["post"], json!({ "1": 8 }));
        assert_eq!(body["faq"], json!({}));
        assert_eq!(body["class"], json!({}));
        assert_eq!(body["lifelog"], json!({}));
        assert_eq!(body["Video"], json!({ "4": 2 }));
    }

    #[tokio::test]
    async fn view_stats_reject_days_out_of_range() {
        let response = server(Vec::new())
            .get("/views")
            .add_query_param("days", 0)
            .await;

        response.assert_status(StatusCode::BAD_REQUEST);
        let body: Value = response.json();
        assert_eq!(body["error"], "Validation error");
    }

    #[tokio::test]
    async fn blank_ids_param_does_not_filter() {
        let response = server(vec![stored_row(1, "faq", 2, 6)])
            .get("/views")
            .add_query_param("ids", "")
            .await;

        response.assert_status_ok();
        let body: Value = response.json();
        assert_eq!(body["faq"], json!({ "2": 6 }));
    }

    #[tokio::test]
    async fn bad_id_is_bad_request() {
        let response = server(Vec::new())
            .get("/views")
            .add_query_param("ids", "1,x")
            .await;

        response.assert_status(StatusCode::BAD_REQUEST);
    }
}
