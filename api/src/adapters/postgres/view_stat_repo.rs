//! PostgreSQL adapter for ViewStatRepository

use async_trait::async_trait;
use chrono::NaiveDate;
use sea_orm::sea_query::{Expr, OnConflict};
use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, Set};

use crate::domain::entities::{ContentType, ViewStatRow, ViewStatsFilter};
use crate::domain::ports::ViewStatRepository;
use crate::entity::view_stats;
use crate::error::DomainError;

/// PostgreSQL implementation of ViewStatRepository
pub struct PostgresViewStatRepository {
    db: DatabaseConnection,
}

impl PostgresViewStatRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ViewStatRepository for PostgresViewStatRepository {
    async fn find_rows(&self, filter: &ViewStatsFilter) -> Result<Vec<ViewStatRow>, DomainError> {
        let mut query =
            view_stats::Entity::find().filter(view_stats::Column::Date.gte(filter.since));

        if let Some(content_type) = &filter.content_type {
            query = query.filter(view_stats::Column::ContentType.eq(content_type.as_str()));
        }
        if let Some(ids) = &filter.content_ids {
            query = query.filter(view_stats::Column::ContentId.is_in(ids.iter().copied()));
        }

        let results = query
            .all(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        Ok(results.into_iter().map(|m| m.into()).collect())
    }

    async fn increment(
        &self,
        content_type: &ContentType,
        content_id: i64,
        date: NaiveDate,
    ) -> Result<(), DomainError> {
        let model = view_stats::ActiveModel {
            content_type: Set(content_type.to_string()),
            content_id: Set(content_id),
            date: Set(date),
            view_count: Set(1),
            ..Default::default()
        };

        // Relies on UNIQUE (content_type, content_id, date)
        view_stats::Entity::insert(model)
            .on_conflict(
                OnConflict::columns([
                    view_stats::Column::ContentType,
                    view_stats::Column::ContentId,
                    view_stats::Column::Date,
                ])
                .value(
                    view_stats::Column::ViewCount,
                    Expr::col((view_stats::Entity, view_stats::Column::ViewCount)).add(1),
                )
                .to_owned(),
            )
            .exec(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        Ok(())
    }
}

/// Convert SeaORM model to domain entity
impl From<view_stats::Model> for ViewStatRow {
    fn from(model: view_stats::Model) -> Self {
        ViewStatRow {
            content_type: ContentType::from(model.content_type.as_str()),
            content_id: model.content_id,
            date: model.date,
            view_count: model.view_count,
        }
    }
}
