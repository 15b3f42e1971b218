//! PostgreSQL implementation of click repository.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use std::sync::Arc;

use crate::domain::entities::AccessEvent;
use crate::domain::repositories::{ClickRepository, TopLink, TrackedClick};
use crate::error::AppError;

#[derive(Debug, sqlx::FromRow)]
struct TrackedClickRow {
    event_id: i64,
    short_link_id: i64,
    accessed_at: DateTime<Utc>,
    original_url: String,
}

#[derive(Debug, sqlx::FromRow)]
struct TopLinkRow {
    short_code: String,
    original_url: String,
    click_count: i64,
    last_accessed_at: Option<DateTime<Utc>>,
}

impl From<TopLinkRow> for TopLink {
    fn from(row: TopLinkRow) -> Self {
        TopLink {
            short_code: row.short_code,
            original_url: row.original_url,
            click_count: row.click_count,
            last_accessed_at: row.last_accessed_at,
        }
    }
}

/// PostgreSQL repository for click tracking and rankings.
///
/// Tracking is a single statement: the `UPDATE` takes the row lock, so
/// concurrent hits on the same code queue up behind each other instead of
/// overwriting each other's increments, and the event insert commits or fails
/// together with the counter.
pub struct PgClickRepository {
    pool: Arc<PgPool>,
}

impl PgClickRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ClickRepository for PgClickRepository {
    async fn track_and_resolve(&self, code: &str) -> Result<Option<TrackedClick>, AppError> {
        let row = sqlx::query_as::<_, TrackedClickRow>(
            r#"
            WITH updated AS (
                UPDATE short_links
                SET click_count = click_count + 1,
                    last_accessed_at = now()
                WHERE short_code = $1
                RETURNING id, original_url, last_accessed_at
            ), inserted AS (
                INSERT INTO short_link_access (short_link_id, accessed_at)
                SELECT id, last_accessed_at FROM updated
                RETURNING id, short_link_id, accessed_at
            )
            SELECT i.id AS event_id, i.short_link_id, i.accessed_at, u.original_url
            FROM inserted i
            JOIN updated u ON u.id = i.short_link_id
            "#,
        )
        .bind(code)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row.map(|r| TrackedClick {
            original_url: r.original_url,
            event: AccessEvent::new(r.event_id, r.short_link_id, r.accessed_at),
        }))
    }

    async fn top_by_click_count(&self, limit: i64) -> Result<Vec<TopLink>, AppError> {
        let rows = sqlx::query_as::<_, TopLinkRow>(
            r#"
            SELECT short_code, original_url, click_count, last_accessed_at
            FROM short_links
            WHERE short_code IS NOT NULL
            ORDER BY click_count DESC, short_code COLLATE "C" ASC
            LIMIT $1
            "#,
        )
        .bind(limit)
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(rows.into_iter().map(TopLink::from).collect())
    }

    async fn top_since(
        &self,
        since: DateTime<Utc>,
        limit: i64,
    ) -> Result<Vec<TopLink>, AppError> {
        let rows = sqlx::query_as::<_, TopLinkRow>(
            r#"
            SELECT
                s.short_code,
                s.original_url,
                COUNT(a.id) AS click_count,
                MAX(a.accessed_at) AS last_accessed_at
            FROM short_links s
            JOIN short_link_access a
              ON a.short_link_id = s.id
             AND a.accessed_at >= $1
            WHERE s.short_code IS NOT NULL
            GROUP BY s.id, s.short_code, s.original_url
            ORDER BY COUNT(a.id) DESC, s.short_code COLLATE "C" ASC
            LIMIT $2
            "#,
        )
        .bind(since)
        .bind(limit)
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(rows.into_iter().map(TopLink::from).collect())
    }

    async fn count_access_events(
        &self,
        short_link_id: i64,
        since: Option<DateTime<Utc>>,
    ) -> Result<i64, AppError> {
        let count: i64 = sqlx::query_scalar(
            r#"
            SELECT COUNT(*)
            FROM short_link_access
            WHERE short_link_id = $1
              AND ($2::timestamptz IS NULL OR accessed_at >= $2)
            "#,
        )
        .bind(short_link_id)
        .bind(since)
        .fetch_one(self.pool.as_ref())
        .await?;

        Ok(count)
    }
}
