//! PostgreSQL implementation of link repository.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde_json::json;
use sqlx::PgPool;
use std::sync::Arc;

use crate::domain::entities::{NewShortLink, ShortLink};
use crate::domain::repositories::LinkRepository;
use crate::error::AppError;
use crate::utils::code_encoder;

/// Row shape shared by every query returning a full short link.
#[derive(Debug, sqlx::FromRow)]
struct ShortLinkRow {
    id: i64,
    original_url: String,
    short_code: String,
    created_at: DateTime<Utc>,
    click_count: i64,
    last_accessed_at: Option<DateTime<Utc>>,
}

impl From<ShortLinkRow> for ShortLink {
    fn from(row: ShortLinkRow) -> Self {
        ShortLink::new(
            row.id,
            row.original_url,
            row.short_code,
            row.created_at,
            row.click_count,
            row.last_accessed_at,
        )
    }
}

/// PostgreSQL repository for short link storage and retrieval.
///
/// Uses bound parameters for every query. Identities come from the
/// `short_links.id` sequence; codes are derived in Rust and written back in the
/// same transaction.
pub struct PgLinkRepository {
    pool: Arc<PgPool>,
}

impl PgLinkRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl LinkRepository for PgLinkRepository {
    async fn create(&self, new_link: NewShortLink) -> Result<ShortLink, AppError> {
        // Dropping `tx` without commit rolls back, so every early return below
        // leaves no code-less row behind.
        let mut tx = self.pool.begin().await?;

        let id: i64 = sqlx::query_scalar(
            r#"
            INSERT INTO short_links (original_url, click_count)
            VALUES ($1, 0)
            RETURNING id
            "#,
        )
        .bind(&new_link.original_url)
        .fetch_one(&mut *tx)
        .await?;

        let short_code = code_encoder::encode(id).ok_or_else(|| {
            AppError::internal(
                "Failed to derive short code",
                json!({ "reason": "store assigned a non-positive identity", "id": id }),
            )
        })?;

        let row = sqlx::query_as::<_, ShortLinkRow>(
            r#"
            UPDATE short_links
            SET short_code = $2
            WHERE id = $1
            RETURNING id, original_url, short_code, created_at, click_count, last_accessed_at
            "#,
        )
        .bind(id)
        .bind(&short_code)
        .fetch_one(&mut *tx)
        .await?;

        tx.commit().await?;

        Ok(row.into())
    }

    async fn find_by_code(&self, code: &str) -> Result<Option<ShortLink>, AppError> {
        let row = sqlx::query_as::<_, ShortLinkRow>(
            r#"
            SELECT id, original_url, short_code, created_at, click_count, last_accessed_at
            FROM short_links
            WHERE short_code = $1
            "#,
        )
        .bind(code)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row.map(ShortLink::from))
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<ShortLink>, AppError> {
        let row = sqlx::query_as::<_, ShortLinkRow>(
            r#"
            SELECT id, original_url, short_code, created_at, click_count, last_accessed_at
            FROM short_links
            WHERE id = $1 AND short_code IS NOT NULL
            "#,
        )
        .bind(id)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row.map(ShortLink::from))
    }

    async fn list_all(&self) -> Result<Vec<ShortLink>, AppError> {
        let rows = sqlx::query_as::<_, ShortLinkRow>(
            r#"
            SELECT id, original_url, short_code, created_at, click_count, last_accessed_at
            FROM short_links
            WHERE short_code IS NOT NULL
            ORDER BY id
            "#,
        )
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(rows.into_iter().map(ShortLink::from).collect())
    }

    async fn delete(&self, id: i64) -> Result<bool, AppError> {
        let result = sqlx::query("DELETE FROM short_links WHERE id = $1")
            .bind(id)
            .execute(self.pool.as_ref())
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
