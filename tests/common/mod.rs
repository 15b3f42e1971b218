#![allow(dead_code)]

use chrono::{DateTime, Utc};
use shortlink::domain::entities::{NewShortLink, ShortLink};
use shortlink::domain::repositories::LinkRepository;
use shortlink::infrastructure::persistence::{PgClickRepository, PgLinkRepository};
use shortlink::state::AppState;
use sqlx::PgPool;
use std::sync::Arc;

pub fn create_test_state(pool: PgPool) -> AppState {
    AppState::new(Arc::new(pool), 10, 1000)
}

pub fn link_repo(pool: &PgPool) -> PgLinkRepository {
    PgLinkRepository::new(Arc::new(pool.clone()))
}

pub fn click_repo(pool: &PgPool) -> PgClickRepository {
    PgClickRepository::new(Arc::new(pool.clone()))
}

/// Creates a link through the repository so that it gets a real code.
pub async fn create_test_link(pool: &PgPool, url: &str) -> ShortLink {
    link_repo(pool)
        .create(NewShortLink {
            original_url: url.to_string(),
        })
        .await
        .unwrap()
}

/// Records `count` access events at `accessed_at` and bumps the counter to
/// match, as if the redirects had happened at that time.
pub async fn insert_access_events(
    pool: &PgPool,
    short_link_id: i64,
    accessed_at: DateTime<Utc>,
    count: i64,
) {
    sqlx::query(
        "INSERT INTO short_link_access (short_link_id, accessed_at)
         SELECT $1, $2 FROM generate_series(1, $3)",
    )
    .bind(short_link_id)
    .bind(accessed_at)
    .bind(count)
    .execute(pool)
    .await
    .unwrap();

    sqlx::query(
        "UPDATE short_links
         SET click_count = click_count + $2,
             last_accessed_at = GREATEST(last_accessed_at, $3)
         WHERE id = $1",
    )
    .bind(short_link_id)
    .bind(count)
    .bind(accessed_at)
    .execute(pool)
    .await
    .unwrap();
}

pub async fn count_events(pool: &PgPool, short_link_id: i64) -> i64 {
    sqlx::query_scalar("SELECT COUNT(*) FROM short_link_access WHERE short_link_id = $1")
        .bind(short_link_id)
        .fetch_one(pool)
        .await
        .unwrap()
}

pub async fn count_all_events(pool: &PgPool) -> i64 {
    sqlx::query_scalar("SELECT COUNT(*) FROM short_link_access")
        .fetch_one(pool)
        .await
        .unwrap()
}
