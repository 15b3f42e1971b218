//! Shared application state injected into every handler.

use sqlx::PgPool;
use std::sync::Arc;

use crate::application::services::{AnalyticsService, ClickService, LinkService};
use crate::infrastructure::persistence::{PgClickRepository, PgLinkRepository};

/// Services wired to their PostgreSQL repositories.
///
/// Cloning is cheap: every field is reference-counted.
#[derive(Clone)]
pub struct AppState {
    pub link_service: Arc<LinkService<PgLinkRepository>>,
    pub click_service: Arc<ClickService<PgClickRepository>>,
    pub analytics_service: Arc<AnalyticsService<PgClickRepository>>,
    pub pool: Arc<PgPool>,
}

impl AppState {
    /// Builds the state over one connection pool.
    ///
    /// `default_limit` and `max_limit` configure the analytics rankings.
    pub fn new(pool: Arc<PgPool>, default_limit: i64, max_limit: i64) -> Self {
        let link_repository = Arc::new(PgLinkRepository::new(pool.clone()));
        let click_repository = Arc::new(PgClickRepository::new(pool.clone()));

        Self {
            link_service: Arc::new(LinkService::new(link_repository)),
            click_service: Arc::new(ClickService::new(click_repository.clone())),
            analytics_service: Arc::new(AnalyticsService::with_limits(
                click_repository,
                default_limit,
                max_limit,
            )),
            pool,
        }
    }
}
