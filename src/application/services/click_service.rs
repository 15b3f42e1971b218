//! Redirect resolution with click tracking.

use std::sync::Arc;

use crate::domain::repositories::ClickRepository;
use crate::error::AppError;
use crate::utils::code_encoder;
use tracing::{debug, info, warn};

/// Service resolving short codes into target URLs while counting the hit.
pub struct ClickService<C: ClickRepository> {
    repository: Arc<C>,
}

impl<C: ClickRepository> ClickService<C> {
    /// Creates a new click service.
    pub fn new(repository: Arc<C>) -> Self {
        Self { repository }
    }

    /// Resolves `code` and records one hit on it.
    ///
    /// Strings that cannot be produced by
    /// [`crate::utils::code_encoder::encode`] are answered with `None` without
    /// touching the store.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(url))` after the counter and event log were updated
    /// - `Ok(None)` if no link has this code; nothing is written
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on storage failures.
    pub async fn track_and_resolve(&self, code: &str) -> Result<Option<String>, AppError> {
        if code_encoder::decode(code).is_none() {
            debug!(code, "Rejected malformed short code");
            return Ok(None);
        }

        let Some(click) = self.repository.track_and_resolve(code).await? else {
            warn!(code, "Short code not found");
            return Ok(None);
        };

        info!(
            id = click.event.short_link_id,
            code,
            accessed_at = %click.event.accessed_at,
            "Resolved short link"
        );
        Ok(Some(click.original_url))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::AccessEvent;
    use crate::domain::repositories::{MockClickRepository, TrackedClick};
    use crate::utils::code_encoder::encode;
    use chrono::Utc;
    use serde_json::json;

    #[tokio::test]
    async fn test_track_and_resolve_found() {
        let mut mock_repo = MockClickRepository::new();

        let code = encode(5).unwrap();
        let expected = code.clone();
        mock_repo
            .expect_track_and_resolve()
            .withf(move |c| c == expected)
            .times(1)
            .returning(|_| {
                Ok(Some(TrackedClick {
                    original_url: "https://example.com/page".to_string(),
                    event: AccessEvent::new(1, 5, Utc::now()),
                }))
            });

        let service = ClickService::new(Arc::new(mock_repo));

        let result = service.track_and_resolve(&code).await.unwrap();

        assert_eq!(result.as_deref(), Some("https://example.com/page"));
    }

    #[tokio::test]
    async fn test_track_and_resolve_unknown_code() {
        let mut mock_repo = MockClickRepository::new();

        mock_repo
            .expect_track_and_resolve()
            .times(1)
            .returning(|_| Ok(None));

        let service = ClickService::new(Arc::new(mock_repo));

        let result = service
            .track_and_resolve(&encode(999).unwrap())
            .await
            .unwrap();

        assert!(result.is_none());
    }

    #[tokio::test]
    async fn test_track_and_resolve_malformed_code_skips_store() {
        let mut mock_repo = MockClickRepository::new();
        mock_repo.expect_track_and_resolve().times(0);

        let service = ClickService::new(Arc::new(mock_repo));

        for code in ["favicon.ico", "abc", "AAAAAAAAAAA"] {
            assert!(service.track_and_resolve(code).await.unwrap().is_none());
        }
    }

    #[tokio::test]
    async fn test_track_and_resolve_storage_failure() {
        let mut mock_repo = MockClickRepository::new();

        mock_repo
            .expect_track_and_resolve()
            .times(1)
            .returning(|_| Err(AppError::internal("Database error", json!({}))));

        let service = ClickService::new(Arc::new(mock_repo));

        let result = service.track_and_resolve(&encode(1).unwrap()).await;

        assert!(matches!(result.unwrap_err(), AppError::Internal { .. }));
    }
}
