//! Link creation, lookup and deletion service.

use std::sync::Arc;

use crate::domain::entities::{NewShortLink, ShortLink};
use crate::domain::repositories::LinkRepository;
use crate::error::AppError;
use crate::utils::url_validator::canonicalize_url;
use serde_json::json;
use tracing::info;

/// Service for creating and managing short links.
///
/// Validates target URLs before anything is written; identity assignment and
/// code derivation are delegated to the repository.
pub struct LinkService<L: LinkRepository> {
    link_repository: Arc<L>,
}

impl<L: LinkRepository> LinkService<L> {
    /// Creates a new link service.
    pub fn new(link_repository: Arc<L>) -> Self {
        Self { link_repository }
    }

    /// Creates a short link for `original_url`.
    ///
    /// The URL is stored in canonical form (see
    /// [`crate::utils::url_validator::canonicalize_url`]).
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if the URL is blank, relative,
    /// malformed or not HTTP(S). Nothing is written in that case.
    ///
    /// Returns [`AppError::Internal`] on storage failures.
    pub async fn create_short_link(&self, original_url: &str) -> Result<ShortLink, AppError> {
        let original_url = canonicalize_url(original_url).map_err(|e| {
            AppError::bad_request(
                "Invalid original URL",
                json!({
                    "originalUrl": original_url,
                    "reason": e.to_string(),
                    "expected": "absolute http:// or https:// URL",
                }),
            )
        })?;

        let link = self
            .link_repository
            .create(NewShortLink { original_url })
            .await?;

        info!(id = link.id, code = %link.short_code, "Created short link");
        Ok(link)
    }

    /// Retrieves a link by its identity.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on storage failures.
    pub async fn get_link(&self, id: i64) -> Result<Option<ShortLink>, AppError> {
        self.link_repository.find_by_id(id).await
    }

    /// Lists all links.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on storage failures.
    pub async fn list_links(&self) -> Result<Vec<ShortLink>, AppError> {
        self.link_repository.list_all().await
    }

    /// Deletes a link and its access events.
    ///
    /// Returns `false` if no link had this identity.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on storage failures.
    pub async fn delete_link(&self, id: i64) -> Result<bool, AppError> {
        let removed = self.link_repository.delete(id).await?;

        if removed {
            info!(id, "Deleted short link");
        } else {
            info!(id, "Short link to delete not found");
        }

        Ok(removed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::repositories::MockLinkRepository;
    use crate::utils::code_encoder::encode;
    use chrono::Utc;

    fn create_test_link(id: i64, url: &str) -> ShortLink {
        ShortLink::new(
            id,
            url.to_string(),
            encode(id).unwrap(),
            Utc::now(),
            0,
            None,
        )
    }

    #[tokio::test]
    async fn test_create_short_link_success() {
        let mut mock_repo = MockLinkRepository::new();

        mock_repo
            .expect_create()
            .withf(|new_link| new_link.original_url == "https://example.com/page")
            .times(1)
            .returning(|new_link| Ok(create_test_link(42, &new_link.original_url)));

        let service = LinkService::new(Arc::new(mock_repo));

        let link = service
            .create_short_link("https://example.com/page")
            .await
            .unwrap();

        assert_eq!(link.id, 42);
        assert_eq!(link.click_count, 0);
        assert_eq!(link.short_code, encode(42).unwrap());
    }

    #[tokio::test]
    async fn test_create_short_link_canonicalizes_url() {
        let mut mock_repo = MockLinkRepository::new();

        mock_repo
            .expect_create()
            .withf(|new_link| new_link.original_url == "https://example.com/Path")
            .times(1)
            .returning(|new_link| Ok(create_test_link(1, &new_link.original_url)));

        let service = LinkService::new(Arc::new(mock_repo));

        let result = service.create_short_link("  HTTPS://EXAMPLE.COM/Path ").await;

        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn test_create_short_link_blank_url() {
        let mut mock_repo = MockLinkRepository::new();
        mock_repo.expect_create().times(0);

        let service = LinkService::new(Arc::new(mock_repo));

        let result = service.create_short_link("   ").await;

        assert!(matches!(result.unwrap_err(), AppError::Validation { .. }));
    }

    #[tokio::test]
    async fn test_create_short_link_invalid_url() {
        let mut mock_repo = MockLinkRepository::new();
        mock_repo.expect_create().times(0);

        let service = LinkService::new(Arc::new(mock_repo));

        match service.create_short_link("not-a-url").await {
            Err(AppError::Validation { details, .. }) => {
                assert_eq!(details["originalUrl"], "not-a-url");
            }
            other => panic!("expected validation error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_create_short_link_storage_failure() {
        let mut mock_repo = MockLinkRepository::new();

        mock_repo
            .expect_create()
            .times(1)
            .returning(|_| Err(AppError::internal("Database error", json!({}))));

        let service = LinkService::new(Arc::new(mock_repo));

        let result = service.create_short_link("https://example.com").await;

        assert!(matches!(result.unwrap_err(), AppError::Internal { .. }));
    }

    #[tokio::test]
    async fn test_delete_link() {
        let mut mock_repo = MockLinkRepository::new();

        mock_repo
            .expect_delete()
            .withf(|id| *id == 3)
            .times(1)
            .returning(|_| Ok(true));
        mock_repo
            .expect_delete()
            .withf(|id| *id == 4)
            .times(1)
            .returning(|_| Ok(false));

        let service = LinkService::new(Arc::new(mock_repo));

        assert!(service.delete_link(3).await.unwrap());
        assert!(!service.delete_link(4).await.unwrap());
    }

    #[tokio::test]
    async fn test_list_links() {
        let mut mock_repo = MockLinkRepository::new();

        let links = vec![
            create_test_link(1, "https://a.example/"),
            create_test_link(2, "https://b.example/"),
        ];
        mock_repo
            .expect_list_all()
            .times(1)
            .returning(move || Ok(links.clone()));

        let service = LinkService::new(Arc::new(mock_repo));

        let result = service.list_links().await.unwrap();

        assert_eq!(result.len(), 2);
    }
}
