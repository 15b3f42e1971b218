//! DTOs for short link management endpoints.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::domain::entities::ShortLink;

/// Request to create a short link.
///
/// Only presence is checked here; the URL itself is validated and
/// canonicalized by [`crate::application::services::LinkService`].
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateUrlRequest {
    #[validate(length(min = 1, max = 8192, message = "originalUrl must not be empty"))]
    pub original_url: String,
}

/// Full projection of a stored short link.
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UrlResponse {
    pub id: i64,
    pub original_url: String,
    pub short_code: String,
    pub created_at: DateTime<Utc>,
    pub click_count: i64,
    pub last_accessed_at: Option<DateTime<Utc>>,
}

impl From<ShortLink> for UrlResponse {
    fn from(link: ShortLink) -> Self {
        Self {
            id: link.id,
            original_url: link.original_url,
            short_code: link.short_code,
            created_at: link.created_at,
            click_count: link.click_count,
            last_accessed_at: link.last_accessed_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_uses_camel_case() {
        let req: CreateUrlRequest =
            serde_json::from_str(r#"{"originalUrl": "https://example.com"}"#).unwrap();
        assert_eq!(req.original_url, "https://example.com");
        assert!(req.validate().is_ok());

        assert!(serde_json::from_str::<CreateUrlRequest>(r#"{"original_url": "x"}"#).is_err());
    }

    #[test]
    fn test_empty_url_fails_validation() {
        let req = CreateUrlRequest {
            original_url: String::new(),
        };
        assert!(req.validate().is_err());
    }

    #[test]
    fn test_response_serialization() {
        let link = ShortLink::new(
            1,
            "https://example.com/".to_string(),
            "AAAAAAAAAAE".to_string(),
            Utc::now(),
            3,
            None,
        );

        let value = serde_json::to_value(UrlResponse::from(link)).unwrap();

        assert_eq!(value["shortCode"], "AAAAAAAAAAE");
        assert_eq!(value["originalUrl"], "https://example.com/");
        assert_eq!(value["clickCount"], 3);
        assert!(value["lastAccessedAt"].is_null());
        assert!(value["createdAt"].is_string());
    }
}
