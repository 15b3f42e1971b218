//! DTOs for the analytics endpoint.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_with::{DisplayFromStr, serde_as};

use crate::domain::repositories::TopLink;

/// Query parameters of `GET /analytics/top`.
///
/// `limit` is parsed from the query string with `serde_with`; the window is
/// kept raw so that parse errors can name the offending input.
#[serde_as]
#[derive(Debug, Default, Deserialize)]
pub struct TopQueryParams {
    #[serde(default)]
    pub window: Option<String>,

    #[serde_as(as = "Option<DisplayFromStr>")]
    #[serde(default)]
    pub limit: Option<i64>,
}

/// One entry of a ranking.
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TopUrlResponse {
    pub short_code: String,
    pub original_url: String,
    pub click_count: i64,
    pub last_accessed_at: Option<DateTime<Utc>>,
}

impl From<TopLink> for TopUrlResponse {
    fn from(top: TopLink) -> Self {
        Self {
            short_code: top.short_code,
            original_url: top.original_url,
            click_count: top.click_count,
            last_accessed_at: top.last_accessed_at,
        }
    }
}
