//! DTOs for the per-link statistics endpoint.

use chrono::{DateTime, Utc};
use serde::Serialize;

/// Read-back of a stored link record, including its click counter.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StatsResponse {
    pub success: bool,
    pub short_code: String,
    pub original_url: String,
    pub url_type: String,
    pub click_count: u64,
    pub created_at: DateTime<Utc>,
}
