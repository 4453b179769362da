//! Short link entity binding a code to its resolved deep links.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A registered short link.
///
/// `short_code`, `original_url`, both deep links, and `url_type` are fixed at
/// creation; only `click_count` changes afterwards, incremented by exactly one
/// per successful redirect resolution.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShortLink {
    pub short_code: String,
    pub original_url: String,
    pub ios_deep_link: String,
    pub android_deep_link: String,
    /// Composed `{platform}_{type}` tag, e.g. `youtube_video`.
    pub url_type: String,
    pub click_count: u64,
    pub created_at: DateTime<Utc>,
}

impl ShortLink {
    /// Creates a fresh record with a zero click count.
    pub fn new(
        short_code: String,
        original_url: String,
        ios_deep_link: String,
        android_deep_link: String,
        url_type: String,
    ) -> Self {
        Self {
            short_code,
            original_url,
            ios_deep_link,
            android_deep_link,
            url_type,
            click_count: 0,
            created_at: Utc::now(),
        }
    }
}
