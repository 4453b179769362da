//! DTOs for the short link creation endpoint.

use serde::{Deserialize, Serialize};
use validator::Validate;

/// Request to register a URL.
#[derive(Debug, Deserialize, Validate)]
pub struct ShortenRequest {
    /// The original URL to register (must be absolute HTTP/HTTPS).
    #[validate(url(message = "Invalid URL format"))]
    pub url: String,
}

/// Successful registration response.
///
/// Field names follow the public wire contract (`shortUrl`, `originalUrl`).
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ShortenResponse {
    pub success: bool,
    pub short_url: String,
    pub original_url: String,
    pub platform: String,
    #[serde(rename = "type")]
    pub resource_type: String,
}
