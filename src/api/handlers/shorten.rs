//! Handler for the short link creation endpoint.

use axum::{Json, extract::State};
use validator::Validate;

use crate::api::dto::shorten::{ShortenRequest, ShortenResponse};
use crate::error::AppError;
use crate::state::AppState;

/// Registers a URL and returns its public short URL.
///
/// # Endpoint
///
/// `POST /api/short-url`
///
/// # Request Body
///
/// ```json
/// { "url": "https://youtu.be/abc123" }
/// ```
///
/// # Response
///
/// ```json
/// {
///   "success": true,
///   "shortUrl": "https://s.example.com/yt/q1w2e3",
///   "originalUrl": "https://youtu.be/abc123",
///   "platform": "youtube",
///   "type": "video"
/// }
/// ```
///
/// # Errors
///
/// Returns 400 with `{ "success": false, "error": "..." }` for URLs that are
/// not absolute HTTP(S), and 500 if code allocation exhausts its retries or
/// the backing store is unavailable.
pub async fn shorten_handler(
    State(state): State<AppState>,
    Json(payload): Json<ShortenRequest>,
) -> Result<Json<ShortenResponse>, AppError> {
    payload.validate()?;

    let registered = state.link_service.register(&payload.url).await?;

    let short_url = state.link_service.short_url(
        &state.base_url,
        registered.platform,
        &registered.link.short_code,
    );

    Ok(Json(ShortenResponse {
        success: true,
        short_url,
        original_url: registered.link.original_url,
        platform: registered.platform.as_str().to_string(),
        resource_type: registered.resource.as_str().to_string(),
    }))
}
