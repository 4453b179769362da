//! Handler for per-link statistics.

use axum::{
    Json,
    extract::{Path, State},
};

use crate::api::dto::stats::StatsResponse;
use crate::error::AppError;
use crate::state::AppState;

/// Returns the stored record for a short code, including its click counter.
///
/// # Endpoint
///
/// `GET /api/short-url/{code}/stats`
///
/// # Response
///
/// ```json
/// {
///   "success": true,
///   "shortCode": "q1w2e3",
///   "originalUrl": "https://youtu.be/abc123",
///   "urlType": "youtube_video",
///   "clickCount": 42,
///   "createdAt": "2026-01-15T10:00:00Z"
/// }
/// ```
///
/// # Errors
///
/// Returns 404 with a JSON error body for unknown codes.
pub async fn stats_handler(
    Path(code): Path<String>,
    State(state): State<AppState>,
) -> Result<Json<StatsResponse>, AppError> {
    let link = state.link_service.get_link(&code).await?;

    Ok(Json(StatsResponse {
        success: true,
        short_code: link.short_code,
        original_url: link.original_url,
        url_type: link.url_type,
        click_count: link.click_count,
        created_at: link.created_at,
    }))
}
