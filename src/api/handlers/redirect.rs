//! Handler for short link redirect pages.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    extract::{Path, State},
    http::{HeaderMap, StatusCode, header},
    response::{IntoResponse, Response},
};
use tracing::debug;

use crate::error::AppError;
use crate::state::AppState;

/// Template for the redirect interstitial.
///
/// Renders `templates/redirect.html`: an immediate navigation to the
/// device-appropriate deep link, visible buttons for the native app and the
/// web URL, and a timed force-navigation to the web URL.
#[derive(Template, WebTemplate)]
#[template(path = "redirect.html")]
struct RedirectTemplate {
    primary_url: String,
    fallback_url: String,
    ios_url: String,
    android_url: String,
    device: &'static str,
    fallback_delay_ms: u64,
}

/// Template for unknown short codes.
#[derive(Template, WebTemplate)]
#[template(path = "not_found.html")]
struct NotFoundTemplate {}

/// Resolves a short code and renders the redirect interstitial.
///
/// # Endpoint
///
/// `GET /{prefix}/{code}`
///
/// The platform prefix (`yt`, `ig`, `tt`, `tw`, `fb`, `li`, `web`) is
/// informational only; resolution is keyed purely by the code. A successful
/// lookup increments the link's click counter exactly once, whether or not
/// the visitor completes the native-app handoff.
///
/// # Request Flow
///
/// 1. Look up the record by code
/// 2. Count the click
/// 3. Classify the device from the User-Agent header
/// 4. Render the interstitial targeting the device-appropriate deep link,
///    with the original URL as a 3-second fallback
///
/// # Errors
///
/// Unknown codes render a 404 HTML page (this endpoint is browser-facing,
/// not a JSON API).
pub async fn redirect_handler(
    Path((prefix, code)): Path<(String, String)>,
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Response {
    let user_agent = headers
        .get(header::USER_AGENT)
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default();

    match state.link_service.resolve(&code, user_agent).await {
        Ok(directive) => {
            debug!(%prefix, %code, device = directive.device.as_str(), "resolved short link");

            RedirectTemplate {
                primary_url: directive.primary_url,
                fallback_url: directive.fallback_url,
                ios_url: directive.ios_url,
                android_url: directive.android_url,
                device: directive.device.as_str(),
                fallback_delay_ms: directive.fallback_delay_ms,
            }
            .into_response()
        }
        Err(AppError::NotFound { .. }) => {
            debug!(%prefix, %code, "unknown short link");
            (StatusCode::NOT_FOUND, NotFoundTemplate {}).into_response()
        }
        Err(err) => err.into_response(),
    }
}
