//! API route configuration.

use crate::api::handlers::{shorten_handler, stats_handler};
use crate::state::AppState;
use axum::{
    Router,
    routing::{get, post},
};

/// JSON API routes, nested under `/api` by the top-level router.
///
/// # Endpoints
///
/// - `POST /short-url`              - Register a URL and mint a short code
/// - `GET  /short-url/{code}/stats` - Read back a record and its click count
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/short-url", post(shorten_handler))
        .route("/short-url/{code}/stats", get(stats_handler))
}
