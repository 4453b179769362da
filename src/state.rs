//! Shared application state.

use std::sync::Arc;

use crate::application::services::LinkService;

/// State injected into all handlers.
#[derive(Clone)]
pub struct AppState {
    pub link_service: Arc<LinkService>,
    /// Public base URL used to compose short URLs, e.g. `https://s.example.com`.
    pub base_url: String,
}
