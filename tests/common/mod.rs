#![allow(dead_code)]

use std::sync::Arc;

use applink::application::services::LinkService;
use applink::infrastructure::persistence::MemoryLinkRepository;
use applink::state::AppState;

pub const IPHONE_UA: &str = "Mozilla/5.0 (iPhone; CPU iPhone OS 17_0 like Mac OS X) \
    AppleWebKit/605.1.15 (KHTML, like Gecko) Version/17.0 Mobile/15E148 Safari/604.1";
pub const ANDROID_UA: &str = "Mozilla/5.0 (Linux; Android 14; Pixel 8) AppleWebKit/537.36 \
    (KHTML, like Gecko) Chrome/120.0.0.0 Mobile Safari/537.36";
pub const DESKTOP_UA: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 \
    (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36";

/// Builds application state over a fresh in-memory registry.
pub fn create_test_state() -> AppState {
    AppState {
        link_service: Arc::new(LinkService::new(Arc::new(MemoryLinkRepository::new()))),
        base_url: "https://s.example.com".to_string(),
    }
}

/// Registers a URL directly through the service, returning its short code.
pub async fn register(state: &AppState, url: &str) -> String {
    state
        .link_service
        .register(url)
        .await
        .unwrap()
        .link
        .short_code
}
