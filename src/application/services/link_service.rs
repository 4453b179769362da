//! Link registration and resolution service.

use std::sync::Arc;

use serde_json::json;

use crate::domain::classifier::{Platform, ResourceType, classify};
use crate::domain::deeplink::synthesize;
use crate::domain::device::{Device, detect};
use crate::domain::entities::ShortLink;
use crate::domain::repositories::LinkRepository;
use crate::error::AppError;
use crate::utils::code_generator::generate_code;

/// Delay after which the redirect page abandons the native-app attempt and
/// navigates to the plain web URL.
pub const FALLBACK_DELAY_MS: u64 = 3000;

/// Maximum collision retries for short-code allocation.
const MAX_ATTEMPTS: usize = 10;

/// Outcome of a successful registration.
#[derive(Debug, Clone)]
pub struct RegisteredLink {
    pub link: ShortLink,
    pub platform: Platform,
    pub resource: ResourceType,
}

/// Device-targeted redirect instruction for one resolved visit.
///
/// `primary_url` is what the page navigates to immediately; `fallback_url`
/// (always the original web URL) is forced after `fallback_delay_ms` if the
/// native app did not take over.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RedirectDirective {
    pub primary_url: String,
    pub fallback_url: String,
    pub ios_url: String,
    pub android_url: String,
    pub device: Device,
    pub fallback_delay_ms: u64,
}

/// Service for registering short links and resolving them to redirects.
///
/// Registration classifies the URL, synthesizes both deep links, and allocates
/// a collision-free code; resolution looks a record up, counts the click, and
/// picks the redirect target for the requesting device.
pub struct LinkService {
    repository: Arc<dyn LinkRepository>,
}

impl LinkService {
    /// Creates a new link service over a registry backend.
    pub fn new(repository: Arc<dyn LinkRepository>) -> Self {
        Self { repository }
    }

    /// Registers a URL and mints a unique short code for it.
    ///
    /// # Code Allocation
    ///
    /// Draws random 6-character codes and claims one via the repository's
    /// atomic `insert_if_absent`, retrying up to 10 times on collision. Two
    /// concurrent registrations can never share a code, and an existing
    /// record is never overwritten.
    ///
    /// # Errors
    ///
    /// - [`AppError::Validation`] if the URL is not absolute HTTP(S)
    /// - [`AppError::CodeExhausted`] if every allocation attempt collided
    /// - [`AppError::Storage`] if the backing store is unavailable
    pub async fn register(&self, original_url: &str) -> Result<RegisteredLink, AppError> {
        let classification = classify(original_url).map_err(|e| {
            AppError::bad_request("Invalid URL format", json!({ "reason": e.to_string() }))
        })?;

        let deep_links = synthesize(&classification, original_url);
        let url_type = classification.url_type();

        for _ in 0..MAX_ATTEMPTS {
            let link = ShortLink::new(
                generate_code(),
                original_url.to_string(),
                deep_links.ios.clone(),
                deep_links.android.clone(),
                url_type.clone(),
            );

            if self.repository.insert_if_absent(link.clone()).await? {
                tracing::info!(
                    code = %link.short_code,
                    url_type = %link.url_type,
                    "registered short link"
                );
                return Ok(RegisteredLink {
                    link,
                    platform: classification.platform,
                    resource: classification.resource,
                });
            }
        }

        Err(AppError::code_exhausted(MAX_ATTEMPTS))
    }

    /// Resolves a short code for a visiting device.
    ///
    /// A successful lookup counts the click exactly once, before the redirect
    /// directive is produced; whether the client completes the native-app
    /// handoff does not matter.
    ///
    /// # Errors
    ///
    /// - [`AppError::NotFound`] if no record matches the code
    /// - [`AppError::Storage`] if the backing store is unavailable
    pub async fn resolve(
        &self,
        code: &str,
        user_agent: &str,
    ) -> Result<RedirectDirective, AppError> {
        let link = self
            .repository
            .find_by_code(code)
            .await?
            .ok_or_else(|| AppError::not_found("Short link not found", json!({ "code": code })))?;

        if self.repository.increment_clicks(code).await?.is_none() {
            tracing::warn!(code, "click increment hit a missing record");
        }

        let device = detect(user_agent);
        let primary_url = match device {
            Device::Ios => link.ios_deep_link.clone(),
            Device::Android => link.android_deep_link.clone(),
            Device::Other => link.original_url.clone(),
        };

        Ok(RedirectDirective {
            primary_url,
            fallback_url: link.original_url.clone(),
            ios_url: link.ios_deep_link,
            android_url: link.android_deep_link,
            device,
            fallback_delay_ms: FALLBACK_DELAY_MS,
        })
    }

    /// Retrieves a record by its short code.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no record matches the code.
    pub async fn get_link(&self, code: &str) -> Result<ShortLink, AppError> {
        self.repository
            .find_by_code(code)
            .await?
            .ok_or_else(|| AppError::not_found("Short link not found", json!({ "code": code })))
    }

    /// Composes the public short URL for a registered link.
    pub fn short_url(&self, base_url: &str, platform: Platform, code: &str) -> String {
        format!("{}/{}/{}", base_url.trim_end_matches('/'), platform.prefix(), code)
    }

    /// Reports whether the registry backend is reachable.
    pub async fn storage_healthy(&self) -> bool {
        self.repository.health_check().await
    }
}
