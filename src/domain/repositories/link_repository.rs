//! Repository trait for short link data access.

use crate::domain::entities::ShortLink;
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for the short-link registry.
///
/// The registry is create-once, read-many, increment-many: records are never
/// updated or deleted, and the only mutable field is the click counter.
/// Implementations must make `insert_if_absent` and `increment_clicks` atomic
/// per code so concurrent registrations never share a code and concurrent
/// redirects never lose an increment.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::MemoryLinkRepository`] - in-process map (default)
/// - [`crate::infrastructure::persistence::RedisLinkRepository`] - Redis backend
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait LinkRepository: Send + Sync {
    /// Stores a new record unless its code is already taken.
    ///
    /// # Returns
    ///
    /// - `Ok(true)` if the record was stored
    /// - `Ok(false)` if a record with the same code already exists (the
    ///   existing record is left untouched)
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Storage`] if the backing store is unavailable.
    async fn insert_if_absent(&self, link: ShortLink) -> Result<bool, AppError>;

    /// Finds a record by its short code.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(link))` if found, with the current click count
    /// - `Ok(None)` if not found
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Storage`] if the backing store is unavailable.
    async fn find_by_code(&self, code: &str) -> Result<Option<ShortLink>, AppError>;

    /// Atomically increments the click counter for a code by exactly one.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(count))` with the new count if the record exists
    /// - `Ok(None)` if no record matches the code
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Storage`] if the backing store is unavailable.
    async fn increment_clicks(&self, code: &str) -> Result<Option<u64>, AppError>;

    /// Checks if the backing store is reachable.
    ///
    /// Used by the health endpoint.
    async fn health_check(&self) -> bool;
}
