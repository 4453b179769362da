//! Redis-backed link repository.

use async_trait::async_trait;
use redis::{AsyncCommands, Client, aio::ConnectionManager};
use serde_json::json;
use tracing::{debug, info};

use crate::domain::entities::ShortLink;
use crate::domain::repositories::LinkRepository;
use crate::error::AppError;

const LINK_KEY_PREFIX: &str = "link:";
const CLICKS_KEY_PREFIX: &str = "clicks:";

/// Redis registry implementation.
///
/// Records are stored as JSON under `link:{code}` via `SET NX`, which is the
/// atomic insert-if-absent the registry contract requires across processes.
/// The live click counter lives separately under `clicks:{code}` so it can be
/// bumped with `INCR` without rewriting the record; a missing counter key
/// reads as zero.
///
/// Unlike a cache, the registry is authoritative: errors propagate as
/// [`AppError::Storage`] instead of degrading silently.
pub struct RedisLinkRepository {
    client: ConnectionManager,
}

impl RedisLinkRepository {
    /// Connects to Redis and validates the connection with a PING.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Storage`] if the URL is invalid, the connection
    /// cannot be established, or the PING health check fails.
    pub async fn connect(redis_url: &str) -> Result<Self, AppError> {
        info!("Connecting to Redis at {}", redis_url);

        let client = Client::open(redis_url)
            .map_err(|e| storage_error("Failed to create Redis client", &e))?;

        let manager = ConnectionManager::new(client)
            .await
            .map_err(|e| storage_error("Failed to connect to Redis", &e))?;

        let mut test_conn = manager.clone();
        test_conn
            .ping::<()>()
            .await
            .map_err(|e| storage_error("Redis PING failed", &e))?;

        info!("✓ Connected to Redis");

        Ok(Self { client: manager })
    }

    fn link_key(code: &str) -> String {
        format!("{LINK_KEY_PREFIX}{code}")
    }

    fn clicks_key(code: &str) -> String {
        format!("{CLICKS_KEY_PREFIX}{code}")
    }
}

#[async_trait]
impl LinkRepository for RedisLinkRepository {
    async fn insert_if_absent(&self, link: ShortLink) -> Result<bool, AppError> {
        let key = Self::link_key(&link.short_code);
        let mut conn = self.client.clone();

        let payload = serde_json::to_string(&link)
            .map_err(|e| storage_error("Failed to serialize link record", &e))?;

        let stored: bool = conn
            .set_nx(&key, payload)
            .await
            .map_err(|e| storage_error("Redis SET NX failed", &e))?;

        if stored {
            debug!("Stored link {}", link.short_code);
        } else {
            debug!("Code collision on {}", link.short_code);
        }

        Ok(stored)
    }

    async fn find_by_code(&self, code: &str) -> Result<Option<ShortLink>, AppError> {
        let mut conn = self.client.clone();

        let payload: Option<String> = conn
            .get(Self::link_key(code))
            .await
            .map_err(|e| storage_error("Redis GET failed", &e))?;

        let Some(payload) = payload else {
            return Ok(None);
        };

        let mut link: ShortLink = serde_json::from_str(&payload)
            .map_err(|e| storage_error("Corrupt link record in Redis", &e))?;

        let clicks: Option<u64> = conn
            .get(Self::clicks_key(code))
            .await
            .map_err(|e| storage_error("Redis GET failed", &e))?;
        link.click_count = clicks.unwrap_or(0);

        Ok(Some(link))
    }

    async fn increment_clicks(&self, code: &str) -> Result<Option<u64>, AppError> {
        let mut conn = self.client.clone();

        // Records are never deleted, so exists-then-incr cannot race with a
        // removal; a counter is only ever bumped for a stored record.
        let exists: bool = conn
            .exists(Self::link_key(code))
            .await
            .map_err(|e| storage_error("Redis EXISTS failed", &e))?;

        if !exists {
            return Ok(None);
        }

        let count: u64 = conn
            .incr(Self::clicks_key(code), 1)
            .await
            .map_err(|e| storage_error("Redis INCR failed", &e))?;

        Ok(Some(count))
    }

    async fn health_check(&self) -> bool {
        let mut conn = self.client.clone();
        conn.ping::<()>().await.is_ok()
    }
}

fn storage_error(message: &str, source: &dyn std::fmt::Display) -> AppError {
    AppError::storage(message, json!({ "error": source.to_string() }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_namespacing() {
        assert_eq!(RedisLinkRepository::link_key("abc123"), "link:abc123");
        assert_eq!(RedisLinkRepository::clicks_key("abc123"), "clicks:abc123");
    }
}
