//! In-process link repository backed by a concurrent map.

use async_trait::async_trait;
use dashmap::DashMap;
use dashmap::mapref::entry::Entry;

use crate::domain::entities::ShortLink;
use crate::domain::repositories::LinkRepository;
use crate::error::AppError;

/// Volatile in-memory registry.
///
/// The default backend when no Redis is configured, and the conforming
/// implementation used by unit and integration tests. The map's sharded
/// per-key locking gives `insert_if_absent` and `increment_clicks` the
/// atomicity the registry contract requires; readers never block writers of
/// other keys.
#[derive(Default)]
pub struct MemoryLinkRepository {
    links: DashMap<String, ShortLink>,
}

impl MemoryLinkRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored records. Test and diagnostics helper.
    pub fn len(&self) -> usize {
        self.links.len()
    }

    pub fn is_empty(&self) -> bool {
        self.links.is_empty()
    }
}

#[async_trait]
impl LinkRepository for MemoryLinkRepository {
    async fn insert_if_absent(&self, link: ShortLink) -> Result<bool, AppError> {
        match self.links.entry(link.short_code.clone()) {
            Entry::Occupied(_) => Ok(false),
            Entry::Vacant(vacant) => {
                vacant.insert(link);
                Ok(true)
            }
        }
    }

    async fn find_by_code(&self, code: &str) -> Result<Option<ShortLink>, AppError> {
        Ok(self.links.get(code).map(|entry| entry.value().clone()))
    }

    async fn increment_clicks(&self, code: &str) -> Result<Option<u64>, AppError> {
        Ok(self.links.get_mut(code).map(|mut entry| {
            entry.click_count += 1;
            entry.click_count
        }))
    }

    async fn health_check(&self) -> bool {
        true
    }
}
