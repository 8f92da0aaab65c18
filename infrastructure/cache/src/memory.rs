use std::sync::Arc;
use std::time::{Duration, Instant};

use async_trait::async_trait;
use dashmap::DashMap;

use business::domain::cache::CacheStore;

/// Process-local `CacheStore` backed by `DashMap`.
///
/// Entries age out after `default_ttl` and are lazily evicted on access.
/// Cloning shares the underlying map.
#[derive(Clone)]
pub struct InMemoryCacheStore {
    inner: Arc<DashMap<String, (String, Instant)>>,
    default_ttl: Duration,
}

impl InMemoryCacheStore {
    pub fn new(default_ttl: Duration) -> Self {
        Self {
            inner: Arc::new(DashMap::new()),
            default_ttl,
        }
    }

    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    /// Removes `key` only if the entry is still aged out under the shard lock.
    fn remove_if_aged(&self, key: &str) -> bool {
        let ttl = self.default_ttl;
        self.inner
            .remove_if(key, |_, (_, inserted)| inserted.elapsed() >= ttl)
            .is_some()
    }

    /// Drops every aged-out entry.
    pub fn evict_expired(&self) {
        let ttl = self.default_ttl;
        self.inner.retain(|_, (_, inserted)| inserted.elapsed() < ttl);
    }
}

#[async_trait]
impl CacheStore for InMemoryCacheStore {
    async fn get(&self, key: &str) -> Option<String> {
        if let Some(entry) = self.inner.get(key) {
            let (value, inserted) = entry.value();
            if inserted.elapsed() < self.default_ttl {
                return Some(value.clone());
            }
        }
        if self.remove_if_aged(key) {
            tracing::trace!(key, "cache entry aged out");
        }
        None
    }

    async fn set(&self, key: &str, value: String) {
        self.inner.insert(key.to_string(), (value, Instant::now()));
    }

    async fn invalidate(&self, key: &str) {
        self.inner.remove(key);
    }

    async fn invalidate_prefix(&self, prefix: &str) {
        self.inner.retain(|key, _| !key.starts_with(prefix));
    }
}
