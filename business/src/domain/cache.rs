use async_trait::async_trait;

/// Key/value cache port used by the catalog read path.
///
/// Values are opaque strings (the catalog stores JSON). Implementations may
/// age entries out on their own; callers only rely on explicit invalidation.
#[async_trait]
pub trait CacheStore: Send + Sync {
    async fn get(&self, key: &str) -> Option<String>;
    async fn set(&self, key: &str, value: String);
    async fn invalidate(&self, key: &str);
    /// Removes every entry whose key starts with `prefix`.
    async fn invalidate_prefix(&self, prefix: &str);
}
