use std::sync::Arc;

use serde::Serialize;
use serde::de::DeserializeOwned;
use uuid::Uuid;

use crate::domain::cache::CacheStore;
use crate::domain::errors::RepositoryError;
use crate::domain::logger::Logger;
use crate::domain::product::model::Product;
use crate::domain::product::repository::ProductRepository;

pub const PRODUCT_LIST_KEY: &str = "products:all";
const PRODUCT_KEY_PREFIX: &str = "product";

pub fn product_key(id: Uuid) -> String {
    format!("{PRODUCT_KEY_PREFIX}:{id}")
}

/// Read-through cache over the product repository.
///
/// Entries live until a write evicts them or the store ages them out. Every
/// product mutation must call [`CatalogCache::invalidate_product`] once it
/// has been persisted. Absent products are not cached. Concurrent misses on
/// one key may both load and store the same value.
pub struct CatalogCache {
    pub repository: Arc<dyn ProductRepository>,
    pub store: Arc<dyn CacheStore>,
    pub logger: Arc<dyn Logger>,
}

impl CatalogCache {
    pub async fn get_product(&self, id: Uuid) -> Result<Option<Product>, RepositoryError> {
        let key = product_key(id);
        if let Some(product) = self.read::<Product>(&key).await {
            self.logger.debug(&format!("Catalog cache hit: {}", key));
            return Ok(Some(product));
        }

        self.logger.debug(&format!("Catalog cache miss: {}", key));
        match self.repository.get_by_id(id).await {
            Ok(product) => {
                self.write(&key, &product).await;
                Ok(Some(product))
            }
            Err(RepositoryError::NotFound) => Ok(None),
            Err(other) => Err(other),
        }
    }

    pub async fn get_all_products(&self) -> Result<Vec<Product>, RepositoryError> {
        if let Some(products) = self.read::<Vec<Product>>(PRODUCT_LIST_KEY).await {
            self.logger
                .debug(&format!("Catalog cache hit: {}", PRODUCT_LIST_KEY));
            return Ok(products);
        }

        self.logger
            .debug(&format!("Catalog cache miss: {}", PRODUCT_LIST_KEY));
        let products = self.repository.get_all().await?;
        self.write(PRODUCT_LIST_KEY, &products).await;
        Ok(products)
    }

    /// Evicts the entry for `id` and the full list.
    pub async fn invalidate_product(&self, id: Uuid) {
        self.store.invalidate(&product_key(id)).await;
        self.store.invalidate(PRODUCT_LIST_KEY).await;
    }

    /// Evicts every catalog entry, the list included (`products:all` shares the prefix).
    pub async fn invalidate_all(&self) {
        self.store.invalidate_prefix(PRODUCT_KEY_PREFIX).await;
    }

    async fn read<T: DeserializeOwned>(&self, key: &str) -> Option<T> {
        let raw = self.store.get(key).await?;
        match serde_json::from_str(&raw) {
            Ok(value) => Some(value),
            Err(e) => {
                self.logger
                    .warn(&format!("Dropping undecodable cache entry {}: {}", key, e));
                self.store.invalidate(key).await;
                None
            }
        }
    }

    async fn write<T: Serialize>(&self, key: &str, value: &T) {
        match serde_json::to_string(value) {
            Ok(json) => self.store.set(key, json).await,
            Err(e) => self
                .logger
                .warn(&format!("Could not encode cache entry {}: {}", key, e)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{MemoryCache, MockProductRepo, make_product, mock_logger};
    use std::sync::Mutex;

    fn catalog(repo: MockProductRepo, store: Arc<MemoryCache>) -> CatalogCache {
        CatalogCache {
            repository: Arc::new(repo),
            store,
            logger: mock_logger(),
        }
    }

    #[tokio::test]
    async fn should_load_product_once_and_serve_repeats_from_cache() {
        let id = Uuid::new_v4();
        let mut repo = MockProductRepo::new();
        repo.expect_get_by_id()
            .times(1)
            .returning(|id| Ok(make_product(id, "Oolong", 5)));
        let store = Arc::new(MemoryCache::default());
        let cache = catalog(repo, store.clone());

        let first = cache.get_product(id).await.unwrap().unwrap();
        let second = cache.get_product(id).await.unwrap().unwrap();

        assert_eq!(first, second);
        assert!(store.contains(&product_key(id)));
    }

    #[tokio::test]
    async fn should_serve_second_list_call_without_store_load() {
        let mut repo = MockProductRepo::new();
        repo.expect_get_all().times(1).returning(|| {
            Ok(vec![
                make_product(Uuid::new_v4(), "Oolong", 5),
                make_product(Uuid::new_v4(), "Sencha", 0),
            ])
        });
        let cache = catalog(repo, Arc::new(MemoryCache::default()));

        let first = cache.get_all_products().await.unwrap();
        let second = cache.get_all_products().await.unwrap();

        assert_eq!(first.len(), 2);
        assert_eq!(first, second);
    }

    #[tokio::test]
    async fn should_not_cache_absent_product() {
        let id = Uuid::new_v4();
        let mut repo = MockProductRepo::new();
        repo.expect_get_by_id()
            .times(2)
            .returning(|_| Err(RepositoryError::NotFound));
        let store = Arc::new(MemoryCache::default());
        let cache = catalog(repo, store.clone());

        assert!(cache.get_product(id).await.unwrap().is_none());
        assert!(cache.get_product(id).await.unwrap().is_none());
        assert!(!store.contains(&product_key(id)));
    }

    #[tokio::test]
    async fn should_propagate_database_errors() {
        let mut repo = MockProductRepo::new();
        repo.expect_get_by_id()
            .returning(|_| Err(RepositoryError::DatabaseError));
        let cache = catalog(repo, Arc::new(MemoryCache::default()));

        let result = cache.get_product(Uuid::new_v4()).await;

        assert!(matches!(result, Err(RepositoryError::DatabaseError)));
    }

    #[tokio::test]
    async fn should_reflect_new_stock_after_invalidation() {
        let id = Uuid::new_v4();
        let stock = Arc::new(Mutex::new(5u32));
        let stock_in_repo = stock.clone();
        let mut repo = MockProductRepo::new();
        repo.expect_get_by_id()
            .times(2)
            .returning(move |id| Ok(make_product(id, "Oolong", *stock_in_repo.lock().unwrap())));
        let cache = catalog(repo, Arc::new(MemoryCache::default()));

        assert_eq!(cache.get_product(id).await.unwrap().unwrap().stock, 5);

        *stock.lock().unwrap() = 2;
        assert_eq!(cache.get_product(id).await.unwrap().unwrap().stock, 5);

        cache.invalidate_product(id).await;
        assert_eq!(cache.get_product(id).await.unwrap().unwrap().stock, 2);
    }

    #[tokio::test]
    async fn should_evict_product_and_list_on_invalidate_product() {
        let id = Uuid::new_v4();
        let store = Arc::new(MemoryCache::default());
        store.put_raw(&product_key(id), "{}");
        store.put_raw(PRODUCT_LIST_KEY, "[]");
        let other = product_key(Uuid::new_v4());
        store.put_raw(&other, "{}");
        let cache = catalog(MockProductRepo::new(), store.clone());

        cache.invalidate_product(id).await;

        assert!(!store.contains(&product_key(id)));
        assert!(!store.contains(PRODUCT_LIST_KEY));
        assert!(store.contains(&other));
    }

    #[tokio::test]
    async fn should_evict_every_catalog_entry_on_invalidate_all() {
        let store = Arc::new(MemoryCache::default());
        store.put_raw(&product_key(Uuid::new_v4()), "{}");
        store.put_raw(PRODUCT_LIST_KEY, "[]");
        store.put_raw("session:abc", "x");
        let cache = catalog(MockProductRepo::new(), store.clone());

        cache.invalidate_all().await;

        assert!(!store.contains(PRODUCT_LIST_KEY));
        assert!(store.contains("session:abc"));
    }

    #[tokio::test]
    async fn should_treat_undecodable_entry_as_miss() {
        let id = Uuid::new_v4();
        let store = Arc::new(MemoryCache::default());
        store.put_raw(&product_key(id), "not json");
        let mut repo = MockProductRepo::new();
        repo.expect_get_by_id()
            .times(1)
            .returning(|id| Ok(make_product(id, "Oolong", 1)));
        let cache = catalog(repo, store.clone());

        let product = cache.get_product(id).await.unwrap().unwrap();

        assert_eq!(product.name, "Oolong");
        let reloaded = cache.get_product(id).await.unwrap().unwrap();
        assert_eq!(reloaded, product);
    }
}
