use std::sync::Arc;

use async_trait::async_trait;

use crate::application::product::catalog_cache::CatalogCache;
use crate::domain::logger::Logger;
use crate::domain::product::errors::ProductError;
use crate::domain::product::model::Product;
use crate::domain::product::use_cases::get_all::GetAllProductsUseCase;

pub struct GetAllProductsUseCaseImpl {
    pub catalog: Arc<CatalogCache>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl GetAllProductsUseCase for GetAllProductsUseCaseImpl {
    async fn execute(&self) -> Result<Vec<Product>, ProductError> {
        self.logger.info("Fetching all products");
        let products = self.catalog.get_all_products().await?;
        self.logger
            .info(&format!("Found {} products", products.len()));
        Ok(products)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{MemoryCache, MockProductRepo, make_product, mock_logger};
    use uuid::Uuid;

    #[tokio::test]
    async fn should_return_all_products_when_requested() {
        let mut repo = MockProductRepo::new();
        repo.expect_get_all()
            .times(1)
            .returning(|| Ok(vec![make_product(Uuid::new_v4(), "Tomatoes", 12)]));

        let use_case = GetAllProductsUseCaseImpl {
            catalog: Arc::new(CatalogCache {
                repository: Arc::new(repo),
                store: Arc::new(MemoryCache::default()),
                logger: mock_logger(),
            }),
            logger: mock_logger(),
        };

        let first = use_case.execute().await.unwrap();
        let second = use_case.execute().await.unwrap();

        assert_eq!(first.len(), 1);
        assert_eq!(first[0].name, "Tomatoes");
        assert_eq!(first, second);
    }
}
