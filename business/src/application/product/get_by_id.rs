use std::sync::Arc;

use async_trait::async_trait;

use crate::application::product::catalog_cache::CatalogCache;
use crate::domain::logger::Logger;
use crate::domain::product::errors::ProductError;
use crate::domain::product::model::Product;
use crate::domain::product::use_cases::get_by_id::{GetProductByIdParams, GetProductByIdUseCase};

pub struct GetProductByIdUseCaseImpl {
    pub catalog: Arc<CatalogCache>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl GetProductByIdUseCase for GetProductByIdUseCaseImpl {
    async fn execute(&self, params: GetProductByIdParams) -> Result<Product, ProductError> {
        self.logger
            .info(&format!("Fetching product by id: {}", params.id));

        self.catalog
            .get_product(params.id)
            .await?
            .ok_or(ProductError::NotFound)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::errors::RepositoryError;
    use crate::test_support::{MemoryCache, MockProductRepo, make_product, mock_logger};
    use uuid::Uuid;

    fn use_case(repo: MockProductRepo) -> GetProductByIdUseCaseImpl {
        GetProductByIdUseCaseImpl {
            catalog: Arc::new(CatalogCache {
                repository: Arc::new(repo),
                store: Arc::new(MemoryCache::default()),
                logger: mock_logger(),
            }),
            logger: mock_logger(),
        }
    }

    #[tokio::test]
    async fn should_return_product_when_exists() {
        let product_id = Uuid::new_v4();
        let mut repo = MockProductRepo::new();
        repo.expect_get_by_id()
            .withf(move |id| *id == product_id)
            .returning(|id| Ok(make_product(id, "Fresh Salmon", 3)));

        let product = use_case(repo)
            .execute(GetProductByIdParams { id: product_id })
            .await
            .unwrap();

        assert_eq!(product.id, product_id);
        assert_eq!(product.name, "Fresh Salmon");
    }

    #[tokio::test]
    async fn should_return_not_found_when_product_absent() {
        let mut repo = MockProductRepo::new();
        repo.expect_get_by_id()
            .returning(|_| Err(RepositoryError::NotFound));

        let result = use_case(repo)
            .execute(GetProductByIdParams { id: Uuid::new_v4() })
            .await;

        assert!(matches!(result.unwrap_err(), ProductError::NotFound));
    }

    #[tokio::test]
    async fn should_return_repository_error_on_database_failure() {
        let mut repo = MockProductRepo::new();
        repo.expect_get_by_id()
            .returning(|_| Err(RepositoryError::DatabaseError));

        let result = use_case(repo)
            .execute(GetProductByIdParams { id: Uuid::new_v4() })
            .await;

        assert!(matches!(result.unwrap_err(), ProductError::Repository(_)));
    }
}
