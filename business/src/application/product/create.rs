use std::sync::Arc;

use async_trait::async_trait;
use uuid::Uuid;

use crate::application::product::catalog_cache::CatalogCache;
use crate::domain::category::repository::CategoryRepository;
use crate::domain::logger::Logger;
use crate::domain::product::errors::ProductError;
use crate::domain::product::model::{NewProductProps, Product};
use crate::domain::product::repository::ProductRepository;
use crate::domain::product::use_cases::create::{CreateProductParams, CreateProductUseCase};

pub struct CreateProductUseCaseImpl {
    pub repository: Arc<dyn ProductRepository>,
    pub category_repository: Arc<dyn CategoryRepository>,
    pub catalog: Arc<CatalogCache>,
    pub logger: Arc<dyn Logger>,
}

/// Fails with `CategoryNotFound` unless every id references a stored category.
pub(crate) async fn ensure_categories_exist(
    repository: &dyn CategoryRepository,
    ids: &[Uuid],
) -> Result<(), ProductError> {
    if ids.is_empty() {
        return Ok(());
    }
    let found = repository.count_existing(ids).await?;
    if found != ids.len() {
        return Err(ProductError::CategoryNotFound);
    }
    Ok(())
}

#[async_trait]
impl CreateProductUseCase for CreateProductUseCaseImpl {
    async fn execute(&self, params: CreateProductParams) -> Result<Product, ProductError> {
        self.logger
            .info(&format!("Creating product: {}", params.name));

        let product = Product::new(NewProductProps {
            name: params.name,
            price: params.price,
            stock: params.stock,
            category_ids: params.category_ids,
            created_by: params.created_by,
        })?;

        ensure_categories_exist(self.category_repository.as_ref(), &product.category_ids).await?;

        self.repository.save(&product).await?;
        self.catalog.invalidate_product(product.id).await;

        self.logger
            .info(&format!("Product created with id: {}", product.id));
        Ok(product)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::product::catalog_cache::PRODUCT_LIST_KEY;
    use crate::domain::errors::RepositoryError;
    use crate::domain::shared::value_objects::UserId;
    use crate::test_support::{MemoryCache, MockCategoryRepo, MockProductRepo, mock_logger};
    use bigdecimal::BigDecimal;

    fn params(name: &str, category_ids: Vec<Uuid>) -> CreateProductParams {
        CreateProductParams {
            name: name.to_string(),
            price: BigDecimal::from(12),
            stock: 40,
            category_ids,
            created_by: UserId::new("admin"),
        }
    }

    fn use_case(
        repo: MockProductRepo,
        category_repo: MockCategoryRepo,
        store: Arc<MemoryCache>,
    ) -> CreateProductUseCaseImpl {
        let repository: Arc<dyn ProductRepository> = Arc::new(repo);
        CreateProductUseCaseImpl {
            repository: repository.clone(),
            category_repository: Arc::new(category_repo),
            catalog: Arc::new(CatalogCache {
                repository,
                store,
                logger: mock_logger(),
            }),
            logger: mock_logger(),
        }
    }

    #[tokio::test]
    async fn should_create_product_when_valid() {
        let category_id = Uuid::new_v4();
        let mut repo = MockProductRepo::new();
        repo.expect_save().times(1).returning(|_| Ok(()));
        let mut category_repo = MockCategoryRepo::new();
        category_repo
            .expect_count_existing()
            .returning(|ids| Ok(ids.len()));

        let result = use_case(repo, category_repo, Arc::new(MemoryCache::default()))
            .execute(params("Darjeeling", vec![category_id]))
            .await;

        let product = result.unwrap();
        assert_eq!(product.name, "Darjeeling");
        assert_eq!(product.stock, 40);
        assert_eq!(product.category_ids, vec![category_id]);
        assert_eq!(product.created_by, UserId::new("admin"));
    }

    #[tokio::test]
    async fn should_evict_cached_list_after_create() {
        let mut repo = MockProductRepo::new();
        repo.expect_save().returning(|_| Ok(()));
        let store = Arc::new(MemoryCache::default());
        store.put_raw(PRODUCT_LIST_KEY, "[]");

        use_case(repo, MockCategoryRepo::new(), store.clone())
            .execute(params("Darjeeling", vec![]))
            .await
            .unwrap();

        assert!(!store.contains(PRODUCT_LIST_KEY));
    }

    #[tokio::test]
    async fn should_reject_unknown_category() {
        let mut repo = MockProductRepo::new();
        repo.expect_save().never();
        let mut category_repo = MockCategoryRepo::new();
        category_repo.expect_count_existing().returning(|_| Ok(0));

        let result = use_case(repo, category_repo, Arc::new(MemoryCache::default()))
            .execute(params("Darjeeling", vec![Uuid::new_v4()]))
            .await;

        assert!(matches!(result.unwrap_err(), ProductError::CategoryNotFound));
    }

    #[tokio::test]
    async fn should_reject_empty_name() {
        let mut repo = MockProductRepo::new();
        repo.expect_save().never();

        let result = use_case(repo, MockCategoryRepo::new(), Arc::new(MemoryCache::default()))
            .execute(params(" ", vec![]))
            .await;

        assert!(matches!(result.unwrap_err(), ProductError::NameEmpty));
    }

    #[tokio::test]
    async fn should_surface_repository_failure() {
        let mut repo = MockProductRepo::new();
        repo.expect_save()
            .returning(|_| Err(RepositoryError::DatabaseError));

        let result = use_case(repo, MockCategoryRepo::new(), Arc::new(MemoryCache::default()))
            .execute(params("Darjeeling", vec![]))
            .await;

        assert!(matches!(result.unwrap_err(), ProductError::Repository(_)));
    }
}
