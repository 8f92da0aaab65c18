use std::sync::Arc;

use async_trait::async_trait;

use crate::application::product::catalog_cache::CatalogCache;
use crate::application::product::create::ensure_categories_exist;
use crate::domain::category::repository::CategoryRepository;
use crate::domain::errors::RepositoryError;
use crate::domain::logger::Logger;
use crate::domain::product::errors::ProductError;
use crate::domain::product::model::Product;
use crate::domain::product::repository::ProductRepository;
use crate::domain::product::use_cases::update::{UpdateProductParams, UpdateProductUseCase};

pub struct UpdateProductUseCaseImpl {
    pub repository: Arc<dyn ProductRepository>,
    pub category_repository: Arc<dyn CategoryRepository>,
    pub catalog: Arc<CatalogCache>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl UpdateProductUseCase for UpdateProductUseCaseImpl {
    async fn execute(&self, params: UpdateProductParams) -> Result<Product, ProductError> {
        self.logger
            .info(&format!("Updating product: {}", params.id));

        // Read through the repository, not the cache, so the update starts from committed state.
        let existing = self
            .repository
            .get_by_id(params.id)
            .await
            .map_err(|e| match e {
                RepositoryError::NotFound => ProductError::NotFound,
                other => ProductError::Repository(other),
            })?;

        let categories_changed = params.changes.category_ids.is_some();
        let updated = existing.with_changes(params.changes)?;

        if categories_changed {
            ensure_categories_exist(self.category_repository.as_ref(), &updated.category_ids)
                .await?;
        }

        self.repository.save(&updated).await?;
        self.catalog.invalidate_product(updated.id).await;

        if existing.stock != updated.stock {
            self.logger.info(&format!(
                "Stock of product {} changed from {} to {}",
                updated.id, existing.stock, updated.stock
            ));
        }
        self.logger
            .info(&format!("Product updated: {}", updated.id));
        Ok(updated)
    }
}
