use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::category::repository::CategoryRepository;
use crate::domain::errors::RepositoryError;
use crate::domain::logger::Logger;
use crate::domain::product::errors::ProductError;
use crate::domain::product::model::Product;
use crate::domain::product::repository::ProductRepository;
use crate::domain::product::use_cases::search_by_category::{
    SearchByCategoryParams, SearchProductsByCategoryUseCase,
};

pub struct SearchProductsByCategoryUseCaseImpl {
    pub repository: Arc<dyn ProductRepository>,
    pub category_repository: Arc<dyn CategoryRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl SearchProductsByCategoryUseCase for SearchProductsByCategoryUseCaseImpl {
    async fn execute(&self, params: SearchByCategoryParams) -> Result<Vec<Product>, ProductError> {
        self.logger.info(&format!(
            "Searching products in category: {}",
            params.category_id
        ));

        self.category_repository
            .get_by_id(params.category_id)
            .await
            .map_err(|e| match e {
                RepositoryError::NotFound => ProductError::CategoryNotFound,
                other => ProductError::Repository(other),
            })?;

        let products = self.repository.get_by_category(params.category_id).await?;
        self.logger.info(&format!(
            "Found {} products in category {}",
            products.len(),
            params.category_id
        ));
        Ok(products)
    }
}
