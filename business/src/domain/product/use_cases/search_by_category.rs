use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::product::errors::ProductError;
use crate::domain::product::model::Product;

pub struct SearchByCategoryParams {
    pub category_id: Uuid,
}

/// Lists the products tagged with a category.
#[async_trait]
pub trait SearchProductsByCategoryUseCase: Send + Sync {
    async fn execute(&self, params: SearchByCategoryParams) -> Result<Vec<Product>, ProductError>;
}
