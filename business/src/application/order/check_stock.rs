use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::errors::RepositoryError;
use crate::domain::logger::Logger;
use crate::domain::order::errors::OrderError;
use crate::domain::order::model::StockCheckRequest;
use crate::domain::order::stock::ensure_available;
use crate::domain::order::use_cases::check_stock::CheckStockUseCase;
use crate::domain::product::repository::ProductRepository;

/// Reads stock straight from the repository; the catalog cache is never consulted.
pub struct CheckStockUseCaseImpl {
    pub repository: Arc<dyn ProductRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl CheckStockUseCase for CheckStockUseCaseImpl {
    async fn execute(&self, request: StockCheckRequest) -> Result<(), OrderError> {
        if request.quantity == 0 {
            return Err(OrderError::InvalidQuantity);
        }

        let product = self
            .repository
            .get_by_id(request.product_id)
            .await
            .map_err(|e| match e {
                RepositoryError::NotFound => OrderError::ProductNotFound,
                other => OrderError::Repository(other),
            })?;

        self.logger.debug(&format!(
            "Stock check for product {}: requested {}, available {}",
            product.id, request.quantity, product.stock
        ));

        ensure_available(&product, request.quantity).inspect_err(|_| {
            self.logger.warn(&format!(
                "Insufficient stock for product {}: requested {}, available {}",
                product.id, request.quantity, product.stock
            ));
        })
    }
}
