use async_trait::async_trait;

use crate::domain::order::errors::OrderError;
use crate::domain::order::model::StockCheckRequest;

/// Stock guard called by the order placement flow before an order is accepted.
#[async_trait]
pub trait CheckStockUseCase: Send + Sync {
    async fn execute(&self, request: StockCheckRequest) -> Result<(), OrderError>;
}
