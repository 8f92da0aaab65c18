use poem_openapi::Object;
use uuid::Uuid;

use business::domain::order::model::StockCheckRequest;

#[derive(Debug, Clone, Object)]
pub struct CheckStockRequest {
    pub product_id: Uuid,
    /// Units the customer wants to order
    pub quantity: u32,
}

impl From<CheckStockRequest> for StockCheckRequest {
    fn from(dto: CheckStockRequest) -> Self {
        Self {
            product_id: dto.product_id,
            quantity: dto.quantity,
        }
    }
}

/// Failure body shown to the customer, e.g.
/// `{ "error": "Not enough stock for Widget. Available: 3" }`
#[derive(Debug, Clone, Object)]
pub struct StockErrorResponse {
    pub error: String,
}
