use uuid::Uuid;

/// A quantity the order flow wants to take from one product.
/// Checked once by the stock guard and never persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StockCheckRequest {
    pub product_id: Uuid,
    pub quantity: u32,
}
