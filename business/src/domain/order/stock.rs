use super::errors::OrderError;
use crate::domain::product::model::Product;

/// Fails when `requested` exceeds the product's current stock.
///
/// Pure point check: it neither reserves nor decrements stock, so two
/// callers can both pass for the last unit.
pub fn ensure_available(product: &Product, requested: u32) -> Result<(), OrderError> {
    if requested > product.stock {
        return Err(OrderError::InsufficientStock {
            product_name: product.name.clone(),
            available: product.stock,
        });
    }
    Ok(())
}
