#[derive(Debug, thiserror::Error)]
pub enum OrderError {
    #[error("order.invalid_quantity")]
    InvalidQuantity,
    #[error("order.product_not_found")]
    ProductNotFound,
    /// Message is shown to the customer as is.
    #[error("Not enough stock for {product_name}. Available: {available}")]
    InsufficientStock {
        product_name: String,
        available: u32,
    },
    #[error("repository.persistence")]
    Repository(#[from] crate::domain::errors::RepositoryError),
}
