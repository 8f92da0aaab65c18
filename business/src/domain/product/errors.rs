#[derive(Debug, thiserror::Error)]
pub enum ProductError {
    #[error("product.name_empty")]
    NameEmpty,
    #[error("product.price_negative")]
    PriceNegative,
    #[error("product.price_invalid")]
    PriceInvalid,
    #[error("product.price_too_large")]
    PriceTooLarge,
    #[error("product.price_too_precise")]
    PriceTooPrecise,
    #[error("product.stock_too_large")]
    StockTooLarge,
    #[error("product.not_found")]
    NotFound,
    #[error("product.category_not_found")]
    CategoryNotFound,
    #[error("repository.persistence")]
    Repository(#[from] crate::domain::errors::RepositoryError),
}
