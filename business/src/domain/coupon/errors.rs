#[derive(Debug, thiserror::Error)]
pub enum CouponError {
    #[error("coupon.code_invalid")]
    CodeInvalid,
    #[error("coupon.code_taken")]
    CodeTaken,
    #[error("coupon.discount_out_of_range")]
    DiscountOutOfRange,
    #[error("coupon.not_found")]
    NotFound,
    #[error("coupon.product_not_found")]
    ProductNotFound,
    #[error("repository.persistence")]
    Repository(#[from] crate::domain::errors::RepositoryError),
}
