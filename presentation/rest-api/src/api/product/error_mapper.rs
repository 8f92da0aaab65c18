use poem::http::StatusCode;
use poem_openapi::payload::Json;

use business::domain::product::errors::ProductError;

use crate::api::error::{ErrorResponse, IntoErrorResponse, error_response};

impl IntoErrorResponse for ProductError {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>) {
        match &self {
            ProductError::NameEmpty => error_response(
                StatusCode::BAD_REQUEST,
                "ValidationError",
                "product.name_empty",
            ),
            ProductError::PriceNegative => error_response(
                StatusCode::BAD_REQUEST,
                "ValidationError",
                "product.price_negative",
            ),
            ProductError::PriceInvalid => error_response(
                StatusCode::BAD_REQUEST,
                "ValidationError",
                "product.price_invalid",
            ),
            ProductError::PriceTooLarge => error_response(
                StatusCode::BAD_REQUEST,
                "ValidationError",
                "product.price_too_large",
            ),
            ProductError::PriceTooPrecise => error_response(
                StatusCode::BAD_REQUEST,
                "ValidationError",
                "product.price_too_precise",
            ),
            ProductError::StockTooLarge => error_response(
                StatusCode::BAD_REQUEST,
                "ValidationError",
                "product.stock_too_large",
            ),
            ProductError::NotFound => {
                error_response(StatusCode::NOT_FOUND, "NotFound", "product.not_found")
            }
            ProductError::CategoryNotFound => error_response(
                StatusCode::NOT_FOUND,
                "NotFound",
                "product.category_not_found",
            ),
            ProductError::Repository(_) => error_response(
                StatusCode::INTERNAL_SERVER_ERROR,
                "InternalError",
                "repository.persistence",
            ),
        }
    }
}
