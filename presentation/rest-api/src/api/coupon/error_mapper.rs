use poem::http::StatusCode;
use poem_openapi::payload::Json;

use business::domain::coupon::errors::CouponError;

use crate::api::error::{ErrorResponse, IntoErrorResponse, error_response};

impl IntoErrorResponse for CouponError {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>) {
        match &self {
            CouponError::CodeInvalid => error_response(
                StatusCode::BAD_REQUEST,
                "ValidationError",
                "coupon.code_invalid",
            ),
            CouponError::DiscountOutOfRange => error_response(
                StatusCode::BAD_REQUEST,
                "ValidationError",
                "coupon.discount_out_of_range",
            ),
            CouponError::CodeTaken => {
                error_response(StatusCode::CONFLICT, "Conflict", "coupon.code_taken")
            }
            CouponError::NotFound => {
                error_response(StatusCode::NOT_FOUND, "NotFound", "coupon.not_found")
            }
            CouponError::ProductNotFound => error_response(
                StatusCode::NOT_FOUND,
                "NotFound",
                "coupon.product_not_found",
            ),
            CouponError::Repository(_) => error_response(
                StatusCode::INTERNAL_SERVER_ERROR,
                "InternalError",
                "repository.persistence",
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_map_unknown_product_to_not_found() {
        let (status, json) = CouponError::ProductNotFound.into_error_response();
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(json.0.message, "coupon.product_not_found");
    }

    #[test]
    fn should_map_discount_range_to_bad_request() {
        let (status, _) = CouponError::DiscountOutOfRange.into_error_response();
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }
}
