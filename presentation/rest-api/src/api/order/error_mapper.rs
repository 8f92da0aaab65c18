use poem::http::StatusCode;
use poem_openapi::payload::Json;

use business::domain::order::errors::OrderError;

use crate::api::order::dto::StockErrorResponse;

/// The stock check answers with `{ "error": ... }` instead of the usual
/// `ErrorResponse`, carrying the error's display text.
pub fn into_stock_error(err: OrderError) -> (StatusCode, Json<StockErrorResponse>) {
    let status = match &err {
        OrderError::InvalidQuantity | OrderError::InsufficientStock { .. } => {
            StatusCode::BAD_REQUEST
        }
        OrderError::ProductNotFound => StatusCode::NOT_FOUND,
        OrderError::Repository(_) => StatusCode::INTERNAL_SERVER_ERROR,
    };

    (
        status,
        Json(StockErrorResponse {
            error: err.to_string(),
        }),
    )
}
