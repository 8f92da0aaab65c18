use std::sync::Arc;

use poem_openapi::{OpenApi, payload::Json};

use business::domain::order::use_cases::check_stock::CheckStockUseCase;

use crate::api::order::dto::{CheckStockRequest, StockErrorResponse};
use crate::api::order::error_mapper::into_stock_error;
use crate::api::security::JwtBearer;
use crate::api::tags::ApiTags;

pub struct OrderApi {
    check_stock_use_case: Arc<dyn CheckStockUseCase>,
}

impl OrderApi {
    pub fn new(check_stock_use_case: Arc<dyn CheckStockUseCase>) -> Self {
        Self {
            check_stock_use_case,
        }
    }
}

#[OpenApi]
impl OrderApi {
    /// Check stock before placing an order
    ///
    /// Answers 204 when the requested quantity can be served. Nothing is reserved.
    #[oai(path = "/orders/check-stock", method = "post", tag = "ApiTags::Orders")]
    async fn check_stock(
        &self,
        _auth: JwtBearer,
        body: Json<CheckStockRequest>,
    ) -> CheckStockResponse {
        match self.check_stock_use_case.execute(body.0.into()).await {
            Ok(()) => CheckStockResponse::NoContent,
            Err(err) => {
                let (status, json) = into_stock_error(err);
                match status.as_u16() {
                    400 => CheckStockResponse::BadRequest(json),
                    404 => CheckStockResponse::NotFound(json),
                    _ => CheckStockResponse::InternalError(json),
                }
            }
        }
    }
}

#[derive(poem_openapi::ApiResponse)]
pub enum CheckStockResponse {
    #[oai(status = 204)]
    NoContent,
    #[oai(status = 400)]
    BadRequest(Json<StockErrorResponse>),
    #[oai(status = 404)]
    NotFound(Json<StockErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<StockErrorResponse>),
}
