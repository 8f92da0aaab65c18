use std::sync::Arc;

use poem_openapi::{OpenApi, param::Path, payload::Json};
use uuid::Uuid;

use business::domain::coupon::use_cases::create::{CreateCouponParams, CreateCouponUseCase};
use business::domain::coupon::use_cases::delete::{DeleteCouponParams, DeleteCouponUseCase};
use business::domain::coupon::use_cases::update::{UpdateCouponParams, UpdateCouponUseCase};

use crate::api::coupon::dto::{CouponRequest, CouponResponse};
use crate::api::error::{ErrorResponse, IntoErrorResponse};
use crate::api::security::{Capability, JwtBearer};
use crate::api::tags::ApiTags;

pub struct CouponApi {
    create_use_case: Arc<dyn CreateCouponUseCase>,
    update_use_case: Arc<dyn UpdateCouponUseCase>,
    delete_use_case: Arc<dyn DeleteCouponUseCase>,
}

impl CouponApi {
    pub fn new(
        create_use_case: Arc<dyn CreateCouponUseCase>,
        update_use_case: Arc<dyn UpdateCouponUseCase>,
        delete_use_case: Arc<dyn DeleteCouponUseCase>,
    ) -> Self {
        Self {
            create_use_case,
            update_use_case,
            delete_use_case,
        }
    }
}

/// Coupon administration. Every endpoint needs an admin token.
#[OpenApi]
impl CouponApi {
    /// Create a coupon
    #[oai(path = "/coupons", method = "post", tag = "ApiTags::Coupons")]
    async fn create_coupon(
        &self,
        auth: JwtBearer,
        body: Json<CouponRequest>,
    ) -> CreateCouponResponse {
        if let Err(json) = auth.0.require(Capability::Admin) {
            return CreateCouponResponse::Forbidden(json);
        }

        let params = CreateCouponParams {
            code: body.0.code,
            discount_percent: body.0.discount_percent,
            product_id: body.0.product_id,
            valid_until: body.0.valid_until,
        };

        match self.create_use_case.execute(params).await {
            Ok(coupon) => CreateCouponResponse::Created(Json(coupon.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    400 => CreateCouponResponse::BadRequest(json),
                    404 => CreateCouponResponse::NotFound(json),
                    409 => CreateCouponResponse::Conflict(json),
                    _ => CreateCouponResponse::InternalError(json),
                }
            }
        }
    }

    /// Replace a coupon
    #[oai(path = "/coupons/:id", method = "put", tag = "ApiTags::Coupons")]
    async fn update_coupon(
        &self,
        auth: JwtBearer,
        id: Path<String>,
        body: Json<CouponRequest>,
    ) -> UpdateCouponResponse {
        if let Err(json) = auth.0.require(Capability::Admin) {
            return UpdateCouponResponse::Forbidden(json);
        }
        let Ok(uuid) = Uuid::parse_str(&id.0) else {
            return UpdateCouponResponse::BadRequest(ErrorResponse::invalid_id(
                "coupon.invalid_id",
            ));
        };

        let params = UpdateCouponParams {
            id: uuid,
            code: body.0.code,
            discount_percent: body.0.discount_percent,
            product_id: body.0.product_id,
            valid_until: body.0.valid_until,
        };

        match self.update_use_case.execute(params).await {
            Ok(coupon) => UpdateCouponResponse::Ok(Json(coupon.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    400 => UpdateCouponResponse::BadRequest(json),
                    404 => UpdateCouponResponse::NotFound(json),
                    409 => UpdateCouponResponse::Conflict(json),
                    _ => UpdateCouponResponse::InternalError(json),
                }
            }
        }
    }

    /// Delete a coupon
    #[oai(path = "/coupons/:id", method = "delete", tag = "ApiTags::Coupons")]
    async fn delete_coupon(&self, auth: JwtBearer, id: Path<String>) -> DeleteCouponResponse {
        if let Err(json) = auth.0.require(Capability::Admin) {
            return DeleteCouponResponse::Forbidden(json);
        }
        let Ok(uuid) = Uuid::parse_str(&id.0) else {
            return DeleteCouponResponse::BadRequest(ErrorResponse::invalid_id(
                "coupon.invalid_id",
            ));
        };

        match self
            .delete_use_case
            .execute(DeleteCouponParams { id: uuid })
            .await
        {
            Ok(()) => DeleteCouponResponse::NoContent,
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    404 => DeleteCouponResponse::NotFound(json),
                    _ => DeleteCouponResponse::InternalError(json),
                }
            }
        }
    }
}

#[derive(poem_openapi::ApiResponse)]
pub enum CreateCouponResponse {
    #[oai(status = 201)]
    Created(Json<CouponResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 403)]
    Forbidden(Json<ErrorResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 409)]
    Conflict(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum UpdateCouponResponse {
    #[oai(status = 200)]
    Ok(Json<CouponResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 403)]
    Forbidden(Json<ErrorResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 409)]
    Conflict(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum DeleteCouponResponse {
    #[oai(status = 204)]
    NoContent,
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 403)]
    Forbidden(Json<ErrorResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}
