use std::sync::Arc;

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::coupon::errors::CouponError;
use crate::domain::coupon::model::{Coupon, CouponProps};
use crate::domain::coupon::repository::CouponRepository;
use crate::domain::coupon::use_cases::create::{CreateCouponParams, CreateCouponUseCase};
use crate::domain::errors::RepositoryError;
use crate::domain::logger::Logger;
use crate::domain::product::repository::ProductRepository;

pub struct CreateCouponUseCaseImpl {
    pub repository: Arc<dyn CouponRepository>,
    pub product_repository: Arc<dyn ProductRepository>,
    pub logger: Arc<dyn Logger>,
}

/// Coupons may only point at stored products.
pub(crate) async fn ensure_product_exists(
    repository: &dyn ProductRepository,
    product_id: Uuid,
) -> Result<(), CouponError> {
    repository
        .get_by_id(product_id)
        .await
        .map(|_| ())
        .map_err(|e| match e {
            RepositoryError::NotFound => CouponError::ProductNotFound,
            other => CouponError::Repository(other),
        })
}

pub(crate) fn map_save_error(e: RepositoryError) -> CouponError {
    match e {
        RepositoryError::Duplicated => CouponError::CodeTaken,
        other => CouponError::Repository(other),
    }
}

#[async_trait]
impl CreateCouponUseCase for CreateCouponUseCaseImpl {
    async fn execute(&self, params: CreateCouponParams) -> Result<Coupon, CouponError> {
        self.logger.info(&format!(
            "Creating coupon {} for product {}",
            params.code, params.product_id
        ));

        let coupon = Coupon::new(CouponProps {
            code: params.code,
            discount_percent: params.discount_percent,
            product_id: params.product_id,
            valid_until: params.valid_until,
        })?;

        ensure_product_exists(self.product_repository.as_ref(), coupon.product_id).await?;

        self.repository
            .save(&coupon)
            .await
            .map_err(map_save_error)?;

        self.logger
            .info(&format!("Coupon created with id: {}", coupon.id));
        Ok(coupon)
    }
}
