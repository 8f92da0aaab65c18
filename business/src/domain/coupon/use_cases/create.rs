use async_trait::async_trait;
use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::domain::coupon::errors::CouponError;
use crate::domain::coupon::model::Coupon;

pub struct CreateCouponParams {
    pub code: String,
    pub discount_percent: u8,
    pub product_id: Uuid,
    pub valid_until: Option<DateTime<Utc>>,
}

#[async_trait]
pub trait CreateCouponUseCase: Send + Sync {
    async fn execute(&self, params: CreateCouponParams) -> Result<Coupon, CouponError>;
}
