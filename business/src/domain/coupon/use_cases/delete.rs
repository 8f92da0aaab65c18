use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::coupon::errors::CouponError;

pub struct DeleteCouponParams {
    pub id: Uuid,
}

#[async_trait]
pub trait DeleteCouponUseCase: Send + Sync {
    async fn execute(&self, params: DeleteCouponParams) -> Result<(), CouponError>;
}
