use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::errors::RepositoryError;

use super::model::Coupon;

#[async_trait]
pub trait CouponRepository: Send + Sync {
    async fn get_by_id(&self, id: Uuid) -> Result<Coupon, RepositoryError>;
    async fn save(&self, coupon: &Coupon) -> Result<(), RepositoryError>;
    async fn delete(&self, id: Uuid) -> Result<(), RepositoryError>;
}
