use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::coupon::errors::CouponError;
use crate::domain::coupon::repository::CouponRepository;
use crate::domain::coupon::use_cases::delete::{DeleteCouponParams, DeleteCouponUseCase};
use crate::domain::errors::RepositoryError;
use crate::domain::logger::Logger;

pub struct DeleteCouponUseCaseImpl {
    pub repository: Arc<dyn CouponRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl DeleteCouponUseCase for DeleteCouponUseCaseImpl {
    async fn execute(&self, params: DeleteCouponParams) -> Result<(), CouponError> {
        self.logger
            .info(&format!("Deleting coupon: {}", params.id));

        self.repository
            .get_by_id(params.id)
            .await
            .map_err(|e| match e {
                RepositoryError::NotFound => CouponError::NotFound,
                other => CouponError::Repository(other),
            })?;

        self.repository.delete(params.id).await?;

        self.logger
            .info(&format!("Coupon deleted: {}", params.id));
        Ok(())
    }
}
