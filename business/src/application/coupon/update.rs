use std::sync::Arc;

use async_trait::async_trait;

use crate::application::coupon::create::{ensure_product_exists, map_save_error};
use crate::domain::coupon::errors::CouponError;
use crate::domain::coupon::model::{Coupon, CouponProps};
use crate::domain::coupon::repository::CouponRepository;
use crate::domain::coupon::use_cases::update::{UpdateCouponParams, UpdateCouponUseCase};
use crate::domain::errors::RepositoryError;
use crate::domain::logger::Logger;
use crate::domain::product::repository::ProductRepository;

pub struct UpdateCouponUseCaseImpl {
    pub repository: Arc<dyn CouponRepository>,
    pub product_repository: Arc<dyn ProductRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl UpdateCouponUseCase for UpdateCouponUseCaseImpl {
    async fn execute(&self, params: UpdateCouponParams) -> Result<Coupon, CouponError> {
        self.logger
            .info(&format!("Updating coupon: {}", params.id));

        let existing = self
            .repository
            .get_by_id(params.id)
            .await
            .map_err(|e| match e {
                RepositoryError::NotFound => CouponError::NotFound,
                other => CouponError::Repository(other),
            })?;

        let updated = existing.replaced(CouponProps {
            code: params.code,
            discount_percent: params.discount_percent,
            product_id: params.product_id,
            valid_until: params.valid_until,
        })?;

        if updated.product_id != existing.product_id {
            ensure_product_exists(self.product_repository.as_ref(), updated.product_id).await?;
        }

        self.repository
            .save(&updated)
            .await
            .map_err(map_save_error)?;

        self.logger
            .info(&format!("Coupon updated: {}", updated.id));
        Ok(updated)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{MockCouponRepo, MockProductRepo, mock_logger};
    use chrono::Utc;
    use uuid::Uuid;

    fn stored_coupon(id: Uuid, product_id: Uuid) -> Coupon {
        Coupon::from_repository(
            id,
            "SPRING5".to_string(),
            5,
            product_id,
            None,
            Utc::now(),
            Utc::now(),
        )
    }

    #[tokio::test]
    async fn should_update_coupon_for_same_product_without_product_lookup() {
        let id = Uuid::new_v4();
        let product_id = Uuid::new_v4();
        let mut repo = MockCouponRepo::new();
        repo.expect_get_by_id()
            .returning(move |id| Ok(stored_coupon(id, product_id)));
        repo.expect_save().times(1).returning(|_| Ok(()));
        let mut product_repo = MockProductRepo::new();
        product_repo.expect_get_by_id().never();

        let use_case = UpdateCouponUseCaseImpl {
            repository: Arc::new(repo),
            product_repository: Arc::new(product_repo),
            logger: mock_logger(),
        };

        let coupon = use_case
            .execute(UpdateCouponParams {
                id,
                code: "SPRING25".to_string(),
                discount_percent: 25,
                product_id,
                valid_until: None,
            })
            .await
            .unwrap();

        assert_eq!(coupon.id, id);
        assert_eq!(coupon.code, "SPRING25");
        assert_eq!(coupon.discount_percent, 25);
    }

    #[tokio::test]
    async fn should_reject_move_to_missing_product() {
        let mut repo = MockCouponRepo::new();
        repo.expect_get_by_id()
            .returning(|id| Ok(stored_coupon(id, Uuid::new_v4())));
        repo.expect_save().never();
        let mut product_repo = MockProductRepo::new();
        product_repo
            .expect_get_by_id()
            .returning(|_| Err(RepositoryError::NotFound));

        let use_case = UpdateCouponUseCaseImpl {
            repository: Arc::new(repo),
            product_repository: Arc::new(product_repo),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(UpdateCouponParams {
                id: Uuid::new_v4(),
                code: "SPRING5".to_string(),
                discount_percent: 5,
                product_id: Uuid::new_v4(),
                valid_until: None,
            })
            .await;

        assert!(matches!(result.unwrap_err(), CouponError::ProductNotFound));
    }

    #[tokio::test]
    async fn should_return_not_found_when_coupon_missing() {
        let mut repo = MockCouponRepo::new();
        repo.expect_get_by_id()
            .returning(|_| Err(RepositoryError::NotFound));

        let use_case = UpdateCouponUseCaseImpl {
            repository: Arc::new(repo),
            product_repository: Arc::new(MockProductRepo::new()),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(UpdateCouponParams {
                id: Uuid::new_v4(),
                code: "SPRING5".to_string(),
                discount_percent: 5,
                product_id: Uuid::new_v4(),
                valid_until: None,
            })
            .await;

        assert!(matches!(result.unwrap_err(), CouponError::NotFound));
    }
}
