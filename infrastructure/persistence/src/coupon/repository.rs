use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use business::domain::coupon::model::Coupon;
use business::domain::coupon::repository::CouponRepository;
use business::domain::errors::RepositoryError;

use super::entity::CouponEntity;
use crate::errors::map_sqlx_error;

pub struct CouponRepositoryPostgres {
    pool: PgPool,
}

impl CouponRepositoryPostgres {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CouponRepository for CouponRepositoryPostgres {
    async fn get_by_id(&self, id: Uuid) -> Result<Coupon, RepositoryError> {
        let entity = sqlx::query_as::<_, CouponEntity>(
            "SELECT id, code, discount_percent, product_id, valid_until, created_at, updated_at FROM coupons WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx_error)?
        .ok_or(RepositoryError::NotFound)?;

        entity.into_domain()
    }

    async fn save(&self, coupon: &Coupon) -> Result<(), RepositoryError> {
        sqlx::query(
            r#"INSERT INTO coupons (id, code, discount_percent, product_id, valid_until, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            ON CONFLICT (id) DO UPDATE SET
                code = EXCLUDED.code,
                discount_percent = EXCLUDED.discount_percent,
                product_id = EXCLUDED.product_id,
                valid_until = EXCLUDED.valid_until,
                updated_at = EXCLUDED.updated_at"#,
        )
        .bind(coupon.id)
        .bind(&coupon.code)
        .bind(i16::from(coupon.discount_percent))
        .bind(coupon.product_id)
        .bind(coupon.valid_until)
        .bind(coupon.created_at)
        .bind(coupon.updated_at)
        .execute(&self.pool)
        .await
        .map_err(map_sqlx_error)?;

        Ok(())
    }

    async fn delete(&self, id: Uuid) -> Result<(), RepositoryError> {
        sqlx::query("DELETE FROM coupons WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(map_sqlx_error)?;

        Ok(())
    }
}
