use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

use business::domain::coupon::model::Coupon;
use business::domain::errors::RepositoryError;

#[derive(Debug, FromRow)]
pub struct CouponEntity {
    pub id: Uuid,
    pub code: String,
    pub discount_percent: i16,
    pub product_id: Uuid,
    pub valid_until: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl CouponEntity {
    pub fn into_domain(self) -> Result<Coupon, RepositoryError> {
        let discount_percent =
            u8::try_from(self.discount_percent).map_err(|_| RepositoryError::Persistence)?;

        Ok(Coupon::from_repository(
            self.id,
            self.code,
            discount_percent,
            self.product_id,
            self.valid_until,
            self.created_at,
            self.updated_at,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_reject_out_of_range_discount_row() {
        let entity = CouponEntity {
            id: Uuid::new_v4(),
            code: "BROKEN".to_string(),
            discount_percent: 300,
            product_id: Uuid::new_v4(),
            valid_until: None,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        };

        assert!(matches!(
            entity.into_domain(),
            Err(RepositoryError::Persistence)
        ));
    }
}
