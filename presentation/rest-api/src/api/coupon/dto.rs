use chrono::{DateTime, Utc};
use poem_openapi::Object;
use uuid::Uuid;

use business::domain::coupon::model::Coupon;

/// Body for both creating and replacing a coupon
#[derive(Debug, Clone, Object)]
pub struct CouponRequest {
    /// 3 to 32 letters, digits, `_` or `-`; stored upper-cased
    pub code: String,
    /// Percentage off, 1 to 100
    pub discount_percent: u8,
    /// Product the coupon applies to
    pub product_id: Uuid,
    /// No expiry when absent
    #[oai(skip_serializing_if_is_none)]
    pub valid_until: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Object)]
pub struct CouponResponse {
    pub id: Uuid,
    pub code: String,
    pub discount_percent: u8,
    pub product_id: Uuid,
    #[oai(skip_serializing_if_is_none)]
    pub valid_until: Option<DateTime<Utc>>,
    /// Whether `valid_until` has passed at response time
    pub expired: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Coupon> for CouponResponse {
    fn from(coupon: Coupon) -> Self {
        Self {
            expired: coupon.is_expired_at(Utc::now()),
            id: coupon.id,
            code: coupon.code,
            discount_percent: coupon.discount_percent,
            product_id: coupon.product_id,
            valid_until: coupon.valid_until,
            created_at: coupon.created_at,
            updated_at: coupon.updated_at,
        }
    }
}
