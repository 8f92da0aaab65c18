use std::sync::LazyLock;

use chrono::{DateTime, Utc};
use regex::Regex;
use uuid::Uuid;

use super::errors::CouponError;

static CODE_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Z0-9][A-Z0-9_-]{2,31}$").expect("coupon code pattern is valid")
});
const MAX_DISCOUNT_PERCENT: u8 = 100;

/// A discount bound to exactly one product.
#[derive(Debug, Clone, PartialEq)]
pub struct Coupon {
    pub id: Uuid,
    pub code: String,
    pub discount_percent: u8,
    pub product_id: Uuid,
    pub valid_until: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

pub struct CouponProps {
    pub code: String,
    pub discount_percent: u8,
    pub product_id: Uuid,
    pub valid_until: Option<DateTime<Utc>>,
}

impl Coupon {
    pub fn new(props: CouponProps) -> Result<Self, CouponError> {
        let code = validate(&props)?;
        let now = Utc::now();
        Ok(Self {
            id: Uuid::new_v4(),
            code,
            discount_percent: props.discount_percent,
            product_id: props.product_id,
            valid_until: props.valid_until,
            created_at: now,
            updated_at: now,
        })
    }

    /// Constructor for data already persisted in the repository (no validation).
    pub fn from_repository(
        id: Uuid,
        code: String,
        discount_percent: u8,
        product_id: Uuid,
        valid_until: Option<DateTime<Utc>>,
        created_at: DateTime<Utc>,
        updated_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            code,
            discount_percent,
            product_id,
            valid_until,
            created_at,
            updated_at,
        }
    }

    /// Replaces every editable attribute, keeping identity and creation time.
    pub fn replaced(&self, props: CouponProps) -> Result<Self, CouponError> {
        let code = validate(&props)?;
        Ok(Self {
            id: self.id,
            code,
            discount_percent: props.discount_percent,
            product_id: props.product_id,
            valid_until: props.valid_until,
            created_at: self.created_at,
            updated_at: Utc::now(),
        })
    }

    pub fn is_expired_at(&self, at: DateTime<Utc>) -> bool {
        self.valid_until.is_some_and(|until| until < at)
    }
}

/// Codes are stored upper-cased; returns the normalized code.
fn validate(props: &CouponProps) -> Result<String, CouponError> {
    let code = props.code.trim().to_uppercase();
    if !CODE_PATTERN.is_match(&code) {
        return Err(CouponError::CodeInvalid);
    }

    if props.discount_percent == 0 || props.discount_percent > MAX_DISCOUNT_PERCENT {
        return Err(CouponError::DiscountOutOfRange);
    }

    Ok(code)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn props(code: &str, discount_percent: u8) -> CouponProps {
        CouponProps {
            code: code.to_string(),
            discount_percent,
            product_id: Uuid::new_v4(),
            valid_until: None,
        }
    }

    #[test]
    fn should_create_coupon_with_normalized_code() {
        let coupon = Coupon::new(props(" summer-10 ", 10)).unwrap();
        assert_eq!(coupon.code, "SUMMER-10");
    }

    #[test]
    fn should_reject_code_with_spaces_or_symbols() {
        assert!(matches!(
            Coupon::new(props("SUM MER", 10)).unwrap_err(),
            CouponError::CodeInvalid
        ));
        assert!(matches!(
            Coupon::new(props("SALE!", 10)).unwrap_err(),
            CouponError::CodeInvalid
        ));
    }

    #[test]
    fn should_bound_code_length_at_thirty_two() {
        assert!(Coupon::new(props(&"A".repeat(32), 10)).is_ok());
        assert!(matches!(
            Coupon::new(props(&"A".repeat(33), 10)).unwrap_err(),
            CouponError::CodeInvalid
        ));
    }

    #[test]
    fn should_reject_too_short_code() {
        let result = Coupon::new(props("AB", 10));
        assert!(matches!(result.unwrap_err(), CouponError::CodeInvalid));
    }

    #[test]
    fn should_reject_discount_outside_range() {
        assert!(matches!(
            Coupon::new(props("ZERO", 0)).unwrap_err(),
            CouponError::DiscountOutOfRange
        ));
        assert!(matches!(
            Coupon::new(props("HUGE", 101)).unwrap_err(),
            CouponError::DiscountOutOfRange
        ));
        assert!(Coupon::new(props("FREE", 100)).is_ok());
    }

    #[test]
    fn should_report_expiry_against_reference_time() {
        let now = Utc::now();
        let mut p = props("WEEKEND", 15);
        p.valid_until = Some(now - Duration::hours(1));
        let coupon = Coupon::new(p).unwrap();

        assert!(coupon.is_expired_at(now));
        assert!(!coupon.is_expired_at(now - Duration::hours(2)));
    }

    #[test]
    fn should_keep_identity_when_replaced() {
        let coupon = Coupon::new(props("SPRING", 5)).unwrap();

        let replaced = coupon.replaced(props("AUTUMN", 20)).unwrap();

        assert_eq!(replaced.id, coupon.id);
        assert_eq!(replaced.code, "AUTUMN");
        assert_eq!(replaced.discount_percent, 20);
    }
}
