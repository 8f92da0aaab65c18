use bigdecimal::BigDecimal;
use num_traits::Signed;
use serde::{Deserialize, Serialize};

use super::errors::ProductError;

/// Largest amount the `NUMERIC(12,2)` column holds is just below this.
const PRICE_LIMIT: i64 = 10_000_000_000;
const PRICE_MAX_SCALE: i64 = 2;

/// Unit price of a product. Never negative, at most two decimals, below 10^10.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Price(BigDecimal);

impl Price {
    pub fn new(amount: BigDecimal) -> Result<Self, ProductError> {
        if amount.is_negative() {
            return Err(ProductError::PriceNegative);
        }
        if amount >= BigDecimal::from(PRICE_LIMIT) {
            return Err(ProductError::PriceTooLarge);
        }
        let (_, scale) = amount.normalized().as_bigint_and_exponent();
        if scale > PRICE_MAX_SCALE {
            return Err(ProductError::PriceTooPrecise);
        }
        Ok(Self(amount))
    }

    pub fn amount(&self) -> &BigDecimal {
        &self.0
    }

    pub fn into_inner(self) -> BigDecimal {
        self.0
    }
}

impl std::fmt::Display for Price {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::str::FromStr for Price {
    type Err = ProductError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let amount = s
            .trim()
            .parse::<BigDecimal>()
            .map_err(|_| ProductError::PriceInvalid)?;
        Price::new(amount)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn should_accept_zero_and_positive_prices() {
        assert!(Price::from_str("0").is_ok());
        assert!(Price::from_str("19.99").is_ok());
    }

    #[test]
    fn should_reject_negative_price() {
        let result = Price::from_str("-0.01");
        assert!(matches!(result.unwrap_err(), ProductError::PriceNegative));
    }

    #[test]
    fn should_reject_unparseable_price() {
        let result = Price::from_str("twelve");
        assert!(matches!(result.unwrap_err(), ProductError::PriceInvalid));
    }

    #[test]
    fn should_reject_price_beyond_column_range() {
        assert!(Price::from_str("9999999999.99").is_ok());
        let result = Price::from_str("10000000000");
        assert!(matches!(result.unwrap_err(), ProductError::PriceTooLarge));
    }

    #[test]
    fn should_reject_more_than_two_decimals() {
        let result = Price::from_str("1.005");
        assert!(matches!(result.unwrap_err(), ProductError::PriceTooPrecise));
    }

    #[test]
    fn should_accept_trailing_zero_decimals() {
        assert!(Price::from_str("1.500").is_ok());
    }

    #[test]
    fn should_display_amount() {
        let price = Price::from_str("4.50").unwrap();
        assert_eq!(price.to_string(), "4.50");
    }
}
