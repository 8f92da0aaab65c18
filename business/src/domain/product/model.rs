use bigdecimal::BigDecimal;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::errors::ProductError;
use super::value_objects::Price;
use crate::domain::shared::value_objects::UserId;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: Uuid,
    pub name: String,
    pub price: Price,
    pub stock: u32,
    pub category_ids: Vec<Uuid>,
    pub created_by: UserId,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

pub struct NewProductProps {
    pub name: String,
    pub price: BigDecimal,
    pub stock: u32,
    pub category_ids: Vec<Uuid>,
    pub created_by: UserId,
}

/// Stock is stored in a signed 32-bit column.
pub const MAX_STOCK: u32 = i32::MAX as u32;

/// Field changes for an existing product. `None` keeps the current value.
#[derive(Debug, Default)]
pub struct ProductChanges {
    pub name: Option<String>,
    pub price: Option<BigDecimal>,
    pub stock: Option<u32>,
    pub category_ids: Option<Vec<Uuid>>,
}

impl Product {
    pub fn new(props: NewProductProps) -> Result<Self, ProductError> {
        if props.name.trim().is_empty() {
            return Err(ProductError::NameEmpty);
        }
        let price = Price::new(props.price)?;
        let stock = checked_stock(props.stock)?;

        let now = Utc::now();
        Ok(Self {
            id: Uuid::new_v4(),
            name: props.name,
            price,
            stock,
            category_ids: dedup_ids(props.category_ids),
            created_by: props.created_by,
            created_at: now,
            updated_at: now,
        })
    }

    /// Constructor for data already persisted in the repository (no validation).
    #[allow(clippy::too_many_arguments)]
    pub fn from_repository(
        id: Uuid,
        name: String,
        price: Price,
        stock: u32,
        category_ids: Vec<Uuid>,
        created_by: UserId,
        created_at: DateTime<Utc>,
        updated_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            name,
            price,
            stock,
            category_ids,
            created_by,
            created_at,
            updated_at,
        }
    }

    /// Returns a copy of the product with `changes` applied and `updated_at` bumped.
    pub fn with_changes(&self, changes: ProductChanges) -> Result<Self, ProductError> {
        let name = match changes.name {
            Some(name) if name.trim().is_empty() => return Err(ProductError::NameEmpty),
            Some(name) => name,
            None => self.name.clone(),
        };
        let price = match changes.price {
            Some(amount) => Price::new(amount)?,
            None => self.price.clone(),
        };

        Ok(Self {
            id: self.id,
            name,
            price,
            stock: checked_stock(changes.stock.unwrap_or(self.stock))?,
            category_ids: changes
                .category_ids
                .map(dedup_ids)
                .unwrap_or_else(|| self.category_ids.clone()),
            created_by: self.created_by.clone(),
            created_at: self.created_at,
            updated_at: Utc::now(),
        })
    }
}

fn checked_stock(stock: u32) -> Result<u32, ProductError> {
    if stock > MAX_STOCK {
        return Err(ProductError::StockTooLarge);
    }
    Ok(stock)
}

fn dedup_ids(ids: Vec<Uuid>) -> Vec<Uuid> {
    let mut unique = Vec::with_capacity(ids.len());
    for id in ids {
        if !unique.contains(&id) {
            unique.push(id);
        }
    }
    unique
}
