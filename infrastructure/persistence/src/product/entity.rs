use bigdecimal::BigDecimal;
use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

use business::domain::errors::RepositoryError;
use business::domain::product::model::Product;
use business::domain::product::value_objects::Price;
use business::domain::shared::value_objects::UserId;

#[derive(Debug, FromRow)]
pub struct ProductEntity {
    pub id: Uuid,
    pub name: String,
    pub price: BigDecimal,
    pub stock: i32,
    pub category_ids: Vec<Uuid>,
    pub created_by: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl ProductEntity {
    /// Rows violating the table checks (negative stock or price) are rejected.
    pub fn into_domain(self) -> Result<Product, RepositoryError> {
        let stock = u32::try_from(self.stock).map_err(|_| RepositoryError::Persistence)?;
        let price = Price::new(self.price).map_err(|_| RepositoryError::Persistence)?;

        Ok(Product::from_repository(
            self.id,
            self.name,
            price,
            stock,
            self.category_ids,
            UserId::new(self.created_by),
            self.created_at,
            self.updated_at,
        ))
    }
}
