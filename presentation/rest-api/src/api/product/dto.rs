use std::str::FromStr;

use bigdecimal::BigDecimal;
use chrono::{DateTime, Utc};
use poem_openapi::Object;
use uuid::Uuid;

use business::domain::product::errors::ProductError;
use business::domain::product::model::{Product, ProductChanges};
use business::domain::product::value_objects::Price;

/// Prices travel as decimal strings so no precision is lost.
pub fn parse_price(raw: &str) -> Result<BigDecimal, ProductError> {
    Price::from_str(raw).map(Price::into_inner)
}

#[derive(Debug, Clone, Object)]
pub struct CreateProductRequest {
    /// Product name (cannot be empty)
    pub name: String,
    /// Unit price as a decimal string, e.g. "19.99"
    pub price: String,
    /// Units in stock
    pub stock: u32,
    /// Categories the product belongs to
    #[oai(default)]
    pub category_ids: Vec<Uuid>,
}

/// Full replacement of the editable fields (PUT)
#[derive(Debug, Clone, Object)]
pub struct UpdateProductRequest {
    pub name: String,
    pub price: String,
    pub stock: u32,
    pub category_ids: Vec<Uuid>,
}

impl UpdateProductRequest {
    pub fn into_changes(self) -> Result<ProductChanges, ProductError> {
        Ok(ProductChanges {
            name: Some(self.name),
            price: Some(parse_price(&self.price)?),
            stock: Some(self.stock),
            category_ids: Some(self.category_ids),
        })
    }
}

/// Any subset of the editable fields (PATCH)
#[derive(Debug, Clone, Object)]
pub struct PatchProductRequest {
    #[oai(skip_serializing_if_is_none)]
    pub name: Option<String>,
    #[oai(skip_serializing_if_is_none)]
    pub price: Option<String>,
    #[oai(skip_serializing_if_is_none)]
    pub stock: Option<u32>,
    #[oai(skip_serializing_if_is_none)]
    pub category_ids: Option<Vec<Uuid>>,
}

impl PatchProductRequest {
    pub fn into_changes(self) -> Result<ProductChanges, ProductError> {
        Ok(ProductChanges {
            name: self.name,
            price: self.price.as_deref().map(parse_price).transpose()?,
            stock: self.stock,
            category_ids: self.category_ids,
        })
    }
}

#[derive(Debug, Clone, Object)]
pub struct ProductResponse {
    pub id: Uuid,
    pub name: String,
    pub price: String,
    pub stock: u32,
    pub category_ids: Vec<Uuid>,
    pub created_by: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Product> for ProductResponse {
    fn from(product: Product) -> Self {
        Self {
            id: product.id,
            name: product.name,
            price: product.price.to_string(),
            stock: product.stock,
            category_ids: product.category_ids,
            created_by: product.created_by.to_string(),
            created_at: product.created_at,
            updated_at: product.updated_at,
        }
    }
}

#[derive(Debug, Clone, Object)]
pub struct ProductListResponse {
    pub products: Vec<ProductResponse>,
}

impl From<Vec<Product>> for ProductListResponse {
    fn from(products: Vec<Product>) -> Self {
        Self {
            products: products.into_iter().map(Into::into).collect(),
        }
    }
}
