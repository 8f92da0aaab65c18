use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use business::domain::errors::RepositoryError;
use business::domain::product::model::Product;
use business::domain::product::repository::ProductRepository;

use super::entity::ProductEntity;
use crate::errors::map_sqlx_error;

/// Products joined with their category ids, in association order.
const SELECT_PRODUCTS: &str = r#"
SELECT p.id, p.name, p.price, p.stock, p.created_by, p.created_at, p.updated_at,
       COALESCE(
           ARRAY_AGG(pc.category_id ORDER BY pc.position) FILTER (WHERE pc.category_id IS NOT NULL),
           '{}'::uuid[]
       ) AS category_ids
FROM products p
LEFT JOIN product_categories pc ON pc.product_id = p.id
"#;

pub struct ProductRepositoryPostgres {
    pool: PgPool,
}

impl ProductRepositoryPostgres {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

fn into_domain_all(entities: Vec<ProductEntity>) -> Result<Vec<Product>, RepositoryError> {
    entities.into_iter().map(ProductEntity::into_domain).collect()
}

#[async_trait]
impl ProductRepository for ProductRepositoryPostgres {
    async fn get_all(&self) -> Result<Vec<Product>, RepositoryError> {
        let sql = format!("{SELECT_PRODUCTS} GROUP BY p.id ORDER BY p.created_at DESC");
        let entities = sqlx::query_as::<_, ProductEntity>(&sql)
            .fetch_all(&self.pool)
            .await
            .map_err(map_sqlx_error)?;

        into_domain_all(entities)
    }

    async fn get_by_id(&self, id: Uuid) -> Result<Product, RepositoryError> {
        let sql = format!("{SELECT_PRODUCTS} WHERE p.id = $1 GROUP BY p.id");
        let entity = sqlx::query_as::<_, ProductEntity>(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(map_sqlx_error)?
            .ok_or(RepositoryError::NotFound)?;

        entity.into_domain()
    }

    async fn get_by_category(&self, category_id: Uuid) -> Result<Vec<Product>, RepositoryError> {
        let sql = format!(
            "{SELECT_PRODUCTS} WHERE p.id IN (SELECT product_id FROM product_categories WHERE category_id = $1) GROUP BY p.id ORDER BY p.name"
        );
        let entities = sqlx::query_as::<_, ProductEntity>(&sql)
            .bind(category_id)
            .fetch_all(&self.pool)
            .await
            .map_err(map_sqlx_error)?;

        into_domain_all(entities)
    }

    async fn save(&self, product: &Product) -> Result<(), RepositoryError> {
        let stock = i32::try_from(product.stock).map_err(|_| RepositoryError::Persistence)?;
        let mut tx = self.pool.begin().await.map_err(map_sqlx_error)?;

        sqlx::query(
            r#"INSERT INTO products (id, name, price, stock, created_by, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            ON CONFLICT (id) DO UPDATE SET
                name = EXCLUDED.name,
                price = EXCLUDED.price,
                stock = EXCLUDED.stock,
                updated_at = EXCLUDED.updated_at"#,
        )
        .bind(product.id)
        .bind(&product.name)
        .bind(product.price.amount())
        .bind(stock)
        .bind(product.created_by.as_str())
        .bind(product.created_at)
        .bind(product.updated_at)
        .execute(&mut *tx)
        .await
        .map_err(map_sqlx_error)?;

        sqlx::query("DELETE FROM product_categories WHERE product_id = $1")
            .bind(product.id)
            .execute(&mut *tx)
            .await
            .map_err(map_sqlx_error)?;

        for (position, category_id) in product.category_ids.iter().enumerate() {
            let position = i32::try_from(position).map_err(|_| RepositoryError::Persistence)?;
            sqlx::query(
                "INSERT INTO product_categories (product_id, category_id, position) VALUES ($1, $2, $3)",
            )
            .bind(product.id)
            .bind(category_id)
            .bind(position)
            .execute(&mut *tx)
            .await
            .map_err(map_sqlx_error)?;
        }

        tx.commit().await.map_err(map_sqlx_error)?;
        Ok(())
    }

    async fn delete(&self, id: Uuid) -> Result<(), RepositoryError> {
        sqlx::query("DELETE FROM products WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(map_sqlx_error)?;

        Ok(())
    }
}
