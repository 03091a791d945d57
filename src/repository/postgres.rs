//! sqlx-backed repositories. Each method is a single statement; no transactions.

use super::{OrderRepository, ProductRepository};
use crate::error::{StoreError, StoreResult};
use crate::model::{Order, Product, ProductInput};
use async_trait::async_trait;
use sqlx::PgPool;

#[derive(Clone)]
pub struct PgProductRepository {
    pool: PgPool,
}

impl PgProductRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ProductRepository for PgProductRepository {
    async fn find_all(&self) -> StoreResult<Vec<Product>> {
        let sql = "SELECT id, name, price FROM products ORDER BY id";
        tracing::debug!(sql = %sql, "query");
        let rows = sqlx::query_as::<_, Product>(sql).fetch_all(&self.pool).await?;
        Ok(rows)
    }

    async fn find_by_id(&self, id: i64) -> StoreResult<Product> {
        let sql = "SELECT id, name, price FROM products WHERE id = $1";
        tracing::debug!(sql = %sql, id, "query");
        sqlx::query_as::<_, Product>(sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or(StoreError::NotFound)
    }

    async fn create(&self, input: &ProductInput) -> StoreResult<Product> {
        let sql = "INSERT INTO products (name, price) VALUES ($1, $2) RETURNING id, name, price";
        tracing::debug!(sql = %sql, name = %input.name, price = input.price, "query");
        let row = sqlx::query_as::<_, Product>(sql)
            .bind(&input.name)
            .bind(input.price)
            .fetch_one(&self.pool)
            .await?;
        Ok(row)
    }

    async fn update(&self, product: &Product) -> StoreResult<Product> {
        let sql =
            "UPDATE products SET name = $2, price = $3 WHERE id = $1 RETURNING id, name, price";
        tracing::debug!(sql = %sql, id = product.id, "query");
        sqlx::query_as::<_, Product>(sql)
            .bind(product.id)
            .bind(&product.name)
            .bind(product.price)
            .fetch_optional(&self.pool)
            .await?
            .ok_or(StoreError::NotFound)
    }

    async fn delete(&self, id: i64) -> StoreResult<()> {
        let sql = "DELETE FROM products WHERE id = $1";
        tracing::debug!(sql = %sql, id, "query");
        let done = sqlx::query(sql).bind(id).execute(&self.pool).await?;
        if done.rows_affected() == 0 {
            tracing::debug!(id, "delete matched no rows");
        }
        Ok(())
    }
}

#[derive(Clone)]
pub struct PgOrderRepository {
    pool: PgPool,
}

impl PgOrderRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl OrderRepository for PgOrderRepository {
    async fn find_all(&self) -> StoreResult<Vec<Order>> {
        let sql = "SELECT id, product_id, quantity, created_at FROM orders ORDER BY id";
        tracing::debug!(sql = %sql, "query");
        let rows = sqlx::query_as::<_, Order>(sql).fetch_all(&self.pool).await?;
        Ok(rows)
    }
}
