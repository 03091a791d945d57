//! In-memory repositories for `STORAGE=memory` runs and tests.

use super::{OrderRepository, ProductRepository};
use crate::error::{StoreError, StoreResult};
use crate::model::{Order, Product, ProductInput};
use async_trait::async_trait;
use std::collections::BTreeMap;
use std::sync::Arc;
use tokio::sync::RwLock;

#[derive(Debug)]
struct ProductTable {
    next_id: i64,
    rows: BTreeMap<i64, Product>,
}

impl Default for ProductTable {
    fn default() -> Self {
        Self {
            next_id: 1,
            rows: BTreeMap::new(),
        }
    }
}

/// Ids start at 1 and are never reused, like a `BIGSERIAL` column.
#[derive(Debug, Default, Clone)]
pub struct InMemoryProductRepository {
    table: Arc<RwLock<ProductTable>>,
}

impl InMemoryProductRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ProductRepository for InMemoryProductRepository {
    async fn find_all(&self) -> StoreResult<Vec<Product>> {
        let table = self.table.read().await;
        Ok(table.rows.values().cloned().collect())
    }

    async fn find_by_id(&self, id: i64) -> StoreResult<Product> {
        let table = self.table.read().await;
        table.rows.get(&id).cloned().ok_or(StoreError::NotFound)
    }

    async fn create(&self, input: &ProductInput) -> StoreResult<Product> {
        let mut table = self.table.write().await;
        let product = Product {
            id: table.next_id,
            name: input.name.clone(),
            price: input.price,
        };
        table.next_id += 1;
        table.rows.insert(product.id, product.clone());
        tracing::debug!(product_id = product.id, "created product");
        Ok(product)
    }

    async fn update(&self, product: &Product) -> StoreResult<Product> {
        let mut table = self.table.write().await;
        let row = table.rows.get_mut(&product.id).ok_or(StoreError::NotFound)?;
        row.name = product.name.clone();
        row.price = product.price;
        Ok(row.clone())
    }

    async fn delete(&self, id: i64) -> StoreResult<()> {
        let mut table = self.table.write().await;
        table.rows.remove(&id);
        Ok(())
    }
}

#[derive(Debug, Default, Clone)]
pub struct InMemoryOrderRepository {
    rows: Arc<RwLock<Vec<Order>>>,
}

impl InMemoryOrderRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed with fixed rows; orders have no write path.
    pub fn with_orders(mut orders: Vec<Order>) -> Self {
        orders.sort_by_key(|o| o.id);
        Self {
            rows: Arc::new(RwLock::new(orders)),
        }
    }
}

#[async_trait]
impl OrderRepository for InMemoryOrderRepository {
    async fn find_all(&self) -> StoreResult<Vec<Order>> {
        Ok(self.rows.read().await.clone())
    }
}
