//! Persistence seam: one trait per entity, with PostgreSQL and in-memory implementations.

mod memory;
mod postgres;

pub use memory::{InMemoryOrderRepository, InMemoryProductRepository};
pub use postgres::{PgOrderRepository, PgProductRepository};

use crate::error::StoreResult;
use crate::model::{Order, Product, ProductInput};
use async_trait::async_trait;

#[async_trait]
pub trait ProductRepository: Send + Sync {
    /// All products, ascending by id.
    async fn find_all(&self) -> StoreResult<Vec<Product>>;

    /// `StoreError::NotFound` when no row has this id.
    async fn find_by_id(&self, id: i64) -> StoreResult<Product>;

    /// Insert and return the row with its store-assigned id.
    async fn create(&self, input: &ProductInput) -> StoreResult<Product>;

    /// Replace name and price of the row with `product.id`.
    async fn update(&self, product: &Product) -> StoreResult<Product>;

    /// Delete by id. Deleting an absent id is not an error.
    async fn delete(&self, id: i64) -> StoreResult<()>;
}

#[async_trait]
pub trait OrderRepository: Send + Sync {
    async fn find_all(&self) -> StoreResult<Vec<Order>>;
}
