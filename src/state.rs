//! Shared application state for all routes. Built once at startup.

use crate::repository::{
    InMemoryOrderRepository, InMemoryProductRepository, OrderRepository, PgOrderRepository,
    PgProductRepository, ProductRepository,
};
use crate::usecase::{OrderUsecase, ProductUsecase};
use sqlx::PgPool;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub products: ProductUsecase,
    pub orders: OrderUsecase,
    /// Present when backed by PostgreSQL; used by the readiness check.
    pub pool: Option<PgPool>,
}

impl AppState {
    pub fn new(products: Arc<dyn ProductRepository>, orders: Arc<dyn OrderRepository>) -> Self {
        Self {
            products: ProductUsecase::new(products),
            orders: OrderUsecase::new(orders),
            pool: None,
        }
    }

    /// Wire PostgreSQL repositories over one pool.
    pub fn postgres(pool: PgPool) -> Self {
        let mut state = Self::new(
            Arc::new(PgProductRepository::new(pool.clone())),
            Arc::new(PgOrderRepository::new(pool.clone())),
        );
        state.pool = Some(pool);
        state
    }

    pub fn in_memory() -> Self {
        Self::new(
            Arc::new(InMemoryProductRepository::new()),
            Arc::new(InMemoryOrderRepository::new()),
        )
    }
}
