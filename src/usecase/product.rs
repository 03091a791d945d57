//! Product usecase. Forwards to the repository unchanged.

use crate::error::StoreResult;
use crate::model::{Product, ProductInput};
use crate::repository::ProductRepository;
use std::sync::Arc;

#[derive(Clone)]
pub struct ProductUsecase {
    repo: Arc<dyn ProductRepository>,
}

impl ProductUsecase {
    pub fn new(repo: Arc<dyn ProductRepository>) -> Self {
        Self { repo }
    }

    pub async fn get_all_products(&self) -> StoreResult<Vec<Product>> {
        self.repo.find_all().await
    }

    pub async fn get_product_by_id(&self, id: i64) -> StoreResult<Product> {
        self.repo.find_by_id(id).await
    }

    pub async fn create_product(&self, input: &ProductInput) -> StoreResult<Product> {
        self.repo.create(input).await
    }

    pub async fn update_product(&self, product: &Product) -> StoreResult<Product> {
        self.repo.update(product).await
    }

    pub async fn delete_product(&self, id: i64) -> StoreResult<()> {
        self.repo.delete(id).await
    }
}
