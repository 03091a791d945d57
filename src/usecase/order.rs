use crate::error::StoreResult;
use crate::model::Order;
use crate::repository::OrderRepository;
use std::sync::Arc;

#[derive(Clone)]
pub struct OrderUsecase {
    repo: Arc<dyn OrderRepository>,
}

impl OrderUsecase {
    pub fn new(repo: Arc<dyn OrderRepository>) -> Self {
        Self { repo }
    }

    pub async fn get_all_orders(&self) -> StoreResult<Vec<Order>> {
        self.repo.find_all().await
    }
}
