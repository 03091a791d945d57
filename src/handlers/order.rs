use crate::error::AppError;
use crate::model::Order;
use crate::response::{self, ErrorBody};
use crate::state::AppState;
use axum::{extract::State, response::IntoResponse};

#[utoipa::path(
    get,
    path = "/orders",
    tag = "Orders",
    responses(
        (status = 200, description = "All orders", body = Vec<Order>),
        (status = 500, description = "Store failure", body = ErrorBody)
    )
)]
pub async fn list_orders(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let orders = state
        .orders
        .get_all_orders()
        .await
        .map_err(|e| AppError::internal("Failed to fetch orders", e))?;
    Ok(response::ok(orders))
}
