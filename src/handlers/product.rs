//! Product handlers: list, get, create, update, delete.

use crate::error::{AppError, StoreError};
use crate::model::{Product, ProductInput};
use crate::response::{self, ErrorBody, MessageBody};
use crate::state::AppState;
use axum::{
    body::Bytes,
    extract::{Path, State},
    response::IntoResponse,
};

const INVALID_ID: &str = "Invalid product ID";
const NOT_FOUND: &str = "Product not found";
const INVALID_BODY: &str = "Invalid request body";
const NAME_REQUIRED: &str = "Product name is required";

fn parse_id(id_str: &str) -> Result<i64, AppError> {
    id_str
        .parse()
        .map_err(|_| AppError::BadRequest(INVALID_ID.into()))
}

/// Strict decode; any syntax, type or unknown-field error is the same client error.
fn decode_input(body: &[u8]) -> Result<ProductInput, AppError> {
    serde_json::from_slice(body).map_err(|e| {
        tracing::debug!(error = %e, "rejecting product body");
        AppError::BadRequest(INVALID_BODY.into())
    })
}

#[utoipa::path(
    get,
    path = "/products",
    tag = "Products",
    responses(
        (status = 200, description = "All products", body = Vec<Product>),
        (status = 500, description = "Store failure", body = ErrorBody)
    )
)]
pub async fn list_products(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let products = state
        .products
        .get_all_products()
        .await
        .map_err(|e| AppError::internal("Failed to fetch products", e))?;
    Ok(response::ok(products))
}

#[utoipa::path(
    get,
    path = "/products/{id}",
    tag = "Products",
    params(("id" = i64, Path, description = "Product ID")),
    responses(
        (status = 200, description = "Product found", body = Product),
        (status = 400, description = "Non-numeric id", body = ErrorBody),
        (status = 404, description = "No such product", body = ErrorBody)
    )
)]
pub async fn get_product(
    State(state): State<AppState>,
    Path(id_str): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let id = parse_id(&id_str)?;
    let product = load(&state, id).await?;
    Ok(response::ok(product))
}

#[utoipa::path(
    post,
    path = "/products",
    tag = "Products",
    request_body = ProductInput,
    responses(
        (status = 201, description = "Product created", body = Product),
        (status = 400, description = "Malformed body or empty name", body = ErrorBody),
        (status = 500, description = "Store failure", body = ErrorBody)
    )
)]
pub async fn create_product(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<impl IntoResponse, AppError> {
    let input = decode_input(&body)?;
    if input.name.is_empty() {
        return Err(AppError::BadRequest(NAME_REQUIRED.into()));
    }
    let product = state
        .products
        .create_product(&input)
        .await
        .map_err(|e| AppError::internal("Failed to create product", e))?;
    tracing::info!(product_id = product.id, "product created");
    Ok(response::created(product))
}

#[utoipa::path(
    put,
    path = "/products/{id}",
    tag = "Products",
    params(("id" = i64, Path, description = "Product ID")),
    request_body = ProductInput,
    responses(
        (status = 200, description = "Product updated", body = Product),
        (status = 400, description = "Bad id or malformed body", body = ErrorBody),
        (status = 404, description = "No such product", body = ErrorBody),
        (status = 500, description = "Store failure", body = ErrorBody)
    )
)]
pub async fn update_product(
    State(state): State<AppState>,
    Path(id_str): Path<String>,
    body: Bytes,
) -> Result<impl IntoResponse, AppError> {
    let id = parse_id(&id_str)?;
    let mut product = load(&state, id).await?;
    let input = decode_input(&body)?;
    product.apply(input);
    let product = state
        .products
        .update_product(&product)
        .await
        .map_err(|e| AppError::internal("Failed to update product", e))?;
    Ok(response::ok(product))
}

#[utoipa::path(
    delete,
    path = "/products/{id}",
    tag = "Products",
    params(("id" = i64, Path, description = "Product ID")),
    responses(
        (status = 200, description = "Product deleted", body = MessageBody),
        (status = 400, description = "Non-numeric id", body = ErrorBody),
        (status = 500, description = "Store failure", body = ErrorBody)
    )
)]
pub async fn delete_product(
    State(state): State<AppState>,
    Path(id_str): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let id = parse_id(&id_str)?;
    state
        .products
        .delete_product(id)
        .await
        .map_err(|e| AppError::internal("Failed to delete product", e))?;
    Ok(response::message("Product deleted successfully"))
}

/// Any lookup failure reads as "not found" to the client.
async fn load(state: &AppState, id: i64) -> Result<Product, AppError> {
    state.products.get_product_by_id(id).await.map_err(|e| {
        if let StoreError::Db(ref err) = e {
            tracing::error!(error = %err, product_id = id, "product lookup failed");
        }
        AppError::NotFound(NOT_FOUND.into())
    })
}
