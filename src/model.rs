//! Entity records and request payloads.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Product {
    /// Assigned by the store on insert.
    pub id: i64,
    pub name: String,
    pub price: f64,
}

impl Product {
    /// Overwrite the mutable fields. `id` stays as loaded.
    pub fn apply(&mut self, input: ProductInput) {
        self.name = input.name;
        self.price = input.price;
    }
}

/// Body of `POST /products` and `PUT /products/{id}`.
///
/// Missing `name`/`price` decode to their zero values so that an absent name
/// reaches the non-empty check. Any `id` in the body is ignored.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, ToSchema)]
#[serde(deny_unknown_fields)]
pub struct ProductInput {
    #[serde(default)]
    pub id: Option<i64>,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub price: f64,
}

impl ProductInput {
    pub fn new(name: impl Into<String>, price: f64) -> Self {
        Self {
            id: None,
            name: name.into(),
            price,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Order {
    pub id: i64,
    pub product_id: i64,
    pub quantity: i32,
    pub created_at: DateTime<Utc>,
}
