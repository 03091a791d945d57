//! Product/order REST service: handler, usecase and repository layers over PostgreSQL.

pub mod config;
pub mod error;
pub mod handlers;
pub mod model;
pub mod openapi;
pub mod repository;
pub mod response;
pub mod routes;
pub mod state;
pub mod store;
pub mod usecase;

pub use config::{AppConfig, Storage};
pub use error::{AppError, ConfigError, StoreError};
pub use model::{Order, Product, ProductInput};
pub use routes::{app, common_routes, product_routes};
pub use state::AppState;
pub use store::{connect, ensure_database_exists, ensure_tables};
