//! HTTP handlers for products and orders.

pub mod order;
pub mod product;
pub use order::*;
pub use product::*;
