//! Usecases: the seam between handlers and repositories.

mod order;
mod product;
pub use order::OrderUsecase;
pub use product::ProductUsecase;
