//! OpenAPI document for the product and order endpoints.

use crate::handlers::{order, product};
use crate::model::{Order, Product, ProductInput};
use crate::response::{ErrorBody, MessageBody};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Product Service",
        description = "Product CRUD and order listing"
    ),
    paths(
        product::list_products,
        product::get_product,
        product::create_product,
        product::update_product,
        product::delete_product,
        order::list_orders,
    ),
    components(schemas(Product, ProductInput, Order, ErrorBody, MessageBody)),
    tags(
        (name = "Products", description = "Product management"),
        (name = "Orders", description = "Order listing")
    )
)]
pub struct ApiDoc;
