use crate::api;
use crate::domain::DeleteOutcome;
use crate::models::{CreateProductInput, Product, UpdateProductInput};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    paths(
        api::health::health_check,
        api::products::create_product,
        api::products::list_products,
        api::products::get_product,
        api::products::update_product,
        api::products::delete_product,
    ),
    components(schemas(Product, CreateProductInput, UpdateProductInput, DeleteOutcome)),
    tags(
        (name = "product-catalog", description = "Product catalog API")
    )
)]
pub struct ApiDoc;
