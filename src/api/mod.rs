pub mod health;
pub mod products;

use axum::{
    Router,
    routing::{get, post},
};

use crate::infrastructure::AppState;

pub fn api_router(state: AppState) -> Router {
    Router::new()
        // Health check
        .route("/health", get(health::health_check))
        // Products
        .route(
            "/products",
            post(products::create_product).get(products::list_products),
        )
        // GET takes any term; PATCH and DELETE parse it as a UUID
        .route(
            "/products/:term",
            get(products::get_product)
                .patch(products::update_product)
                .delete(products::delete_product),
        )
        .with_state(state)
}
