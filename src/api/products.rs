//! Product API handlers

use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use uuid::Uuid;

use crate::domain::{PaginationDto, ProductError};
use crate::infrastructure::AppState;
use crate::models::{CreateProductInput, Product, UpdateProductInput};

impl IntoResponse for ProductError {
    fn into_response(self) -> Response {
        let status = match &self {
            ProductError::NotFound(_) => StatusCode::NOT_FOUND,
            ProductError::Conflict(_) => StatusCode::BAD_REQUEST,
            ProductError::Internal => StatusCode::INTERNAL_SERVER_ERROR,
        };
        (status, Json(json!({ "error": self.to_string() }))).into_response()
    }
}

fn bad_request(msg: &str) -> Response {
    (StatusCode::BAD_REQUEST, Json(json!({ "error": msg }))).into_response()
}

fn check_numbers(price: Option<f64>, stock: Option<i32>) -> Result<(), &'static str> {
    if price.is_some_and(|p| !p.is_finite() || p < 0.0) {
        return Err("price must be a non-negative number");
    }
    if stock.is_some_and(|s| s < 0) {
        return Err("stock must be a non-negative integer");
    }
    Ok(())
}

/// Shape checks the service relies on callers to have done
pub fn validate_create(input: &CreateProductInput) -> Result<(), &'static str> {
    if input.title.trim().is_empty() {
        return Err("title must not be empty");
    }
    if input.slug.as_deref().is_some_and(|s| s.trim().is_empty()) {
        return Err("slug must not be empty");
    }
    check_numbers(input.price, input.stock)
}

pub fn validate_update(input: &UpdateProductInput) -> Result<(), &'static str> {
    if input.title.as_deref().is_some_and(|t| t.trim().is_empty()) {
        return Err("title must not be empty");
    }
    if input.slug.as_deref().is_some_and(|s| s.trim().is_empty()) {
        return Err("slug must not be empty");
    }
    check_numbers(input.price, input.stock)
}

#[utoipa::path(
    post,
    path = "/api/products",
    request_body = CreateProductInput,
    responses(
        (status = 201, description = "Product created", body = Product),
        (status = 400, description = "Invalid payload or duplicate slug")
    )
)]
pub async fn create_product(
    State(state): State<AppState>,
    Json(input): Json<CreateProductInput>,
) -> Response {
    if let Err(msg) = validate_create(&input) {
        return bad_request(msg);
    }

    match state.products.create(input).await {
        Ok(product) => (StatusCode::CREATED, Json(product)).into_response(),
        Err(e) => e.into_response(),
    }
}

#[utoipa::path(
    get,
    path = "/api/products",
    params(PaginationDto),
    responses(
        (status = 200, description = "One page of products", body = [Product])
    )
)]
pub async fn list_products(
    State(state): State<AppState>,
    Query(pagination): Query<PaginationDto>,
) -> Result<Json<Vec<Product>>, ProductError> {
    let products = state.products.find_all(pagination).await?;
    Ok(Json(products))
}

#[utoipa::path(
    get,
    path = "/api/products/{term}",
    params(("term" = String, Path, description = "Product id, title or slug")),
    responses(
        (status = 200, description = "Matching product", body = Product),
        (status = 404, description = "No product matches the term")
    )
)]
pub async fn get_product(
    State(state): State<AppState>,
    Path(term): Path<String>,
) -> Result<Json<Product>, ProductError> {
    let product = state.products.find_one(&term).await?;
    Ok(Json(product))
}

#[utoipa::path(
    patch,
    path = "/api/products/{id}",
    request_body = UpdateProductInput,
    params(("id" = Uuid, Path, description = "Product id")),
    responses(
        (status = 200, description = "Updated product", body = Product),
        (status = 400, description = "Invalid id, payload or duplicate slug"),
        (status = 404, description = "Product not found")
    )
)]
pub async fn update_product(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(changes): Json<UpdateProductInput>,
) -> Response {
    if let Err(msg) = validate_update(&changes) {
        return bad_request(msg);
    }

    match state.products.update(id, changes).await {
        Ok(product) => Json(product).into_response(),
        Err(e) => e.into_response(),
    }
}

#[utoipa::path(
    delete,
    path = "/api/products/{id}",
    params(("id" = Uuid, Path, description = "Product id")),
    responses(
        (status = 200, description = "Delete issued; affected may be 0")
    )
)]
pub async fn delete_product(State(state): State<AppState>, Path(id): Path<Uuid>) -> Response {
    match state.products.remove(id).await {
        Ok(outcome) => (StatusCode::OK, Json(outcome)).into_response(),
        Err(e) => e.into_response(),
    }
}
