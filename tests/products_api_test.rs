use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode, header},
};
use product_catalog::api;
use product_catalog::db;
use product_catalog::infrastructure::AppState;
use serde_json::{Value, json};
use tower::util::ServiceExt; // for `oneshot`

// Helper to create a router over a fresh in-memory database
async fn setup_app() -> Router {
    let db = db::init_db("sqlite::memory:")
        .await
        .expect("Failed to init DB");
    api::api_router(AppState::new(db))
}

fn json_request(method: &str, uri: &str, payload: &Value) -> Request<Body> {
    Request::builder()
        .uri(uri)
        .method(method)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(serde_json::to_vec(payload).unwrap()))
        .unwrap()
}

fn empty_request(method: &str, uri: &str) -> Request<Body> {
    Request::builder()
        .uri(uri)
        .method(method)
        .body(Body::empty())
        .unwrap()
}

async fn body_json(response: axum::response::Response) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

async fn create(app: &Router, payload: Value) -> Value {
    let response = app
        .clone()
        .oneshot(json_request("POST", "/products", &payload))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);
    body_json(response).await
}

#[tokio::test]
async fn test_create_product_success() {
    let app = setup_app().await;

    let body = create(
        &app,
        json!({
            "title": "Women's Puffer",
            "price": 225.0,
            "stock": 3,
            "sizes": ["S", "M"],
            "gender": "women"
        }),
    )
    .await;

    assert_eq!(body["title"], "Women's Puffer");
    assert_eq!(body["slug"], "womens_puffer");
    assert!(body["id"].as_str().is_some_and(|id| !id.is_empty()));
}

#[tokio::test]
async fn test_create_product_invalid_input() {
    let app = setup_app().await;

    // Axum's Json extractor rejects malformed JSON
    let req = Request::builder()
        .uri("/products")
        .method("POST")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from("invalid json"))
        .unwrap();
    let response = app.clone().oneshot(req).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let response = app
        .oneshot(json_request("POST", "/products", &json!({ "title": "" })))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_create_duplicate_slug_is_bad_request() {
    let app = setup_app().await;
    create(&app, json!({ "title": "Tee", "slug": "tee" })).await;

    let response = app
        .oneshot(json_request(
            "POST",
            "/products",
            &json!({ "title": "Other Tee", "slug": "tee" }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = body_json(response).await;
    assert!(body["error"].as_str().is_some_and(|e| !e.is_empty()));
}

#[tokio::test]
async fn test_list_products_with_pagination() {
    let app = setup_app().await;
    for i in 0..3 {
        create(&app, json!({ "title": format!("Tee {}", i) })).await;
    }

    let response = app
        .clone()
        .oneshot(empty_request("GET", "/products?limit=2&offset=0"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await.as_array().unwrap().len(), 2);

    let response = app
        .oneshot(empty_request("GET", "/products"))
        .await
        .unwrap();
    assert_eq!(body_json(response).await.as_array().unwrap().len(), 3);
}

#[tokio::test]
async fn test_get_product_by_term() {
    let app = setup_app().await;
    let created = create(&app, json!({ "title": "Kids Tee", "slug": "kids_tee" })).await;
    let id = created["id"].as_str().unwrap().to_string();

    for term in [id.as_str(), "kids_tee", "KIDS%20TEE"] {
        let response = app
            .clone()
            .oneshot(empty_request("GET", &format!("/products/{}", term)))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK, "term {}", term);
        assert_eq!(body_json(response).await["id"], created["id"]);
    }

    let response = app
        .oneshot(empty_request("GET", "/products/no-such-term"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_update_product() {
    let app = setup_app().await;
    let created = create(&app, json!({ "title": "Tee", "price": 20.0, "stock": 4 })).await;
    let id = created["id"].as_str().unwrap();

    let response = app
        .clone()
        .oneshot(json_request(
            "PATCH",
            &format!("/products/{}", id),
            &json!({ "price": 25.0 }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    assert_eq!(body["price"], 25.0);
    assert_eq!(body["stock"], 4);
    assert_eq!(body["title"], "Tee");

    // Non-UUID ids are rejected before reaching the service
    let response = app
        .clone()
        .oneshot(json_request("PATCH", "/products/tee", &json!({ "price": 1.0 })))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let response = app
        .oneshot(json_request(
            "PATCH",
            &format!("/products/{}", uuid::Uuid::new_v4()),
            &json!({ "price": 1.0 }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_delete_product_idempotency() {
    let app = setup_app().await;
    let created = create(&app, json!({ "title": "Tee" })).await;
    let uri = format!("/products/{}", created["id"].as_str().unwrap());

    let response = app
        .clone()
        .oneshot(empty_request("DELETE", &uri))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["affected"], 1);

    // Deleting again still succeeds, with nothing affected
    let response = app
        .clone()
        .oneshot(empty_request("DELETE", &uri))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["affected"], 0);

    let response = app.oneshot(empty_request("GET", &uri)).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_health_check() {
    let app = setup_app().await;

    let response = app.oneshot(empty_request("GET", "/health")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    assert_eq!(body["database"], "ok");
    assert_eq!(body["service"], "product-catalog");
}
