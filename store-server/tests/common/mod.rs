#![allow(dead_code)]

//! Shared harness for API integration tests
//!
//! Spins up the full router against an in-memory database and drives it
//! with `tower::ServiceExt::oneshot`, no sockets involved.

use std::sync::Arc;

use axum::body::{Body, Bytes};
use axum::http::{header, Method, Request, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use serde_json::{json, Value};
use tower::ServiceExt;

use store_server::auth::jwt::JwtConfig;
use store_server::{Config, JwtService, ServerState, StoreMode};

/// Build the API router backed by a fresh in-memory database
pub async fn test_app() -> Router {
    let mut config = Config::from_env();
    config.store_mode = StoreMode::Memory;
    config.jwt = JwtConfig {
        secret: "integration-test-secret-integration-test".to_string(),
        expiration_minutes: 60,
        issuer: "store-server".to_string(),
        audience: "store-clients".to_string(),
    };

    let db = store_server::db::connect(&config)
        .await
        .expect("Failed to open in-memory database");
    let jwt_service = Arc::new(JwtService::with_config(config.jwt.clone()));
    let state = ServerState::new(config, db, jwt_service);

    store_server::api::router().with_state(state)
}

/// Send one request and decode the JSON response body
pub async fn send(
    app: &Router,
    method: Method,
    uri: &str,
    token: Option<&str>,
    body: Option<Value>,
) -> (StatusCode, Value) {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {token}"));
    }

    let request = match body {
        Some(value) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(value.to_string())),
        None => builder.body(Body::empty()),
    }
    .expect("Failed to build request");

    let response = app
        .clone()
        .oneshot(request)
        .await
        .expect("Request failed");

    let status = response.status();
    let bytes = response
        .into_body()
        .collect()
        .await
        .expect("Failed to read body")
        .to_bytes();
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).expect("Response was not JSON")
    };

    (status, value)
}

/// GET a resource and return the raw response bytes, undecoded
pub async fn get_raw(app: &Router, uri: &str, token: Option<&str>) -> (StatusCode, Bytes) {
    let mut builder = Request::builder().method(Method::GET).uri(uri);
    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {token}"));
    }
    let request = builder.body(Body::empty()).expect("Failed to build request");

    let response = app
        .clone()
        .oneshot(request)
        .await
        .expect("Request failed");

    let status = response.status();
    let bytes = response
        .into_body()
        .collect()
        .await
        .expect("Failed to read body")
        .to_bytes();

    (status, bytes)
}

/// Register the first admin and return its bearer token
pub async fn admin_token(app: &Router) -> String {
    let (status, body) = send(
        app,
        Method::POST,
        "/api/admin/register",
        None,
        Some(json!({"username": "admin", "password": "admin-password-1"})),
    )
    .await;
    assert_eq!(status, StatusCode::OK, "admin registration failed: {body}");
    body["token"].as_str().expect("no token in response").to_string()
}

/// Create a product through the API and return its id
pub async fn seed_product(app: &Router, token: &str, payload: Value) -> String {
    let (status, body) = send(app, Method::POST, "/api/products", Some(token), Some(payload)).await;
    assert_eq!(status, StatusCode::OK, "product creation failed: {body}");
    body["id"].as_str().expect("product has no id").to_string()
}

/// Standard vase product used across order tests
pub fn vase_payload() -> Value {
    json!({
        "name_pt": "Vaso",
        "name_en": "Vase",
        "base_price": 25.99,
        "sizes": [
            {"name": "large", "price_adjustment": 10.0, "image_url": null}
        ],
        "colors": [
            {"name": "white", "hex_code": "#FFFFFF", "image_url": null}
        ],
        "customization_options": [
            {
                "name_pt": "gravura",
                "name_en": "engraving",
                "type": "text",
                "required": false,
                "price_modifier": 5.0,
                "max_length": 20
            }
        ]
    })
}

/// Checkout payload for two large vases plus standard shipping
pub fn order_payload(product_id: &str, total_amount: f64) -> Value {
    json!({
        "customer": {"name": "Ana", "email": "ana@example.com", "phone": "+351911111111"},
        "shipping_address": {
            "street": "Rua A 1",
            "city": "Lisboa",
            "postal_code": "1000-001",
            "country": "PT"
        },
        "items": [
            {
                "product_id": product_id,
                "quantity": 2,
                "selected_size": "large",
                "selected_color": "white"
            }
        ],
        "shipping": {"method": "standard", "cost": 4.99},
        "payment": {"method": "card"},
        "total_amount": total_amount
    })
}
