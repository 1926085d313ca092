//! Account and authentication integration tests

mod common;

use axum::http::{Method, StatusCode};
use serde_json::json;

use common::{admin_token, send, test_app};

#[tokio::test]
async fn first_admin_registers_then_registration_closes() {
    let app = test_app().await;

    let (status, body) = send(
        &app,
        Method::POST,
        "/api/admin/register",
        None,
        Some(json!({"username": "admin", "password": "admin-password-1"})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["role"], "admin");
    assert!(body["token"].as_str().is_some());

    let (status, body) = send(
        &app,
        Method::POST,
        "/api/admin/register",
        None,
        Some(json!({"username": "intruder", "password": "intruder-pass-1"})),
    )
    .await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["code"], 3004);
}

#[tokio::test]
async fn admin_login_and_profile() {
    let app = test_app().await;
    admin_token(&app).await;

    let (status, body) = send(
        &app,
        Method::POST,
        "/api/admin/login",
        None,
        Some(json!({"username": "admin", "password": "admin-password-1"})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    let token = body["token"].as_str().unwrap().to_string();

    let (status, profile) = send(&app, Method::GET, "/api/admin/me", Some(&token), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(profile["username"], "admin");
}

#[tokio::test]
async fn wrong_password_is_invalid_credentials() {
    let app = test_app().await;
    admin_token(&app).await;

    let (status, body) = send(
        &app,
        Method::POST,
        "/api/admin/login",
        None,
        Some(json!({"username": "admin", "password": "not-the-password"})),
    )
    .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["code"], 1002);
}

#[tokio::test]
async fn customer_registration_login_and_profile_update() {
    let app = test_app().await;

    let (status, body) = send(
        &app,
        Method::POST,
        "/api/customers/register",
        None,
        Some(json!({"name": "Ana", "email": "ana@example.com", "password": "password-ana"})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["role"], "customer");
    let token = body["token"].as_str().unwrap().to_string();

    let (status, me) = send(&app, Method::GET, "/api/customers/me", Some(&token), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(me["email"], "ana@example.com");
    assert!(me.get("password_hash").is_none());

    let (status, me) = send(
        &app,
        Method::PUT,
        "/api/customers/me",
        Some(&token),
        Some(json!({"phone": "+351911111111"})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(me["phone"], "+351911111111");
    assert_eq!(me["name"], "Ana");
}

#[tokio::test]
async fn duplicate_email_is_rejected() {
    let app = test_app().await;

    let payload = json!({"name": "Ana", "email": "ana@example.com", "password": "password-ana"});
    let (status, _) = send(&app, Method::POST, "/api/customers/register", None, Some(payload.clone()))
        .await;
    assert_eq!(status, StatusCode::OK);

    let (status, body) = send(&app, Method::POST, "/api/customers/register", None, Some(payload))
        .await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["code"], 3002);
}

#[tokio::test]
async fn weak_registration_payload_fails_validation() {
    let app = test_app().await;

    let (status, body) = send(
        &app,
        Method::POST,
        "/api/customers/register",
        None,
        Some(json!({"name": "", "email": "not-an-email", "password": "short"})),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], 2);
    assert!(body["details"].is_object());
}

#[tokio::test]
async fn customer_token_cannot_use_admin_surface() {
    let app = test_app().await;
    admin_token(&app).await;

    let (_, body) = send(
        &app,
        Method::POST,
        "/api/customers/register",
        None,
        Some(json!({"name": "Ana", "email": "ana@example.com", "password": "password-ana"})),
    )
    .await;
    let customer_token = body["token"].as_str().unwrap().to_string();

    let (status, body) = send(&app, Method::GET, "/api/orders", Some(&customer_token), None).await;
    assert_eq!(status, StatusCode::FORBIDDEN);
    assert_eq!(body["code"], 2002);
}

#[tokio::test]
async fn garbage_token_is_rejected() {
    let app = test_app().await;

    let (status, body) = send(
        &app,
        Method::GET,
        "/api/customers/me",
        Some("definitely-not-a-jwt"),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["code"], 1004);
}
