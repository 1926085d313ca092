//! Customer API Handlers

use axum::{extract::State, Json};

use crate::auth::{hash_password, verify_password, CurrentCustomer, ROLE_CUSTOMER};
use crate::core::ServerState;
use crate::db::repository::{CustomerRepository, OrderRepository};
use crate::utils::{validate_payload, AppError, AppResult, ErrorCode};
use shared::models::{
    AuthResponse, Customer, CustomerLoginRequest, CustomerRegisterRequest, CustomerUpdateRequest,
    Order,
};

/// POST /api/customers/register - create a customer account
pub async fn register(
    State(state): State<ServerState>,
    Json(payload): Json<CustomerRegisterRequest>,
) -> AppResult<Json<AuthResponse>> {
    validate_payload(&payload)?;

    let repo = CustomerRepository::new(state.db.clone());
    if repo.find_by_email(&payload.email).await?.is_some() {
        return Err(AppError::with_message(
            ErrorCode::EmailAlreadyRegistered,
            "Email is already registered",
        ));
    }

    let password_hash = hash_password(&payload.password)?;
    let customer = repo
        .create(payload.name, payload.email, payload.phone, password_hash)
        .await?;

    issue_token(&state, &customer.id.map(|id| id.to_string()), &customer.name)
}

/// POST /api/customers/login - authenticate a customer
pub async fn login(
    State(state): State<ServerState>,
    Json(payload): Json<CustomerLoginRequest>,
) -> AppResult<Json<AuthResponse>> {
    let repo = CustomerRepository::new(state.db.clone());
    let customer = repo
        .find_by_email(&payload.email)
        .await?
        .ok_or_else(AppError::invalid_credentials)?;

    if !verify_password(&payload.password, &customer.password_hash)? {
        return Err(AppError::invalid_credentials());
    }

    issue_token(&state, &customer.id.map(|id| id.to_string()), &customer.name)
}

/// GET /api/customers/me - profile of the authenticated customer
pub async fn me(
    State(state): State<ServerState>,
    customer: CurrentCustomer,
) -> AppResult<Json<Customer>> {
    let repo = CustomerRepository::new(state.db.clone());
    let record = repo
        .find_by_id(&customer.id)
        .await?
        .ok_or_else(|| AppError::new(ErrorCode::CustomerNotFound))?;
    Ok(Json(record.into()))
}

/// PUT /api/customers/me - update name and phone
pub async fn update_me(
    State(state): State<ServerState>,
    customer: CurrentCustomer,
    Json(payload): Json<CustomerUpdateRequest>,
) -> AppResult<Json<Customer>> {
    let repo = CustomerRepository::new(state.db.clone());
    let record = repo.update(&customer.id, payload).await?;
    Ok(Json(record.into()))
}

/// GET /api/customers/me/orders - order history, newest first
pub async fn my_orders(
    State(state): State<ServerState>,
    customer: CurrentCustomer,
) -> AppResult<Json<Vec<Order>>> {
    let repo = OrderRepository::new(state.db.clone());
    let orders = repo.find_by_customer(&customer.id).await?;
    Ok(Json(orders.into_iter().map(|o| o.into()).collect()))
}

fn issue_token(
    state: &ServerState,
    id: &Option<String>,
    name: &str,
) -> AppResult<Json<AuthResponse>> {
    let subject = id
        .as_deref()
        .ok_or_else(|| AppError::internal("customer record has no id"))?;

    let token = state
        .get_jwt_service()
        .generate_token(subject, name, ROLE_CUSTOMER)
        .map_err(|e| AppError::internal(format!("token generation failed: {e}")))?;

    Ok(Json(AuthResponse {
        token,
        role: ROLE_CUSTOMER.to_string(),
        name: name.to_string(),
    }))
}
