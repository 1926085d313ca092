//! Admin API Handlers
//!
//! Registration bootstraps the first admin account and is closed as soon as
//! one exists.

use axum::{extract::State, Json};

use crate::auth::{hash_password, verify_password, CurrentAdmin, ROLE_ADMIN};
use crate::core::ServerState;
use crate::db::repository::AdminRepository;
use crate::utils::{validate_payload, AppError, AppResult, ErrorCode};
use shared::models::{AdminLoginRequest, AdminProfile, AdminRegisterRequest, AuthResponse};

/// POST /api/admin/register - create the first admin account
pub async fn register(
    State(state): State<ServerState>,
    Json(payload): Json<AdminRegisterRequest>,
) -> AppResult<Json<AuthResponse>> {
    validate_payload(&payload)?;

    let repo = AdminRepository::new(state.db.clone());
    if repo.count().await? > 0 {
        return Err(AppError::with_message(
            ErrorCode::AdminAlreadyExists,
            "Admin registration is closed",
        ));
    }

    let password_hash = hash_password(&payload.password)?;
    let admin = repo.create(payload.username, password_hash).await?;

    issue_token(&state, &admin.id.map(|id| id.to_string()), &admin.username)
}

/// POST /api/admin/login - authenticate an admin
pub async fn login(
    State(state): State<ServerState>,
    Json(payload): Json<AdminLoginRequest>,
) -> AppResult<Json<AuthResponse>> {
    let repo = AdminRepository::new(state.db.clone());
    let admin = repo
        .find_by_username(&payload.username)
        .await?
        .ok_or_else(AppError::invalid_credentials)?;

    if !verify_password(&payload.password, &admin.password_hash)? {
        return Err(AppError::invalid_credentials());
    }

    issue_token(&state, &admin.id.map(|id| id.to_string()), &admin.username)
}

/// GET /api/admin/me - profile of the authenticated admin
pub async fn me(
    State(state): State<ServerState>,
    admin: CurrentAdmin,
) -> AppResult<Json<AdminProfile>> {
    let repo = AdminRepository::new(state.db.clone());
    let record = repo
        .find_by_username(&admin.username)
        .await?
        .ok_or_else(|| AppError::new(ErrorCode::AdminNotFound))?;
    Ok(Json(record.into()))
}

fn issue_token(
    state: &ServerState,
    id: &Option<String>,
    username: &str,
) -> AppResult<Json<AuthResponse>> {
    let subject = id
        .as_deref()
        .ok_or_else(|| AppError::internal("admin record has no id"))?;

    let token = state
        .get_jwt_service()
        .generate_token(subject, username, ROLE_ADMIN)
        .map_err(|e| AppError::internal(format!("token generation failed: {e}")))?;

    Ok(Json(AuthResponse {
        token,
        role: ROLE_ADMIN.to_string(),
        name: username.to_string(),
    }))
}
