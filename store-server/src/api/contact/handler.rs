//! Contact API Handlers
//!
//! The form submission is public; the inbox is admin-only.

use axum::{
    extract::{Path, State},
    Json,
};

use crate::auth::CurrentAdmin;
use crate::core::ServerState;
use crate::db::repository::{ContactMessageRepository, RepoError};
use crate::utils::{validate_payload, AppError, AppResult, ErrorCode};
use shared::models::{ContactMessage, ContactMessageCreate};

/// POST /api/contact - submit a contact form message
pub async fn submit(
    State(state): State<ServerState>,
    Json(payload): Json<ContactMessageCreate>,
) -> AppResult<Json<ContactMessage>> {
    validate_payload(&payload)?;

    let repo = ContactMessageRepository::new(state.db.clone());
    let message = repo.create(payload).await?;
    Ok(Json(message.into()))
}

/// GET /api/contact - inbox, newest first
pub async fn list(
    State(state): State<ServerState>,
    _admin: CurrentAdmin,
) -> AppResult<Json<Vec<ContactMessage>>> {
    let repo = ContactMessageRepository::new(state.db.clone());
    let messages = repo.find_all().await?;
    Ok(Json(messages.into_iter().map(|m| m.into()).collect()))
}

/// PUT /api/contact/:id/read - mark a message as read
pub async fn mark_read(
    State(state): State<ServerState>,
    _admin: CurrentAdmin,
    Path(id): Path<String>,
) -> AppResult<Json<ContactMessage>> {
    let repo = ContactMessageRepository::new(state.db.clone());
    let message = repo.mark_read(&id).await.map_err(not_found)?;
    Ok(Json(message.into()))
}

/// DELETE /api/contact/:id - delete a message
pub async fn delete(
    State(state): State<ServerState>,
    _admin: CurrentAdmin,
    Path(id): Path<String>,
) -> AppResult<Json<bool>> {
    let repo = ContactMessageRepository::new(state.db.clone());
    let result = repo.delete(&id).await.map_err(not_found)?;
    Ok(Json(result))
}

/// Map a repository miss to the message-specific not-found code
fn not_found(err: RepoError) -> AppError {
    match err {
        RepoError::NotFound(msg) => AppError::with_message(ErrorCode::MessageNotFound, msg),
        other => other.into(),
    }
}
