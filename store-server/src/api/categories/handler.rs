//! Category API Handlers
//!
//! Reads are public; mutations require an admin token.

use axum::{
    extract::{Path, State},
    Json,
};

use crate::auth::CurrentAdmin;
use crate::core::ServerState;
use crate::db::repository::{CategoryRepository, RepoError};
use crate::utils::{validate_payload, AppError, AppResult, ErrorCode};
use shared::models::{Category, CategoryCreate, CategoryUpdate};

/// GET /api/categories - all categories
pub async fn list(State(state): State<ServerState>) -> AppResult<Json<Vec<Category>>> {
    let repo = CategoryRepository::new(state.db.clone());
    let categories = repo.find_all().await?;
    Ok(Json(categories.into_iter().map(|c| c.into()).collect()))
}

/// GET /api/categories/:id - one category
pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<Category>> {
    let repo = CategoryRepository::new(state.db.clone());
    let category = repo
        .find_by_id(&id)
        .await?
        .ok_or_else(|| AppError::new(ErrorCode::CategoryNotFound))?;
    Ok(Json(category.into()))
}

/// POST /api/categories - create a category
pub async fn create(
    State(state): State<ServerState>,
    _admin: CurrentAdmin,
    Json(payload): Json<CategoryCreate>,
) -> AppResult<Json<Category>> {
    validate_payload(&payload)?;

    let repo = CategoryRepository::new(state.db.clone());
    let category = repo.create(payload).await?;
    Ok(Json(category.into()))
}

/// PUT /api/categories/:id - update a category
pub async fn update(
    State(state): State<ServerState>,
    _admin: CurrentAdmin,
    Path(id): Path<String>,
    Json(payload): Json<CategoryUpdate>,
) -> AppResult<Json<Category>> {
    let repo = CategoryRepository::new(state.db.clone());
    let category = repo.update(&id, payload).await.map_err(not_found)?;
    Ok(Json(category.into()))
}

/// DELETE /api/categories/:id - delete a category with no products
pub async fn delete(
    State(state): State<ServerState>,
    _admin: CurrentAdmin,
    Path(id): Path<String>,
) -> AppResult<Json<bool>> {
    let repo = CategoryRepository::new(state.db.clone());
    let result = repo.delete(&id).await.map_err(|e| match e {
        RepoError::Validation(msg) => {
            AppError::with_message(ErrorCode::CategoryHasProducts, msg)
        }
        other => not_found(other),
    })?;
    Ok(Json(result))
}

/// Map a repository miss to the category-specific not-found code
fn not_found(err: RepoError) -> AppError {
    match err {
        RepoError::NotFound(msg) => AppError::with_message(ErrorCode::CategoryNotFound, msg),
        other => other.into(),
    }
}
