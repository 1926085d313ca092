//! Product API Handlers
//!
//! The public listing only ever shows active products; the back-office
//! listing under /all includes retired ones. Deleting a product retires it
//! instead of removing the row.

use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde::Deserialize;

use crate::auth::CurrentAdmin;
use crate::core::ServerState;
use crate::db::repository::{product::ProductFilter, ProductRepository, RepoError};
use crate::utils::{validate_payload, AppError, AppResult, ErrorCode};
use shared::models::{Product, ProductCreate, ProductUpdate};

/// Storefront listing query string
#[derive(Debug, Deserialize)]
pub struct ListQuery {
    pub category_id: Option<String>,
    pub featured: Option<bool>,
}

/// GET /api/products - active products, optionally filtered
pub async fn list(
    State(state): State<ServerState>,
    Query(query): Query<ListQuery>,
) -> AppResult<Json<Vec<Product>>> {
    let repo = ProductRepository::new(state.db.clone());
    let products = repo
        .find_active(ProductFilter {
            category_id: query.category_id,
            featured: query.featured,
        })
        .await?;
    Ok(Json(products.into_iter().map(|p| p.into()).collect()))
}

/// GET /api/products/all - every product including retired ones
pub async fn list_all(
    State(state): State<ServerState>,
    _admin: CurrentAdmin,
) -> AppResult<Json<Vec<Product>>> {
    let repo = ProductRepository::new(state.db.clone());
    let products = repo.find_all().await?;
    Ok(Json(products.into_iter().map(|p| p.into()).collect()))
}

/// GET /api/products/:id - one product
pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<Product>> {
    let repo = ProductRepository::new(state.db.clone());
    let product = repo
        .find_by_id(&id)
        .await?
        .ok_or_else(|| AppError::new(ErrorCode::ProductNotFound))?;
    Ok(Json(product.into()))
}

/// POST /api/products - create a product
pub async fn create(
    State(state): State<ServerState>,
    _admin: CurrentAdmin,
    Json(payload): Json<ProductCreate>,
) -> AppResult<Json<Product>> {
    validate_payload(&payload)?;

    let repo = ProductRepository::new(state.db.clone());
    let product = repo.create(payload).await?;
    Ok(Json(product.into()))
}

/// PUT /api/products/:id - update a product
pub async fn update(
    State(state): State<ServerState>,
    _admin: CurrentAdmin,
    Path(id): Path<String>,
    Json(payload): Json<ProductUpdate>,
) -> AppResult<Json<Product>> {
    let repo = ProductRepository::new(state.db.clone());
    let product = repo.update(&id, payload).await.map_err(not_found)?;
    Ok(Json(product.into()))
}

/// DELETE /api/products/:id - retire a product (soft delete)
pub async fn delete(
    State(state): State<ServerState>,
    _admin: CurrentAdmin,
    Path(id): Path<String>,
) -> AppResult<Json<Product>> {
    let repo = ProductRepository::new(state.db.clone());
    let product = repo.deactivate(&id).await.map_err(not_found)?;
    Ok(Json(product.into()))
}

/// Map a repository miss to the product-specific not-found code
fn not_found(err: RepoError) -> AppError {
    match err {
        RepoError::NotFound(msg) => AppError::with_message(ErrorCode::ProductNotFound, msg),
        other => other.into(),
    }
}
