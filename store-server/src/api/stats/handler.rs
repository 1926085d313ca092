//! Stats API Handlers

use axum::{extract::State, Json};

use crate::auth::CurrentAdmin;
use crate::core::ServerState;
use crate::db::repository::{
    CategoryRepository, ContactMessageRepository, OrderRepository, ProductRepository,
};
use crate::utils::AppResult;
use shared::models::StatsSnapshot;

/// GET /api/stats - back-office dashboard counters
pub async fn snapshot(
    State(state): State<ServerState>,
    _admin: CurrentAdmin,
) -> AppResult<Json<StatsSnapshot>> {
    let products = ProductRepository::new(state.db.clone());
    let categories = CategoryRepository::new(state.db.clone());
    let orders = OrderRepository::new(state.db.clone());
    let messages = ContactMessageRepository::new(state.db.clone());

    Ok(Json(StatsSnapshot {
        total_products: products.count().await?,
        total_categories: categories.count().await?,
        total_orders: orders.count().await?,
        pending_orders: orders.count_pending().await?,
        unread_messages: messages.count_unread().await?,
    }))
}
