//! Order API Handlers
//!
//! Checkout is open to guests and authenticated customers; everything else
//! on this surface is restricted. Single orders are visible to admins and to
//! the customer who placed them.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

use crate::auth::{CurrentAdmin, OptionalCustomer, Principal};
use crate::core::ServerState;
use crate::db::models::OrderRecord;
use crate::db::repository::{OrderRepository, ProductRepository};
use crate::orders::{self, TransitionError};
use crate::utils::{validate_payload, AppError, AppResult, ErrorCode};
use shared::models::{
    Order, OrderCreateRequest, RefundRequest, StatusHistoryEntry, StatusUpdateRequest,
};
use shared::util::now_iso;

/// POST /api/orders - checkout
///
/// Recomputes every price server-side and rejects the whole request on the
/// first problem; nothing is persisted for a rejected order. Creation
/// answers 201; a replayed idempotency key answers 200 with the order
/// stored for the first attempt.
pub async fn create(
    State(state): State<ServerState>,
    customer: OptionalCustomer,
    Json(payload): Json<OrderCreateRequest>,
) -> AppResult<(StatusCode, Json<Order>)> {
    validate_payload(&payload)?;

    let repo = OrderRepository::new(state.db.clone());

    if let Some(key) = payload.idempotency_key.as_deref() {
        if let Some(existing) = repo.find_by_idempotency_key(key).await? {
            return Ok((StatusCode::OK, Json(existing.into())));
        }
    }

    let product_repo = ProductRepository::new(state.db.clone());
    let ids: Vec<String> = payload
        .items
        .iter()
        .map(|item| item.product_id.clone())
        .collect();
    let products = product_repo.find_by_ids(&ids).await?;

    let customer_id = customer.0.map(|c| c.id);
    let order = orders::build_order(payload, &products, customer_id)?;

    let created = repo.create(order).await?;
    tracing::info!(order_number = %created.order_number, "order created");
    Ok((StatusCode::CREATED, Json(created.into())))
}

/// GET /api/orders - all orders, newest first
pub async fn list(
    State(state): State<ServerState>,
    _admin: CurrentAdmin,
) -> AppResult<Json<Vec<Order>>> {
    let repo = OrderRepository::new(state.db.clone());
    let orders = repo.find_all().await?;
    Ok(Json(orders.into_iter().map(|o| o.into()).collect()))
}

/// GET /api/orders/:id - one order, for admins or its owner
pub async fn get_by_id(
    State(state): State<ServerState>,
    principal: Principal,
    Path(id): Path<String>,
) -> AppResult<Json<Order>> {
    let repo = OrderRepository::new(state.db.clone());
    let order = find_order(&repo, &id).await?;

    if let Principal::Customer(customer) = &principal {
        if order.customer.id.as_deref() != Some(customer.id.as_str()) {
            return Err(AppError::permission_denied("Order belongs to another account"));
        }
    }

    Ok(Json(order.into()))
}

/// PUT /api/orders/:id/status - apply a status transition
pub async fn update_status(
    State(state): State<ServerState>,
    admin: CurrentAdmin,
    Path(id): Path<String>,
    Json(payload): Json<StatusUpdateRequest>,
) -> AppResult<Json<Order>> {
    let repo = OrderRepository::new(state.db.clone());
    let order = find_order(&repo, &id).await?;

    orders::check_transition(order.status, payload.status).map_err(|e| match e {
        TransitionError::Terminal => AppError::with_message(
            ErrorCode::OrderTerminal,
            "Order is in a terminal status",
        )
        .with_detail("status", order.status.as_str()),
        TransitionError::NotAllowed => AppError::new(ErrorCode::InvalidTransition)
            .with_detail("from", order.status.as_str())
            .with_detail("to", payload.status.as_str()),
    })?;

    let now = now_iso();
    let entry = StatusHistoryEntry {
        status: payload.status,
        note: payload
            .note
            .unwrap_or_else(|| format!("status changed to {}", payload.status)),
        updated_at: now.clone(),
        updated_by: admin.id.clone(),
    };

    let updated = repo.update_status(&id, payload.status, entry, now).await?;
    tracing::info!(
        order_number = %updated.order_number,
        status = %updated.status,
        "order status updated"
    );
    Ok(Json(updated.into()))
}

/// POST /api/orders/:id/refund - refund an order
pub async fn refund(
    State(state): State<ServerState>,
    admin: CurrentAdmin,
    Path(id): Path<String>,
    Json(payload): Json<RefundRequest>,
) -> AppResult<Json<Order>> {
    let repo = OrderRepository::new(state.db.clone());
    let order = find_order(&repo, &id).await?;

    let refund = orders::prepare_refund(&order, &payload, &admin.id)?;

    let now = now_iso();
    let entry = StatusHistoryEntry {
        status: shared::models::OrderStatus::Refunded,
        note: format!("refund processed: {}", refund.reason),
        updated_at: now.clone(),
        updated_by: admin.id.clone(),
    };

    let updated = repo.apply_refund(&id, refund, entry, now).await?;
    tracing::info!(order_number = %updated.order_number, "order refunded");
    Ok(Json(updated.into()))
}

async fn find_order(repo: &OrderRepository, id: &str) -> AppResult<OrderRecord> {
    repo.find_by_id(id)
        .await?
        .ok_or_else(|| AppError::new(ErrorCode::OrderNotFound))
}
