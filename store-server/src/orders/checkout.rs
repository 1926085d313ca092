//! Checkout
//!
//! Turns a create-order request into a fully normalized order document.
//! Every check happens before anything is written: product existence and
//! availability, per-item pricing, and the client-declared total against the
//! server-side recomputation. Nothing about a rejected order is persisted.

use std::collections::HashMap;

use crate::db::models::{OrderRecord, ProductRecord};
use crate::pricing;
use shared::error::{AppError, AppResult, ErrorCode};
use shared::models::{
    CustomerInfo, OrderCreateRequest, OrderItem, OrderStatus, PaymentInfo, PaymentStatus,
    ShippingInfo, StatusHistoryEntry,
};
use shared::util::{now_iso, order_number};

/// Actor recorded in history entries for system-driven changes
pub const SYSTEM_ACTOR: &str = "system";

/// Build the order document for a checkout request
///
/// `products` holds the records fetched for the requested line items;
/// a product missing from the slice is reported as not found. `customer_id`
/// links the order to an authenticated account when one was presented.
pub fn build_order(
    request: OrderCreateRequest,
    products: &[ProductRecord],
    customer_id: Option<String>,
) -> AppResult<OrderRecord> {
    let by_id = index_products(products);

    let mut items = Vec::with_capacity(request.items.len());
    for item_request in &request.items {
        let product = by_id.get(item_request.product_id.as_str()).ok_or_else(|| {
            AppError::with_message(ErrorCode::ProductNotFound, "Product not found")
                .with_detail("product_id", item_request.product_id.clone())
        })?;

        if !product.active {
            return Err(AppError::with_message(
                ErrorCode::ProductUnavailable,
                "Product is no longer available",
            )
            .with_detail("product_id", item_request.product_id.clone()));
        }

        let priced = pricing::price_item(product, item_request)
            .map_err(|e| e.into_app_error(&item_request.product_id))?;

        let product_id = product
            .id
            .as_ref()
            .map(|id| id.to_string())
            .unwrap_or_else(|| item_request.product_id.clone());

        items.push(OrderItem {
            product_id,
            product_name_pt: product.name_pt.clone(),
            product_name_en: product.name_en.clone(),
            quantity: item_request.quantity,
            unit_price: priced.unit_price,
            total_price: priced.total_price,
            selected_color: item_request.selected_color.clone(),
            selected_size: item_request.selected_size.clone(),
            customizations: item_request.customizations.clone(),
        });
    }

    let totals = pricing::compute_totals(&items, request.shipping.cost);
    if !pricing::amounts_match(request.total_amount, totals.total) {
        return Err(AppError::new(ErrorCode::TotalMismatch)
            .with_detail("expected", totals.total)
            .with_detail("received", request.total_amount));
    }

    let now = now_iso();
    Ok(OrderRecord {
        id: None,
        order_number: order_number(),
        customer: CustomerInfo {
            id: customer_id,
            name: request.customer.name,
            email: request.customer.email,
            phone: request.customer.phone.unwrap_or_default(),
        },
        shipping_address: request.shipping_address,
        items,
        totals,
        payment: PaymentInfo {
            method: request.payment.method,
            status: PaymentStatus::Pending,
            transaction_id: None,
            paid_at: None,
        },
        shipping: ShippingInfo {
            method: request.shipping.method,
            cost: totals.shipping,
            tracking_number: None,
        },
        status: OrderStatus::Pending,
        status_history: vec![StatusHistoryEntry {
            status: OrderStatus::Pending,
            note: "order created".to_string(),
            updated_at: now.clone(),
            updated_by: SYSTEM_ACTOR.to_string(),
        }],
        refund: None,
        notes: request.notes.unwrap_or_default(),
        idempotency_key: request.idempotency_key,
        created_at: now.clone(),
        updated_at: now,
    })
}

/// Index fetched products under both their full and bare id forms
fn index_products(products: &[ProductRecord]) -> HashMap<String, &ProductRecord> {
    let mut by_id = HashMap::with_capacity(products.len() * 2);
    for product in products {
        if let Some(id) = &product.id {
            by_id.insert(id.to_string(), product);
            by_id.insert(id.key().to_string(), product);
        }
    }
    by_id
}
