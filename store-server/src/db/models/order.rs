//! Order persistence model
//!
//! Orders store every nested block inline (items, totals, payment, shipping,
//! status history). Only the record id differs from the wire model.

use serde::{Deserialize, Serialize};
use surrealdb::RecordId;

use super::serde_helpers;
use shared::models::{
    CustomerInfo, Order, OrderItem, OrderStatus, PaymentInfo, RefundInfo, ShippingAddress,
    ShippingInfo, StatusHistoryEntry, Totals,
};

/// Order row as stored in SurrealDB
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderRecord {
    #[serde(default, with = "serde_helpers::option_record_id")]
    pub id: Option<RecordId>,
    pub order_number: String,
    pub customer: CustomerInfo,
    pub shipping_address: ShippingAddress,
    pub items: Vec<OrderItem>,
    pub totals: Totals,
    pub payment: PaymentInfo,
    pub shipping: ShippingInfo,
    pub status: OrderStatus,
    pub status_history: Vec<StatusHistoryEntry>,
    pub refund: Option<RefundInfo>,
    #[serde(default)]
    pub notes: String,
    pub idempotency_key: Option<String>,
    pub created_at: String,
    pub updated_at: String,
}

impl From<OrderRecord> for Order {
    fn from(record: OrderRecord) -> Self {
        Self {
            id: record.id.map(|id| id.to_string()),
            order_number: record.order_number,
            customer: record.customer,
            shipping_address: record.shipping_address,
            items: record.items,
            totals: record.totals,
            payment: record.payment,
            shipping: record.shipping,
            status: record.status,
            status_history: record.status_history,
            refund: record.refund,
            notes: record.notes,
            idempotency_key: record.idempotency_key,
            created_at: record.created_at,
            updated_at: record.updated_at,
        }
    }
}
