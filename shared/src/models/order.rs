//! Order Model
//!
//! Orders are fully normalized at creation time: every nested block
//! (customer, address, payment, shipping, totals) is always present, so read
//! paths never have to fill in defaults. Orders are mutated only through the
//! status-transition and refund operations and are never deleted.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use validator::Validate;

/// Order lifecycle status
///
/// Happy path is `pending → confirmed → processing → shipped → delivered`.
/// `cancelled` and `refunded` are terminal; `delivered` accepts no further
/// status updates but may still be refunded.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum OrderStatus {
    Pending,
    Confirmed,
    Processing,
    Shipped,
    Delivered,
    Cancelled,
    Refunded,
}

impl OrderStatus {
    /// Wire name of the status
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Confirmed => "confirmed",
            Self::Processing => "processing",
            Self::Shipped => "shipped",
            Self::Delivered => "delivered",
            Self::Cancelled => "cancelled",
            Self::Refunded => "refunded",
        }
    }
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Payment state recorded on the order
///
/// This is a label, not a gateway integration; actual capture happens
/// outside this service.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum PaymentStatus {
    Pending,
    Paid,
    Refunded,
}

/// Customer block stored on the order
///
/// `id` is set when the order was placed by an authenticated customer;
/// guest checkouts carry only the inline contact fields.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CustomerInfo {
    pub id: Option<String>,
    pub name: String,
    pub email: String,
    pub phone: String,
}

/// Shipping destination
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ShippingAddress {
    pub street: String,
    pub city: String,
    pub postal_code: String,
    pub country: String,
}

/// Order line item with product snapshot
///
/// Prices and names are captured at creation time; later catalog edits do
/// not retroactively change stored orders.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct OrderItem {
    pub product_id: String,
    pub product_name_pt: String,
    pub product_name_en: String,
    pub quantity: i64,
    pub unit_price: f64,
    pub total_price: f64,
    pub selected_color: Option<String>,
    pub selected_size: Option<String>,
    /// Customization field name to submitted value (ordered for stable output)
    #[serde(default)]
    pub customizations: BTreeMap<String, String>,
}

/// Order totals; `total = subtotal + shipping` always holds
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct Totals {
    pub subtotal: f64,
    pub shipping: f64,
    pub total: f64,
}

/// Payment block
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PaymentInfo {
    pub method: String,
    pub status: PaymentStatus,
    pub transaction_id: Option<String>,
    pub paid_at: Option<String>,
}

/// Shipping block
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ShippingInfo {
    pub method: String,
    pub cost: f64,
    pub tracking_number: Option<String>,
}

/// Append-only audit entry; the last entry's status always equals the
/// order's current status
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct StatusHistoryEntry {
    pub status: OrderStatus,
    pub note: String,
    pub updated_at: String,
    pub updated_by: String,
}

/// Refund record, present if and only if the order is refunded
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RefundInfo {
    pub amount: f64,
    pub reason: String,
    pub method: String,
    pub processed_at: String,
    pub processed_by: String,
}

/// Order entity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Order {
    pub id: Option<String>,
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
    pub notes: String,
    /// Client-supplied creation token; a replay returns the stored order
    pub idempotency_key: Option<String>,
    pub created_at: String,
    pub updated_at: String,
}

// =============================================================================
// API Request Types
// =============================================================================

/// Customer contact fields submitted at checkout
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CustomerContact {
    #[validate(length(min = 1, message = "name must not be empty"))]
    pub name: String,
    #[validate(email(message = "invalid email address"))]
    pub email: String,
    pub phone: Option<String>,
}

/// Line item submitted at checkout
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderItemRequest {
    pub product_id: String,
    pub quantity: i64,
    pub selected_color: Option<String>,
    pub selected_size: Option<String>,
    #[serde(default)]
    pub customizations: BTreeMap<String, String>,
}

/// Shipping choice submitted at checkout
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShippingSelection {
    pub method: String,
    pub cost: f64,
}

/// Payment choice submitted at checkout
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaymentSelection {
    pub method: String,
}

/// Create order payload
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct OrderCreateRequest {
    #[validate(nested)]
    pub customer: CustomerContact,
    pub shipping_address: ShippingAddress,
    #[validate(length(min = 1, message = "order must contain at least one item"))]
    pub items: Vec<OrderItemRequest>,
    pub shipping: ShippingSelection,
    pub payment: PaymentSelection,
    /// Client-declared grand total, verified against the server-side
    /// recomputation before anything is persisted
    pub total_amount: f64,
    pub notes: Option<String>,
    pub idempotency_key: Option<String>,
}

/// Status update payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatusUpdateRequest {
    pub status: OrderStatus,
    pub note: Option<String>,
}

/// Refund payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RefundRequest {
    pub amount: f64,
    pub reason: String,
    pub method: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_wire_names() {
        assert_eq!(OrderStatus::Pending.as_str(), "pending");
        assert_eq!(OrderStatus::Refunded.as_str(), "refunded");
        assert_eq!(
            serde_json::to_string(&OrderStatus::Shipped).unwrap(),
            "\"shipped\""
        );
        let status: OrderStatus = serde_json::from_str("\"cancelled\"").unwrap();
        assert_eq!(status, OrderStatus::Cancelled);
    }

    #[test]
    fn test_customizations_serialize_in_stable_order() {
        let mut customizations = BTreeMap::new();
        customizations.insert("engraving".to_string(), "Ana".to_string());
        customizations.insert("color_note".to_string(), "matte".to_string());

        let item = OrderItem {
            product_id: "product:p1".to_string(),
            product_name_pt: "Vaso".to_string(),
            product_name_en: "Vase".to_string(),
            quantity: 1,
            unit_price: 25.99,
            total_price: 25.99,
            selected_color: None,
            selected_size: None,
            customizations,
        };

        let a = serde_json::to_string(&item).unwrap();
        let b = serde_json::to_string(&item).unwrap();
        assert_eq!(a, b);
        assert!(a.find("color_note").unwrap() < a.find("engraving").unwrap());
    }
}
