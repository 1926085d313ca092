//! Dashboard statistics

use serde::{Deserialize, Serialize};

/// Admin dashboard counters
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct StatsSnapshot {
    pub total_products: i64,
    pub total_categories: i64,
    pub total_orders: i64,
    pub pending_orders: i64,
    pub unread_messages: i64,
}
