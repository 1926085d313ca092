//! Pricing Module
//!
//! Decimal money math and the pure line-item price calculator. Everything
//! here is deterministic; database access stays in the caller.

pub mod calculator;
pub mod money;

pub use calculator::{price_item, PricedItem, PricingError};
pub use money::{amounts_match, MONEY_TOLERANCE};

use rust_decimal::Decimal;
use shared::models::{OrderItem, Totals};

/// Sum line totals and shipping into the order totals block
pub fn compute_totals(items: &[OrderItem], shipping_cost: f64) -> Totals {
    let subtotal: Decimal = items
        .iter()
        .map(|item| money::to_decimal(item.total_price))
        .sum();
    let shipping = money::to_decimal(shipping_cost);

    Totals {
        subtotal: money::to_f64(subtotal),
        shipping: money::to_f64(shipping),
        total: money::to_f64(subtotal + shipping),
    }
}
