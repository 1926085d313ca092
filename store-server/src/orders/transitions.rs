//! Order status state machine
//!
//! The transition table is the single source of truth for which status
//! changes an admin may apply. `cancelled` and `refunded` are dead ends;
//! `delivered` accepts no further status updates either, but the refund path
//! checks eligibility separately and still accepts delivered orders.

use shared::models::OrderStatus;
use thiserror::Error;

/// Why a requested transition was rejected
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum TransitionError {
    #[error("order is in a terminal status")]
    Terminal,

    #[error("transition is not allowed")]
    NotAllowed,
}

/// Statuses reachable from the given one via a status update
pub const fn allowed_targets(from: OrderStatus) -> &'static [OrderStatus] {
    use OrderStatus::*;
    match from {
        Pending => &[Confirmed, Cancelled, Refunded],
        Confirmed => &[Processing, Cancelled, Refunded],
        Processing => &[Shipped, Refunded],
        Shipped => &[Delivered, Refunded],
        Delivered | Cancelled | Refunded => &[],
    }
}

/// Validate a status update request
pub fn check_transition(from: OrderStatus, to: OrderStatus) -> Result<(), TransitionError> {
    let targets = allowed_targets(from);
    if targets.is_empty() {
        return Err(TransitionError::Terminal);
    }
    if targets.contains(&to) {
        Ok(())
    } else {
        Err(TransitionError::NotAllowed)
    }
}

/// Whether the order may still be refunded
///
/// Everything up to and including `delivered` qualifies; a cancelled order
/// was never charged and a refunded order is already settled.
pub const fn is_refundable(status: OrderStatus) -> bool {
    !matches!(status, OrderStatus::Cancelled | OrderStatus::Refunded)
}
