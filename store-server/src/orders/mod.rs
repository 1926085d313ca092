//! Orders Module
//!
//! Domain logic for the order lifecycle:
//! - [`checkout`] builds and verifies new order documents
//! - [`transitions`] is the status state machine
//! - [`refund`] validates refund requests
//!
//! Persistence stays in `db::repository::OrderRepository`; everything here
//! is pure and unit-testable.

pub mod checkout;
pub mod refund;
pub mod transitions;

pub use checkout::{build_order, SYSTEM_ACTOR};
pub use refund::prepare_refund;
pub use transitions::{allowed_targets, check_transition, is_refundable, TransitionError};
