//! API route modules
//!
//! # Structure
//!
//! - [`health`] - liveness probe
//! - [`admin`] - admin registration, login, profile
//! - [`customers`] - customer accounts and their order history
//! - [`categories`] - category management
//! - [`products`] - catalog browsing and management
//! - [`orders`] - checkout, status transitions, refunds
//! - [`contact`] - contact form inbox
//! - [`stats`] - back-office dashboard counters

pub mod admin;
pub mod categories;
pub mod contact;
pub mod customers;
pub mod health;
pub mod orders;
pub mod products;
pub mod stats;

use axum::Router;

use crate::core::ServerState;

/// Full API router, merged from every resource module
pub fn router() -> Router<ServerState> {
    Router::new()
        .merge(health::router())
        .merge(admin::router())
        .merge(customers::router())
        .merge(categories::router())
        .merge(products::router())
        .merge(orders::router())
        .merge(contact::router())
        .merge(stats::router())
}
