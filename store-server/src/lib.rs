//! Pulgax Store Server - order ledger and pricing engine for the 3D print store
//!
//! # Overview
//!
//! Long-running HTTP service backing the storefront and the back-office:
//!
//! - **Catalog** (`api/products`, `api/categories`): bilingual products with
//!   per-size and per-customization pricing
//! - **Checkout** (`orders`): server-side price recomputation, declared-total
//!   verification, idempotent creation
//! - **Order lifecycle** (`orders::transitions`): explicit status state
//!   machine with an append-only history and a single-refund rule
//! - **Accounts** (`auth`, `api/admin`, `api/customers`): JWT + Argon2
//!
//! # Module structure
//!
//! ```text
//! store-server/src/
//! ├── core/          # config, state, server startup
//! ├── auth/          # JWT, password hashing, extractors
//! ├── api/           # HTTP routes and handlers
//! ├── db/            # SurrealDB models and repositories
//! ├── orders/        # checkout, state machine, refund rules
//! ├── pricing/       # decimal money math, price calculator
//! └── utils/         # logging, validation helper
//! ```

pub mod api;
pub mod auth;
pub mod core;
pub mod db;
pub mod orders;
pub mod pricing;
pub mod utils;

// Re-export common types
pub use auth::{CurrentAdmin, CurrentCustomer, JwtService};
pub use crate::core::{Config, Server, ServerState, StoreMode};
pub use utils::{ApiResponse, AppError, AppResult, ErrorCode};
pub use utils::logger::init_logger;
