//! Shared types for the Pulgax store
//!
//! Common types used by the server and client tooling: the unified error
//! system, wire-facing domain models, and small utility helpers.

pub mod error;
pub mod models;
pub mod util;

// Re-exports
pub use error::{ApiResponse, AppError, AppResult, ErrorCategory, ErrorCode};
pub use serde::{Deserialize, Serialize};
