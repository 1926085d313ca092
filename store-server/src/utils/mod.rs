//! Utility helpers and error re-exports

pub mod logger;

// Re-export the shared error types under the server's own namespace so
// handlers can use `crate::utils::{AppError, AppResult}`
pub use shared::error::{ApiResponse, AppError, AppResult, ErrorCode};

use validator::Validate;

/// Run validator-derived checks and convert failures into a validation error
/// with per-field details
pub fn validate_payload<T: Validate>(payload: &T) -> AppResult<()> {
    payload.validate().map_err(|errors| {
        let mut err = AppError::validation("Request validation failed");
        for (field, field_errors) in errors.field_errors() {
            if let Some(first) = field_errors.first() {
                let message = first
                    .message
                    .as_ref()
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| first.code.to_string());
                err = err.with_detail(field.to_string(), message);
            }
        }
        err
    })
}
