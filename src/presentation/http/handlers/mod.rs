//! HTTP Handlers
//!
//! Request handlers for all HTTP endpoints.

pub mod dog;
pub mod health;
pub mod reference;

use crate::shared::error::AppError;

/// Fallback for routes that do not exist
pub async fn not_found() -> AppError {
    AppError::NotFound("Resource not found".into())
}
