//! Custom Extractors
//!
//! Wrappers around axum's extractors whose rejections are reported as
//! `AppError`, so malformed input gets the same JSON error body as every
//! other failure.

use axum::extract::{FromRequest, FromRequestParts};

use crate::shared::error::AppError;

/// JSON request body
#[derive(Debug, FromRequest)]
#[from_request(via(axum::Json), rejection(AppError))]
pub struct ApiJson<T>(pub T);

/// Query string parameters
#[derive(Debug, FromRequestParts)]
#[from_request(via(axum::extract::Query), rejection(AppError))]
pub struct ApiQuery<T>(pub T);

/// Path parameters
#[derive(Debug, FromRequestParts)]
#[from_request(via(axum::extract::Path), rejection(AppError))]
pub struct ApiPath<T>(pub T);
