//! Reference Data Handlers

use axum::{extract::State, Json};

use crate::application::dto::{DogStatusResponse, LeavingReasonResponse};
use crate::application::mapper;
use crate::shared::error::AppError;
use crate::startup::AppState;

/// List all dog statuses
pub async fn list_statuses(
    State(state): State<AppState>,
) -> Result<Json<Vec<DogStatusResponse>>, AppError> {
    let statuses = state.reference_service.list_statuses().await?;

    Ok(Json(
        statuses.into_iter().map(mapper::status_to_response).collect(),
    ))
}

/// List all leaving reasons
pub async fn list_leaving_reasons(
    State(state): State<AppState>,
) -> Result<Json<Vec<LeavingReasonResponse>>, AppError> {
    let reasons = state.reference_service.list_leaving_reasons().await?;

    Ok(Json(
        reasons.into_iter().map(mapper::reason_to_response).collect(),
    ))
}
