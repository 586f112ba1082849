//! Dog Handlers

use axum::{extract::State, http::StatusCode, Json};

use crate::application::dto::{DogListQuery, DogRequest, DogResponse, PageResponse};
use crate::application::mapper;
use crate::presentation::http::extractors::{ApiJson, ApiPath, ApiQuery};
use crate::shared::error::AppError;
use crate::startup::AppState;

fn parse_dog_id(raw: &str) -> Result<i64, AppError> {
    raw.parse()
        .map_err(|_| AppError::BadRequest(format!("Invalid dog ID: {raw}")))
}

/// Register a new dog
pub async fn create_dog(
    State(state): State<AppState>,
    ApiJson(body): ApiJson<DogRequest>,
) -> Result<(StatusCode, Json<DogResponse>), AppError> {
    let draft = mapper::request_to_draft(body)?;
    let dog = state.dog_service.create_dog(draft).await?;

    Ok((StatusCode::CREATED, Json(mapper::dog_to_response(dog))))
}

/// List or search dogs
pub async fn list_dogs(
    State(state): State<AppState>,
    ApiQuery(query): ApiQuery<DogListQuery>,
) -> Result<Json<PageResponse<DogResponse>>, AppError> {
    let (filter, sort, page) = mapper::query_to_criteria(query, &state.settings.pagination)?;
    let dogs = state.dog_service.list_dogs(filter, sort, page).await?;

    Ok(Json(mapper::page_to_response(dogs, mapper::dog_to_response)))
}

/// Get dog by ID
pub async fn get_dog(
    State(state): State<AppState>,
    ApiPath(dog_id): ApiPath<String>,
) -> Result<Json<DogResponse>, AppError> {
    let dog_id = parse_dog_id(&dog_id)?;
    let dog = state.dog_service.get_dog(dog_id).await?;

    Ok(Json(mapper::dog_to_response(dog)))
}

/// Replace a dog's details
pub async fn update_dog(
    State(state): State<AppState>,
    ApiPath(dog_id): ApiPath<String>,
    ApiJson(body): ApiJson<DogRequest>,
) -> Result<Json<DogResponse>, AppError> {
    let dog_id = parse_dog_id(&dog_id)?;
    let draft = mapper::request_to_draft(body)?;
    let dog = state.dog_service.update_dog(dog_id, draft).await?;

    Ok(Json(mapper::dog_to_response(dog)))
}

/// Soft-delete a dog
pub async fn delete_dog(
    State(state): State<AppState>,
    ApiPath(dog_id): ApiPath<String>,
) -> Result<StatusCode, AppError> {
    let dog_id = parse_dog_id(&dog_id)?;
    state.dog_service.delete_dog(dog_id).await?;

    Ok(StatusCode::NO_CONTENT)
}
