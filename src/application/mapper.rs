//! Conversions between transport DTOs and domain types.

use validator::Validate;

use crate::application::dto::{
    DogListQuery, DogRequest, DogResponse, DogStatusResponse, LeavingReasonResponse, PageResponse,
};
use crate::config::PaginationSettings;
use crate::domain::{
    Dog, DogDraft, DogFilter, DogSort, DogStatus, LeavingReason, Page, PageRequest,
};
use crate::shared::error::AppError;
use crate::shared::validation::validation_error;

/// Validate a request body and turn it into a draft.
pub fn request_to_draft(request: DogRequest) -> Result<DogDraft, AppError> {
    request.validate().map_err(validation_error)?;

    let DogRequest {
        name: Some(name),
        breed: Some(breed),
        supplier: Some(supplier),
        badge_id,
        gender: Some(gender),
        birth_date: Some(birth_date),
        date_acquired: Some(date_acquired),
        status_id: Some(status_id),
        leaving_date,
        leaving_reason_id,
        kennelling_characteristic,
    } = request
    else {
        return Err(AppError::BadRequest("Incomplete dog payload".into()));
    };

    Ok(DogDraft {
        name,
        breed,
        supplier,
        badge_id,
        gender,
        birth_date,
        date_acquired,
        status_id,
        leaving_date,
        leaving_reason_id,
        kennelling_characteristic,
    })
}

pub fn dog_to_response(dog: Dog) -> DogResponse {
    let (leaving_reason_id, leaving_reason_name) = match dog.leaving_reason {
        Some(reason) => (Some(reason.id), Some(reason.reason_name)),
        None => (None, None),
    };

    DogResponse {
        id: dog.id,
        name: dog.name,
        breed: dog.breed,
        supplier: dog.supplier,
        badge_id: dog.badge_id,
        gender: dog.gender,
        birth_date: dog.birth_date,
        date_acquired: dog.date_acquired,
        status_id: dog.status.id,
        status_name: dog.status.status_name,
        leaving_date: dog.leaving_date,
        leaving_reason_id,
        leaving_reason_name,
        kennelling_characteristic: dog.kennelling_characteristic,
    }
}

pub fn page_to_response<T, U>(page: Page<T>, f: impl FnMut(T) -> U) -> PageResponse<U> {
    let total_pages = page.total_pages();
    let page = page.map(f);
    let number_of_elements = page.content.len();

    PageResponse {
        page_number: page.request.page,
        size: page.request.size,
        offset: page.request.offset(),
        total_size: page.total_size,
        total_pages,
        number_of_elements,
        empty: number_of_elements == 0,
        content: page.content,
    }
}

pub fn status_to_response(status: DogStatus) -> DogStatusResponse {
    DogStatusResponse {
        id: status.id,
        status_name: status.status_name,
    }
}

pub fn reason_to_response(reason: LeavingReason) -> LeavingReasonResponse {
    LeavingReasonResponse {
        id: reason.id,
        reason_name: reason.reason_name,
    }
}

/// Split listing query parameters into filter, ordering and page.
///
/// A missing size falls back to the configured default; anything above
/// the configured maximum is capped.
pub fn query_to_criteria(
    query: DogListQuery,
    pagination: &PaginationSettings,
) -> Result<(DogFilter, DogSort, PageRequest), AppError> {
    query.validate().map_err(validation_error)?;

    let sort = match query.sort.as_deref().map(str::trim) {
        None | Some("") => DogSort::default(),
        Some(raw) => DogSort::parse(raw)
            .ok_or_else(|| AppError::BadRequest(format!("Invalid sort parameter: {raw}")))?,
    };

    let size = query
        .size
        .unwrap_or(pagination.default_size)
        .min(pagination.max_size);
    let page = PageRequest::new(query.page.unwrap_or(0), size);

    let filter = DogFilter::new(query.name, query.breed, query.supplier);

    Ok((filter, sort, page))
}
