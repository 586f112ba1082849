//! Request DTOs
//!
//! Data structures for API request bodies and query strings, with their
//! validation rules written out as plain functions.

use chrono::NaiveDate;
use serde::Deserialize;
use validator::{Validate, ValidationErrors};

use crate::shared::validation::{field_error, require_present, require_text};

/// Create/replace dog request.
///
/// Every field is optional at the serde level so that a missing field is
/// reported as a validation error rather than a parse failure. `id`,
/// `statusName` and `leavingReasonName` sent by clients are ignored.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DogRequest {
    pub name: Option<String>,
    pub breed: Option<String>,
    pub supplier: Option<String>,
    pub badge_id: Option<String>,
    pub gender: Option<String>,
    pub birth_date: Option<NaiveDate>,
    pub date_acquired: Option<NaiveDate>,
    pub status_id: Option<i64>,
    pub leaving_date: Option<NaiveDate>,
    pub leaving_reason_id: Option<i64>,
    pub kennelling_characteristic: Option<String>,
}

impl Validate for DogRequest {
    fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();

        require_text(&mut errors, "name", self.name.as_deref(), "Name is required");
        require_text(&mut errors, "breed", self.breed.as_deref(), "Breed is required");
        require_text(&mut errors, "supplier", self.supplier.as_deref(), "Supplier is required");
        require_text(&mut errors, "gender", self.gender.as_deref(), "Gender is required");
        require_present(&mut errors, "birthDate", self.birth_date.as_ref(), "Birth date is required");
        require_present(
            &mut errors,
            "dateAcquired",
            self.date_acquired.as_ref(),
            "Date acquired is required",
        );
        require_present(&mut errors, "statusId", self.status_id.as_ref(), "Status is required");

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}

/// Dog listing query parameters
#[derive(Debug, Clone, Default, Deserialize)]
pub struct DogListQuery {
    pub name: Option<String>,
    pub breed: Option<String>,
    pub supplier: Option<String>,
    pub page: Option<u32>,
    pub size: Option<u32>,
    pub sort: Option<String>,
}

impl Validate for DogListQuery {
    fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();

        if self.size == Some(0) {
            errors.add("size", field_error("range", "Page size must be at least 1"));
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}
