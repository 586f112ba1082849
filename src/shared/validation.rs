//! Validation Utilities

use validator::{ValidationError, ValidationErrors};

use super::error::{AppError, FieldError};

/// Convert validation errors to AppError
pub fn validation_error(errors: ValidationErrors) -> AppError {
    let mut field_errors: Vec<FieldError> = errors
        .field_errors()
        .iter()
        .flat_map(|(field, errs)| {
            errs.iter().map(move |e| FieldError {
                field: field.to_string(),
                message: e.message.clone().map(|m| m.to_string()).unwrap_or_default(),
            })
        })
        .collect();

    // field_errors() is backed by a HashMap
    field_errors.sort_by(|a, b| a.field.cmp(&b.field));

    let message = field_errors
        .first()
        .map(|e| format!("{}: {}", e.field, e.message))
        .unwrap_or_else(|| "Validation failed".into());

    AppError::Validation {
        message,
        errors: field_errors,
    }
}

/// Error with a code and a human readable message.
pub fn field_error(code: &'static str, message: &'static str) -> ValidationError {
    ValidationError::new(code).with_message(message.into())
}

/// Record a `required` error unless the string is present and not blank.
pub fn require_text(
    errors: &mut ValidationErrors,
    field: &'static str,
    value: Option<&str>,
    message: &'static str,
) {
    if value.map_or(true, |v| v.trim().is_empty()) {
        errors.add(field, field_error("required", message));
    }
}

/// Record a `required` error when the value is absent.
pub fn require_present<T>(
    errors: &mut ValidationErrors,
    field: &'static str,
    value: Option<&T>,
    message: &'static str,
) {
    if value.is_none() {
        errors.add(field, field_error("required", message));
    }
}
