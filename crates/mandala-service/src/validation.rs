//! Bridges `validator` derive output into the API's field-error list.

use mandala_core::error::FieldError;
use validator::{Validate, ValidationErrors};

use crate::error::{ServiceError, ServiceResult};

/// ## Summary
/// Flattens `validator` output into sorted, de-duplicated field errors.
#[must_use]
pub fn field_errors(errors: &ValidationErrors) -> Vec<FieldError> {
    errors
        .field_errors()
        .into_iter()
        .flat_map(|(field, errs)| {
            let field = field.to_string();
            errs.iter().map(move |e| {
                let message = e
                    .message
                    .as_ref()
                    .map_or_else(|| format!("{field} is invalid"), ToString::to_string);
                FieldError::new(field.clone(), message)
            })
        })
        .collect()
}

/// ## Summary
/// Runs derive validation on `input`, then appends `extra` findings.
///
/// ## Errors
/// Returns [`ServiceError::Validation`] when any field is rejected.
pub fn validate_with<T: Validate>(input: &T, extra: Vec<FieldError>) -> ServiceResult<()> {
    let mut errors = match input.validate() {
        Ok(()) => Vec::new(),
        Err(e) => field_errors(&e),
    };
    errors.extend(extra);

    if errors.is_empty() {
        return Ok(());
    }

    errors.sort();
    errors.dedup();
    Err(ServiceError::Validation(errors))
}

/// ## Summary
/// Parses a path id. Malformed ids cannot name a stored row, so they map to
/// the same error as a missing row.
///
/// ## Errors
/// Returns the error produced by `not_found` when `raw` is not a UUID.
pub fn parse_id(raw: &str, not_found: impl FnOnce() -> ServiceError) -> ServiceResult<uuid::Uuid> {
    uuid::Uuid::parse_str(raw).map_err(|_err| not_found())
}

/// Trims an optional string in place.
pub(crate) fn trim(value: &mut Option<String>) {
    if let Some(v) = value {
        let trimmed = v.trim();
        if trimmed.len() != v.len() {
            *v = trimmed.to_string();
        }
    }
}

/// Rejects negative or non-finite prices.
pub(crate) fn check_price(price: Option<f64>, errors: &mut Vec<FieldError>) {
    if let Some(price) = price
        && (!price.is_finite() || price < 0.0)
    {
        errors.push(FieldError::new(
            "price",
            "Price must be a non-negative number",
        ));
    }
}
