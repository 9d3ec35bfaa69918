use chrono::Utc;
use mandala_core::error::FieldError;
use mandala_db::model::confirmation::{Confirmation, NewConfirmation};
use mandala_db::store::ConfirmationStore;
use serde::Deserialize;
use validator::Validate;

use crate::error::{ServiceError, ServiceResult};
use crate::validation::{parse_id, trim, validate_with};

/// Participant terms confirmation payload.
#[derive(Debug, Default, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct ConfirmationInput {
    #[validate(
        required(message = "Name is required"),
        length(min = 1, message = "Name is required")
    )]
    pub name: Option<String>,
    #[validate(
        required(message = "Organization is required"),
        length(min = 1, message = "Organization is required")
    )]
    pub organization: Option<String>,
    #[validate(
        required(message = "Position is required"),
        length(min = 1, message = "Position is required")
    )]
    pub position: Option<String>,
    #[validate(
        required(message = "Email is required"),
        email(message = "Please enter a valid email")
    )]
    pub email: Option<String>,
    #[validate(
        required(message = "Phone is required"),
        length(min = 1, message = "Phone is required")
    )]
    pub phone: Option<String>,
    pub accepted_terms: Option<bool>,
}

fn not_found() -> ServiceError {
    ServiceError::NotFound("Confirmation not found".to_string())
}

/// ## Summary
/// Records a participant's acceptance of the terms.
///
/// ## Errors
/// Returns [`ServiceError::Validation`] for missing fields or when
/// `acceptedTerms` is anything but `true`.
#[tracing::instrument(skip(store, input))]
pub async fn submit<S>(store: &S, mut input: ConfirmationInput) -> ServiceResult<Confirmation>
where
    S: ConfirmationStore + ?Sized,
{
    trim(&mut input.name);
    trim(&mut input.organization);
    trim(&mut input.position);
    trim(&mut input.email);
    trim(&mut input.phone);

    let mut extra = Vec::new();
    if input.accepted_terms != Some(true) {
        extra.push(FieldError::new(
            "acceptedTerms",
            "You must accept the terms and conditions",
        ));
    }
    validate_with(&input, extra)?;

    let now = Utc::now();
    let confirmation = store
        .insert_confirmation(NewConfirmation {
            id: uuid::Uuid::now_v7(),
            name: input.name.unwrap_or_default(),
            organization: input.organization.unwrap_or_default(),
            position: input.position.unwrap_or_default(),
            email: input.email.unwrap_or_default(),
            phone: input.phone.unwrap_or_default(),
            accepted_terms: true,
            created_at: now,
            updated_at: now,
        })
        .await?;

    tracing::info!(id = %confirmation.id, "Confirmation recorded");
    Ok(confirmation)
}

/// ## Errors
/// Returns an error if the store query fails.
pub async fn list<S>(store: &S) -> ServiceResult<Vec<Confirmation>>
where
    S: ConfirmationStore + ?Sized,
{
    Ok(store.list_confirmations().await?)
}

/// ## Errors
/// Returns [`ServiceError::NotFound`] for unknown or malformed ids.
pub async fn get<S>(store: &S, raw_id: &str) -> ServiceResult<Confirmation>
where
    S: ConfirmationStore + ?Sized,
{
    let id = parse_id(raw_id, not_found)?;
    store.find_confirmation_by_id(id).await?.ok_or_else(not_found)
}

/// ## Errors
/// Returns [`ServiceError::NotFound`] for unknown or malformed ids.
#[tracing::instrument(skip(store))]
pub async fn delete<S>(store: &S, raw_id: &str) -> ServiceResult<()>
where
    S: ConfirmationStore + ?Sized,
{
    let id = parse_id(raw_id, not_found)?;
    if store.delete_confirmation(id).await? {
        Ok(())
    } else {
        Err(not_found())
    }
}
