use chrono::Utc;
use mandala_db::model::contact::{ContactMessage, NewContactMessage};
use mandala_db::store::ContactStore;
use serde::Deserialize;
use validator::Validate;

use crate::error::{ServiceError, ServiceResult};
use crate::validation::{parse_id, trim, validate_with};

/// Public contact form payload.
#[derive(Debug, Default, Clone, Deserialize, Validate)]
pub struct ContactInput {
    #[validate(
        required(message = "Name is required"),
        length(min = 1, message = "Name is required")
    )]
    pub name: Option<String>,
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
    #[validate(
        required(message = "Message is required"),
        length(min = 1, message = "Message is required")
    )]
    pub message: Option<String>,
}

fn not_found() -> ServiceError {
    ServiceError::NotFound("Message not found".to_string())
}

/// ## Summary
/// Stores a contact form submission as unread.
///
/// ## Errors
/// Returns [`ServiceError::Validation`] naming each missing or malformed field.
#[tracing::instrument(skip(store, input))]
pub async fn submit<S>(store: &S, mut input: ContactInput) -> ServiceResult<ContactMessage>
where
    S: ContactStore + ?Sized,
{
    trim(&mut input.name);
    trim(&mut input.email);
    trim(&mut input.phone);
    trim(&mut input.message);
    validate_with(&input, Vec::new())?;

    let now = Utc::now();
    let message = store
        .insert_contact(NewContactMessage {
            id: uuid::Uuid::now_v7(),
            name: input.name.unwrap_or_default(),
            email: input.email.unwrap_or_default(),
            phone: input.phone.unwrap_or_default(),
            message: input.message.unwrap_or_default(),
            is_read: false,
            created_at: now,
            updated_at: now,
        })
        .await?;

    tracing::info!(id = %message.id, "Contact message received");
    Ok(message)
}

/// ## Summary
/// Lists every contact message, newest first.
///
/// ## Errors
/// Returns an error if the store query fails.
pub async fn list<S>(store: &S) -> ServiceResult<Vec<ContactMessage>>
where
    S: ContactStore + ?Sized,
{
    Ok(store.list_contacts().await?)
}

/// ## Errors
/// Returns [`ServiceError::NotFound`] for unknown or malformed ids.
#[tracing::instrument(skip(store))]
pub async fn mark_read<S>(store: &S, raw_id: &str) -> ServiceResult<ContactMessage>
where
    S: ContactStore + ?Sized,
{
    let id = parse_id(raw_id, not_found)?;
    store.mark_contact_read(id).await?.ok_or_else(not_found)
}

/// ## Errors
/// Returns [`ServiceError::NotFound`] for unknown or malformed ids.
#[tracing::instrument(skip(store))]
pub async fn delete<S>(store: &S, raw_id: &str) -> ServiceResult<()>
where
    S: ContactStore + ?Sized,
{
    let id = parse_id(raw_id, not_found)?;
    if store.delete_contact(id).await? {
        Ok(())
    } else {
        Err(not_found())
    }
}
