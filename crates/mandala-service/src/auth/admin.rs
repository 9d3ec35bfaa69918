use chrono::Utc;
use mandala_db::model::admin::NewAdmin;
use mandala_db::store::AdminStore;
use serde::{Deserialize, Serialize};
use validator::Validate;

use super::password::{hash_password, verify_password};
use super::token::{AuthenticatedAdmin, TokenKeys};
use crate::error::{ServiceError, ServiceResult};
use crate::validation::{trim, validate_with};

/// Login and registration payload.
#[derive(Debug, Default, Deserialize, Validate)]
pub struct Credentials {
    #[validate(
        required(message = "Email is required"),
        email(message = "Please enter a valid email")
    )]
    pub email: Option<String>,
    #[validate(
        required(message = "Password is required"),
        length(min = 1, message = "Password is required")
    )]
    pub password: Option<String>,
}

impl Credentials {
    #[must_use]
    pub fn new(email: &str, password: &str) -> Self {
        Self {
            email: Some(email.to_string()),
            password: Some(password.to_string()),
        }
    }

    /// Emails compare case-insensitively; passwords are taken verbatim.
    fn normalized(mut self) -> Self {
        trim(&mut self.email);
        self.email = self.email.map(|e| e.to_lowercase());
        self
    }

    fn into_parts(self) -> (String, String) {
        (
            self.email.unwrap_or_default(),
            self.password.unwrap_or_default(),
        )
    }
}

/// Issued on successful login or registration.
#[derive(Debug, Clone, Serialize)]
pub struct Session {
    pub token: String,
    pub admin: AuthenticatedAdmin,
}

/// Minimum length enforced when an admin account is created.
pub const MIN_PASSWORD_LEN: usize = 6;

/// ## Summary
/// Exchanges email and password for a session token.
///
/// ## Errors
/// Returns [`ServiceError::InvalidCredentials`] for an unknown email and for a
/// wrong password alike, [`ServiceError::Validation`] for a malformed payload.
#[tracing::instrument(skip(store, keys, credentials))]
pub async fn login<S>(store: &S, keys: &TokenKeys, credentials: Credentials) -> ServiceResult<Session>
where
    S: AdminStore + ?Sized,
{
    let credentials = credentials.normalized();
    validate_with(&credentials, Vec::new())?;
    let (email, password) = credentials.into_parts();

    let Some(admin) = store.find_admin_by_email(&email).await? else {
        tracing::debug!("Login for unknown email");
        return Err(ServiceError::InvalidCredentials);
    };

    verify_password(&password, &admin.password_hash)?;

    let token = keys.issue(admin.id, &admin.email)?;
    tracing::info!(admin_id = %admin.id, "Admin logged in");

    Ok(Session {
        token,
        admin: AuthenticatedAdmin {
            id: admin.id,
            email: admin.email,
        },
    })
}

/// ## Summary
/// Creates an admin account and signs it in.
///
/// ## Side Effects
/// Inserts an admin row holding an Argon2 hash of the password.
///
/// ## Errors
/// Returns [`ServiceError::BadRequest`] when the email is already registered,
/// [`ServiceError::Validation`] for a malformed payload or short password.
#[tracing::instrument(skip(store, keys, credentials))]
pub async fn register<S>(
    store: &S,
    keys: &TokenKeys,
    credentials: Credentials,
) -> ServiceResult<Session>
where
    S: AdminStore + ?Sized,
{
    let credentials = credentials.normalized();

    let mut extra = Vec::new();
    if let Some(password) = &credentials.password
        && !password.is_empty()
        && password.chars().count() < MIN_PASSWORD_LEN
    {
        extra.push(mandala_core::error::FieldError::new(
            "password",
            format!("Password must be at least {MIN_PASSWORD_LEN} characters"),
        ));
    }
    validate_with(&credentials, extra)?;
    let (email, password) = credentials.into_parts();

    if store.find_admin_by_email(&email).await?.is_some() {
        return Err(ServiceError::BadRequest("Admin already exists".to_string()));
    }

    let now = Utc::now();
    let admin = store
        .insert_admin(NewAdmin {
            id: uuid::Uuid::now_v7(),
            email,
            password_hash: hash_password(&password)?,
            created_at: now,
            updated_at: now,
        })
        .await
        .map_err(|err| match ServiceError::from(err) {
            ServiceError::Duplicate(_) => ServiceError::BadRequest("Admin already exists".to_string()),
            other => other,
        })?;

    tracing::info!(admin_id = %admin.id, "Admin registered");

    let token = keys.issue(admin.id, &admin.email)?;
    Ok(Session {
        token,
        admin: AuthenticatedAdmin {
            id: admin.id,
            email: admin.email,
        },
    })
}
