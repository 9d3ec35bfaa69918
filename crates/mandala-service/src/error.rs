use mandala_core::error::FieldError;
use mandala_db::error::DbError;
use thiserror::Error;

/// Service layer errors
#[derive(Error, Debug)]
pub enum ServiceError {
    #[error(transparent)]
    DatabaseError(DbError),

    #[error(transparent)]
    CoreError(#[from] mandala_core::error::CoreError),

    #[error("Validation failed: {}", render_fields(.0))]
    Validation(Vec<FieldError>),

    /// A unique field already holds the submitted value.
    #[error("{0} already exists")]
    Duplicate(&'static str),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Not authenticated: {0}")]
    NotAuthenticated(String),

    /// Unknown email or wrong password; deliberately indistinguishable.
    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("Forbidden: {0}")]
    Forbidden(String),

    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),
}

impl From<DbError> for ServiceError {
    fn from(err: DbError) -> Self {
        match err {
            DbError::UniqueViolation(field) => Self::Duplicate(field),
            other => Self::DatabaseError(other),
        }
    }
}

fn render_fields(fields: &[FieldError]) -> String {
    fields
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

pub type ServiceResult<T> = std::result::Result<T, ServiceError>;
