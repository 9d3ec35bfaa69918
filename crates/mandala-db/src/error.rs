use thiserror::Error;

/// Database layer errors
#[derive(Error, Debug)]
pub enum DbError {
    #[error("Database error: {0}")]
    DatabaseError(#[from] diesel::result::Error),

    #[error("Pool error: {0}")]
    PoolError(#[from] diesel_async::pooled_connection::bb8::RunError),

    #[error("Pool setup error: {0}")]
    PoolSetupError(#[from] diesel_async::pooled_connection::PoolError),

    /// A write collided with a UNIQUE column; carries the column name.
    #[error("Unique constraint violated on {0}")]
    UniqueViolation(&'static str),

    #[error("Migration error: {0}")]
    MigrationError(String),
}

pub type DbResult<T> = std::result::Result<T, DbError>;

/// ## Summary
/// Maps a unique-constraint failure on `field` to [`DbError::UniqueViolation`].
pub(crate) fn unique_on(field: &'static str) -> impl FnOnce(diesel::result::Error) -> DbError {
    use diesel::result::{DatabaseErrorKind, Error};

    move |err| match err {
        Error::DatabaseError(DatabaseErrorKind::UniqueViolation, _) => {
            DbError::UniqueViolation(field)
        }
        other => DbError::DatabaseError(other),
    }
}
