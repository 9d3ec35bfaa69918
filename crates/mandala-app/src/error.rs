use mandala_core::error::FieldError;
use mandala_service::error::ServiceError;
use salvo::http::StatusCode;
use salvo::writing::Json;
use salvo::{Depot, Request, Response, Writer, async_trait};
use serde::Serialize;
use thiserror::Error;

/// Application-level errors (HTTP layer)
#[derive(Error, Debug)]
pub enum AppError {
    #[error(transparent)]
    ServiceError(#[from] ServiceError),

    #[error(transparent)]
    CoreError(#[from] mandala_core::error::CoreError),

    #[error("Invalid request body: {0}")]
    InvalidBody(#[from] salvo::http::ParseError),
}

pub type AppResult<T> = std::result::Result<T, AppError>;

/// JSON error envelope sent to clients.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub errors: Option<Vec<FieldError>>,
}

impl ErrorBody {
    fn message(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            errors: None,
        }
    }
}

impl AppError {
    /// ## Summary
    /// Maps the error onto a status code and the body the client sees.
    /// Server-side failures collapse to a generic message.
    #[must_use]
    pub fn to_response(&self) -> (StatusCode, ErrorBody) {
        match self {
            Self::ServiceError(err) => service_response(err),
            Self::InvalidBody(_) => (
                StatusCode::BAD_REQUEST,
                ErrorBody::message("Invalid request body"),
            ),
            Self::CoreError(_) => server_error(),
        }
    }
}

fn service_response(err: &ServiceError) -> (StatusCode, ErrorBody) {
    match err {
        ServiceError::Validation(fields) => (
            StatusCode::BAD_REQUEST,
            ErrorBody {
                message: "Validation failed".to_string(),
                errors: Some(fields.clone()),
            },
        ),
        ServiceError::Duplicate(field) => {
            let message = format!("{field} already exists");
            (
                StatusCode::BAD_REQUEST,
                ErrorBody {
                    errors: Some(vec![FieldError::new(*field, message.clone())]),
                    message,
                },
            )
        }
        ServiceError::BadRequest(msg) => (StatusCode::BAD_REQUEST, ErrorBody::message(msg)),
        ServiceError::NotFound(msg) => (StatusCode::NOT_FOUND, ErrorBody::message(msg)),
        ServiceError::NotAuthenticated(msg) => (StatusCode::UNAUTHORIZED, ErrorBody::message(msg)),
        ServiceError::InvalidCredentials => (
            StatusCode::UNAUTHORIZED,
            ErrorBody::message("Invalid credentials"),
        ),
        ServiceError::Forbidden(msg) => (StatusCode::FORBIDDEN, ErrorBody::message(msg)),
        ServiceError::DatabaseError(_)
        | ServiceError::CoreError(_)
        | ServiceError::InvalidConfiguration(_) => server_error(),
    }
}

fn server_error() -> (StatusCode, ErrorBody) {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        ErrorBody::message("Server error"),
    )
}

#[async_trait]
impl Writer for AppError {
    async fn write(self, req: &mut Request, _depot: &mut Depot, res: &mut Response) {
        let (status, body) = self.to_response();

        if status.is_server_error() {
            tracing::error!(
                error = %self,
                method = %req.method(),
                path = %req.uri().path(),
                "Request failed"
            );
        } else {
            tracing::debug!(error = %self, status = %status, "Request rejected");
        }

        res.status_code(status);
        res.render(Json(body));
    }
}
