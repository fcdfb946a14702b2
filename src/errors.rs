use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use mongodb::error::{ErrorKind, WriteFailure};
use serde_json::json;

/// MongoDB server code for a unique index violation.
const DUPLICATE_KEY: i32 = 11000;

#[derive(Debug, Clone, PartialEq)]
pub enum ServiceError {
    NotFound(String),
    Forbidden,
    ValidationFailed(String),
    Conflict(String),
    Internal(String),
}

impl std::fmt::Display for ServiceError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ServiceError::NotFound(what) => write!(f, "{} not found", what),
            ServiceError::Forbidden => write!(f, "Forbidden"),
            ServiceError::ValidationFailed(err) => write!(f, "Validation failed: {}", err),
            ServiceError::Conflict(err) => write!(f, "Conflict: {}", err),
            ServiceError::Internal(err) => write!(f, "Internal error: {}", err),
        }
    }
}

impl std::error::Error for ServiceError {}

impl ResponseError for ServiceError {
    fn status_code(&self) -> StatusCode {
        match self {
            ServiceError::NotFound(_) => StatusCode::NOT_FOUND,
            ServiceError::Forbidden => StatusCode::FORBIDDEN,
            ServiceError::ValidationFailed(_) => StatusCode::BAD_REQUEST,
            ServiceError::Conflict(_) => StatusCode::CONFLICT,
            ServiceError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        // Storage details stay in the log.
        let message = match self {
            ServiceError::Internal(_) => "Internal server error".to_string(),
            other => other.to_string(),
        };
        HttpResponse::build(self.status_code()).json(json!({ "error": message }))
    }
}

fn is_duplicate_key(err: &mongodb::error::Error) -> bool {
    matches!(
        err.kind.as_ref(),
        ErrorKind::Write(WriteFailure::WriteError(write_error)) if write_error.code == DUPLICATE_KEY
    )
}

impl From<mongodb::error::Error> for ServiceError {
    fn from(err: mongodb::error::Error) -> Self {
        if is_duplicate_key(&err) {
            log::warn!("Duplicate key rejected by MongoDB: {}", err);
            return ServiceError::Conflict("Booking already exists".to_string());
        }
        log::error!("Database error: {:?}", err);
        ServiceError::Internal(err.to_string())
    }
}
