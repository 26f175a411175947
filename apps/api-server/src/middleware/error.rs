//! Error translation - maps core errors onto the wire contract.

use actix_web::{HttpResponse, ResponseError, http::StatusCode};
use quill_core::error::{DomainError, RepoError};
use quill_shared::ErrorResponse;
use std::fmt;

/// Application-level error carrying the client-facing message.
#[derive(Debug)]
pub enum AppError {
    BadRequest(String),
    Conflict(String),
    NotFound(String),
    Internal(String),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::BadRequest(msg)
            | AppError::Conflict(msg)
            | AppError::NotFound(msg)
            | AppError::Internal(msg) => write!(f, "{}", msg),
        }
    }
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            // The wire contract reports duplicate userNames as 400.
            AppError::Conflict(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let status = self.status_code();
        let body = match self {
            AppError::Internal(detail) => {
                // Log the detail, never expose it.
                tracing::error!("Internal error: {}", detail);
                ErrorResponse::internal_error()
            }
            other => ErrorResponse::new(status.as_u16(), other.to_string()),
        };

        HttpResponse::build(status).json(body)
    }
}

impl From<DomainError> for AppError {
    fn from(err: DomainError) -> Self {
        let message = err.to_string();
        match err {
            DomainError::MissingField { .. }
            | DomainError::IdMismatch { .. }
            | DomainError::InvalidReference(_) => AppError::BadRequest(message),
            DomainError::Conflict(_) => AppError::Conflict(message),
            DomainError::NotFound { .. } => AppError::NotFound(message),
            DomainError::Internal(detail) => AppError::Internal(detail),
        }
    }
}

impl From<RepoError> for AppError {
    fn from(err: RepoError) -> Self {
        AppError::from(DomainError::from(err))
    }
}

/// Result type alias for handlers.
pub type AppResult<T> = Result<T, AppError>;
