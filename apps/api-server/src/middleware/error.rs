//! Error handling middleware - RFC 7807 compliant responses.

use actix_web::{HttpResponse, ResponseError, http::StatusCode};
use quill_shared::ErrorResponse;
use std::fmt;

/// Application-level error type that converts to RFC 7807 responses.
#[derive(Debug)]
pub enum AppError {
    NotFound(String),
    BadRequest(String),
    Internal(String),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::NotFound(msg) => write!(f, "Not found: {}", msg),
            AppError::BadRequest(msg) => write!(f, "Bad request: {}", msg),
            AppError::Internal(msg) => write!(f, "Internal error: {}", msg),
        }
    }
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let error = match self {
            AppError::NotFound(detail) => ErrorResponse::not_found(detail),
            AppError::BadRequest(detail) => ErrorResponse::bad_request(detail),
            AppError::Internal(detail) => {
                // Log internal errors
                tracing::error!("Internal error: {}", detail);
                ErrorResponse::internal_error()
            }
        };

        HttpResponse::build(self.status_code()).json(error)
    }
}

// Conversion from domain errors
impl From<quill_core::error::DomainError> for AppError {
    fn from(err: quill_core::error::DomainError) -> Self {
        match err {
            quill_core::error::DomainError::NotFound { entity_type, id } => {
                AppError::NotFound(format!("{} with id {} not found", entity_type, id))
            }
            quill_core::error::DomainError::Validation(msg) => AppError::BadRequest(msg),
            quill_core::error::DomainError::Internal(msg) => AppError::Internal(msg),
        }
    }
}

impl From<quill_core::error::StoreError> for AppError {
    fn from(err: quill_core::error::StoreError) -> Self {
        match err {
            quill_core::error::StoreError::NotFound => {
                AppError::NotFound("Resource not found".to_string())
            }
            quill_core::error::StoreError::Connection(msg) => {
                tracing::error!("Store connection error: {}", msg);
                AppError::Internal("Store error".to_string())
            }
            quill_core::error::StoreError::Query(msg) => {
                tracing::error!("Store query error: {}", msg);
                AppError::Internal("Store error".to_string())
            }
        }
    }
}

/// Result type alias for handlers.
pub type AppResult<T> = Result<T, AppError>;
