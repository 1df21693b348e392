//! Domain-level error types.

use thiserror::Error;
use uuid::Uuid;

/// Domain errors - business logic failures.
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Entity not found: {entity_type} with id {id}")]
    NotFound { entity_type: &'static str, id: Uuid },

    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

/// Store-level errors.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Store connection failed: {0}")]
    Connection(String),

    #[error("Store operation failed: {0}")]
    Query(String),

    #[error("Record not found")]
    NotFound,
}
