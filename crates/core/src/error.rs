//! Domain-level error type shared across crates.

use crate::types::DbId;
use crate::validation::ValidationErrors;

/// Errors produced by domain logic and repositories.
///
/// The API layer maps each variant to an HTTP status in its `AppError`.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    /// An entity lookup by ID found nothing.
    #[error("{entity} with id {id} not found")]
    NotFound { entity: &'static str, id: DbId },

    /// Input failed DTO validation. Carries every violation, not just the first.
    #[error("{0}")]
    Validation(ValidationErrors),

    /// The operation conflicts with existing state (e.g. duplicate RUT).
    #[error("{0}")]
    Conflict(String),

    /// Missing or invalid credentials.
    #[error("{0}")]
    Unauthorized(String),

    /// Authenticated but not allowed.
    #[error("{0}")]
    Forbidden(String),

    /// An unexpected internal failure.
    #[error("{0}")]
    Internal(String),
}

impl From<ValidationErrors> for CoreError {
    fn from(errors: ValidationErrors) -> Self {
        CoreError::Validation(errors)
    }
}
