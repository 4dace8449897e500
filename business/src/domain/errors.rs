/// Repository errors for domain layer.
/// Use code-style identifiers for all error variants for i18n compatibility.
#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    #[error("repository.persistence")]
    Persistence,
    #[error("repository.database_error")]
    DatabaseError,
    #[error("repository.serialization")]
    Serialization,
}

impl RepositoryError {
    pub fn persistence() -> Self {
        RepositoryError::Persistence
    }
    pub fn database_error() -> Self {
        RepositoryError::DatabaseError
    }
    pub fn serialization() -> Self {
        RepositoryError::Serialization
    }
}

/// Errors raised by remote lookup services (stock, catalog).
#[derive(Debug, thiserror::Error)]
pub enum ServiceError {
    #[error("service.unavailable")]
    Unavailable,
    #[error("service.unexpected_status")]
    UnexpectedStatus(u16),
    #[error("service.invalid_response")]
    InvalidResponse,
}

impl ServiceError {
    pub fn unavailable() -> Self {
        ServiceError::Unavailable
    }
    pub fn unexpected_status(status: u16) -> Self {
        ServiceError::UnexpectedStatus(status)
    }
    pub fn invalid_response() -> Self {
        ServiceError::InvalidResponse
    }
}
