use sea_orm::DbErr;
use thiserror::Error;

/// Tagged failure type for the service layer.
///
/// Each variant maps to a distinct HTTP status in the server crate, so a
/// missing row is never reported as a server fault.
#[derive(Error, Debug)]
pub enum ServiceError {
    #[error("{0}")]
    NotFound(String),

    #[error("{0}")]
    Validation(String),

    #[error("{0}")]
    Conflict(String),

    #[error(transparent)]
    Database(#[from] DbErr),

    #[error("failed to serialize stored json")]
    Serialization(#[from] serde_json::Error),
}

impl ServiceError {
    pub fn not_found(what: impl Into<String>) -> Self {
        Self::NotFound(what.into())
    }

    pub fn validation(reason: impl Into<String>) -> Self {
        Self::Validation(reason.into())
    }

    pub fn conflict(reason: impl Into<String>) -> Self {
        Self::Conflict(reason.into())
    }
}

pub type ServiceResult<T> = Result<T, ServiceError>;
