use crate::modules::access_control::authorizer::AccessError;
use crate::modules::time_tracking::core::decision::DecideError;
use crate::modules::time_tracking::core::validation::{FieldError, ValidationErrors};
use crate::shared::infrastructure::event_store::EventStoreError;
use crate::shared::infrastructure::intent_outbox::OutboxError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApplicationError {
    #[error(transparent)]
    EventStore(#[from] EventStoreError),

    #[error(transparent)]
    Outbox(#[from] OutboxError),

    #[error("{0}")]
    Domain(#[from] DecideError),

    #[error(transparent)]
    Validation(#[from] ValidationErrors),

    #[error(transparent)]
    Access(#[from] AccessError),

    #[error("unexpected: {0}")]
    Unexpected(String),
}

impl From<FieldError> for ApplicationError {
    fn from(error: FieldError) -> Self {
        ApplicationError::Validation(error.into())
    }
}

/// Transport-neutral classification; inbound adapters map it to status codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    NotFound,
    InvalidState,
    Validation,
    Forbidden,
    Conflict,
    Internal,
}

impl ErrorKind {
    /// Stable machine-readable code shared by the REST and GraphQL surfaces.
    pub fn code(self) -> &'static str {
        match self {
            ErrorKind::NotFound => "NOT_FOUND",
            ErrorKind::InvalidState => "INVALID_STATE",
            ErrorKind::Validation => "VALIDATION_ERROR",
            ErrorKind::Forbidden => "FORBIDDEN",
            ErrorKind::Conflict => "CONFLICT",
            ErrorKind::Internal => "INTERNAL",
        }
    }
}

impl ApplicationError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            ApplicationError::EventStore(error) if error.is_conflict() => ErrorKind::Conflict,
            ApplicationError::Domain(DecideError::NotFound)
            | ApplicationError::Domain(DecideError::ManualEntryNotFound) => ErrorKind::NotFound,
            ApplicationError::Domain(DecideError::TimerAlreadyActive)
            | ApplicationError::Domain(DecideError::TimerNotActive) => ErrorKind::InvalidState,
            ApplicationError::Domain(DecideError::AlreadyExists) => ErrorKind::Conflict,
            ApplicationError::Validation(_) => ErrorKind::Validation,
            ApplicationError::Access(AccessError::NoGrant { .. })
            | ApplicationError::Access(AccessError::OutOfScope { .. }) => ErrorKind::Forbidden,
            ApplicationError::EventStore(_)
            | ApplicationError::Outbox(_)
            | ApplicationError::Access(AccessError::Directory(_))
            | ApplicationError::Unexpected(_) => ErrorKind::Internal,
        }
    }
}
