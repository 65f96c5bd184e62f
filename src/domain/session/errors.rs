//! Session-specific error types.

use std::fmt;

use crate::domain::foundation::{DomainError, ErrorCode, SessionId, ValidationError};

/// Write operation that requires the session to exist first.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionAction {
    Update,
    Delete,
}

impl SessionAction {
    pub fn as_str(&self) -> &'static str {
        match self {
            SessionAction::Update => "update",
            SessionAction::Delete => "delete",
        }
    }
}

impl fmt::Display for SessionAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Session-specific errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionError {
    /// Session was not found on lookup.
    NotFound(SessionId),
    /// Session was not found by the existence check of a write.
    NotFoundFor {
        id: SessionId,
        action: SessionAction,
    },
    /// Payload or query parameters violated one or more constraints.
    ValidationFailed(Vec<ValidationError>),
    /// The session store failed.
    Infrastructure(String),
}

impl SessionError {
    pub fn not_found(id: SessionId) -> Self {
        SessionError::NotFound(id)
    }

    pub fn not_found_for(id: SessionId, action: SessionAction) -> Self {
        SessionError::NotFoundFor { id, action }
    }

    pub fn validation(violations: Vec<ValidationError>) -> Self {
        SessionError::ValidationFailed(violations)
    }

    pub fn infrastructure(message: impl Into<String>) -> Self {
        SessionError::Infrastructure(message.into())
    }

    pub fn code(&self) -> ErrorCode {
        match self {
            SessionError::NotFound(_) | SessionError::NotFoundFor { .. } => {
                ErrorCode::SessionNotFound
            }
            SessionError::ValidationFailed(_) => ErrorCode::ValidationFailed,
            SessionError::Infrastructure(_) => ErrorCode::DatabaseError,
        }
    }

    /// Client-facing message.
    ///
    /// Not-found on a write names only the action, never store internals.
    pub fn message(&self) -> String {
        match self {
            SessionError::NotFound(id) => format!("Session not found for ID: {}", id),
            SessionError::NotFoundFor { action, .. } => {
                format!("Session not found for {}", action)
            }
            SessionError::ValidationFailed(violations) => {
                let reasons: Vec<String> = violations.iter().map(ToString::to_string).collect();
                format!("Validation failed: {}", reasons.join("; "))
            }
            SessionError::Infrastructure(msg) => format!("Error: {}", msg),
        }
    }
}

impl fmt::Display for SessionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message())
    }
}

impl std::error::Error for SessionError {}

impl From<DomainError> for SessionError {
    fn from(err: DomainError) -> Self {
        SessionError::Infrastructure(err.to_string())
    }
}
