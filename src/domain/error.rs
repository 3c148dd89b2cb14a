//! Domain error type and the kinds callers branch on

use serde::Serialize;
use thiserror::Error;

/// Kind of a [`DomainError`], for callers that branch on the failure class
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    InvalidEmail,
    WeakCredential,
    AlreadyExists,
    NotFound,
    Storage,
    Internal,
}

/// Core domain errors
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Invalid email format: {message}")]
    InvalidEmail { message: String },

    #[error("Weak credential: {message}")]
    WeakCredential { message: String },

    #[error("Already exists: {message}")]
    AlreadyExists { message: String },

    #[error("Not found: {message}")]
    NotFound { message: String },

    #[error("Storage error: {message}")]
    Storage { message: String },

    #[error("Internal error: {message}")]
    Internal { message: String },
}

impl DomainError {
    pub fn invalid_email(message: impl Into<String>) -> Self {
        Self::InvalidEmail {
            message: message.into(),
        }
    }

    pub fn weak_credential(message: impl Into<String>) -> Self {
        Self::WeakCredential {
            message: message.into(),
        }
    }

    pub fn already_exists(message: impl Into<String>) -> Self {
        Self::AlreadyExists {
            message: message.into(),
        }
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound {
            message: message.into(),
        }
    }

    pub fn storage(message: impl Into<String>) -> Self {
        Self::Storage {
            message: message.into(),
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }

    /// The failure class of this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::InvalidEmail { .. } => ErrorKind::InvalidEmail,
            Self::WeakCredential { .. } => ErrorKind::WeakCredential,
            Self::AlreadyExists { .. } => ErrorKind::AlreadyExists,
            Self::NotFound { .. } => ErrorKind::NotFound,
            Self::Storage { .. } => ErrorKind::Storage,
            Self::Internal { .. } => ErrorKind::Internal,
        }
    }

    /// The human-readable message without the kind prefix
    pub fn message(&self) -> &str {
        match self {
            Self::InvalidEmail { message }
            | Self::WeakCredential { message }
            | Self::AlreadyExists { message }
            | Self::NotFound { message }
            | Self::Storage { message }
            | Self::Internal { message } => message,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_error() {
        let error = DomainError::not_found("User 'alice' not found");
        assert_eq!(error.to_string(), "Not found: User 'alice' not found");
        assert_eq!(error.kind(), ErrorKind::NotFound);
    }

    #[test]
    fn test_already_exists_error() {
        let error = DomainError::already_exists("User 'alice' already exists");
        assert_eq!(
            error.to_string(),
            "Already exists: User 'alice' already exists"
        );
        assert_eq!(error.kind(), ErrorKind::AlreadyExists);
    }

    #[test]
    fn test_kind_and_message() {
        let error = DomainError::weak_credential("Password is too short");
        assert_eq!(error.kind(), ErrorKind::WeakCredential);
        assert_eq!(error.message(), "Password is too short");

        let error = DomainError::invalid_email("not-an-email");
        assert_eq!(error.kind(), ErrorKind::InvalidEmail);
        assert_eq!(error.message(), "not-an-email");
    }
}
