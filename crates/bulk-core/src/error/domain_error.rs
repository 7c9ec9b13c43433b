//! Domain errors - error types for the domain layer

use thiserror::Error;

/// Domain layer errors
///
/// The three variants the request handlers care about map one-to-one onto the
/// HTTP error taxonomy: validation (400), storage (500) and messaging (500).
#[derive(Debug, Error)]
pub enum DomainError {
    // =========================================================================
    // Validation Errors
    // =========================================================================
    #[error("{0}")]
    ValidationError(String),

    // =========================================================================
    // Infrastructure Errors (wrapped)
    // =========================================================================
    /// Database unavailable, constraint violation, bad statement
    #[error("{message}")]
    DatabaseError {
        message: String,
        /// SQLSTATE reported by the driver, when there is one
        code: Option<String>,
    },

    /// The messaging provider rejected or failed the send
    #[error("{message}")]
    MessagingError {
        message: String,
        /// Provider error code, e.g. 21211 for an invalid `To` number
        code: Option<i64>,
        /// HTTP status the provider answered with
        http_status: Option<u16>,
        /// Provider documentation link for the error code
        more_info: Option<String>,
    },

    #[error("Internal error: {0}")]
    InternalError(String),
}

impl DomainError {
    /// Shorthand for a storage error without a driver code
    pub fn database(message: impl Into<String>) -> Self {
        Self::DatabaseError {
            message: message.into(),
            code: None,
        }
    }

    /// Shorthand for a provider error with only a message and code
    pub fn messaging(message: impl Into<String>, code: Option<i64>) -> Self {
        Self::MessagingError {
            message: message.into(),
            code,
            http_status: None,
            more_info: None,
        }
    }

    /// Get an error code string for API responses
    pub fn code(&self) -> &'static str {
        match self {
            Self::ValidationError(_) => "VALIDATION_ERROR",
            Self::DatabaseError { .. } => "DATABASE_ERROR",
            Self::MessagingError { .. } => "MESSAGING_ERROR",
            Self::InternalError(_) => "INTERNAL_ERROR",
        }
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::ValidationError(_))
    }

    /// Check if this error came from storage
    pub fn is_storage(&self) -> bool {
        matches!(self, Self::DatabaseError { .. })
    }

    /// Check if this error came from the messaging provider
    pub fn is_messaging(&self) -> bool {
        matches!(self, Self::MessagingError { .. })
    }
}
