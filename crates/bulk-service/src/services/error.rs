//! Service layer error types
//!
//! Provides a unified error type for all service operations.

use bulk_common::AppError;
use bulk_core::DomainError;
use std::fmt;

/// Service layer error type
#[derive(Debug)]
pub enum ServiceError {
    /// Storage, provider or domain rule failure
    Domain(DomainError),

    /// Application error (configuration, infrastructure)
    App(AppError),

    /// Validation error; the message is shown to the caller as-is
    Validation(String),
}

impl fmt::Display for ServiceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Domain(e) => write!(f, "{e}"),
            Self::App(e) => write!(f, "{e}"),
            Self::Validation(msg) => write!(f, "{msg}"),
        }
    }
}

impl std::error::Error for ServiceError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Domain(e) => Some(e),
            Self::App(e) => Some(e),
            Self::Validation(_) => None,
        }
    }
}

impl ServiceError {
    /// Create a validation error
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> u16 {
        match self {
            Self::Domain(e) => {
                if e.is_validation() {
                    400
                } else {
                    500
                }
            }
            Self::App(e) => e.status_code(),
            Self::Validation(_) => 400,
        }
    }

    /// Get the error code for API responses
    pub fn error_code(&self) -> &str {
        match self {
            Self::Domain(e) => e.code(),
            Self::App(e) => e.error_code(),
            Self::Validation(_) => "VALIDATION_ERROR",
        }
    }

    /// Code reported to the caller alongside the message.
    ///
    /// Provider codes stay numeric, storage errors carry their SQLSTATE when
    /// the driver reported one. Validation failures carry no code. Anything
    /// else, including a provider failure without a numeric code, falls back
    /// to the symbolic error code.
    pub fn response_code(&self) -> Option<serde_json::Value> {
        match self {
            Self::Validation(_) => None,
            Self::Domain(DomainError::ValidationError(_)) => None,
            Self::Domain(DomainError::MessagingError {
                code: Some(code), ..
            }) => Some(serde_json::Value::from(*code)),
            Self::Domain(DomainError::DatabaseError {
                code: Some(code), ..
            }) => Some(serde_json::Value::from(code.as_str())),
            other => Some(serde_json::Value::from(other.error_code())),
        }
    }
}

impl From<DomainError> for ServiceError {
    fn from(err: DomainError) -> Self {
        Self::Domain(err)
    }
}

impl From<AppError> for ServiceError {
    fn from(err: AppError) -> Self {
        Self::App(err)
    }
}

impl From<ServiceError> for AppError {
    fn from(err: ServiceError) -> Self {
        match err {
            ServiceError::Domain(e) => AppError::Domain(e),
            ServiceError::App(e) => e,
            ServiceError::Validation(msg) => AppError::Validation(msg),
        }
    }
}

/// Result type for service operations
pub type ServiceResult<T> = Result<T, ServiceError>;
