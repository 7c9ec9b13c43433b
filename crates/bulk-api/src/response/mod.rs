//! Response types and error handling for API endpoints
//!
//! Errors render as `{"error": <message>, "code": <code>?}`.

use axum::{
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use bulk_common::{AppError, ErrorResponse};
use bulk_core::DomainError;
use bulk_service::ServiceError;
use thiserror::Error;
use tracing::error;

/// API error type for consistent error responses
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{0}")]
    App(#[from] AppError),

    #[error("{0}")]
    Service(#[from] ServiceError),

    #[error("Invalid request body: {0}")]
    InvalidBody(String),
}

impl From<DomainError> for ApiError {
    fn from(err: DomainError) -> Self {
        Self::Service(ServiceError::from(err))
    }
}

impl ApiError {
    /// Get HTTP status code for this error
    #[must_use]
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::App(e) => {
                StatusCode::from_u16(e.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
            }
            Self::Service(e) => {
                StatusCode::from_u16(e.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
            }
            Self::InvalidBody(_) => StatusCode::BAD_REQUEST,
        }
    }

    /// Get error code for API responses
    #[must_use]
    pub fn error_code(&self) -> &str {
        match self {
            Self::App(e) => e.error_code(),
            Self::Service(e) => e.error_code(),
            Self::InvalidBody(_) => "INVALID_BODY",
        }
    }

    /// Create an invalid body error
    pub fn invalid_body(msg: impl Into<String>) -> Self {
        Self::InvalidBody(msg.into())
    }

    /// Response body for this error.
    ///
    /// Client errors carry only the message. Server errors also carry a code:
    /// the provider's numeric code or the storage SQLSTATE when one is known.
    fn body(&self) -> ErrorResponse {
        let response = ErrorResponse::new(self.to_string());
        if self.status_code().is_client_error() {
            return response;
        }

        match self {
            Self::Service(e) => match e.response_code() {
                Some(code) => response.with_code(code),
                None => response,
            },
            other => response.with_code(other.error_code()),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        // Log server errors
        if status.is_server_error() {
            error!(error = ?self, "Server error occurred");
        }

        (status, Json(self.body())).into_response()
    }
}

/// Type alias for API results
pub type ApiResult<T> = Result<T, ApiError>;

/// Empty TwiML document, the acknowledgement the provider expects from a webhook
pub struct EmptyTwiml;

impl EmptyTwiml {
    pub const BODY: &'static str = "<Response></Response>";
}

impl IntoResponse for EmptyTwiml {
    fn into_response(self) -> Response {
        ([(header::CONTENT_TYPE, "text/xml")], Self::BODY).into_response()
    }
}
