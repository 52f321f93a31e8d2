//! Error types for RsnChat operations.
//!
//! This module provides the error taxonomy shared by every RsnChat client,
//! including the mapping from HTTP status codes to typed failures.

use reqwest::StatusCode;
use thiserror::Error;

/// Main error type for RsnChat operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Bad constructor arguments or invalid configuration
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// API key is missing, invalid or was rejected (HTTP 401)
    #[error("Authentication failed: {0}")]
    AuthenticationError(String),

    /// Access to the resource is denied (HTTP 403)
    #[error("Permission denied: {0}")]
    PermissionDenied(String),

    /// The requested endpoint is not available (HTTP 404)
    #[error("Not found: {0}")]
    NotFound(String),

    /// Network or request serialization failure
    #[error("Transport error: {0}")]
    TransportError(String),

    /// Response body could not be decoded into the expected result
    #[error("Failed to decode response: {0}")]
    DecodeError(String),

    /// Any other non-200 status
    #[error("Request failed with status {status}: {message}")]
    RequestFailed {
        /// HTTP status code returned by the service
        status: u16,
        /// Response body or reason phrase
        message: String,
    },
}

/// Specialized result type for RsnChat operations.
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Returns the error code for this error type.
    #[must_use]
    pub const fn error_code(&self) -> &'static str {
        match self {
            Self::ConfigError(_) => "CONFIG_ERROR",
            Self::AuthenticationError(_) => "AUTHENTICATION_ERROR",
            Self::PermissionDenied(_) => "PERMISSION_DENIED",
            Self::NotFound(_) => "NOT_FOUND",
            Self::TransportError(_) => "TRANSPORT_ERROR",
            Self::DecodeError(_) => "DECODE_ERROR",
            Self::RequestFailed { .. } => "REQUEST_FAILED",
        }
    }

    /// Returns the HTTP status code that produced this error, if any.
    #[must_use]
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::AuthenticationError(_) => Some(401),
            Self::PermissionDenied(_) => Some(403),
            Self::NotFound(_) => Some(404),
            Self::RequestFailed { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Map a non-success HTTP status and its body to an error.
    ///
    /// `endpoint` is the path that was requested and is only used to make the
    /// message readable.
    #[must_use]
    pub fn from_status(status: StatusCode, endpoint: &str, body: String) -> Self {
        let detail = if body.trim().is_empty() {
            status
                .canonical_reason()
                .unwrap_or("no response body")
                .to_string()
        } else {
            body
        };

        match status {
            StatusCode::UNAUTHORIZED => Self::AuthenticationError(format!(
                "API key is invalid or you do not have access to `{endpoint}`: {detail}"
            )),
            StatusCode::FORBIDDEN => {
                Self::PermissionDenied(format!("access to `{endpoint}` is denied: {detail}"))
            }
            StatusCode::NOT_FOUND => {
                Self::NotFound(format!("endpoint `{endpoint}` is not available: {detail}"))
            }
            status => Self::RequestFailed {
                status: status.as_u16(),
                message: detail,
            },
        }
    }
}

// Conversions from external error types
impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            Self::TransportError(format!("request timed out: {err}"))
        } else if err.is_connect() {
            Self::TransportError(format!("connection failed: {err}"))
        } else {
            Self::TransportError(err.to_string())
        }
    }
}

impl From<url::ParseError> for Error {
    fn from(err: url::ParseError) -> Self {
        Self::ConfigError(format!("invalid URL: {err}"))
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Self::DecodeError(err.to_string())
    }
}

impl From<validator::ValidationErrors> for Error {
    fn from(err: validator::ValidationErrors) -> Self {
        Self::ConfigError(err.to_string())
    }
}
