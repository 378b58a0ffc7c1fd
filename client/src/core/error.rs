//! # Common Error Types
//!
//! Consolidated error handling for the wallet client.
//!
//! Two layers:
//!
//! - [`ApiError`]: a single "request failed" type produced by the HTTP client.
//!   It distinguishes only between a response that carried an error status and
//!   a request that never got a response.
//! - [`AppError`]: everything else the client can fail on (configuration, the
//!   token store, local validation), with `ApiError` wrapped as one variant.
//!
//! ## What stores display
//!
//! Stores record `error.to_string()`. For `ApiError` that is the bare
//! user-facing message with no prefix:
//!
//! ```rust
//! use client::core::error::{ApiError, CONNECTION_ERROR_MESSAGE};
//!
//! let err = ApiError::http(404, Some("User not found".to_string()), "Failed to fetch user");
//! assert_eq!(err.to_string(), "User not found");
//! assert_eq!(err.status(), Some(404));
//!
//! let err = ApiError::http(500, None, "Failed to fetch users");
//! assert_eq!(err.to_string(), "Failed to fetch users");
//!
//! assert_eq!(ApiError::network().to_string(), CONNECTION_ERROR_MESSAGE);
//! ```

use thiserror::Error;

/// Message shown when a request fails without any HTTP response.
pub const CONNECTION_ERROR_MESSAGE: &str = "Network error. Please check your connection.";

/// A failed backend request.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ApiError {
    /// The server answered with a non-2xx status.
    ///
    /// `message` is the body's `message` field when present, otherwise the
    /// resource-specific fallback supplied by the caller.
    #[error("{message}")]
    Http { status: u16, message: String },

    /// No response was received (connection refused, DNS, TLS, timeout).
    #[error("{0}")]
    Network(String),

    /// A 2xx response whose body did not match the expected shape.
    #[error("Failed to parse response: {0}")]
    Decode(String),

    /// The request could not be built (bad URL, unserializable body).
    #[error("Invalid request: {0}")]
    InvalidRequest(String),
}

impl ApiError {
    /// Build an HTTP error. The server's message is kept verbatim; the
    /// fallback is used only when it is missing or empty.
    pub fn http(status: u16, server_message: Option<String>, fallback: &str) -> Self {
        let message = server_message
            .filter(|msg| !msg.is_empty())
            .unwrap_or_else(|| fallback.to_string());
        ApiError::Http { status, message }
    }

    /// Connection-level failure with the fixed user-facing message.
    pub fn network() -> Self {
        ApiError::Network(CONNECTION_ERROR_MESSAGE.to_string())
    }

    /// HTTP status tag, if the server responded.
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Http { status, .. } => Some(*status),
            _ => None,
        }
    }

    pub fn is_unauthorized(&self) -> bool {
        self.status() == Some(401)
    }

    pub fn is_not_found(&self) -> bool {
        self.status() == Some(404)
    }
}

/// Application-wide error type for the client crate.
#[derive(Debug, Error)]
pub enum AppError {
    /// Backend request failed.
    #[error(transparent)]
    Api(#[from] ApiError),

    /// Missing or malformed configuration.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Token store could not be read or written.
    #[error("Storage error: {0}")]
    Storage(String),

    /// Input rejected before any request was made.
    #[error("Validation error: {0}")]
    Validation(String),
}

/// Convenience type alias for `Result<T, AppError>`.
pub type Result<T> = std::result::Result<T, AppError>;

impl From<lib_utils::envs::Error> for AppError {
    fn from(err: lib_utils::envs::Error) -> Self {
        AppError::Config(err.to_string())
    }
}

impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        AppError::Storage(err.to_string())
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::Storage(format!("JSON error: {}", err))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_server_message_uses_fallback() {
        let err = ApiError::http(400, Some(String::new()), "Failed to update user");
        assert_eq!(err.to_string(), "Failed to update user");
        assert_eq!(err.status(), Some(400));
    }

    #[test]
    fn test_server_message_kept_verbatim() {
        let err = ApiError::http(409, Some(" Wallet is frozen\n".to_string()), "Failed to send transaction");
        assert_eq!(err.to_string(), " Wallet is frozen\n");
    }

    #[test]
    fn test_network_error_has_no_status() {
        let err = ApiError::network();
        assert_eq!(err.status(), None);
        assert!(!err.is_unauthorized());
    }

    #[test]
    fn test_status_helpers() {
        assert!(ApiError::http(401, None, "x").is_unauthorized());
        assert!(ApiError::http(404, None, "x").is_not_found());
    }

    #[test]
    fn test_app_error_is_transparent_over_api_error() {
        let err: AppError = ApiError::http(403, Some("Forbidden".to_string()), "x").into();
        assert_eq!(err.to_string(), "Forbidden");

        let err: AppError = lib_utils::envs::Error::WrongFormat("API_TIMEOUT_SECS").into();
        assert_eq!(err.to_string(), "Configuration error: API_TIMEOUT_SECS has an invalid format");
    }
}
