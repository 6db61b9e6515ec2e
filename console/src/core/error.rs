//! # Common Error Types
//!
//! Consolidated error handling for the console.
//!
//! The backend signals failure in three unrelated ways: a non-success HTTP
//! status, a body that is a leaked SQL statement instead of JSON, and a
//! well-formed envelope with `flag: false`. The Transport Client turns each of
//! them into one [`ApiError`] variant so nothing downstream has to re-inspect
//! raw replies.
//!
//! ## Error Categories
//!
//! - **Transport**: HTTP status outside 2xx
//! - **Network**: the request never produced a status (DNS, refused, TLS)
//! - **BackendMisconfiguration**: the body starts with a SQL keyword
//! - **MalformedResponse**: the body is not JSON
//! - **ApiLogic**: envelope with `flag: false`; the raw envelope is attached
//! - **Storage / Validation / Config**: local failures
//!
//! ## Authentication failures
//!
//! The backend has no distinct error code for an expired or rejected session.
//! [`ApiError::is_unauthorized`] answers from the status code when there is
//! one and from the message text otherwise.
//!
//! ```rust
//! use erp_console::core::error::{ApiError, ErrorKind};
//!
//! let err = ApiError::Transport { endpoint: "customers.php".into(), status: 401 };
//! assert_eq!(err.to_string(), "HTTP error! status: 401");
//! assert_eq!(err.kind(), ErrorKind::Transport);
//! assert!(err.is_unauthorized());
//! ```

use serde_json::Value;
use thiserror::Error;

/// Characters of an unparseable body quoted back in [`ApiError::MalformedResponse`].
pub const MALFORMED_EXCERPT_CHARS: usize = 50;

/// Console-wide error type.
#[derive(Debug, Clone, Error)]
pub enum ApiError {
    /// Non-success HTTP status.
    #[error("HTTP error! status: {status}")]
    Transport { endpoint: String, status: u16 },

    /// The request failed before any status was received.
    #[error("Network error: {message}")]
    Network { endpoint: String, message: String },

    /// The backend answered with SQL text instead of JSON.
    ///
    /// The offending text is logged by the Transport Client and never kept here.
    #[error("Backend error: API endpoint returned invalid response. Please contact support.")]
    BackendMisconfiguration { endpoint: String },

    /// The body could not be parsed as JSON.
    #[error("Invalid API response format. Expected JSON but got: {excerpt}")]
    MalformedResponse { endpoint: String, excerpt: String },

    /// Well-formed envelope with `flag: false`.
    #[error("{message}")]
    ApiLogic {
        endpoint: String,
        message: String,
        envelope: Value,
    },

    /// Durable client storage could not be read or written.
    #[error("Storage error: {0}")]
    Storage(String),

    /// Input failed a presence check before any request was made.
    #[error("{0}")]
    Validation(String),

    /// Configuration could not be loaded.
    #[error("Configuration error: {0}")]
    Config(String),
}

/// Coarse classification of [`ApiError`], stored alongside the message by the
/// Async Operation Hook so screens can branch without parsing text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Transport,
    Network,
    BackendMisconfiguration,
    MalformedResponse,
    ApiLogic,
    Storage,
    Validation,
    Config,
}

impl ApiError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            ApiError::Transport { .. } => ErrorKind::Transport,
            ApiError::Network { .. } => ErrorKind::Network,
            ApiError::BackendMisconfiguration { .. } => ErrorKind::BackendMisconfiguration,
            ApiError::MalformedResponse { .. } => ErrorKind::MalformedResponse,
            ApiError::ApiLogic { .. } => ErrorKind::ApiLogic,
            ApiError::Storage(_) => ErrorKind::Storage,
            ApiError::Validation(_) => ErrorKind::Validation,
            ApiError::Config(_) => ErrorKind::Config,
        }
    }

    /// Endpoint the failing call was addressed to, when there was one.
    pub fn endpoint(&self) -> Option<&str> {
        match self {
            ApiError::Transport { endpoint, .. }
            | ApiError::Network { endpoint, .. }
            | ApiError::BackendMisconfiguration { endpoint }
            | ApiError::MalformedResponse { endpoint, .. }
            | ApiError::ApiLogic { endpoint, .. } => Some(endpoint.as_str()),
            _ => None,
        }
    }

    /// HTTP status, for transport failures.
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Transport { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Raw reply envelope, for `flag: false` failures.
    pub fn envelope(&self) -> Option<&Value> {
        match self {
            ApiError::ApiLogic { envelope, .. } => Some(envelope),
            _ => None,
        }
    }

    /// Whether this failure means the session is no longer accepted.
    pub fn is_unauthorized(&self) -> bool {
        self.status() == Some(401) || message_indicates_unauthorized(&self.to_string())
    }
}

/// Text heuristic for authentication failures reported only as a message.
pub fn message_indicates_unauthorized(message: &str) -> bool {
    message.contains("401") || message.contains("Unauthorized")
}

/// Convenience type alias for `Result<T, ApiError>`.
pub type Result<T> = std::result::Result<T, ApiError>;
