//! # Directions Errors
//!
//! Error types for the external directions service.
//!
//! Every variant here is recoverable by design: the route planner treats
//! them all identically and falls back to the great-circle estimate, so
//! none of these errors ever reaches an API caller.
//!
//! # Examples
//!
//! ```
//! use farelink::infrastructure::directions::error::DirectionsError;
//!
//! let error = DirectionsError::timeout("request exceeded 5000ms");
//! assert!(error.is_timeout());
//! ```

use thiserror::Error;

/// Error type for directions lookups.
#[derive(Debug, Clone, Error)]
pub enum DirectionsError {
    /// Request timed out.
    #[error("directions timeout: {message}")]
    Timeout {
        /// Error message.
        message: String,
    },

    /// Network or connection error.
    #[error("directions connection error: {message}")]
    Connection {
        /// Error message.
        message: String,
    },

    /// Service answered with a non-success status.
    #[error("directions service status {status}: {body}")]
    Status {
        /// HTTP status code.
        status: u16,
        /// Response body, as returned by the service.
        body: String,
    },

    /// Response body could not be decoded.
    #[error("directions malformed response: {message}")]
    Malformed {
        /// Error message.
        message: String,
    },

    /// Successful response contained no route.
    #[error("directions response contained no route")]
    NoRoute,

    /// Client-side setup error.
    #[error("directions internal error: {message}")]
    Internal {
        /// Error message.
        message: String,
    },
}

impl DirectionsError {
    /// Creates a timeout error.
    #[must_use]
    pub fn timeout(message: impl Into<String>) -> Self {
        Self::Timeout {
            message: message.into(),
        }
    }

    /// Creates a connection error.
    #[must_use]
    pub fn connection(message: impl Into<String>) -> Self {
        Self::Connection {
            message: message.into(),
        }
    }

    /// Creates a non-success status error.
    #[must_use]
    pub fn status(status: u16, body: impl Into<String>) -> Self {
        Self::Status {
            status,
            body: body.into(),
        }
    }

    /// Creates a malformed response error.
    #[must_use]
    pub fn malformed(message: impl Into<String>) -> Self {
        Self::Malformed {
            message: message.into(),
        }
    }

    /// Creates an internal error.
    #[must_use]
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }

    /// Returns true if the lookup timed out.
    #[must_use]
    pub fn is_timeout(&self) -> bool {
        matches!(self, Self::Timeout { .. })
    }

    /// Returns true if the request never produced a decodable response
    /// (timeout or transport failure).
    #[must_use]
    pub fn is_transport(&self) -> bool {
        matches!(self, Self::Timeout { .. } | Self::Connection { .. })
    }
}

/// Result type for directions operations.
pub type DirectionsResult<T> = Result<T, DirectionsError>;
