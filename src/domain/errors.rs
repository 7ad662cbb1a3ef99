//! # Domain Errors
//!
//! Error types for domain validation failures.
//!
//! # Examples
//!
//! ```
//! use farelink::domain::errors::DomainError;
//!
//! let err = DomainError::invalid_coordinate("latitude 120 out of range");
//! assert!(err.to_string().contains("latitude"));
//! ```

use thiserror::Error;

/// Error type for domain rule violations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomainError {
    /// A coordinate failed validation.
    #[error("invalid coordinate: {0}")]
    InvalidCoordinate(String),

    /// A provider configuration entry failed validation.
    #[error("invalid provider config: {0}")]
    InvalidProviderConfig(String),
}

impl DomainError {
    /// Creates an invalid coordinate error.
    #[must_use]
    pub fn invalid_coordinate(message: impl Into<String>) -> Self {
        Self::InvalidCoordinate(message.into())
    }

    /// Creates an invalid provider config error.
    #[must_use]
    pub fn invalid_provider_config(message: impl Into<String>) -> Self {
        Self::InvalidProviderConfig(message.into())
    }
}

/// Result type for domain operations.
pub type DomainResult<T> = Result<T, DomainError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_coordinate_display() {
        let err = DomainError::invalid_coordinate("latitude 91 out of range");
        assert!(err.to_string().contains("invalid coordinate"));
        assert!(err.to_string().contains("91"));
    }

    #[test]
    fn invalid_provider_config_display() {
        let err = DomainError::invalid_provider_config("per_km must be non-negative");
        assert!(err.to_string().contains("provider config"));
    }
}
