//! # Application Errors
//!
//! Error types for the estimation pipeline.
//!
//! Routing failures never appear here: they are swallowed by the route
//! planner and replaced with the great-circle fallback. What remains is
//! configuration-level failure, input validation, and the
//! should-never-happen ranking invariant.
//!
//! # Examples
//!
//! ```
//! use farelink::application::error::EstimationError;
//!
//! let err = EstimationError::NoProvidersConfigured;
//! assert!(err.is_server_error());
//! ```

use crate::application::services::ranking_strategy::RankingError;
use crate::domain::errors::DomainError;
use thiserror::Error;

/// Error type for estimate requests.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum EstimationError {
    /// The provider table is empty; no estimates can be produced.
    #[error("no providers configured")]
    NoProvidersConfigured,

    /// Ranking was invoked with zero options.
    ///
    /// An internal invariant violation: orchestration guarantees a
    /// non-empty option set before ranking.
    #[error("ranking failed: {0}")]
    Ranking(#[from] RankingError),

    /// Domain validation failure (e.g. malformed coordinates).
    #[error(transparent)]
    Domain(#[from] DomainError),
}

impl EstimationError {
    /// Returns true if this error maps to a server-side failure.
    #[must_use]
    pub fn is_server_error(&self) -> bool {
        matches!(self, Self::NoProvidersConfigured | Self::Ranking(_))
    }

    /// Returns true if this error maps to a client-side failure.
    #[must_use]
    pub fn is_client_error(&self) -> bool {
        matches!(self, Self::Domain(_))
    }
}

/// Result type for estimation operations.
pub type EstimationResult<T> = Result<T, EstimationError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_providers_is_server_error() {
        let err = EstimationError::NoProvidersConfigured;
        assert!(err.is_server_error());
        assert!(!err.is_client_error());
    }

    #[test]
    fn ranking_is_server_error() {
        let err = EstimationError::from(RankingError::EmptyInput);
        assert!(err.is_server_error());
    }

    #[test]
    fn domain_is_client_error() {
        let err = EstimationError::from(DomainError::invalid_coordinate("latitude out of range"));
        assert!(err.is_client_error());
        assert!(err.to_string().contains("latitude"));
    }
}
