//! # Ranking Strategy
//!
//! Strategies for ranking provider estimates.
//!
//! This module provides the [`RankingStrategy`] trait and the default
//! [`LowestFareStrategy`], which orders estimates by price ascending with
//! a stable sort so that among equal-price entries the earliest-configured
//! provider wins.

use crate::domain::entities::ProviderEstimate;
use std::fmt;
use thiserror::Error;

/// Error type for ranking operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RankingError {
    /// The estimate set was empty.
    ///
    /// The orchestrator never invokes ranking with zero options, so this
    /// surfacing indicates a programming error, not a user-facing case.
    #[error("cannot rank an empty set of estimates")]
    EmptyInput,
}

/// An estimate with its ranking position.
#[derive(Debug, Clone, PartialEq)]
pub struct RankedEstimate {
    estimate: ProviderEstimate,
    rank: usize,
}

impl RankedEstimate {
    /// Creates a new ranked estimate.
    #[must_use]
    pub fn new(estimate: ProviderEstimate, rank: usize) -> Self {
        Self { estimate, rank }
    }

    /// Returns the underlying estimate.
    #[inline]
    #[must_use]
    pub fn estimate(&self) -> &ProviderEstimate {
        &self.estimate
    }

    /// Returns the rank (1 = best).
    #[inline]
    #[must_use]
    pub fn rank(&self) -> usize {
        self.rank
    }

    /// Returns true if this estimate is the best (rank 1).
    #[inline]
    #[must_use]
    pub fn is_best(&self) -> bool {
        self.rank == 1
    }

    /// Consumes self, returning the estimate.
    #[must_use]
    pub fn into_estimate(self) -> ProviderEstimate {
        self.estimate
    }
}

impl fmt::Display for RankedEstimate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{} {}", self.rank, self.estimate)
    }
}

/// Trait for ranking strategies.
pub trait RankingStrategy: Send + Sync + fmt::Debug {
    /// Ranks the given estimates, best first.
    ///
    /// # Errors
    ///
    /// Returns `RankingError::EmptyInput` if `options` is empty.
    fn rank(&self, options: &[ProviderEstimate]) -> Result<Vec<RankedEstimate>, RankingError>;

    /// Returns the best estimate.
    ///
    /// # Errors
    ///
    /// Returns `RankingError::EmptyInput` if `options` is empty.
    fn best(&self, options: &[ProviderEstimate]) -> Result<ProviderEstimate, RankingError> {
        self.rank(options)?
            .into_iter()
            .next()
            .map(RankedEstimate::into_estimate)
            .ok_or(RankingError::EmptyInput)
    }

    /// Returns the name of this ranking strategy.
    fn name(&self) -> &'static str;
}

/// Lowest fare wins.
///
/// Stable ascending sort by price: the original relative order among
/// equal-price entries is preserved, so ties go to the provider that
/// appears first in configuration.
#[derive(Debug, Clone, Copy, Default)]
pub struct LowestFareStrategy;

impl LowestFareStrategy {
    /// Creates a new lowest fare strategy.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl RankingStrategy for LowestFareStrategy {
    fn rank(&self, options: &[ProviderEstimate]) -> Result<Vec<RankedEstimate>, RankingError> {
        if options.is_empty() {
            return Err(RankingError::EmptyInput);
        }

        let mut sorted = options.to_vec();
        // slice::sort_by_key is stable.
        sorted.sort_by_key(ProviderEstimate::price);

        Ok(sorted
            .into_iter()
            .enumerate()
            .map(|(i, estimate)| RankedEstimate::new(estimate, i + 1))
            .collect())
    }

    fn name(&self) -> &'static str {
        "LowestFare"
    }
}
