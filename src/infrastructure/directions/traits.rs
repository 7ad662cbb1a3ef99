//! # Directions Provider Port
//!
//! Port definition for external directions lookups.
//!
//! The application's route planner depends on this trait rather than any
//! concrete HTTP client, which is what lets tests count calls and force
//! failures without a network.

use crate::domain::value_objects::Coordinate;
use crate::infrastructure::directions::error::DirectionsResult;
use async_trait::async_trait;
use std::fmt;

/// Raw routing result as reported by a directions service.
///
/// Units are the service's own: meters and seconds. Conversion, traffic
/// adjustment, and rounding are the planner's job.
#[derive(Debug, Clone, PartialEq)]
pub struct RouteLeg {
    distance_m: f64,
    duration_s: f64,
    geometry: Option<String>,
}

impl RouteLeg {
    /// Creates a new route leg.
    #[must_use]
    pub fn new(distance_m: f64, duration_s: f64, geometry: Option<String>) -> Self {
        Self {
            distance_m,
            duration_s,
            geometry,
        }
    }

    /// Returns the total distance in meters.
    #[inline]
    #[must_use]
    pub fn distance_m(&self) -> f64 {
        self.distance_m
    }

    /// Returns the total duration in seconds.
    #[inline]
    #[must_use]
    pub fn duration_s(&self) -> f64 {
        self.duration_s
    }

    /// Consumes the leg, returning the encoded geometry if present.
    #[must_use]
    pub fn into_geometry(self) -> Option<String> {
        self.geometry
    }
}

/// Trait for external directions lookups.
///
/// # Error Handling
///
/// Implementations map every failure mode (timeout, transport error,
/// non-success status, undecodable body, empty result) to a
/// [`DirectionsError`](crate::infrastructure::directions::error::DirectionsError)
/// variant; callers treat all of them as a signal to fall back.
#[async_trait]
pub trait DirectionsProvider: Send + Sync + fmt::Debug {
    /// Looks up the driving route between two coordinates.
    ///
    /// # Errors
    ///
    /// Returns a `DirectionsError` when the lookup fails for any reason.
    async fn directions(
        &self,
        pickup: &Coordinate,
        destination: &Coordinate,
    ) -> DirectionsResult<RouteLeg>;
}
