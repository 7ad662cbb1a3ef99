//! # Route Estimate
//!
//! The distance/duration result of one routing computation.
//!
//! Exactly one `RouteEstimate` is produced per estimate request and shared
//! across all providers' fare calculations: distance and duration are
//! provider-independent.

use serde::Serialize;
use std::fmt;

/// Distance and duration between two coordinates, plus an optional
/// opaque path geometry encoding from the directions service.
///
/// Values carry the planner's rounding: distance to 2 decimal places,
/// duration to 1. Both are always non-negative.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RouteEstimate {
    distance_km: f64,
    duration_min: f64,
    geometry: Option<String>,
}

impl RouteEstimate {
    /// Creates a new route estimate.
    #[must_use]
    pub fn new(distance_km: f64, duration_min: f64, geometry: Option<String>) -> Self {
        Self {
            distance_km,
            duration_min,
            geometry,
        }
    }

    /// Returns the route distance in kilometers.
    #[inline]
    #[must_use]
    pub fn distance_km(&self) -> f64 {
        self.distance_km
    }

    /// Returns the estimated travel duration in minutes.
    #[inline]
    #[must_use]
    pub fn duration_min(&self) -> f64 {
        self.duration_min
    }

    /// Returns the encoded path geometry, if the directions service
    /// provided one.
    #[inline]
    #[must_use]
    pub fn geometry(&self) -> Option<&str> {
        self.geometry.as_deref()
    }
}

impl fmt::Display for RouteEstimate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} km / {} min", self.distance_km, self.duration_min)
    }
}
