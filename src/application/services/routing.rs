//! # Route Planning
//!
//! Routing with fallback: the central resilience contract.
//!
//! The planner first asks the external directions service for the route.
//! Whatever goes wrong there (timeout, transport failure, non-success
//! status, undecodable body, empty result) triggers the deterministic
//! great-circle fallback, so [`RoutePlanner::route`] is total: the
//! pipeline always gets a usable estimate.
//!
//! Traffic semantics are uniform across both paths: a multiplier above 1
//! lengthens the estimated duration. The primary path scales the
//! service-reported duration; the fallback divides the assumed base speed.
//! Distance rounds to 2 decimal places and duration to 1, on both paths.

use crate::domain::value_objects::{Coordinate, RouteEstimate, TrafficReading};
use crate::infrastructure::directions::DirectionsProvider;
use std::sync::Arc;

/// Assumed base travel speed for the great-circle fallback, before the
/// traffic multiplier is applied.
const ASSUMED_SPEED_KMH: f64 = 30.0;

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// Obtains the distance and duration between two coordinates, falling
/// back to a great-circle estimate when the directions service fails.
#[derive(Debug, Clone)]
pub struct RoutePlanner {
    directions: Arc<dyn DirectionsProvider>,
}

impl RoutePlanner {
    /// Creates a new route planner.
    #[must_use]
    pub fn new(directions: Arc<dyn DirectionsProvider>) -> Self {
        Self { directions }
    }

    /// Computes the route between `pickup` and `destination`.
    ///
    /// Never fails: any directions error is logged and replaced by the
    /// great-circle fallback.
    pub async fn route(
        &self,
        pickup: &Coordinate,
        destination: &Coordinate,
        traffic: TrafficReading,
    ) -> RouteEstimate {
        match self.directions.directions(pickup, destination).await {
            Ok(leg) => {
                let distance_km = leg.distance_m() / 1000.0;
                let duration_min = leg.duration_s() / 60.0 * traffic.multiplier();
                RouteEstimate::new(
                    round2(distance_km),
                    round1(duration_min),
                    leg.into_geometry(),
                )
            }
            Err(error) => {
                tracing::warn!(
                    error = %error,
                    "directions lookup failed, using great-circle fallback"
                );
                self.great_circle(pickup, destination, traffic)
            }
        }
    }

    /// Computes the deterministic great-circle estimate.
    ///
    /// Haversine distance at an assumed 30 km/h base speed, slowed by the
    /// traffic multiplier. Never fails for valid coordinates; identical
    /// pickup and destination yield 0 km / 0 min.
    #[must_use]
    pub fn great_circle(
        &self,
        pickup: &Coordinate,
        destination: &Coordinate,
        traffic: TrafficReading,
    ) -> RouteEstimate {
        let distance_km = pickup.haversine_km(destination);
        let effective_speed_kmh = ASSUMED_SPEED_KMH / traffic.multiplier();
        let duration_min = distance_km / effective_speed_kmh * 60.0;

        RouteEstimate::new(round2(distance_km), round1(duration_min), None)
    }
}
