//! # Estimates
//!
//! Per-provider fare estimates and the terminal response artifact.

use crate::domain::value_objects::TrafficLevel;
use serde::{Deserialize, Serialize};
use std::fmt;

/// One provider's priced estimate for a trip.
///
/// Ephemeral: built per request, returned to the caller, never persisted.
/// Distance and duration are identical across all estimates in one
/// response because routing is provider-independent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProviderEstimate {
    provider: String,
    distance_km: f64,
    duration_min: f64,
    traffic_level: TrafficLevel,
    price: i64,
    deeplink: String,
}

impl ProviderEstimate {
    /// Creates a new provider estimate.
    #[must_use]
    pub fn new(
        provider: impl Into<String>,
        distance_km: f64,
        duration_min: f64,
        traffic_level: TrafficLevel,
        price: i64,
        deeplink: impl Into<String>,
    ) -> Self {
        Self {
            provider: provider.into(),
            distance_km,
            duration_min,
            traffic_level,
            price,
            deeplink: deeplink.into(),
        }
    }

    /// Returns the provider identifier.
    #[inline]
    #[must_use]
    pub fn provider(&self) -> &str {
        &self.provider
    }

    /// Returns the trip distance in kilometers.
    #[inline]
    #[must_use]
    pub fn distance_km(&self) -> f64 {
        self.distance_km
    }

    /// Returns the estimated trip duration in minutes.
    #[inline]
    #[must_use]
    pub fn duration_min(&self) -> f64 {
        self.duration_min
    }

    /// Returns the traffic level the estimate was priced under.
    #[inline]
    #[must_use]
    pub fn traffic_level(&self) -> TrafficLevel {
        self.traffic_level
    }

    /// Returns the quoted price in currency minor units.
    #[inline]
    #[must_use]
    pub fn price(&self) -> i64 {
        self.price
    }

    /// Returns the URI that opens the provider's app.
    #[inline]
    #[must_use]
    pub fn deeplink(&self) -> &str {
        &self.deeplink
    }
}

impl fmt::Display for ProviderEstimate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} @ {}", self.provider, self.price)
    }
}

/// The terminal artifact of one estimate request.
///
/// `options` stay in provider-configuration order; `best_option` names the
/// cheapest option (earliest-configured provider on a tie).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EstimateResponse {
    best_option: String,
    options: Vec<ProviderEstimate>,
}

impl EstimateResponse {
    /// Creates a new estimate response.
    #[must_use]
    pub fn new(best_option: impl Into<String>, options: Vec<ProviderEstimate>) -> Self {
        Self {
            best_option: best_option.into(),
            options,
        }
    }

    /// Returns the winning provider identifier.
    #[inline]
    #[must_use]
    pub fn best_option(&self) -> &str {
        &self.best_option
    }

    /// Returns the per-provider options in configuration order.
    #[inline]
    #[must_use]
    pub fn options(&self) -> &[ProviderEstimate] {
        &self.options
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::indexing_slicing)]
mod tests {
    use super::*;

    fn estimate(provider: &str, price: i64) -> ProviderEstimate {
        ProviderEstimate::new(
            provider,
            9.32,
            18.6,
            TrafficLevel::Light,
            price,
            format!("{provider}://open"),
        )
    }

    #[test]
    fn provider_estimate_getters() {
        let e = estimate("grab", 72540);
        assert_eq!(e.provider(), "grab");
        assert_eq!(e.price(), 72540);
        assert_eq!(e.traffic_level(), TrafficLevel::Light);
        assert_eq!(e.deeplink(), "grab://open");
    }

    #[test]
    fn response_round_trips_through_json() {
        let response = EstimateResponse::new("be", vec![estimate("grab", 100), estimate("be", 90)]);
        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["best_option"], "be");
        assert_eq!(json["options"][0]["provider"], "grab");
        assert_eq!(json["options"][0]["traffic_level"], "light");

        let back: EstimateResponse = serde_json::from_value(json).unwrap();
        assert_eq!(back, response);
    }

    #[test]
    fn display_format() {
        assert_eq!(estimate("grab", 72540).to_string(), "grab @ 72540");
    }
}
