//! # Geocoding
//!
//! Best-effort address resolution against an OpenMap-style API.
//!
//! Forward geocoding and autocomplete never fail a request: a missing API
//! key, transport error, or unparseable body degrades to `None` / an empty
//! suggestion list with a warn log. Resolved addresses go through a
//! read-through cache so repeated lookups of the same address skip the
//! network.

use dashmap::DashMap;
use reqwest::Client;
use serde::Deserialize;
use std::time::Duration;
use thiserror::Error;

/// Error type for geocoding setup.
///
/// Lookups themselves are infallible by design; only construction can fail.
#[derive(Debug, Clone, Error)]
pub enum GeocodingError {
    /// Client-side setup error.
    #[error("geocoding internal error: {0}")]
    Internal(String),
}

/// A resolved point, latitude then longitude.
pub type GeoPoint = (f64, f64);

/// Client for forward geocoding and address autocomplete.
#[derive(Debug)]
pub struct GeocodingService {
    client: Client,
    base_url: String,
    api_key: Option<String>,
    cache: DashMap<String, GeoPoint>,
}

#[derive(Debug, Deserialize)]
struct ForwardResponse {
    #[serde(default)]
    results: Vec<ForwardResult>,
}

#[derive(Debug, Deserialize)]
struct ForwardResult {
    geometry: ForwardGeometry,
}

#[derive(Debug, Deserialize)]
struct ForwardGeometry {
    location: LatLng,
}

#[derive(Debug, Deserialize)]
struct LatLng {
    lat: f64,
    lng: f64,
}

#[derive(Debug, Deserialize)]
struct AutocompleteResponse {
    #[serde(default)]
    predictions: Vec<Prediction>,
}

#[derive(Debug, Deserialize)]
struct Prediction {
    description: String,
}

impl GeocodingService {
    /// Creates a new geocoding service.
    ///
    /// # Errors
    ///
    /// Returns `GeocodingError::Internal` if the underlying HTTP client
    /// cannot be constructed.
    pub fn new(
        base_url: impl Into<String>,
        api_key: Option<String>,
        timeout_ms: u64,
    ) -> Result<Self, GeocodingError> {
        let client = Client::builder()
            .timeout(Duration::from_millis(timeout_ms))
            .build()
            .map_err(|e| GeocodingError::Internal(format!("failed to create HTTP client: {e}")))?;

        Ok(Self {
            client,
            base_url: base_url.into(),
            api_key,
            cache: DashMap::new(),
        })
    }

    /// Resolves an address to coordinates.
    ///
    /// Returns `None` when the address is empty, no API key is configured,
    /// or the lookup fails in any way.
    pub async fn forward(&self, address: &str) -> Option<GeoPoint> {
        let address = address.trim();
        if address.is_empty() {
            return None;
        }
        let api_key = self.api_key.as_deref()?;

        if let Some(hit) = self.cache.get(address) {
            return Some(*hit);
        }

        let url = format!("{}/geocode/forward", self.base_url);
        let response = self
            .client
            .get(&url)
            .query(&[("apikey", api_key), ("address", address)])
            .send()
            .await;

        let decoded: ForwardResponse = match response {
            Ok(r) => match r.error_for_status() {
                Ok(r) => match r.json().await {
                    Ok(body) => body,
                    Err(e) => {
                        tracing::warn!(error = %e, "geocode response undecodable");
                        return None;
                    }
                },
                Err(e) => {
                    tracing::warn!(error = %e, "geocode request rejected");
                    return None;
                }
            },
            Err(e) => {
                tracing::warn!(error = %e, "geocode request failed");
                return None;
            }
        };

        let location = &decoded.results.first()?.geometry.location;
        let point = (location.lat, location.lng);
        self.cache.insert(address.to_string(), point);
        Some(point)
    }

    /// Returns address suggestions for a partial query.
    ///
    /// Empty for queries shorter than 2 characters, a missing API key, or
    /// any lookup failure.
    pub async fn autocomplete(&self, input: &str) -> Vec<String> {
        let input = input.trim();
        if input.len() < 2 {
            return Vec::new();
        }
        let Some(api_key) = self.api_key.as_deref() else {
            return Vec::new();
        };

        let url = format!("{}/autocomplete", self.base_url);
        let response = self
            .client
            .get(&url)
            .query(&[("apikey", api_key), ("input", input)])
            .send()
            .await;

        match response {
            Ok(r) if r.status().is_success() => match r.json::<AutocompleteResponse>().await {
                Ok(body) => body
                    .predictions
                    .into_iter()
                    .map(|p| p.description)
                    .collect(),
                Err(e) => {
                    tracing::warn!(error = %e, "autocomplete response undecodable");
                    Vec::new()
                }
            },
            Ok(r) => {
                tracing::warn!(status = %r.status(), "autocomplete request rejected");
                Vec::new()
            }
            Err(e) => {
                tracing::warn!(error = %e, "autocomplete request failed");
                Vec::new()
            }
        }
    }

    /// Returns the number of cached addresses.
    #[must_use]
    pub fn cache_len(&self) -> usize {
        self.cache.len()
    }
}
