//! # OpenRouteService Client
//!
//! Directions adapter for the OpenRouteService driving-car profile.
//!
//! Issues a single POST per lookup with a bounded timeout and no retries:
//! one timeout-triggered fallback is cheaper than an unbounded retry loop,
//! and the planner's great-circle estimate covers the gap.

use crate::domain::value_objects::Coordinate;
use crate::infrastructure::directions::error::{DirectionsError, DirectionsResult};
use crate::infrastructure::directions::traits::{DirectionsProvider, RouteLeg};
use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use std::time::Duration;

/// HTTP client for the OpenRouteService directions API.
#[derive(Debug, Clone)]
pub struct OrsClient {
    client: Client,
    base_url: String,
    api_key: String,
}

#[derive(Debug, Deserialize)]
struct DirectionsResponse {
    #[serde(default)]
    routes: Vec<OrsRoute>,
}

#[derive(Debug, Deserialize)]
struct OrsRoute {
    summary: OrsSummary,
    geometry: Option<String>,
}

#[derive(Debug, Deserialize)]
struct OrsSummary {
    distance: f64,
    duration: f64,
}

impl OrsClient {
    /// Creates a new client.
    ///
    /// # Arguments
    ///
    /// * `base_url` - Service base URL, without a trailing slash.
    /// * `api_key` - Value sent in the `Authorization` header.
    /// * `timeout_ms` - Request timeout in milliseconds.
    ///
    /// # Errors
    ///
    /// Returns `DirectionsError::Internal` if the underlying HTTP client
    /// cannot be constructed.
    pub fn new(
        base_url: impl Into<String>,
        api_key: impl Into<String>,
        timeout_ms: u64,
    ) -> DirectionsResult<Self> {
        let client = Client::builder()
            .timeout(Duration::from_millis(timeout_ms))
            .build()
            .map_err(|e| {
                DirectionsError::internal(format!("failed to create HTTP client: {e}"))
            })?;

        Ok(Self {
            client,
            base_url: base_url.into(),
            api_key: api_key.into(),
        })
    }

    fn map_reqwest_error(error: &reqwest::Error) -> DirectionsError {
        if error.is_timeout() {
            DirectionsError::timeout("request timed out")
        } else if error.is_connect() {
            DirectionsError::connection(format!("connection failed: {error}"))
        } else {
            DirectionsError::connection(format!("HTTP request failed: {error}"))
        }
    }
}

#[async_trait]
impl DirectionsProvider for OrsClient {
    async fn directions(
        &self,
        pickup: &Coordinate,
        destination: &Coordinate,
    ) -> DirectionsResult<RouteLeg> {
        let url = format!("{}/v2/directions/driving-car", self.base_url);
        // ORS expects [lng, lat] pairs.
        let body = serde_json::json!({
            "coordinates": [
                [pickup.longitude(), pickup.latitude()],
                [destination.longitude(), destination.latitude()],
            ]
        });

        let response = self
            .client
            .post(&url)
            .header("Authorization", &self.api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| Self::map_reqwest_error(&e))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(DirectionsError::status(status.as_u16(), body));
        }

        let decoded: DirectionsResponse = response
            .json()
            .await
            .map_err(|e| DirectionsError::malformed(format!("failed to parse response: {e}")))?;

        let route = decoded
            .routes
            .into_iter()
            .next()
            .ok_or(DirectionsError::NoRoute)?;

        Ok(RouteLeg::new(
            route.summary.distance,
            route.summary.duration,
            route.geometry,
        ))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use wiremock::matchers::{body_partial_json, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn pickup() -> Coordinate {
        Coordinate::new(10.7769, 106.7009).unwrap()
    }

    fn destination() -> Coordinate {
        Coordinate::new(10.8231, 106.6297).unwrap()
    }

    #[tokio::test]
    async fn directions_success() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/v2/directions/driving-car"))
            .and(header("Authorization", "test-key"))
            .and(body_partial_json(serde_json::json!({
                "coordinates": [[106.7009, 10.7769], [106.6297, 10.8231]]
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "routes": [{
                    "summary": {"distance": 9850.0, "duration": 1230.0},
                    "geometry": "encoded-polyline"
                }]
            })))
            .expect(1)
            .mount(&server)
            .await;

        let client = OrsClient::new(server.uri(), "test-key", 5000).unwrap();
        let leg = client.directions(&pickup(), &destination()).await.unwrap();

        assert!((leg.distance_m() - 9850.0).abs() < f64::EPSILON);
        assert!((leg.duration_s() - 1230.0).abs() < f64::EPSILON);
        assert_eq!(leg.into_geometry().as_deref(), Some("encoded-polyline"));
    }

    #[tokio::test]
    async fn directions_non_success_status() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(503).set_body_string("unavailable"))
            .mount(&server)
            .await;

        let client = OrsClient::new(server.uri(), "test-key", 5000).unwrap();
        let err = client
            .directions(&pickup(), &destination())
            .await
            .unwrap_err();

        assert!(matches!(err, DirectionsError::Status { status: 503, .. }));
    }

    #[tokio::test]
    async fn directions_malformed_body() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
            .mount(&server)
            .await;

        let client = OrsClient::new(server.uri(), "test-key", 5000).unwrap();
        let err = client
            .directions(&pickup(), &destination())
            .await
            .unwrap_err();

        assert!(matches!(err, DirectionsError::Malformed { .. }));
    }

    #[tokio::test]
    async fn directions_empty_routes() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(serde_json::json!({"routes": []})),
            )
            .mount(&server)
            .await;

        let client = OrsClient::new(server.uri(), "test-key", 5000).unwrap();
        let err = client
            .directions(&pickup(), &destination())
            .await
            .unwrap_err();

        assert!(matches!(err, DirectionsError::NoRoute));
    }

    #[tokio::test]
    async fn directions_timeout() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(serde_json::json!({"routes": []}))
                    .set_delay(Duration::from_millis(500)),
            )
            .mount(&server)
            .await;

        let client = OrsClient::new(server.uri(), "test-key", 50).unwrap();
        let err = client
            .directions(&pickup(), &destination())
            .await
            .unwrap_err();

        assert!(err.is_timeout(), "got {err}");
    }

    #[tokio::test]
    async fn directions_connection_refused() {
        // Nothing listens on this port.
        let client = OrsClient::new("http://127.0.0.1:9", "test-key", 1000).unwrap();
        let err = client
            .directions(&pickup(), &destination())
            .await
            .unwrap_err();

        assert!(err.is_transport());
    }
}
