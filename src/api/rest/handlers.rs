//! # REST Handlers
//!
//! Request/response DTOs, shared state, and the axum handler functions.
//!
//! The handlers stay thin: coordinate validation happens at the domain
//! boundary, everything else is delegated to the estimation engine and
//! the geocoder. Error mapping: invalid coordinates are a client error
//! (400); an empty provider table is a server error (500); routing
//! failures never surface because the planner falls back.

use crate::application::error::EstimationError;
use crate::application::services::EstimationEngine;
use crate::domain::entities::EstimateResponse;
use crate::domain::value_objects::Coordinate;
use crate::infrastructure::geocoding::GeocodingService;
use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Shared application state injected into every handler.
#[derive(Debug)]
pub struct AppState {
    /// The estimation pipeline.
    pub estimator: Arc<EstimationEngine>,
    /// Best-effort address resolution.
    pub geocoder: Arc<GeocodingService>,
}

/// A coordinate pair as it appears on the wire.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct LocationDto {
    /// Latitude in degrees.
    pub lat: f64,
    /// Longitude in degrees.
    pub lng: f64,
}

/// Body of `POST /api/estimate`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct EstimateRequest {
    /// Trip start.
    pub pickup: LocationDto,
    /// Trip end.
    pub destination: LocationDto,
}

/// Body of `POST /api/geocode`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeocodeRequest {
    /// Free-form address text.
    pub address: String,
}

/// Response of `POST /api/geocode`.
///
/// Unresolvable addresses answer with `0.0`/`0.0` rather than an error.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct GeocodeResponse {
    /// Resolved latitude.
    pub lat: f64,
    /// Resolved longitude.
    pub lng: f64,
}

/// Query parameters of `GET /api/autocomplete`.
#[derive(Debug, Clone, Deserialize)]
pub struct AutocompleteParams {
    /// Partial address text.
    pub input: String,
}

/// Response of `GET /api/autocomplete`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AutocompleteResponse {
    /// Matching address suggestions.
    pub suggestions: Vec<String>,
}

/// Response of `GET /api/health`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Always `"ok"` while the process serves traffic.
    pub status: String,
}

/// Error payload returned on non-success statuses.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Human-readable error detail.
    pub error: String,
}

/// API-level error with its HTTP mapping.
#[derive(Debug)]
pub enum ApiError {
    /// 400 with detail.
    BadRequest(String),
    /// 500 with detail.
    Internal(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error) = match self {
            Self::BadRequest(error) => (StatusCode::BAD_REQUEST, error),
            Self::Internal(error) => (StatusCode::INTERNAL_SERVER_ERROR, error),
        };
        (status, Json(ErrorResponse { error })).into_response()
    }
}

impl From<EstimationError> for ApiError {
    fn from(error: EstimationError) -> Self {
        match error {
            EstimationError::NoProvidersConfigured => {
                Self::Internal("No estimates available".to_string())
            }
            EstimationError::Ranking(e) => {
                tracing::error!(error = %e, "ranking invariant violated");
                Self::Internal("No estimates available".to_string())
            }
            EstimationError::Domain(e) => Self::BadRequest(e.to_string()),
        }
    }
}

/// `POST /api/estimate`
///
/// # Errors
///
/// 400 for malformed coordinates, 500 when no providers are configured.
pub async fn estimate(
    State(state): State<Arc<AppState>>,
    Json(request): Json<EstimateRequest>,
) -> Result<Json<EstimateResponse>, ApiError> {
    let pickup = Coordinate::new(request.pickup.lat, request.pickup.lng)
        .map_err(|e| ApiError::BadRequest(e.to_string()))?;
    let destination = Coordinate::new(request.destination.lat, request.destination.lng)
        .map_err(|e| ApiError::BadRequest(e.to_string()))?;

    let response = state.estimator.estimate(&pickup, &destination).await?;
    Ok(Json(response))
}

/// `POST /api/geocode`
pub async fn geocode(
    State(state): State<Arc<AppState>>,
    Json(request): Json<GeocodeRequest>,
) -> Json<GeocodeResponse> {
    let (lat, lng) = state
        .geocoder
        .forward(&request.address)
        .await
        .unwrap_or((0.0, 0.0));
    Json(GeocodeResponse { lat, lng })
}

/// `GET /api/autocomplete`
pub async fn autocomplete(
    State(state): State<Arc<AppState>>,
    Query(params): Query<AutocompleteParams>,
) -> Json<AutocompleteResponse> {
    let suggestions = state.geocoder.autocomplete(&params.input).await;
    Json(AutocompleteResponse { suggestions })
}

/// `GET /api/health`
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
    })
}
