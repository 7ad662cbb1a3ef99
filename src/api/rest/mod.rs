//! # REST API
//!
//! REST endpoints using axum.
//!
//! # Endpoints
//!
//! - `POST /api/estimate` - Ranked per-provider fare estimates for a trip
//! - `POST /api/geocode` - Forward-geocode an address (best effort)
//! - `GET /api/autocomplete` - Address suggestions for a partial query
//! - `GET /api/health` - Health check endpoint
//!
//! # Usage
//!
//! ```ignore
//! use farelink::api::rest::{create_router, AppState};
//! use std::sync::Arc;
//!
//! let state = Arc::new(AppState { estimator, geocoder });
//! let router = create_router(state);
//!
//! let listener = tokio::net::TcpListener::bind("0.0.0.0:8000").await?;
//! axum::serve(listener, router).await?;
//! ```

pub mod handlers;
pub mod routes;

pub use handlers::{
    ApiError, AppState, AutocompleteParams, AutocompleteResponse, ErrorResponse, EstimateRequest,
    GeocodeRequest, GeocodeResponse, HealthResponse, LocationDto,
};
pub use routes::create_router;
