//! # Router Assembly
//!
//! Builds the axum router with CORS and request tracing.

use crate::api::rest::handlers::{self, AppState};
use axum::routing::{get, post};
use axum::Router;
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

/// Creates the service router.
#[must_use]
pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/api/estimate", post(handlers::estimate))
        .route("/api/geocode", post(handlers::geocode))
        .route("/api/autocomplete", get(handlers::autocomplete))
        .route("/api/health", get(handlers::health))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
