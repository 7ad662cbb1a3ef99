//! # Infrastructure Layer
//!
//! Adapters for external services: the directions API behind the
//! [`directions::DirectionsProvider`] port and the best-effort geocoder.

pub mod directions;
pub mod geocoding;
