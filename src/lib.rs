//! # Farelink
//!
//! Traffic-aware ride-hailing fare comparison engine.
//!
//! Given a pickup and a destination coordinate, Farelink obtains the route
//! distance and duration, prices the trip per configured provider under a
//! time-of-day traffic multiplier, ranks the quotes, and returns them with
//! deep links into each provider's app.
//!
//! # Architecture
//!
//! - [`domain`]: entities and value objects (coordinates, traffic
//!   classification, provider tables, estimates); pure, no I/O
//! - [`application`]: the estimation pipeline — route planning with
//!   great-circle fallback, fare pricing, ranking, orchestration
//! - [`infrastructure`]: adapters for the external directions service and
//!   the best-effort geocoder
//! - [`api`]: the REST surface
//! - [`config`]: startup settings
//!
//! # Resilience
//!
//! The external directions service is the only slow, unreliable
//! collaborator. Every failure mode there is swallowed by the route
//! planner and replaced with a deterministic great-circle estimate, so a
//! request with valid coordinates always produces quotes.

pub mod api;
pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;

pub use config::Settings;
