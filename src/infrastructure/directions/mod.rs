//! # Directions Integration
//!
//! External directions lookups behind a port.
//!
//! - [`DirectionsProvider`]: the port the route planner depends on
//! - [`OrsClient`]: OpenRouteService adapter
//! - [`DirectionsError`]: failure taxonomy, always recovered via fallback

pub mod error;
pub mod ors;
pub mod traits;

pub use error::{DirectionsError, DirectionsResult};
pub use ors::OrsClient;
pub use traits::{DirectionsProvider, RouteLeg};
