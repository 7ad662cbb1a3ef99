//! # Value Objects
//!
//! Immutable types with validation and domain semantics.
//!
//! - [`Coordinate`]: validated geographic point with great-circle distance
//! - [`TrafficLevel`] / [`TrafficReading`]: time-of-day traffic classification
//! - [`RouteEstimate`]: the per-request distance/duration result

pub mod coordinate;
pub mod route;
pub mod traffic;

pub use coordinate::{Coordinate, EARTH_RADIUS_KM};
pub use route::RouteEstimate;
pub use traffic::{TrafficLevel, TrafficReading};
