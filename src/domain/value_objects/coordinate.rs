//! # Coordinate
//!
//! A validated geographic coordinate.
//!
//! Coordinates are immutable input values: latitude in `[-90, 90]`,
//! longitude in `[-180, 180]`, both finite. Construction through
//! [`Coordinate::new`] is the only way to obtain one, so every
//! `Coordinate` in the system is valid by construction.

use crate::domain::errors::{DomainError, DomainResult};
use serde::Serialize;
use std::fmt;

/// Mean Earth radius in kilometers, used for great-circle distances.
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// A validated geographic coordinate.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Coordinate {
    latitude: f64,
    longitude: f64,
}

impl Coordinate {
    /// Creates a new coordinate.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidCoordinate` if either component is
    /// non-finite or outside its valid range.
    pub fn new(latitude: f64, longitude: f64) -> DomainResult<Self> {
        if !latitude.is_finite() || !longitude.is_finite() {
            return Err(DomainError::invalid_coordinate(
                "latitude and longitude must be finite",
            ));
        }
        if !(-90.0..=90.0).contains(&latitude) {
            return Err(DomainError::invalid_coordinate(format!(
                "latitude {latitude} out of range [-90, 90]"
            )));
        }
        if !(-180.0..=180.0).contains(&longitude) {
            return Err(DomainError::invalid_coordinate(format!(
                "longitude {longitude} out of range [-180, 180]"
            )));
        }

        Ok(Self {
            latitude,
            longitude,
        })
    }

    /// Returns the latitude in degrees.
    #[inline]
    #[must_use]
    pub fn latitude(&self) -> f64 {
        self.latitude
    }

    /// Returns the longitude in degrees.
    #[inline]
    #[must_use]
    pub fn longitude(&self) -> f64 {
        self.longitude
    }

    /// Returns the great-circle distance to `other` in kilometers,
    /// computed with the haversine formula.
    #[must_use]
    pub fn haversine_km(&self, other: &Self) -> f64 {
        let dlat = (other.latitude - self.latitude).to_radians();
        let dlon = (other.longitude - self.longitude).to_radians();

        let a = (dlat / 2.0).sin().powi(2)
            + self.latitude.to_radians().cos()
                * other.latitude.to_radians().cos()
                * (dlon / 2.0).sin().powi(2);

        EARTH_RADIUS_KM * 2.0 * a.sqrt().asin()
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.latitude, self.longitude)
    }
}
