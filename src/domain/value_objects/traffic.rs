//! # Traffic Classification
//!
//! Maps wall-clock time to a traffic level and multiplier.
//!
//! The classification is a pure function of the local hour of day:
//!
//! | Hours               | Level  | Multiplier |
//! |---------------------|--------|------------|
//! | 07-09, 16-19 (incl) | heavy  | 1.6        |
//! | 10-15 (incl)        | medium | 1.3        |
//! | otherwise           | light  | 1.0        |
//!
//! A multiplier greater than 1 always means slower travel: estimated trip
//! duration grows with it, and so does the fare.

use chrono::{DateTime, Local, Timelike};
use serde::{Deserialize, Serialize};
use std::fmt;

const LIGHT_MULTIPLIER: f64 = 1.0;
const MEDIUM_MULTIPLIER: f64 = 1.3;
const HEAVY_MULTIPLIER: f64 = 1.6;

/// Qualitative traffic level label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TrafficLevel {
    /// Off-peak hours.
    Light,
    /// Midday traffic.
    Medium,
    /// Rush hour.
    Heavy,
}

impl TrafficLevel {
    /// Returns the lowercase wire label for this level.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Medium => "medium",
            Self::Heavy => "heavy",
        }
    }
}

impl fmt::Display for TrafficLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A traffic level together with its duration multiplier.
///
/// Computed fresh per request from wall-clock time; never persisted.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TrafficReading {
    level: TrafficLevel,
    multiplier: f64,
}

impl TrafficReading {
    /// Classifies an hour of day (0-23) into a traffic reading.
    ///
    /// Total over all hours; out-of-range values wrap into a day.
    #[must_use]
    pub fn classify(hour: u32) -> Self {
        match hour % 24 {
            7..=9 | 16..=19 => Self {
                level: TrafficLevel::Heavy,
                multiplier: HEAVY_MULTIPLIER,
            },
            10..=15 => Self {
                level: TrafficLevel::Medium,
                multiplier: MEDIUM_MULTIPLIER,
            },
            _ => Self {
                level: TrafficLevel::Light,
                multiplier: LIGHT_MULTIPLIER,
            },
        }
    }

    /// Classifies a local timestamp by its hour component.
    #[must_use]
    pub fn at(now: DateTime<Local>) -> Self {
        Self::classify(now.hour())
    }

    /// Returns the traffic level label.
    #[inline]
    #[must_use]
    pub fn level(&self) -> TrafficLevel {
        self.level
    }

    /// Returns the duration multiplier (always >= 1).
    #[inline]
    #[must_use]
    pub fn multiplier(&self) -> f64 {
        self.multiplier
    }
}

impl fmt::Display for TrafficReading {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (x{})", self.level, self.multiplier)
    }
}
