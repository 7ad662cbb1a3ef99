//! # Fare Pricing
//!
//! Converts distance, duration, and the traffic multiplier into a fare.
//!
//! The formula matches what the providers themselves advertise:
//!
//! ```text
//! fare = trunc((base_fare + distance_km * per_km + duration_min * per_min) * multiplier)
//! ```
//!
//! The result truncates toward zero rather than rounding; fares are
//! integer amounts in the currency's minor-unit-free form and partial
//! units are never charged. `base_fare` already acts as the minimum fare
//! for zero-distance trips; there is no other floor or cap.

use crate::domain::entities::ProviderConfig;

/// Computes the fare for one provider.
///
/// Pure and deterministic. Callers must pass finite, non-negative
/// `distance_km` and `duration_min` and a positive `multiplier`; the
/// route planner only ever produces such values.
#[must_use]
pub fn compute_fare(
    config: &ProviderConfig,
    distance_km: f64,
    duration_min: f64,
    multiplier: f64,
) -> i64 {
    let raw = (config.base_fare() as f64
        + distance_km * config.per_km() as f64
        + duration_min * config.per_min() as f64)
        * multiplier;

    raw.trunc() as i64
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn grab() -> ProviderConfig {
        ProviderConfig::new("grab", 12000, 4500, 1000, "grab://open").unwrap()
    }

    #[test]
    fn worked_example() {
        // 9.32 km / 18.6 min under light traffic:
        // trunc(12000 + 9.32 * 4500 + 18.6 * 1000) = 72540
        assert_eq!(compute_fare(&grab(), 9.32, 18.6, 1.0), 72540);
    }

    #[test]
    fn zero_trip_charges_base_fare_times_multiplier() {
        assert_eq!(compute_fare(&grab(), 0.0, 0.0, 1.0), 12000);
        assert_eq!(compute_fare(&grab(), 0.0, 0.0, 1.6), 19200);
    }

    #[test]
    fn truncates_instead_of_rounding() {
        // 100 + 0.9999 * 100 = 199.99 -> 199, never 200.
        let config = ProviderConfig::new("p", 100, 100, 0, "p://").unwrap();
        assert_eq!(compute_fare(&config, 0.9999, 0.0, 1.0), 199);
    }

    #[test]
    fn heavy_traffic_raises_fare() {
        let light = compute_fare(&grab(), 9.32, 18.6, 1.0);
        let heavy = compute_fare(&grab(), 9.32, 18.6, 1.6);
        assert!(heavy > light);
    }

    #[test]
    fn zero_coefficient_provider() {
        let config = ProviderConfig::new("flat", 20000, 0, 0, "flat://").unwrap();
        assert_eq!(compute_fare(&config, 50.0, 120.0, 1.6), 32000);
    }

    proptest! {
        #[test]
        fn fare_is_non_negative(
            distance in 0.0f64..500.0,
            duration in 0.0f64..600.0,
            multiplier in 1.0f64..2.0,
        ) {
            prop_assert!(compute_fare(&grab(), distance, duration, multiplier) >= 0);
        }

        #[test]
        fn fare_is_monotonic_in_distance(
            d1 in 0.0f64..500.0,
            extra in 0.0f64..100.0,
            duration in 0.0f64..600.0,
            multiplier in 1.0f64..2.0,
        ) {
            let near = compute_fare(&grab(), d1, duration, multiplier);
            let far = compute_fare(&grab(), d1 + extra, duration, multiplier);
            prop_assert!(far >= near);
        }

        #[test]
        fn fare_scales_linearly_with_distance(
            distance in 0.0f64..200.0,
            duration in 0.0f64..300.0,
        ) {
            // With multiplier 1 and integer-valued inputs the formula is
            // exactly linear before truncation.
            let d = distance.trunc();
            let t = duration.trunc();
            let fare = compute_fare(&grab(), d, t, 1.0);
            let expected = 12000 + (d as i64) * 4500 + (t as i64) * 1000;
            prop_assert_eq!(fare, expected);
        }
    }
}
