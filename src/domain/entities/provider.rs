//! # Provider Configuration
//!
//! Static fare configuration for ride-hailing providers.
//!
//! The provider table is loaded once at process start and read-only
//! thereafter; it is shared freely across concurrent requests. Insertion
//! order defines the default display order and breaks price ties during
//! ranking.

use crate::domain::errors::{DomainError, DomainResult};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Fare formula coefficients and deep link for one provider.
///
/// Fares are integer amounts in the currency's minor-unit-free form
/// (e.g. VND), so all coefficients are integers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProviderConfig {
    key: String,
    base_fare: i64,
    per_km: i64,
    per_min: i64,
    deeplink: String,
}

impl ProviderConfig {
    /// Creates a new provider configuration.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidProviderConfig` if the key is empty or
    /// any fare coefficient is negative.
    pub fn new(
        key: impl Into<String>,
        base_fare: i64,
        per_km: i64,
        per_min: i64,
        deeplink: impl Into<String>,
    ) -> DomainResult<Self> {
        let config = Self {
            key: key.into(),
            base_fare,
            per_km,
            per_min,
            deeplink: deeplink.into(),
        };
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> DomainResult<()> {
        if self.key.trim().is_empty() {
            return Err(DomainError::invalid_provider_config(
                "provider key must not be empty",
            ));
        }
        if self.base_fare < 0 || self.per_km < 0 || self.per_min < 0 {
            return Err(DomainError::invalid_provider_config(format!(
                "fare coefficients for '{}' must be non-negative",
                self.key
            )));
        }
        Ok(())
    }

    /// Returns the provider identifier.
    #[inline]
    #[must_use]
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Returns the flag-fall fare component.
    #[inline]
    #[must_use]
    pub fn base_fare(&self) -> i64 {
        self.base_fare
    }

    /// Returns the per-kilometer fare coefficient.
    #[inline]
    #[must_use]
    pub fn per_km(&self) -> i64 {
        self.per_km
    }

    /// Returns the per-minute fare coefficient.
    #[inline]
    #[must_use]
    pub fn per_min(&self) -> i64 {
        self.per_min
    }

    /// Returns the URI that opens this provider's mobile app.
    #[inline]
    #[must_use]
    pub fn deeplink(&self) -> &str {
        &self.deeplink
    }
}

impl fmt::Display for ProviderConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: base={} per_km={} per_min={}",
            self.key, self.base_fare, self.per_km, self.per_min
        )
    }
}

/// Ordered, read-only collection of provider configurations.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProviderTable {
    providers: Vec<ProviderConfig>,
}

impl ProviderTable {
    /// Creates a table from a list of configurations, preserving order.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidProviderConfig` if any entry fails
    /// validation or two entries share a key.
    pub fn new(providers: Vec<ProviderConfig>) -> DomainResult<Self> {
        for (i, provider) in providers.iter().enumerate() {
            provider.validate()?;
            if providers
                .iter()
                .take(i)
                .any(|earlier| earlier.key == provider.key)
            {
                return Err(DomainError::invalid_provider_config(format!(
                    "duplicate provider key '{}'",
                    provider.key
                )));
            }
        }
        Ok(Self { providers })
    }

    /// Returns the built-in provider table used when configuration
    /// supplies no providers.
    #[must_use]
    pub fn builtin() -> Self {
        Self {
            providers: vec![
                ProviderConfig {
                    key: "grab".to_string(),
                    base_fare: 12000,
                    per_km: 4500,
                    per_min: 1000,
                    deeplink: "grab://open".to_string(),
                },
                ProviderConfig {
                    key: "be".to_string(),
                    base_fare: 10000,
                    per_km: 4300,
                    per_min: 900,
                    deeplink: "be://open".to_string(),
                },
                ProviderConfig {
                    key: "xanh_sm".to_string(),
                    base_fare: 10000,
                    per_km: 4400,
                    per_min: 800,
                    deeplink: "xanhsm://open".to_string(),
                },
            ],
        }
    }

    /// Returns true if the table holds no providers.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.providers.is_empty()
    }

    /// Returns the number of configured providers.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.providers.len()
    }

    /// Iterates providers in configuration order.
    pub fn iter(&self) -> impl Iterator<Item = &ProviderConfig> {
        self.providers.iter()
    }

    /// Looks up a provider by key.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&ProviderConfig> {
        self.providers.iter().find(|p| p.key == key)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    mod provider_config {
        use super::*;

        #[test]
        fn new_valid() {
            let config = ProviderConfig::new("grab", 12000, 4500, 1000, "grab://open").unwrap();
            assert_eq!(config.key(), "grab");
            assert_eq!(config.base_fare(), 12000);
            assert_eq!(config.per_km(), 4500);
            assert_eq!(config.per_min(), 1000);
            assert_eq!(config.deeplink(), "grab://open");
        }

        #[test]
        fn new_rejects_empty_key() {
            assert!(ProviderConfig::new("  ", 0, 0, 0, "x://open").is_err());
        }

        #[test]
        fn new_rejects_negative_coefficients() {
            assert!(ProviderConfig::new("grab", -1, 4500, 1000, "grab://open").is_err());
            assert!(ProviderConfig::new("grab", 12000, -1, 1000, "grab://open").is_err());
            assert!(ProviderConfig::new("grab", 12000, 4500, -1, "grab://open").is_err());
        }

        #[test]
        fn deserializes_from_toml_shape() {
            let config: ProviderConfig = serde_json::from_value(serde_json::json!({
                "key": "be",
                "base_fare": 10000,
                "per_km": 4300,
                "per_min": 900,
                "deeplink": "be://open"
            }))
            .unwrap();
            assert_eq!(config.key(), "be");
        }
    }

    mod provider_table {
        use super::*;

        #[test]
        fn builtin_order_and_contents() {
            let table = ProviderTable::builtin();
            let keys: Vec<&str> = table.iter().map(ProviderConfig::key).collect();
            assert_eq!(keys, vec!["grab", "be", "xanh_sm"]);
            assert_eq!(table.len(), 3);
            assert!(!table.is_empty());
        }

        #[test]
        fn new_preserves_order() {
            let table = ProviderTable::new(vec![
                ProviderConfig::new("b", 1, 1, 1, "b://").unwrap(),
                ProviderConfig::new("a", 1, 1, 1, "a://").unwrap(),
            ])
            .unwrap();
            let keys: Vec<&str> = table.iter().map(ProviderConfig::key).collect();
            assert_eq!(keys, vec!["b", "a"]);
        }

        #[test]
        fn new_rejects_duplicate_keys() {
            let result = ProviderTable::new(vec![
                ProviderConfig::new("grab", 1, 1, 1, "grab://").unwrap(),
                ProviderConfig::new("grab", 2, 2, 2, "grab://").unwrap(),
            ]);
            assert!(result.is_err());
        }

        #[test]
        fn empty_table_is_allowed() {
            let table = ProviderTable::new(vec![]).unwrap();
            assert!(table.is_empty());
            assert_eq!(table.len(), 0);
        }

        #[test]
        fn get_by_key() {
            let table = ProviderTable::builtin();
            assert_eq!(table.get("be").map(ProviderConfig::base_fare), Some(10000));
            assert!(table.get("uber").is_none());
        }
    }
}
