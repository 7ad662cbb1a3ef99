//! # Configuration
//!
//! Settings tree loaded once at startup from defaults, an optional TOML
//! file, and environment variables prefixed `FARELINK__` (double
//! underscore as the nesting separator).
//!
//! ```toml
//! [server]
//! host = "0.0.0.0"
//! port = 8000
//!
//! [directions]
//! base_url = "https://api.openrouteservice.org"
//! api_key = ""
//! timeout_ms = 5000
//!
//! [[providers]]
//! key = "grab"
//! base_fare = 12000
//! per_km = 4500
//! per_min = 1000
//! deeplink = "grab://open"
//! ```

use crate::domain::entities::{ProviderConfig, ProviderTable};
use crate::domain::errors::DomainResult;
use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

/// Default configuration file name, resolved relative to the working
/// directory.
pub const DEFAULT_CONFIG_FILE: &str = "farelink";

/// HTTP server settings.
#[derive(Debug, Clone, Deserialize)]
pub struct ServerSettings {
    /// Bind host.
    pub host: String,
    /// Bind port.
    pub port: u16,
}

/// External directions service settings.
#[derive(Debug, Clone, Deserialize)]
pub struct DirectionsSettings {
    /// Service base URL, without a trailing slash.
    pub base_url: String,
    /// API key sent in the `Authorization` header.
    pub api_key: String,
    /// Request timeout in milliseconds; a timeout triggers the
    /// great-circle fallback immediately, with no retry.
    pub timeout_ms: u64,
}

/// Geocoding service settings.
#[derive(Debug, Clone, Deserialize)]
pub struct GeocodingSettings {
    /// Service base URL, including the version prefix.
    pub base_url: String,
    /// API key; geocoding is disabled (best-effort empty results) when
    /// absent.
    #[serde(default)]
    pub api_key: Option<String>,
    /// Request timeout in milliseconds.
    pub timeout_ms: u64,
}

/// Root settings tree.
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    /// HTTP server settings.
    pub server: ServerSettings,
    /// Directions service settings.
    pub directions: DirectionsSettings,
    /// Geocoding service settings.
    pub geocoding: GeocodingSettings,
    /// Provider fare configurations; empty means "use the built-in
    /// table".
    #[serde(default)]
    pub providers: Vec<ProviderConfig>,
}

impl Settings {
    /// Loads settings from the default file location and environment.
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError` if a source cannot be read or the merged
    /// tree does not deserialize.
    pub fn load() -> Result<Self, ConfigError> {
        Self::from_file(DEFAULT_CONFIG_FILE)
    }

    /// Loads settings, merging defaults, the named file (optional), and
    /// environment overrides.
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError` if a source cannot be read or the merged
    /// tree does not deserialize.
    pub fn from_file(name: &str) -> Result<Self, ConfigError> {
        Config::builder()
            .set_default("server.host", "0.0.0.0")?
            .set_default("server.port", 8000)?
            .set_default("directions.base_url", "https://api.openrouteservice.org")?
            .set_default("directions.api_key", "")?
            .set_default("directions.timeout_ms", 5000)?
            .set_default("geocoding.base_url", "https://mapapis.openmap.vn/v1")?
            .set_default("geocoding.timeout_ms", 3000)?
            .add_source(File::with_name(name).required(false))
            .add_source(Environment::with_prefix("FARELINK").separator("__"))
            .build()?
            .try_deserialize()
    }

    /// Returns the validated provider table, falling back to the built-in
    /// providers when configuration lists none.
    ///
    /// # Errors
    ///
    /// Returns a `DomainError` if a configured provider entry is invalid.
    pub fn provider_table(&self) -> DomainResult<ProviderTable> {
        if self.providers.is_empty() {
            Ok(ProviderTable::builtin())
        } else {
            ProviderTable::new(self.providers.clone())
        }
    }

    /// Returns the socket address string to bind.
    #[must_use]
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn defaults_without_file() {
        let settings = Settings::from_file("no-such-config-file").unwrap();
        assert_eq!(settings.server.port, 8000);
        assert_eq!(settings.bind_addr(), "0.0.0.0:8000");
        assert_eq!(settings.directions.timeout_ms, 5000);
        assert!(settings.geocoding.api_key.is_none());
        assert!(settings.providers.is_empty());
    }

    #[test]
    fn empty_providers_fall_back_to_builtin() {
        let settings = Settings::from_file("no-such-config-file").unwrap();
        let table = settings.provider_table().unwrap();
        assert_eq!(table.len(), 3);
        assert!(table.get("grab").is_some());
    }

    #[test]
    fn configured_providers_are_validated() {
        let settings = Settings {
            server: ServerSettings {
                host: "127.0.0.1".to_string(),
                port: 9000,
            },
            directions: DirectionsSettings {
                base_url: "http://localhost".to_string(),
                api_key: String::new(),
                timeout_ms: 1000,
            },
            geocoding: GeocodingSettings {
                base_url: "http://localhost".to_string(),
                api_key: None,
                timeout_ms: 1000,
            },
            providers: vec![serde_json::from_value(serde_json::json!({
                "key": "grab",
                "base_fare": -1,
                "per_km": 4500,
                "per_min": 1000,
                "deeplink": "grab://open"
            }))
            .unwrap()],
        };

        assert!(settings.provider_table().is_err());
    }
}
