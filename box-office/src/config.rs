//! Configuration management for the box office.
//!
//! Loads configuration from environment variables with sensible defaults. Ticket
//! prices and the per-purchase limit are fixed and deliberately absent here.

use serde::{Deserialize, Serialize};
use std::env;

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Logging configuration
    pub logging: LoggingConfig,
    /// Metrics configuration
    pub metrics: MetricsConfig,
}

/// Logging configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// `EnvFilter` directives used when `RUST_LOG` is unset
    pub filter: String,
    /// Colour output
    pub ansi: bool,
}

/// Metrics configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MetricsConfig {
    /// Install a Prometheus recorder and print its exposition on exit
    pub enabled: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self::from_lookup(|_| None)
    }
}

impl Config {
    /// Load configuration from environment variables.
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration from an arbitrary key lookup.
    ///
    /// Unparseable values fall back to their defaults.
    #[must_use]
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        Self {
            logging: LoggingConfig {
                filter: lookup("BOX_OFFICE_LOG")
                    .unwrap_or_else(|| "info,box_office=debug".to_string()),
                ansi: lookup("BOX_OFFICE_LOG_ANSI")
                    .and_then(|s| s.parse().ok())
                    .unwrap_or(true),
            },
            metrics: MetricsConfig {
                enabled: lookup("BOX_OFFICE_METRICS_ENABLED")
                    .and_then(|s| s.parse().ok())
                    .unwrap_or(false),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn defaults_apply_when_nothing_is_set() {
        let config = Config::default();
        assert_eq!(config.logging.filter, "info,box_office=debug");
        assert!(config.logging.ansi);
        assert!(!config.metrics.enabled);
    }

    #[test]
    fn values_are_read_from_lookup() {
        let vars = HashMap::from([
            ("BOX_OFFICE_LOG", "warn"),
            ("BOX_OFFICE_LOG_ANSI", "false"),
            ("BOX_OFFICE_METRICS_ENABLED", "true"),
        ]);
        let config = Config::from_lookup(|key| vars.get(key).map(ToString::to_string));

        assert_eq!(config.logging.filter, "warn");
        assert!(!config.logging.ansi);
        assert!(config.metrics.enabled);
    }

    #[test]
    fn unparseable_flags_fall_back_to_defaults() {
        let config = Config::from_lookup(|key| {
            (key == "BOX_OFFICE_METRICS_ENABLED").then(|| "yes please".to_string())
        });
        assert!(!config.metrics.enabled);
    }
}
