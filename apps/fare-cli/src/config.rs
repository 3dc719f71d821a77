//! CLI configuration module.
//!
//! Configuration is loaded from environment variables with fallback to defaults.

use std::env;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use troski_core::{DriverShareConfig, FareConfig};

/// How quotes are printed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl FromStr for OutputFormat {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            _ => Err(ConfigError::InvalidValue("TROSKI_OUTPUT".to_string())),
        }
    }
}

/// CLI configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CliConfig {
    /// Rates handed to the fare engine
    pub fare: FareConfig,

    /// Fuel price used for the driver-net estimate (optional)
    pub fuel_price_per_liter: Option<f64>,

    /// Output format
    pub output: OutputFormat,
}

impl CliConfig {
    /// Load configuration from the process environment.
    pub fn load() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration through `lookup`, so tests need not touch the
    /// process environment.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = FareConfig::default();

        let number = |key: &str, default: f64| -> Result<f64, ConfigError> {
            match lookup(key) {
                Some(raw) => raw
                    .trim()
                    .parse()
                    .map_err(|_| ConfigError::InvalidValue(key.to_string())),
                None => Ok(default),
            }
        };

        let fare = FareConfig {
            base_fare: number("TROSKI_BASE_FARE", defaults.base_fare)?,
            distance_rate: number("TROSKI_DISTANCE_RATE", defaults.distance_rate)?,
            time_rate: number("TROSKI_TIME_RATE", defaults.time_rate)?,
            driver_share: DriverShareConfig {
                min: number("TROSKI_DRIVER_SHARE_MIN", defaults.driver_share.min)?,
                max: number("TROSKI_DRIVER_SHARE_MAX", defaults.driver_share.max)?,
                default: number("TROSKI_DRIVER_SHARE_DEFAULT", defaults.driver_share.default)?,
            },
            fuel_consumption_per_100km: number(
                "TROSKI_FUEL_CONSUMPTION_PER_100KM",
                defaults.fuel_consumption_per_100km,
            )?,
        };

        let fuel_price_per_liter = match lookup("TROSKI_FUEL_PRICE_PER_LITER") {
            Some(raw) => Some(
                raw.trim()
                    .parse()
                    .map_err(|_| ConfigError::InvalidValue("TROSKI_FUEL_PRICE_PER_LITER".to_string()))?,
            ),
            None => None,
        };

        let output = match lookup("TROSKI_OUTPUT") {
            Some(raw) => raw.parse()?,
            None => OutputFormat::default(),
        };

        Ok(CliConfig {
            fare,
            fuel_price_per_liter,
            output,
        })
    }
}

/// Configuration error types.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for {0}")]
    InvalidValue(String),
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults_when_unset() {
        let config = CliConfig::from_lookup(|_| None).unwrap();
        assert_eq!(config.fare, FareConfig::default());
        assert_eq!(config.fuel_price_per_liter, None);
        assert_eq!(config.output, OutputFormat::Text);
    }

    #[test]
    fn test_overrides() {
        let config = CliConfig::from_lookup(lookup_from(&[
            ("TROSKI_BASE_FARE", "4.5"),
            ("TROSKI_DRIVER_SHARE_DEFAULT", " 80 "),
            ("TROSKI_FUEL_PRICE_PER_LITER", "1.65"),
            ("TROSKI_OUTPUT", "JSON"),
        ]))
        .unwrap();

        assert_eq!(config.fare.base_fare, 4.5);
        assert_eq!(config.fare.distance_rate, 0.75);
        assert_eq!(config.fare.driver_share.default, 80.0);
        assert_eq!(config.fuel_price_per_liter, Some(1.65));
        assert_eq!(config.output, OutputFormat::Json);
    }

    #[test]
    fn test_invalid_value_names_variable() {
        let err = CliConfig::from_lookup(lookup_from(&[("TROSKI_TIME_RATE", "cheap")]))
            .unwrap_err();
        assert_eq!(err.to_string(), "Invalid value for TROSKI_TIME_RATE");

        let err = CliConfig::from_lookup(lookup_from(&[("TROSKI_OUTPUT", "xml")])).unwrap_err();
        assert_eq!(err.to_string(), "Invalid value for TROSKI_OUTPUT");
    }
}
