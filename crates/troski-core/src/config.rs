//! # Fare Configuration
//!
//! Rate constants, passed explicitly to [`FareEngine`](crate::fare::FareEngine).
//!
//! Nothing here reads the environment; `fare-cli` builds a `FareConfig` from
//! `TROSKI_*` variables and hands it over.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::{CoreError, CoreResult};
use crate::validation::{validate_non_negative, validate_share_range};
use crate::{
    DEFAULT_BASE_FARE, DEFAULT_DISTANCE_RATE, DEFAULT_DRIVER_SHARE,
    DEFAULT_FUEL_CONSUMPTION_PER_100KM, DEFAULT_TIME_RATE, MAX_DRIVER_SHARE, MIN_DRIVER_SHARE,
};

// =============================================================================
// Fare Config
// =============================================================================

/// Linear pricing model: `base + km × distance_rate + min × time_rate`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct FareConfig {
    /// Flat amount charged on every trip.
    pub base_fare: f64,

    /// Charged per kilometre.
    pub distance_rate: f64,

    /// Charged per minute.
    pub time_rate: f64,

    /// Driver payout bounds and default.
    pub driver_share: DriverShareConfig,

    /// Litres per 100 km assumed when estimating fuel cost.
    pub fuel_consumption_per_100km: f64,
}

/// Driver share percentages.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct DriverShareConfig {
    pub min: f64,
    pub max: f64,
    pub default: f64,
}

impl Default for DriverShareConfig {
    fn default() -> Self {
        DriverShareConfig {
            min: MIN_DRIVER_SHARE,
            max: MAX_DRIVER_SHARE,
            default: DEFAULT_DRIVER_SHARE,
        }
    }
}

impl Default for FareConfig {
    fn default() -> Self {
        FareConfig {
            base_fare: DEFAULT_BASE_FARE,
            distance_rate: DEFAULT_DISTANCE_RATE,
            time_rate: DEFAULT_TIME_RATE,
            driver_share: DriverShareConfig::default(),
            fuel_consumption_per_100km: DEFAULT_FUEL_CONSUMPTION_PER_100KM,
        }
    }
}

impl FareConfig {
    /// Checks every rate and the share range.
    ///
    /// ## Rules
    /// - All rates finite, `>= 0` and at most `MAX_INPUT_VALUE`
    /// - `0 <= share.min <= share.max <= 100`
    /// - `share.min <= share.default <= share.max`
    pub fn validate(&self) -> CoreResult<()> {
        let rates = [
            ("base_fare", self.base_fare),
            ("distance_rate", self.distance_rate),
            ("time_rate", self.time_rate),
            ("fuel_consumption_per_100km", self.fuel_consumption_per_100km),
        ];
        for (name, value) in rates {
            validate_non_negative(name, value).map_err(|e| CoreError::InvalidConfig {
                reason: e.to_string(),
            })?;
        }

        let share = &self.driver_share;
        validate_share_range(share.min, share.max).map_err(|e| CoreError::InvalidConfig {
            reason: e.to_string(),
        })?;

        if !(share.min..=share.max).contains(&share.default) {
            return Err(CoreError::InvalidConfig {
                reason: format!(
                    "default driver share {} is outside {}..={}",
                    share.default, share.min, share.max
                ),
            });
        }

        Ok(())
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_rates() {
        let config = FareConfig::default();
        assert_eq!(config.base_fare, 3.00);
        assert_eq!(config.distance_rate, 0.75);
        assert_eq!(config.time_rate, 0.20);
        assert_eq!(config.fuel_consumption_per_100km, 8.0);
        assert_eq!(config.driver_share.min, 70.0);
        assert_eq!(config.driver_share.max, 85.0);
        assert_eq!(config.driver_share.default, 75.0);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_rejects_negative_rate() {
        let config = FareConfig {
            distance_rate: -0.5,
            ..FareConfig::default()
        };
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("distance_rate"));
    }

    #[test]
    fn test_rejects_default_share_outside_range() {
        let config = FareConfig {
            driver_share: DriverShareConfig {
                min: 70.0,
                max: 85.0,
                default: 90.0,
            },
            ..FareConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(CoreError::InvalidConfig { .. })
        ));
    }

    #[test]
    fn test_rejects_inverted_share_range() {
        let config = FareConfig {
            driver_share: DriverShareConfig {
                min: 85.0,
                max: 70.0,
                default: 75.0,
            },
            ..FareConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_deserializes_camel_case() {
        let json = r#"{
            "baseFare": 2.5,
            "distanceRate": 1.0,
            "timeRate": 0.1,
            "driverShare": { "min": 60, "max": 90, "default": 80 },
            "fuelConsumptionPer100km": 6.5
        }"#;
        let config: FareConfig = serde_json::from_str(json).unwrap();
        assert_eq!(config.base_fare, 2.5);
        assert_eq!(config.driver_share.default, 80.0);
        assert!(config.validate().is_ok());
    }
}
