//! # Domain Types
//!
//! Values that flow in and out of the fare engine.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │ TripMeasurement │──►│  FareBreakdown  │──►│   FareQuote     │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  distance_km    │   │  base_fare      │   │  id (UUID)      │       │
//! │  │  duration_min   │   │  distance_fee   │   │  breakdown      │       │
//! │  └─────────────────┘   │  time_fee       │   │  driver_earnings│       │
//! │                        │  total_fare     │   │  fuel_cost?     │       │
//! │  ┌─────────────────┐   └─────────────────┘   └─────────────────┘       │
//! │  │ SharePercentage │                                                    │
//! │  │  clamped 70..85 │                                                    │
//! │  └─────────────────┘                                                    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Nothing here is persisted; every value lives for one request.

use std::fmt;

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use ts_rs::TS;

use crate::error::ValidationError;
use crate::money::format_amount;
use crate::validation::{parse_number, to_decimal};

// =============================================================================
// Trip Measurement
// =============================================================================

/// Measured distance and duration of one trip.
///
/// Fields are private so every instance has passed validation. The decimal
/// copies are what the engine prices with.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct TripMeasurement {
    distance_km: f64,
    duration_min: f64,

    #[serde(skip)]
    #[ts(skip)]
    distance: Decimal,

    #[serde(skip)]
    #[ts(skip)]
    duration: Decimal,
}

impl TripMeasurement {
    /// Validates and builds a measurement.
    ///
    /// ## Example
    /// ```rust
    /// use troski_core::types::TripMeasurement;
    ///
    /// assert!(TripMeasurement::new(10.0, 20.0).is_ok());
    /// assert!(TripMeasurement::new(-1.0, 20.0).is_err());
    /// ```
    pub fn new(distance_km: f64, duration_min: f64) -> Result<Self, ValidationError> {
        Ok(TripMeasurement {
            distance_km,
            duration_min,
            distance: to_decimal("distance_km", distance_km)?,
            duration: to_decimal("duration_min", duration_min)?,
        })
    }

    /// Builds a measurement from a `{ "distanceKm", "durationMin" }` body.
    ///
    /// Numeric strings are rejected rather than coerced.
    pub fn from_json(body: &Value) -> Result<Self, ValidationError> {
        let distance_km = parse_number(body, "distanceKm")?;
        let duration_min = parse_number(body, "durationMin")?;
        Self::new(distance_km, duration_min)
    }

    #[inline]
    pub fn distance_km(&self) -> f64 {
        self.distance_km
    }

    #[inline]
    pub fn duration_min(&self) -> f64 {
        self.duration_min
    }

    #[inline]
    pub(crate) fn distance(&self) -> Decimal {
        self.distance
    }

    #[inline]
    pub(crate) fn duration(&self) -> Decimal {
        self.duration
    }
}

// =============================================================================
// Fare Breakdown
// =============================================================================

/// Itemized fare.
///
/// `total_fare` is rounded to 2 decimals; the three components are not.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct FareBreakdown {
    pub base_fare: f64,
    pub distance_fee: f64,
    pub time_fee: f64,
    pub total_fare: f64,
}

/// Receipt-style lines for CLI output.
impl fmt::Display for FareBreakdown {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Base fare     {}", format_amount(self.base_fare))?;
        writeln!(f, "Distance      {}", format_amount(self.distance_fee))?;
        writeln!(f, "Time          {}", format_amount(self.time_fee))?;
        write!(f, "Total         {}", format_amount(self.total_fare))
    }
}

// =============================================================================
// Share Percentage
// =============================================================================

/// A driver share percentage already clamped into its allowed range.
///
/// Only [`SharePercentage::clamped`] builds one, so it is serialize-only.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, TS)]
#[ts(export)]
pub struct SharePercentage(f64);

impl SharePercentage {
    /// Clamps `requested` into `min..=max`.
    ///
    /// Out-of-range values are silently moved to the nearest bound. NaN is
    /// the only rejected input; infinities clamp like any other value.
    ///
    /// ## Example
    /// ```rust
    /// use troski_core::types::SharePercentage;
    ///
    /// assert_eq!(SharePercentage::clamped(50.0, 70.0, 85.0).unwrap().value(), 70.0);
    /// assert_eq!(SharePercentage::clamped(90.0, 70.0, 85.0).unwrap().value(), 85.0);
    /// ```
    pub fn clamped(requested: f64, min: f64, max: f64) -> Result<Self, ValidationError> {
        if requested.is_nan() {
            return Err(ValidationError::NotFinite {
                field: "share_percentage".to_string(),
            });
        }
        Ok(SharePercentage(requested.clamp(min, max)))
    }

    #[inline]
    pub fn value(&self) -> f64 {
        self.0
    }
}

// =============================================================================
// Fare Quote
// =============================================================================

/// What the rider and driver screens show for one trip.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct FareQuote {
    /// Unique identifier (UUID v4).
    pub id: String,

    pub distance_km: f64,
    pub duration_min: f64,

    pub breakdown: FareBreakdown,

    /// Share actually applied, after clamping.
    pub driver_share_percentage: f64,

    pub driver_earnings: f64,

    /// Present when a fuel price was supplied.
    pub fuel_cost: Option<f64>,

    /// Earnings minus fuel. Negative when fuel costs more than the payout.
    pub driver_net: Option<f64>,

    #[ts(as = "String")]
    pub quoted_at: DateTime<Utc>,
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_trip_measurement_accessors() {
        let trip = TripMeasurement::new(10.0, 20.0).unwrap();
        assert_eq!(trip.distance_km(), 10.0);
        assert_eq!(trip.duration_min(), 20.0);
    }

    #[test]
    fn test_trip_measurement_rejects_bad_input() {
        assert!(TripMeasurement::new(f64::NAN, 1.0).is_err());
        assert!(TripMeasurement::new(1.0, -0.5).is_err());
    }

    #[test]
    fn test_trip_measurement_from_json() {
        let trip = TripMeasurement::from_json(&json!({ "distanceKm": 5.2, "durationMin": 14 }))
            .unwrap();
        assert_eq!(trip.distance_km(), 5.2);
        assert_eq!(trip.duration_min(), 14.0);

        let err = TripMeasurement::from_json(&json!({ "distanceKm": "5", "durationMin": 14 }))
            .unwrap_err();
        assert!(matches!(err, ValidationError::NotANumber { .. }));
    }

    #[test]
    fn test_breakdown_serializes_camel_case() {
        let breakdown = FareBreakdown {
            base_fare: 3.0,
            distance_fee: 7.5,
            time_fee: 4.0,
            total_fare: 14.5,
        };
        let value = serde_json::to_value(breakdown).unwrap();
        assert_eq!(
            value,
            json!({ "baseFare": 3.0, "distanceFee": 7.5, "timeFee": 4.0, "totalFare": 14.5 })
        );
    }

    #[test]
    fn test_trip_serializes_without_decimal_copies() {
        let trip = TripMeasurement::new(1.42, 3.0).unwrap();
        assert_eq!(
            serde_json::to_value(trip).unwrap(),
            json!({ "distanceKm": 1.42, "durationMin": 3.0 })
        );
        assert_eq!(trip.distance(), Decimal::new(142, 2));
    }

    #[test]
    fn test_breakdown_display() {
        let breakdown = FareBreakdown {
            base_fare: 3.0,
            distance_fee: 7.5,
            time_fee: 4.0,
            total_fare: 14.5,
        };
        let text = breakdown.to_string();
        assert!(text.starts_with("Base fare     $3.00"));
        assert!(text.ends_with("Total         $14.50"));

        let tie = FareBreakdown {
            base_fare: 3.0,
            distance_fee: 1.065,
            time_fee: 0.0,
            total_fare: 4.07,
        };
        assert!(tie.to_string().contains("Distance      $1.07"));
    }

    #[test]
    fn test_share_percentage_clamps() {
        assert_eq!(SharePercentage::clamped(75.0, 70.0, 85.0).unwrap().value(), 75.0);
        assert_eq!(SharePercentage::clamped(70.0, 70.0, 85.0).unwrap().value(), 70.0);
        assert_eq!(SharePercentage::clamped(85.0, 70.0, 85.0).unwrap().value(), 85.0);
        assert_eq!(
            SharePercentage::clamped(f64::INFINITY, 70.0, 85.0).unwrap().value(),
            85.0
        );
        assert_eq!(
            SharePercentage::clamped(-20.0, 70.0, 85.0).unwrap().value(),
            70.0
        );
        assert!(SharePercentage::clamped(f64::NAN, 70.0, 85.0).is_err());
    }

    #[test]
    fn test_share_percentage_serializes_clamped_value() {
        let share = SharePercentage::clamped(120.0, 70.0, 85.0).unwrap();
        assert_eq!(serde_json::to_string(&share).unwrap(), "85.0");
    }
}
