//! # Fare Engine
//!
//! Converts a trip's distance and duration into a priced fare, a driver
//! payout, and an optional fuel-cost estimate.
//!
//! ## Pricing Model
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  total_fare = round2(base_fare                                          │
//! │                      + distance_km  × distance_rate                     │
//! │                      + duration_min × time_rate)                        │
//! │                                                                         │
//! │  driver_earnings = round2(total_fare × clamp(share, 70, 85) / 100)      │
//! │                                                                         │
//! │  fuel_cost = round2(distance_km × consumption / 100 × price_per_liter)  │
//! │                                                                         │
//! │  All math in Decimal. No surge multiplier. No state.                    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use troski_core::fare::{compute_driver_earnings, compute_fare, estimate_fuel_cost};
//!
//! let fare = compute_fare(10.0, 20.0).unwrap();
//! assert_eq!(fare.total_fare, 14.50);
//!
//! assert_eq!(compute_driver_earnings(100.0, Some(90.0)).unwrap(), 85.00);
//! assert_eq!(estimate_fuel_cost(100.0, 1.50, None).unwrap(), 12.00);
//! ```

use chrono::Utc;
use rust_decimal::Decimal;
use tracing::debug;
use uuid::Uuid;

use crate::config::FareConfig;
use crate::error::{CoreError, CoreResult};
use crate::money::{decimal_to_f64, Money};
use crate::types::{FareBreakdown, FareQuote, SharePercentage, TripMeasurement};
use crate::validation::to_decimal;

// =============================================================================
// Fare Engine
// =============================================================================

/// Fare calculator bound to one validated [`FareConfig`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FareEngine {
    config: FareConfig,
    rates: Rates,
}

/// `FareConfig` rates converted once to decimals.
#[derive(Debug, Clone, Copy, PartialEq)]
struct Rates {
    base_fare: Decimal,
    distance_rate: Decimal,
    time_rate: Decimal,
    fuel_consumption_per_100km: Decimal,
}

impl FareEngine {
    /// Builds an engine after validating `config`.
    pub fn new(config: FareConfig) -> CoreResult<Self> {
        config.validate()?;

        let rate = |field: &str, value: f64| {
            to_decimal(field, value).map_err(|e| CoreError::InvalidConfig {
                reason: e.to_string(),
            })
        };
        let rates = Rates {
            base_fare: rate("base_fare", config.base_fare)?,
            distance_rate: rate("distance_rate", config.distance_rate)?,
            time_rate: rate("time_rate", config.time_rate)?,
            fuel_consumption_per_100km: rate(
                "fuel_consumption_per_100km",
                config.fuel_consumption_per_100km,
            )?,
        };

        Ok(FareEngine { config, rates })
    }

    /// Rates this engine prices with.
    pub fn config(&self) -> &FareConfig {
        &self.config
    }

    /// Prices a trip.
    ///
    /// Components are left unrounded; only `total_fare` is rounded.
    ///
    /// ## Errors
    /// `Validation` when either input is negative, NaN, or infinite.
    pub fn compute_fare(&self, distance_km: f64, duration_min: f64) -> CoreResult<FareBreakdown> {
        let trip = TripMeasurement::new(distance_km, duration_min)?;
        Ok(self.price(&trip))
    }

    /// Prices an already-validated measurement. Infallible.
    pub fn price(&self, trip: &TripMeasurement) -> FareBreakdown {
        self.priced(trip).0
    }

    fn priced(&self, trip: &TripMeasurement) -> (FareBreakdown, Money) {
        let base_fare = self.rates.base_fare;
        let distance_fee = trip.distance() * self.rates.distance_rate;
        let time_fee = trip.duration() * self.rates.time_rate;
        let total = Money::from_decimal(base_fare + distance_fee + time_fee);

        debug!(
            distance_km = trip.distance_km(),
            duration_min = trip.duration_min(),
            total_fare = %total,
            "Fare computed"
        );

        let breakdown = FareBreakdown {
            base_fare: decimal_to_f64(base_fare),
            distance_fee: decimal_to_f64(distance_fee),
            time_fee: decimal_to_f64(time_fee),
            total_fare: total.to_amount(),
        };
        (breakdown, total)
    }

    /// Clamps a requested share into the configured range.
    ///
    /// `None` selects the configured default.
    pub fn driver_share(&self, share_percentage: Option<f64>) -> CoreResult<SharePercentage> {
        let bounds = &self.config.driver_share;
        let requested = share_percentage.unwrap_or(bounds.default);
        let share = SharePercentage::clamped(requested, bounds.min, bounds.max)?;

        if share.value() != requested {
            debug!(requested, applied = share.value(), "Driver share clamped");
        }

        Ok(share)
    }

    fn earnings(&self, total: Decimal, share: SharePercentage) -> CoreResult<Money> {
        let share = to_decimal("share_percentage", share.value())?;
        Ok(Money::from_decimal(total * share / Decimal::ONE_HUNDRED))
    }

    /// Driver payout for a fare total.
    ///
    /// Out-of-range shares are clamped, never rejected.
    ///
    /// ## Errors
    /// `Validation` when `total_fare` is negative or non-finite, or the share is NaN.
    pub fn compute_driver_earnings(
        &self,
        total_fare: f64,
        share_percentage: Option<f64>,
    ) -> CoreResult<f64> {
        let total = to_decimal("total_fare", total_fare)?;
        let share = self.driver_share(share_percentage)?;
        Ok(self.earnings(total, share)?.to_amount())
    }

    fn fuel_cost(
        &self,
        distance: Decimal,
        fuel_price_per_liter: f64,
        fuel_consumption_per_100km: Option<f64>,
    ) -> CoreResult<Money> {
        let price = to_decimal("fuel_price_per_liter", fuel_price_per_liter)?;
        let consumption = match fuel_consumption_per_100km {
            Some(value) => to_decimal("fuel_consumption_per_100km", value)?,
            None => self.rates.fuel_consumption_per_100km,
        };

        let fuel_used_liters = distance * (consumption / Decimal::ONE_HUNDRED);
        Ok(Money::from_decimal(fuel_used_liters * price))
    }

    /// Fuel cost of driving `distance_km`.
    ///
    /// `None` consumption uses the configured litres per 100 km.
    pub fn estimate_fuel_cost(
        &self,
        distance_km: f64,
        fuel_price_per_liter: f64,
        fuel_consumption_per_100km: Option<f64>,
    ) -> CoreResult<f64> {
        let distance = to_decimal("distance_km", distance_km)?;
        let cost = self.fuel_cost(distance, fuel_price_per_liter, fuel_consumption_per_100km)?;
        Ok(cost.to_amount())
    }

    /// Full quote: breakdown, driver earnings and, given a fuel price, the
    /// fuel estimate and the driver's net.
    pub fn quote_trip(
        &self,
        trip: &TripMeasurement,
        share_percentage: Option<f64>,
        fuel_price_per_liter: Option<f64>,
    ) -> CoreResult<FareQuote> {
        let (breakdown, total) = self.priced(trip);
        let share = self.driver_share(share_percentage)?;
        let driver_earnings = self.earnings(total.to_decimal(), share)?;

        let fuel_cost = fuel_price_per_liter
            .map(|price| self.fuel_cost(trip.distance(), price, None))
            .transpose()?;
        let driver_net = fuel_cost.map(|fuel| driver_earnings - fuel);

        Ok(FareQuote {
            id: Uuid::new_v4().to_string(),
            distance_km: trip.distance_km(),
            duration_min: trip.duration_min(),
            breakdown,
            driver_share_percentage: share.value(),
            driver_earnings: driver_earnings.to_amount(),
            fuel_cost: fuel_cost.map(|fuel| fuel.to_amount()),
            driver_net: driver_net.map(|net| net.to_amount()),
            quoted_at: Utc::now(),
        })
    }
}

// =============================================================================
// Default-Rate Shortcuts
// =============================================================================

/// [`FareEngine::compute_fare`] with the default rates.
pub fn compute_fare(distance_km: f64, duration_min: f64) -> CoreResult<FareBreakdown> {
    FareEngine::new(FareConfig::default())?.compute_fare(distance_km, duration_min)
}

/// [`FareEngine::compute_driver_earnings`] with the default 70-85% range.
pub fn compute_driver_earnings(total_fare: f64, share_percentage: Option<f64>) -> CoreResult<f64> {
    FareEngine::new(FareConfig::default())?.compute_driver_earnings(total_fare, share_percentage)
}

/// [`FareEngine::estimate_fuel_cost`] with the default 8 L/100 km.
pub fn estimate_fuel_cost(
    distance_km: f64,
    fuel_price_per_liter: f64,
    fuel_consumption_per_100km: Option<f64>,
) -> CoreResult<f64> {
    FareEngine::new(FareConfig::default())?.estimate_fuel_cost(
        distance_km,
        fuel_price_per_liter,
        fuel_consumption_per_100km,
    )
}

// =============================================================================
// Unit Tests
// =============================================================================
