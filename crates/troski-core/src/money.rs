//! # Money Module
//!
//! Decimal rounding and the `Money` type a computed amount settles into.
//!
//! ## Where Rounding Happens
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  FARE PIPELINE                                                          │
//! │                                                                         │
//! │  distance_km × rate ──┐                                                 │
//! │  duration_min × rate ─┼──► Decimal sum ──► round2 ──► Money (cents)     │
//! │  base_fare ───────────┘    (unrounded)                                  │
//! │                                                                         │
//! │  Intermediate terms are NEVER pre-rounded. Only the final step is.      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Why Decimal?
//! `1.42 km × 0.75` is exactly `1.065` on paper but `1.06499…` as an `f64`,
//! so rounding the binary value would send a half-cent tie the wrong way.
//! Inputs are converted from their shortest decimal form and all pricing
//! math runs on `rust_decimal::Decimal`.
//!
//! ## Usage
//! ```rust
//! use rust_decimal::Decimal;
//! use troski_core::money::Money;
//!
//! let fare = Money::from_decimal(Decimal::new(4065, 3)); // 4.065
//! assert_eq!(fare.cents(), 407);
//! assert_eq!(fare.to_string(), "$4.07");
//! ```

use std::fmt;
use std::ops::Sub;
use std::str::FromStr;

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

// =============================================================================
// Rounding
// =============================================================================

/// Rounds to 2 decimal places, half away from zero.
///
/// ## Example
/// ```rust
/// use rust_decimal::Decimal;
/// use troski_core::money::round2;
///
/// assert_eq!(round2(Decimal::new(4065, 3)), Decimal::new(407, 2));
/// assert_eq!(round2(Decimal::new(-4065, 3)), Decimal::new(-407, 2));
/// assert_eq!(round2(Decimal::new(4064, 3)), Decimal::new(406, 2));
/// ```
#[inline]
pub fn round2(amount: Decimal) -> Decimal {
    amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}

/// Converts an `f64` through its shortest round-trip digits (`1.42` → `1.42`,
/// not `1.4199999…`).
///
/// Returns `None` for NaN, infinities, and values with more fractional
/// digits than `Decimal` can hold.
pub fn decimal_from_f64(value: f64) -> Option<Decimal> {
    if !value.is_finite() {
        return None;
    }
    Decimal::from_str(&value.to_string()).ok()
}

/// Nearest `f64` to a decimal amount (`1.0650` → `1.065`).
pub fn decimal_to_f64(amount: Decimal) -> f64 {
    amount.to_string().parse().unwrap_or(f64::NAN)
}

/// Formats a computed amount as money, e.g. `1.065` → `$1.07`.
pub fn format_amount(amount: f64) -> String {
    match Money::from_amount(amount) {
        Some(money) => money.to_string(),
        None => amount.to_string(),
    }
}

// =============================================================================
// Money Type
// =============================================================================

/// A monetary value in the smallest currency unit (cents).
///
/// ## Design Decisions
/// - **i64 (signed)**: a driver's net after fuel can be negative
/// - **Single field tuple struct**: zero-cost wrapper over i64
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Money(i64);

impl Money {
    /// Rounds a decimal amount to cents, half away from zero.
    ///
    /// Callers keep amounts inside the validated input bounds, so the cent
    /// count always fits an i64.
    pub fn from_decimal(amount: Decimal) -> Self {
        let mut rounded = round2(amount);
        rounded.rescale(2);
        Money(rounded.mantissa() as i64)
    }

    /// Rounds an `f64` amount to cents via its decimal digits.
    ///
    /// ## Example
    /// ```rust
    /// use troski_core::money::Money;
    ///
    /// assert_eq!(Money::from_amount(1.065).unwrap().cents(), 107);
    /// assert_eq!(Money::from_amount(3.0).unwrap().cents(), 300);
    /// assert!(Money::from_amount(f64::NAN).is_none());
    /// ```
    pub fn from_amount(amount: f64) -> Option<Self> {
        decimal_from_f64(amount).map(Money::from_decimal)
    }

    /// Returns the value in cents.
    #[inline]
    pub const fn cents(&self) -> i64 {
        self.0
    }

    /// Returns the major unit portion.
    #[inline]
    pub const fn dollars(&self) -> i64 {
        self.0 / 100
    }

    /// Returns the minor unit portion (always 0-99).
    #[inline]
    pub const fn cents_part(&self) -> i64 {
        (self.0 % 100).abs()
    }

    /// Exact decimal value (`1450` cents → `14.50`).
    #[inline]
    pub fn to_decimal(&self) -> Decimal {
        Decimal::new(self.0, 2)
    }

    /// Nearest `f64` to the cent value, for JSON.
    #[inline]
    pub fn to_amount(&self) -> f64 {
        self.0 as f64 / 100.0
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Shows money as `$14.50` / `-$1.20`.
///
/// ## Note
/// Debug and CLI output only. The web front end formats with the rider's locale.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        write!(
            f,
            "{}${}.{:02}",
            sign,
            self.dollars().abs(),
            self.cents_part()
        )
    }
}

/// Driver net: earnings minus fuel.
impl Sub for Money {
    type Output = Self;

    #[inline]
    fn sub(self, other: Self) -> Self {
        Money(self.0 - other.0)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
