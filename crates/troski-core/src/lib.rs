//! # troski-core: Pure Fare Logic for Troski
//!
//! Prices a ride from its measured distance and duration, splits the fare
//! with the driver, and estimates fuel cost. Every function is pure: no I/O,
//! no globals, no hidden state.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Troski Architecture                              │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │          Web front end / fare-cli / serverless handlers         │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ FareConfig + trip numbers              │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ troski-core (THIS CRATE) ★                      │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │   fare    │  │   types   │  │   money   │  │ validation│  │   │
//! │  │   │FareEngine │  │ Breakdown │  │  Decimal  │  │  boundary │  │   │
//! │  │   │           │  │  Quote    │  │  Money    │  │  checks   │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO DATABASE • NO NETWORK • PURE FUNCTIONS           │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`fare`] - `FareEngine` and the default-rate shortcuts
//! - [`config`] - `FareConfig` rate structure
//! - [`types`] - Trip, breakdown, share, and quote types
//! - [`money`] - Decimal rounding and the `Money` cents type
//! - [`validation`] - Boundary checks for numeric input
//! - [`error`] - Domain error types
//!
//! ## Example Usage
//!
//! ```rust
//! use troski_core::{FareConfig, FareEngine, TripMeasurement};
//!
//! let engine = FareEngine::new(FareConfig::default()).unwrap();
//! let trip = TripMeasurement::new(10.0, 20.0).unwrap();
//!
//! let quote = engine.quote_trip(&trip, None, None).unwrap();
//! assert_eq!(quote.breakdown.total_fare, 14.50);
//! assert_eq!(quote.driver_share_percentage, 75.0);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod config;
pub mod error;
pub mod fare;
pub mod money;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use config::{DriverShareConfig, FareConfig};
pub use error::{CoreError, CoreResult, ValidationError};
pub use fare::{compute_driver_earnings, compute_fare, estimate_fuel_cost, FareEngine};
pub use money::Money;
pub use types::*;

// =============================================================================
// Default Rates
// =============================================================================

/// Flat amount on every trip.
pub const DEFAULT_BASE_FARE: f64 = 3.00;

/// Per kilometre.
pub const DEFAULT_DISTANCE_RATE: f64 = 0.75;

/// Per minute.
pub const DEFAULT_TIME_RATE: f64 = 0.20;

/// Lowest driver share, in percent.
pub const MIN_DRIVER_SHARE: f64 = 70.0;

/// Highest driver share, in percent.
pub const MAX_DRIVER_SHARE: f64 = 85.0;

/// Share used when the caller gives none.
pub const DEFAULT_DRIVER_SHARE: f64 = 75.0;

/// Litres per 100 km for an average ride-hailing car.
pub const DEFAULT_FUEL_CONSUMPTION_PER_100KM: f64 = 8.0;

/// Upper bound on any single input (distance, duration, amount, rate).
///
/// Keeps every product of two inputs, in cents, well inside an i64.
pub const MAX_INPUT_VALUE: f64 = 1_000_000.0;
