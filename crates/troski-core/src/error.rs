//! # Error Types
//!
//! Domain-specific error types for troski-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  troski-core errors (this file)                                        │
//! │  ├── CoreError        - Fare engine failures                           │
//! │  └── ValidationError  - Invalid numeric input at the boundary          │
//! │                                                                         │
//! │  fare-cli errors (app)                                                 │
//! │  └── ConfigError      - Bad environment overrides                      │
//! │                                                                         │
//! │  Flow: ValidationError → CoreError → anyhow → stderr                   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! An out-of-range driver share is NOT an error: it is clamped.

use thiserror::Error;

// =============================================================================
// Core Error
// =============================================================================

/// Fare engine errors.
#[derive(Debug, Error, PartialEq)]
pub enum CoreError {
    /// Input did not pass boundary validation.
    #[error("Invalid input: {0}")]
    Validation(#[from] ValidationError),

    /// A `FareConfig` failed validation.
    ///
    /// ## When This Occurs
    /// - Negative or non-finite rate
    /// - Driver share range outside 0-100, or min > max
    /// - Default share outside the configured range
    #[error("Invalid fare configuration: {reason}")]
    InvalidConfig { reason: String },
}

impl CoreError {
    /// True for the InvalidInput kind (bad caller-supplied numbers).
    pub fn is_invalid_input(&self) -> bool {
        matches!(self, CoreError::Validation(_))
    }
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// Raised before any arithmetic runs, so a bad distance never turns into a
/// negative fee.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ValidationError {
    /// A required field is missing.
    #[error("{field} is required")]
    Required { field: String },

    /// Value is below zero.
    #[error("{field} must not be negative (got {value})")]
    Negative { field: String, value: f64 },

    /// Value is NaN or infinite.
    #[error("{field} must be a finite number")]
    NotFinite { field: String },

    /// Value arrived as something other than a number (string, bool, null).
    #[error("{field} must be a number, got {found}")]
    NotANumber { field: String, found: String },

    /// Numeric value is out of range.
    #[error("{field} must be between {min} and {max}")]
    OutOfRange { field: String, min: f64, max: f64 },

    /// Value has more fractional digits than decimal money math can carry.
    #[error("{field} has too many decimal places")]
    TooPrecise { field: String },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================
