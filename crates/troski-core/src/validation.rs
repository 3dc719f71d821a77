//! # Validation Module
//!
//! Boundary checks that turn loosely-typed input into numbers the fare
//! engine can trust.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Web front end (TypeScript)                                   │
//! │  └── Immediate user feedback                                           │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: Boundary (THIS MODULE)                                       │
//! │  ├── JSON value → f64, no string/bool coercion                         │
//! │  └── Negative / NaN / infinite / huge → ValidationError                │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 3: FareEngine                                                   │
//! │  └── Pure arithmetic on validated numbers                              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use troski_core::validation::{to_decimal, validate_non_negative};
//!
//! assert!(validate_non_negative("distance_km", 12.4).is_ok());
//! assert!(to_decimal("duration_min", -3.0).is_err());
//! ```

use rust_decimal::Decimal;
use serde_json::Value;

use crate::error::ValidationError;
use crate::money::decimal_from_f64;
use crate::MAX_INPUT_VALUE;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// Numeric Validators
// =============================================================================

/// Checks that a value is finite, not below zero, and at most
/// [`MAX_INPUT_VALUE`].
///
/// Zero is allowed: a cancelled-at-pickup trip still has a base fare.
pub fn validate_non_negative(field: &str, value: f64) -> ValidationResult<f64> {
    if !value.is_finite() {
        return Err(ValidationError::NotFinite {
            field: field.to_string(),
        });
    }

    if value < 0.0 {
        return Err(ValidationError::Negative {
            field: field.to_string(),
            value,
        });
    }

    if value > MAX_INPUT_VALUE {
        return Err(ValidationError::OutOfRange {
            field: field.to_string(),
            min: 0.0,
            max: MAX_INPUT_VALUE,
        });
    }

    Ok(value)
}

/// Validates like [`validate_non_negative`] and converts to `Decimal`
/// through the value's shortest decimal digits.
///
/// ## Example
/// ```rust
/// use rust_decimal::Decimal;
/// use troski_core::validation::to_decimal;
///
/// assert_eq!(to_decimal("distance_km", 1.42).unwrap(), Decimal::new(142, 2));
/// assert!(to_decimal("distance_km", -1.0).is_err());
/// ```
pub fn to_decimal(field: &str, value: f64) -> ValidationResult<Decimal> {
    let value = validate_non_negative(field, value)?;
    decimal_from_f64(value).ok_or_else(|| ValidationError::TooPrecise {
        field: field.to_string(),
    })
}

/// Validates a driver share range.
///
/// ## Rules
/// - Both bounds finite
/// - `0 <= min <= max <= 100`
pub fn validate_share_range(min: f64, max: f64) -> ValidationResult<()> {
    let in_bounds = |p: f64| p.is_finite() && (0.0..=100.0).contains(&p);

    if !in_bounds(min) || !in_bounds(max) || min > max {
        return Err(ValidationError::OutOfRange {
            field: "driver_share".to_string(),
            min: 0.0,
            max: 100.0,
        });
    }

    Ok(())
}

// =============================================================================
// JSON Boundary
// =============================================================================

/// Reads a strictly numeric field from a JSON object.
///
/// ## Rules
/// - Missing or `null` → `Required`
/// - String, bool, array, object → `NotANumber` (`"12"` is NOT accepted)
/// - Number → checked with [`validate_non_negative`]
///
/// ## Example
/// ```rust
/// use serde_json::json;
/// use troski_core::validation::parse_number;
///
/// let body = json!({ "distanceKm": 10, "durationMin": "20" });
/// assert_eq!(parse_number(&body, "distanceKm").unwrap(), 10.0);
/// assert!(parse_number(&body, "durationMin").is_err());
/// ```
pub fn parse_number(object: &Value, field: &str) -> ValidationResult<f64> {
    let value = match object.get(field) {
        None | Some(Value::Null) => {
            return Err(ValidationError::Required {
                field: field.to_string(),
            })
        }
        Some(value) => value,
    };

    let number = value.as_f64().ok_or_else(|| ValidationError::NotANumber {
        field: field.to_string(),
        found: json_type_name(value).to_string(),
    })?;

    validate_non_negative(field, number)
}

/// Reads the optional `sharePercentage` field of a quote request.
///
/// Negative or oversized shares are accepted here; the engine clamps them.
/// Only the JSON type is checked.
pub fn parse_share_percentage(object: &Value) -> ValidationResult<Option<f64>> {
    match object.get("sharePercentage") {
        None | Some(Value::Null) => Ok(None),
        Some(value) => value
            .as_f64()
            .map(Some)
            .ok_or_else(|| ValidationError::NotANumber {
                field: "sharePercentage".to_string(),
                found: json_type_name(value).to_string(),
            }),
    }
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
