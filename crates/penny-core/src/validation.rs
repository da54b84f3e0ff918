//! # Validation Module
//!
//! Input precondition checks for the calculator.
//!
//! The calculator's contract is "non-negative": zero principal, zero rate,
//! or zero time is a valid request (the interest is simply zero). The
//! stricter "strictly positive" rule belongs to the console layer, which
//! applies it before the calculator ever runs.

use crate::error::ValidationError;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Validates that a calculator input is non-negative.
///
/// ## Rules
/// - Must be >= 0
/// - Zero is allowed
///
/// ## Example
/// ```rust
/// use penny_core::validation::validate_non_negative;
///
/// assert!(validate_non_negative("principal", 1000.0).is_ok());
/// assert!(validate_non_negative("principal", 0.0).is_ok());
/// assert!(validate_non_negative("principal", -100.0).is_err());
/// ```
pub fn validate_non_negative(field: &str, value: f64) -> ValidationResult<()> {
    if value < 0.0 {
        return Err(ValidationError::MustBeNonNegative {
            field: field.to_string(),
        });
    }

    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_non_negative_accepts_zero_and_positive() {
        assert!(validate_non_negative("principal", 0.0).is_ok());
        assert!(validate_non_negative("rate", 3.5).is_ok());
        assert!(validate_non_negative("time", 1e9).is_ok());
    }

    #[test]
    fn test_non_negative_rejects_negative() {
        let err = validate_non_negative("time", -0.5).unwrap_err();
        assert_eq!(err.to_string(), "time must be non-negative");
    }

    // NaN compares false against every bound, so it passes the precondition
    // and flows through the arithmetic as NaN.
    #[test]
    fn test_non_negative_passes_nan_through() {
        assert!(validate_non_negative("rate", f64::NAN).is_ok());
    }
}
