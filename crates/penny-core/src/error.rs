//! # Error Types
//!
//! Domain-specific error types for penny-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  penny-core errors (this file)                                          │
//! │  ├── CoreError        - Library-level calculator errors                 │
//! │  └── ValidationError  - Input precondition failures                     │
//! │                                                                         │
//! │  console errors (apps/console)                                          │
//! │  └── SessionError     - What the user sees (printed text)               │
//! │                                                                         │
//! │  Flow: ValidationError → CoreError → SessionError → printed message     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Include context in error messages (the offending field name)
//! 3. Errors are enum variants, never String
//! 4. The calculator never catches its own errors; translation to
//!    user-facing text is the console layer's job

use thiserror::Error;

// =============================================================================
// Core Error
// =============================================================================

/// Library-level calculator errors.
///
/// The calculator's only failure mode is a violated input precondition,
/// surfaced here so callers depend on one error type at the crate boundary.
#[derive(Debug, Error)]
pub enum CoreError {
    /// An input violated the calculator's precondition.
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input precondition errors.
///
/// The calculator accepts zero but rejects negatives; the rejection names
/// the offending field and is uniform across all three parameters.
#[derive(Debug, Error)]
pub enum ValidationError {
    /// Value must be zero or greater.
    #[error("{field} must be non-negative")]
    MustBeNonNegative { field: String },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_error_message() {
        let err = ValidationError::MustBeNonNegative {
            field: "principal".to_string(),
        };
        assert_eq!(err.to_string(), "principal must be non-negative");
    }

    #[test]
    fn test_validation_converts_to_core_error() {
        let validation_err = ValidationError::MustBeNonNegative {
            field: "rate".to_string(),
        };
        let core_err: CoreError = validation_err.into();
        assert!(matches!(core_err, CoreError::Validation(_)));
        assert_eq!(
            core_err.to_string(),
            "Validation error: rate must be non-negative"
        );
    }
}
