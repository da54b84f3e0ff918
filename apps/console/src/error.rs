//! # Session Error Type
//!
//! Unified error type for the console session.
//!
//! ## Error Handling Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Error Flow in Penny                                │
//! │                                                                         │
//! │  User Input                  Console Session                            │
//! │  ──────────                  ───────────────                            │
//! │                                                                         │
//! │  "abc"        ──► parse ──► InvalidNumber ──────┐                       │
//! │                                                 │                       │
//! │  "0"          ──► guard ──► NonPositiveInput ───┤                       │
//! │                                                 ├──► user_message()     │
//! │  (stdin EOF)  ──► read  ──► UnexpectedEof ──────┤    printed to stdout  │
//! │                                                 │                       │
//! │  (core error) ──► compute ► Calculator ─────────┘                       │
//! │                                                                         │
//! │  The session never panics on user input and the process exits 0;        │
//! │  failure is reported as text, not as an exit status.                    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::io;
use std::num::ParseFloatError;

use penny_core::CoreError;
use thiserror::Error;

/// Everything that can end a console session before the results block.
#[derive(Debug, Error)]
pub enum SessionError {
    /// Input text did not parse as a number.
    #[error("Please enter valid numbers. {0}")]
    InvalidNumber(#[from] ParseFloatError),

    /// Business rule: the console only quotes strictly positive values.
    /// Stricter than the calculator's non-negative precondition.
    #[error("All values must be positive numbers.")]
    NonPositiveInput,

    /// Standard input closed before all three values were read.
    #[error("unexpected end of input")]
    UnexpectedEof,

    /// The calculator rejected the request. Reached only if a request
    /// bypasses the positivity guard.
    #[error(transparent)]
    Calculator(#[from] CoreError),

    /// The terminal itself failed; nothing can be reported to the user.
    #[error(transparent)]
    Io(#[from] io::Error),
}

impl SessionError {
    /// Translates the failure into the exact line printed to the user.
    ///
    /// Expected failures (bad number, non-positive values) get an `Error:`
    /// prefix; everything else is reported through the generic
    /// unexpected-error wording.
    pub fn user_message(&self) -> String {
        match self {
            SessionError::InvalidNumber(_) | SessionError::NonPositiveInput => {
                format!("Error: {self}")
            }
            other => format!("An unexpected error occurred: {other}"),
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use penny_core::ValidationError;

    #[test]
    fn test_invalid_number_message() {
        let parse_err = "abc".parse::<f64>().unwrap_err();
        let err = SessionError::from(parse_err);
        assert_eq!(
            err.user_message(),
            "Error: Please enter valid numbers. invalid float literal"
        );
    }

    #[test]
    fn test_non_positive_message() {
        assert_eq!(
            SessionError::NonPositiveInput.user_message(),
            "Error: All values must be positive numbers."
        );
    }

    #[test]
    fn test_calculator_error_is_reported_generically() {
        let core_err = CoreError::from(ValidationError::MustBeNonNegative {
            field: "principal".to_string(),
        });
        let err = SessionError::from(core_err);
        assert_eq!(
            err.user_message(),
            "An unexpected error occurred: Validation error: principal must be non-negative"
        );
    }

    #[test]
    fn test_eof_is_reported_generically() {
        assert_eq!(
            SessionError::UnexpectedEof.user_message(),
            "An unexpected error occurred: unexpected end of input"
        );
    }
}
