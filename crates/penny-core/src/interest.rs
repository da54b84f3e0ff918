//! # Interest Module
//!
//! The two calculator operations and their request/quote types.
//!
//! ## Calculation Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Simple Interest Calculation                        │
//! │                                                                         │
//! │  InterestRequest { principal, rate, time }                              │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  validate_non_negative(principal, rate, time)                           │
//! │       │                                                                 │
//! │       ├── any negative? → ValidationError (names the field)             │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  interest = principal × rate × time / 100                               │
//! │  total    = principal + interest                                        │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  InterestQuote { principal, rate, time, interest, total }               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The arithmetic is plain f64 with no internal rounding; two-decimal
//! rendering is the job of [`crate::money::Usd`].

use serde::{Deserialize, Serialize};

use crate::error::CoreResult;
use crate::validation::validate_non_negative;

// =============================================================================
// Calculator Operations
// =============================================================================

/// Calculates simple interest earned on an investment or loan.
///
/// Formula: `interest = principal × rate × time / 100`
///
/// ## Arguments
/// * `principal` - The initial amount of money
/// * `rate` - Annual interest rate, as a percentage (5 means 5%)
/// * `time` - Time period in years
///
/// ## Errors
/// Fails with a validation error naming the offending field when any
/// argument is negative. Zero is a valid input: the interest is zero.
///
/// ## Example
/// ```rust
/// use penny_core::interest::simple_interest;
///
/// assert_eq!(simple_interest(1000.0, 5.0, 2.0).unwrap(), 100.0);
/// assert!(simple_interest(-100.0, 5.0, 1.0).is_err());
/// ```
pub fn simple_interest(principal: f64, rate: f64, time: f64) -> CoreResult<f64> {
    validate_non_negative("principal", principal)?;
    validate_non_negative("rate", rate)?;
    validate_non_negative("time", time)?;

    Ok(principal * rate * time / 100.0)
}

/// Calculates the total amount (principal + interest) after the given time.
///
/// Validation is delegated to [`simple_interest`]; the preconditions are
/// identical.
///
/// ## Example
/// ```rust
/// use penny_core::interest::total_amount;
///
/// assert_eq!(total_amount(1000.0, 5.0, 2.0).unwrap(), 1100.0);
/// ```
pub fn total_amount(principal: f64, rate: f64, time: f64) -> CoreResult<f64> {
    let interest = simple_interest(principal, rate, time)?;

    Ok(principal + interest)
}

// =============================================================================
// Request / Quote Types
// =============================================================================

/// One calculation request: the three user-supplied values.
///
/// A request has no identity and no persistence; it is evaluated once and
/// discarded.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct InterestRequest {
    /// The initial amount of money, in monetary units.
    pub principal: f64,

    /// Annual interest rate, as a percentage (5 means 5%).
    pub rate: f64,

    /// Time period in years.
    pub time: f64,
}

impl InterestRequest {
    /// Creates a request from the three values.
    pub const fn new(principal: f64, rate: f64, time: f64) -> Self {
        InterestRequest {
            principal,
            rate,
            time,
        }
    }
}

/// The materialized result of evaluating one request.
///
/// ## Invariants
/// - `total == principal + interest`
/// - `interest == principal × rate × time / 100`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct InterestQuote {
    /// Principal, echoed from the request.
    pub principal: f64,

    /// Rate, echoed from the request.
    pub rate: f64,

    /// Time, echoed from the request.
    pub time: f64,

    /// Simple interest accrued over the period.
    pub interest: f64,

    /// Principal plus accrued interest.
    pub total: f64,
}

impl InterestQuote {
    /// Evaluates both calculator operations for a request.
    ///
    /// ## Example
    /// ```rust
    /// use penny_core::interest::{InterestQuote, InterestRequest};
    ///
    /// let request = InterestRequest::new(5000.0, 3.5, 4.0);
    /// let quote = InterestQuote::compute(&request).unwrap();
    ///
    /// assert_eq!(quote.interest, 700.0);
    /// assert_eq!(quote.total, 5700.0);
    /// ```
    pub fn compute(request: &InterestRequest) -> CoreResult<Self> {
        let interest = simple_interest(request.principal, request.rate, request.time)?;
        let total = total_amount(request.principal, request.rate, request.time)?;

        Ok(InterestQuote {
            principal: request.principal,
            rate: request.rate,
            time: request.time,
            interest,
            total,
        })
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
