//! # penny-core: Pure Business Logic for Penny
//!
//! This crate is the **heart** of Penny. It contains all business logic
//! as pure functions with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                          Penny Architecture                             │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    Console App (apps/console)                   │   │
//! │  │    Prompt ──► Parse ──► Positivity Guard ──► Report             │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ penny-core (THIS CRATE) ★                       │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐   │   │
//! │  │   │ interest  │  │   money   │  │ validation│  │   error   │   │   │
//! │  │   │ Request   │  │    Usd    │  │ non-neg   │  │  typed    │   │   │
//! │  │   │  Quote    │  │  display  │  │  checks   │  │  errors   │   │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘   │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO GLOBAL STATE • PURE FUNCTIONS                     │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`interest`] - The two calculator operations and their request/quote types
//! - [`money`] - Currency display formatting (two decimals, thousands grouping)
//! - [`error`] - Domain error types
//! - [`validation`] - Input precondition checks
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: Every operation is deterministic - same input = same output
//! 2. **No I/O**: stdin, stdout, file system, network access is FORBIDDEN here
//! 3. **Explicit Errors**: All errors are typed, never strings or panics
//! 4. **Unrounded Arithmetic**: Calculations run in plain f64; rounding happens
//!    only at display time, in [`money::Usd`]
//!
//! ## Example Usage
//!
//! ```rust
//! use penny_core::{simple_interest, total_amount, Usd};
//!
//! let interest = simple_interest(1000.0, 5.0, 2.0).unwrap();
//! let total = total_amount(1000.0, 5.0, 2.0).unwrap();
//!
//! assert_eq!(interest, 100.0);
//! assert_eq!(total, 1100.0);
//! assert_eq!(Usd::new(total).to_string(), "$1,100.00");
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod interest;
pub mod money;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================
// These allow users to do `use penny_core::Usd` instead of
// `use penny_core::money::Usd`

pub use error::{CoreError, CoreResult, ValidationError};
pub use interest::{simple_interest, total_amount, InterestQuote, InterestRequest};
pub use money::Usd;
