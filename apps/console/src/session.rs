//! # Console Session
//!
//! One interactive prompt/report session.
//!
//! ## Session Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                       Console Session States                            │
//! │                                                                         │
//! │  ┌───────────┐      ┌───────────┐      ┌───────────┐                    │
//! │  │ Prompting │─────►│ Computing │─────►│ Reporting │                    │
//! │  └─────┬─────┘      └─────┬─────┘      └───────────┘                    │
//! │        │                  │                                             │
//! │        │ parse failure    │ calculator error                            │
//! │        │ EOF              │                                             │
//! │        │ value <= 0       │                                             │
//! │        ▼                  ▼                                             │
//! │  ┌─────────────────────────────┐                                        │
//! │  │  error report (one line)    │   session ends either way; the user    │
//! │  └─────────────────────────────┘   re-runs the program to try again     │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! No retry loop: a failed parse or a rejected value terminates the session
//! after one printed line.
//!
//! ## Testability
//! The session is generic over `BufRead`/`Write`, so tests drive it with
//! in-memory buffers while `main` passes locked stdin/stdout.

use std::io::{self, BufRead, Write};

use penny_core::{InterestQuote, InterestRequest, Usd};
use tracing::{debug, info};

use crate::error::SessionError;

/// Banner printed before the first prompt.
pub const BANNER: &str = "=== Simple Interest Calculator ===";

/// An interactive calculator session over a pair of streams.
pub struct Session<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Session<R, W> {
    /// Creates a session over the given streams.
    pub fn new(input: R, output: W) -> Self {
        Session { input, output }
    }

    /// Runs the session to completion.
    ///
    /// Every user-level failure is reported as printed text and swallowed;
    /// the only errors that escape are I/O failures on the output stream
    /// itself, where reporting is impossible.
    pub fn run(&mut self) -> io::Result<()> {
        writeln!(self.output, "{BANNER}")?;
        writeln!(self.output)?;

        match self.quote() {
            Ok(quote) => self.report(&quote)?,
            Err(SessionError::Io(err)) => return Err(err),
            Err(err) => {
                info!(%err, "session ended without a quote");
                writeln!(self.output, "{}", err.user_message())?;
            }
        }

        Ok(())
    }

    /// Prompting and Computing: reads the three values, applies the
    /// positivity rule, then evaluates the request.
    fn quote(&mut self) -> Result<InterestQuote, SessionError> {
        let principal = self.prompt_value("Enter principal amount: ")?;
        let rate = self.prompt_value("Enter annual interest rate (%): ")?;
        let time = self.prompt_value("Enter time period (years): ")?;

        debug!(principal, rate, time, "inputs parsed");

        // Business rule, stricter than the calculator's precondition:
        // zero is rejected here even though the calculator accepts it.
        if principal <= 0.0 || rate <= 0.0 || time <= 0.0 {
            return Err(SessionError::NonPositiveInput);
        }

        let request = InterestRequest::new(principal, rate, time);
        Ok(InterestQuote::compute(&request)?)
    }

    /// Writes one prompt (no trailing newline), then reads and parses the
    /// reply as a number.
    fn prompt_value(&mut self, prompt: &str) -> Result<f64, SessionError> {
        write!(self.output, "{prompt}")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(SessionError::UnexpectedEof);
        }

        Ok(line.trim().parse()?)
    }

    /// Reporting: prints the results block.
    fn report(&mut self, quote: &InterestQuote) -> io::Result<()> {
        info!(
            interest = quote.interest,
            total = quote.total,
            "quote computed"
        );

        writeln!(self.output)?;
        writeln!(self.output, "--- Results ---")?;
        writeln!(self.output, "Principal: {}", Usd::new(quote.principal))?;
        writeln!(self.output, "Interest Rate: {}%", quote.rate)?;
        writeln!(self.output, "Time: {} years", quote.time)?;
        writeln!(self.output, "Simple Interest: {}", Usd::new(quote.interest))?;
        writeln!(self.output, "Total Amount: {}", Usd::new(quote.total))?;

        Ok(())
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    /// Runs a session over an input script and returns everything written.
    fn run_session(input: &str) -> String {
        let mut output = Vec::new();
        Session::new(Cursor::new(input), &mut output)
            .run()
            .expect("in-memory session cannot hit output I/O errors");
        String::from_utf8(output).expect("session output is valid UTF-8")
    }

    #[test]
    fn test_happy_path_whole_numbers() {
        let output = run_session("1000\n5\n2\n");

        assert_eq!(
            output,
            "=== Simple Interest Calculator ===\n\
             \n\
             Enter principal amount: Enter annual interest rate (%): Enter time period (years): \n\
             --- Results ---\n\
             Principal: $1,000.00\n\
             Interest Rate: 5%\n\
             Time: 2 years\n\
             Simple Interest: $100.00\n\
             Total Amount: $1,100.00\n"
        );
    }

    #[test]
    fn test_happy_path_fractional_rate() {
        let output = run_session("5000\n3.5\n4\n");

        assert!(output.contains("Principal: $5,000.00\n"));
        assert!(output.contains("Interest Rate: 3.5%\n"));
        assert!(output.contains("Time: 4 years\n"));
        assert!(output.contains("Simple Interest: $700.00\n"));
        assert!(output.contains("Total Amount: $5,700.00\n"));
    }

    #[test]
    fn test_input_is_trimmed() {
        let output = run_session("  1000  \n 5\n2 \n");
        assert!(output.contains("Total Amount: $1,100.00\n"));
    }

    #[test]
    fn test_non_numeric_input_reports_and_stops() {
        let output = run_session("abc\n");

        assert!(output.contains("Error: Please enter valid numbers. invalid float literal\n"));
        assert!(!output.contains("--- Results ---"));
        // The session stops at the failed prompt; no further prompts appear
        assert!(!output.contains("Enter annual interest rate"));
    }

    #[test]
    fn test_zero_input_reports_positive_rule() {
        let output = run_session("0\n5\n2\n");

        assert!(output.contains("Error: All values must be positive numbers.\n"));
        assert!(!output.contains("--- Results ---"));
    }

    #[test]
    fn test_negative_input_reports_positive_rule() {
        // Negative values fail the same console guard, before the
        // calculator is invoked
        let output = run_session("-100\n5\n1\n");

        assert!(output.contains("Error: All values must be positive numbers.\n"));
        assert!(!output.contains("--- Results ---"));
    }

    #[test]
    fn test_zero_rate_reports_positive_rule() {
        let output = run_session("1000\n0\n2\n");
        assert!(output.contains("Error: All values must be positive numbers.\n"));
    }

    #[test]
    fn test_closed_input_reports_generic_error() {
        // Only two of the three values arrive before EOF
        let output = run_session("1000\n5\n");

        assert!(output.contains("An unexpected error occurred: unexpected end of input\n"));
        assert!(!output.contains("--- Results ---"));
    }

    #[test]
    fn test_prompts_appear_in_order() {
        let output = run_session("1000\n5\n2\n");

        let principal = output.find("Enter principal amount: ").unwrap();
        let rate = output.find("Enter annual interest rate (%): ").unwrap();
        let time = output.find("Enter time period (years): ").unwrap();

        assert!(principal < rate);
        assert!(rate < time);
    }
}
