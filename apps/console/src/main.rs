//! # Penny Console Entry Point
//!
//! The user-facing binary: one interactive simple-interest session.
//!
//! ## Startup Sequence
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                       Application Startup                               │
//! │                                                                         │
//! │  1. Initialize Logging ───────────────────────────────────────────────► │
//! │     • tracing-subscriber with env filter, writing to stderr             │
//! │     • Default: WARN (quiet), can be overridden with RUST_LOG            │
//! │                                                                         │
//! │  2. Lock stdin/stdout ────────────────────────────────────────────────► │
//! │     • stdout carries the user protocol (prompts, results, errors)       │
//! │     • stderr carries diagnostics only                                   │
//! │                                                                         │
//! │  3. Run the Session ──────────────────────────────────────────────────► │
//! │     • Prompting → Computing → Reporting (session.rs)                    │
//! │     • Every user-level failure is printed, never thrown                 │
//! │                                                                         │
//! │  4. Exit 0 ───────────────────────────────────────────────────────────► │
//! │     • Always; errors are reported via text, not exit status             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

mod error;
mod session;

use std::io;

use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use session::Session;

fn main() {
    init_tracing();

    info!("Starting Penny console session");

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut session = Session::new(stdin.lock(), stdout.lock());

    // User-level failures were already reported as printed text inside the
    // session; an Err here means the terminal streams themselves failed,
    // and there is nowhere left to report to. Exit status stays 0 either way.
    if let Err(err) = session.run() {
        error!(%err, "terminal I/O failure");
    }

    info!("Session finished");
}

/// Initializes the tracing subscriber for structured logging.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show debug messages
/// - `RUST_LOG=penny=trace` - Show trace for penny crates only
/// - Default: WARN level, so interactive output stays clean
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}
