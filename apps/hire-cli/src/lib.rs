//! # Car Hire Quote CLI
//!
//! Terminal front end: prompts for a rental, prices it with `hire-core` and
//! prints the summary.
//!
//! ## Session
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  banner ──► Collector::collect_request ──► compute_quote               │
//! │                     │                            │                      │
//! │                     │ Exhausted / InputClosed    ▼                      │
//! │                     ▼                      format_summary ──► thanks    │
//! │              exit status 1                                              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Logs go to stderr. stdout carries only the conversation.

pub mod collector;
pub mod config;
pub mod error;

use std::io::{self, BufRead, IsTerminal, Write};
use std::process::ExitCode;

use anyhow::Context;
use hire_core::{compute_quote, format_summary, report, Quote};
use serde::Serialize;
use tracing::{debug, error, info};
use tracing_subscriber::EnvFilter;

use crate::collector::Collector;
use crate::config::{CliConfig, DEFAULT_LOG_FILTER};

/// Entry point used by the `car-hire` binary.
pub fn run() -> ExitCode {
    let config = CliConfig::from_env();
    init_tracing(&config);

    info!("Starting car hire quote session");

    let stdin = io::stdin();
    let stdout = io::stdout();

    match run_session(stdin.lock(), stdout.lock()) {
        Ok(quote) => {
            info!(total = %quote.total, "Quote issued");
            ExitCode::SUCCESS
        }
        Err(err) => {
            error!(error = ?err, "Session ended without a quote");
            ExitCode::FAILURE
        }
    }
}

/// Runs one full conversation over the given input and output.
///
/// Returns the quote that was shown. When the customer-type prompt gives up,
/// the exhaustion message is written before the error is returned, and no
/// quote is computed.
pub fn run_session<R: BufRead, W: Write>(input: R, output: W) -> anyhow::Result<Quote> {
    let mut collector = Collector::new(input, output);
    collector.say(&report::banner())?;

    let request = match collector.collect_request() {
        Ok(request) => request,
        Err(err) => {
            if err.is_exhausted() {
                collector.say(report::CUSTOMER_TYPE_EXHAUSTED)?;
            }
            return Err(err).context("collecting rental details");
        }
    };
    debug!(request = %as_json(&request), "Rental request collected");

    let quote = compute_quote(&request);
    debug!(quote = %as_json(&quote), "Quote computed");

    collector.say(&format_summary(&request, &quote))?;
    collector.say(&report::closing_line())?;

    Ok(quote)
}

fn as_json<T: Serialize>(value: &T) -> String {
    serde_json::to_string(value).unwrap_or_else(|e| format!("<unserializable: {e}>"))
}

/// Initializes the tracing subscriber for structured logging.
///
/// ## Log Levels
/// - `CAR_HIRE_LOG=debug` - Show every accepted and rejected answer
/// - `CAR_HIRE_LOG=hire_cli=trace` - Trace for this crate only
/// - Default: WARN level
fn init_tracing(config: &CliConfig) {
    let filter = EnvFilter::try_new(&config.log_filter)
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));
    let ansi = config
        .log_ansi
        .unwrap_or_else(|| io::stderr().is_terminal());

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_ansi(ansi)
        .with_target(false)
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn session(input: &str) -> (anyhow::Result<Quote>, String) {
        let mut out = Vec::new();
        let result = run_session(Cursor::new(input.as_bytes()), &mut out);
        (result, String::from_utf8(out).unwrap())
    }

    #[test]
    fn test_full_session_new_customer() {
        let (result, out) = session("s\n1\nno\nnew\n");
        assert_eq!(result.unwrap().total.pence(), 7250);
        assert!(out.contains("WELCOME TO CAR HIRE SERVICES"));
        assert!(out.contains("TOTAL COST:          £72.50"));
        assert!(out.contains("Thank you for choosing our car hire service!"));
    }

    #[test]
    fn test_full_session_gold_high_performance() {
        let (result, out) = session("H\n1\nY\nexisting\ngold\n");
        assert_eq!(result.unwrap().total.pence(), 7130);
        assert!(out.contains("Loyalty Card:        GOLD"));
    }

    #[test]
    fn test_exhausted_session_prints_message_and_no_summary() {
        let (result, out) = session("v\n3\nno\nx\ny\nz\n");
        let err = result.unwrap_err();
        assert!(err
            .downcast_ref::<crate::error::CollectError>()
            .is_some_and(|e| e.is_exhausted()));
        assert!(out.contains("Too many invalid attempts. Exiting program."));
        assert!(!out.contains("QUOTE SUMMARY"));
    }

    #[test]
    fn test_closed_input_is_an_error() {
        let (result, out) = session("v\n");
        assert!(result.is_err());
        assert!(!out.contains("QUOTE SUMMARY"));
    }
}
