//! # car-hire
//!
//! Interactive car hire quote. The setup lives in lib.rs for testability.
//!
//! ## Exit Codes
//! - `0` - a quote was printed
//! - `1` - the customer-type prompt ran out of attempts, or input closed early

use std::process::ExitCode;

fn main() -> ExitCode {
    hire_cli::run()
}
