//! # Input Collector
//!
//! Runs one retry loop per field and assembles a [`RentalRequest`].
//!
//! ## Prompt Sequence
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Field          Policy        On rejection                              │
//! │  ─────────────  ────────────  ───────────────────────────────────────   │
//! │  vehicle type   unbounded     message, menu again                       │
//! │  days hired     unbounded     message doubles as prompt, line dropped   │
//! │  insurance      unbounded     message, prompt again                     │
//! │  customer type  3 attempts    message, prompt again │ Exhausted         │
//! │  loyalty card   unbounded     message, menu again (Existing only)       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Input is read as whitespace-separated tokens, so several answers may be
//! typed on one line. Blank lines are skipped.

use std::collections::VecDeque;
use std::io::{self, BufRead, Write};

use hire_core::report;
use hire_core::validation::{
    parse_customer_type, parse_days_hired, parse_loyalty_tier, parse_vehicle_type, parse_yes_no,
    ValidationResult,
};
use hire_core::{
    AttemptOutcome, AttemptTracker, CoreError, Customer, CustomerType, DaysHired, LoyaltyTier,
    RentalRequest, RetryPolicy, VehicleType,
};
use tracing::{debug, warn};

use crate::error::CollectError;

// =============================================================================
// Token Reader
// =============================================================================

/// Splits a line-oriented reader into whitespace-separated tokens.
#[derive(Debug)]
pub struct TokenReader<R> {
    input: R,
    pending: VecDeque<String>,
}

impl<R: BufRead> TokenReader<R> {
    pub fn new(input: R) -> Self {
        TokenReader {
            input,
            pending: VecDeque::new(),
        }
    }

    /// Next token, reading more lines as needed. `None` at end of input.
    ///
    /// Bytes that are not valid UTF-8 become U+FFFD inside the token, so the
    /// parser rejects them like any other bad answer.
    pub fn next_token(&mut self) -> io::Result<Option<String>> {
        loop {
            if let Some(token) = self.pending.pop_front() {
                return Ok(Some(token));
            }

            let mut line = Vec::new();
            if self.input.read_until(b'\n', &mut line)? == 0 {
                return Ok(None);
            }
            self.pending.extend(
                String::from_utf8_lossy(&line)
                    .split_whitespace()
                    .map(str::to_string),
            );
        }
    }

    /// Drops whatever is left of the current line.
    pub fn discard_line(&mut self) {
        self.pending.clear();
    }
}

// =============================================================================
// Prompt Description
// =============================================================================

/// How one field is asked for.
struct Prompt<'a> {
    field: &'static str,
    text: &'a str,
    rejected: &'a str,
    /// Print `text` again before every attempt, not just the first.
    repeat_text: bool,
    /// Drop the rest of the line after a rejection.
    discard_line: bool,
    policy: RetryPolicy,
}

// =============================================================================
// Collector
// =============================================================================

/// Asks for every field of a rental request over a reader/writer pair.
pub struct Collector<R, W> {
    tokens: TokenReader<R>,
    out: W,
}

impl<R: BufRead, W: Write> Collector<R, W> {
    pub fn new(input: R, out: W) -> Self {
        Collector {
            tokens: TokenReader::new(input),
            out,
        }
    }

    /// Writes text to the terminal and flushes.
    pub fn say(&mut self, text: &str) -> io::Result<()> {
        self.out.write_all(text.as_bytes())?;
        self.out.flush()
    }

    /// Gives back the writer.
    pub fn into_output(self) -> W {
        self.out
    }

    /// Runs every prompt in order and builds the request.
    ///
    /// The loyalty prompt only runs for existing customers.
    pub fn collect_request(&mut self) -> Result<RentalRequest, CollectError> {
        let vehicle = self.collect_vehicle_type()?;
        let days = self.collect_days_hired()?;
        let wants_insurance = self.collect_insurance()?;

        let customer = match self.collect_customer_type()? {
            CustomerType::New => Customer::New,
            CustomerType::Existing => Customer::Existing(self.collect_loyalty_tier()?),
        };

        Ok(RentalRequest::new(vehicle, days, wants_insurance, customer))
    }

    pub fn collect_vehicle_type(&mut self) -> Result<VehicleType, CollectError> {
        let menu = report::vehicle_menu();
        self.ask(
            Prompt {
                field: "vehicle type",
                text: &menu,
                rejected: report::VEHICLE_REJECTED,
                repeat_text: true,
                discard_line: false,
                policy: RetryPolicy::unbounded(),
            },
            parse_vehicle_type,
        )
    }

    pub fn collect_days_hired(&mut self) -> Result<DaysHired, CollectError> {
        let text = report::days_prompt();
        let rejected = report::days_rejected();
        self.ask(
            Prompt {
                field: "days hired",
                text: &text,
                rejected: &rejected,
                repeat_text: false,
                discard_line: true,
                policy: RetryPolicy::unbounded(),
            },
            parse_days_hired,
        )
    }

    pub fn collect_insurance(&mut self) -> Result<bool, CollectError> {
        self.ask(
            Prompt {
                field: "insurance",
                text: report::INSURANCE_PROMPT,
                rejected: report::INSURANCE_REJECTED,
                repeat_text: true,
                discard_line: false,
                policy: RetryPolicy::unbounded(),
            },
            parse_yes_no,
        )
    }

    pub fn collect_customer_type(&mut self) -> Result<CustomerType, CollectError> {
        self.ask(
            Prompt {
                field: "customer type",
                text: report::CUSTOMER_TYPE_PROMPT,
                rejected: report::CUSTOMER_TYPE_REJECTED,
                repeat_text: true,
                discard_line: false,
                policy: RetryPolicy::customer_type(),
            },
            parse_customer_type,
        )
    }

    pub fn collect_loyalty_tier(&mut self) -> Result<LoyaltyTier, CollectError> {
        let menu = report::loyalty_menu();
        self.ask(
            Prompt {
                field: "loyalty card",
                text: &menu,
                rejected: report::LOYALTY_REJECTED,
                repeat_text: true,
                discard_line: false,
                policy: RetryPolicy::unbounded(),
            },
            parse_loyalty_tier,
        )
    }

    /// The retry loop shared by every field.
    fn ask<T>(
        &mut self,
        prompt: Prompt<'_>,
        parse: fn(&str) -> ValidationResult<T>,
    ) -> Result<T, CollectError> {
        let mut tracker = AttemptTracker::new(prompt.policy);
        self.say(prompt.text)?;

        loop {
            let token = self
                .tokens
                .next_token()?
                .ok_or(CollectError::InputClosed {
                    field: prompt.field,
                })?;

            let err = match parse(&token) {
                Ok(value) => {
                    debug!(field = prompt.field, %token, "answer accepted");
                    return Ok(value);
                }
                Err(err) => err,
            };

            if prompt.discard_line {
                self.tokens.discard_line();
            }
            self.say(prompt.rejected)?;

            match tracker.record_rejection() {
                AttemptOutcome::Retry { attempt } => {
                    debug!(field = prompt.field, attempt, %token, error = %err, "answer rejected");
                }
                AttemptOutcome::Exhausted { attempts } => {
                    warn!(field = prompt.field, attempts, "no valid answer, giving up");
                    return Err(CoreError::AttemptsExhausted {
                        field: prompt.field.to_string(),
                        attempts,
                    }
                    .into());
                }
            }

            if prompt.repeat_text {
                self.say(prompt.text)?;
            }
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn collector(input: &str) -> Collector<Cursor<Vec<u8>>, Vec<u8>> {
        Collector::new(Cursor::new(input.as_bytes().to_vec()), Vec::new())
    }

    fn output(c: Collector<Cursor<Vec<u8>>, Vec<u8>>) -> String {
        String::from_utf8(c.into_output()).unwrap()
    }

    #[test]
    fn test_token_reader_splits_and_skips_blank_lines() {
        let mut reader = TokenReader::new(Cursor::new("a b\n\n   \nc\n"));
        assert_eq!(reader.next_token().unwrap().as_deref(), Some("a"));
        assert_eq!(reader.next_token().unwrap().as_deref(), Some("b"));
        assert_eq!(reader.next_token().unwrap().as_deref(), Some("c"));
        assert_eq!(reader.next_token().unwrap(), None);
    }

    #[test]
    fn test_token_reader_discard_line() {
        let mut reader = TokenReader::new(Cursor::new("a b c\nd\n"));
        assert_eq!(reader.next_token().unwrap().as_deref(), Some("a"));
        reader.discard_line();
        assert_eq!(reader.next_token().unwrap().as_deref(), Some("d"));
    }

    #[test]
    fn test_vehicle_retries_until_valid_any_case() {
        let mut c = collector("x\nq\nh\n");
        assert_eq!(c.collect_vehicle_type().unwrap(), VehicleType::HighPerformance);

        let out = output(c);
        assert_eq!(out.matches("Invalid vehicle type. Please try again.").count(), 2);
        assert_eq!(out.matches("Enter vehicle type:").count(), 3);
    }

    #[test]
    fn test_non_utf8_line_is_rejected_not_fatal() {
        let mut c = Collector::new(Cursor::new(b"\xa3x\ns\n".to_vec()), Vec::new());
        assert_eq!(c.collect_vehicle_type().unwrap(), VehicleType::Saloon);
        assert_eq!(
            output(c).matches("Invalid vehicle type. Please try again.").count(),
            1
        );
    }

    #[test]
    fn test_days_discards_rest_of_bad_line() {
        let mut c = collector("abc def ghi\n0\n11\n8\n");
        assert_eq!(c.collect_days_hired().unwrap().get(), 8);

        let out = output(c);
        assert_eq!(out.matches("Invalid input.").count(), 3);
        assert_eq!(out.matches("Enter the number of days").count(), 1);
    }

    #[test]
    fn test_days_keeps_later_answers_on_good_line() {
        let mut c = collector("5 yes\n");
        assert_eq!(c.collect_days_hired().unwrap().get(), 5);
        assert!(c.collect_insurance().unwrap());
    }

    #[test]
    fn test_insurance_words() {
        let mut c = collector("perhaps\nN\n");
        assert!(!c.collect_insurance().unwrap());
        assert_eq!(output(c).matches("Please enter Yes or No.").count(), 1);
    }

    #[test]
    fn test_customer_type_exhausts_after_three() {
        let mut c = collector("old\nfoo\nbar\nnew\n");
        let err = c.collect_customer_type().unwrap_err();
        assert!(err.is_exhausted());
        assert!(matches!(
            err,
            CollectError::Core(CoreError::AttemptsExhausted { attempts: 3, .. })
        ));
    }

    #[test]
    fn test_customer_type_accepts_on_third() {
        let mut c = collector("old\nfoo\nExisting\n");
        assert_eq!(c.collect_customer_type().unwrap(), CustomerType::Existing);
    }

    #[test]
    fn test_new_customer_skips_loyalty() {
        let mut c = collector("s\n1\nno\nnew\n");
        let request = c.collect_request().unwrap();
        assert_eq!(request.customer, Customer::New);
        assert!(!output(c).contains("loyalty card type"));
    }

    #[test]
    fn test_existing_customer_is_asked_for_loyalty() {
        let mut c = collector("H 1 yes existing platinum gold\n");
        let request = c.collect_request().unwrap();
        assert_eq!(request.vehicle, VehicleType::HighPerformance);
        assert!(request.wants_insurance);
        assert_eq!(request.customer, Customer::Existing(LoyaltyTier::Gold));

        let out = output(c);
        assert_eq!(out.matches("Invalid loyalty card type.").count(), 1);
    }

    #[test]
    fn test_input_closed() {
        let mut c = collector("s\n");
        c.collect_vehicle_type().unwrap();
        assert!(matches!(
            c.collect_days_hired(),
            Err(CollectError::InputClosed { field: "days hired" })
        ));
    }
}
