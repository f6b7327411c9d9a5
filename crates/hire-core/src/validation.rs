//! # Validation Module
//!
//! Token parsers for every prompt, plus the retry policy each prompt runs
//! under.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      One Prompt, One Loop                               │
//! │                                                                         │
//! │   Prompting ──► read token ──► normalize (trim, UPPER)                 │
//! │       ▲                              │                                  │
//! │       │                              ▼                                  │
//! │       │                     parse_* ← THIS MODULE                      │
//! │       │                       │           │                             │
//! │       │                    Err(_)       Ok(value) ──► Accepted          │
//! │       │                       │                                         │
//! │       │                       ▼                                         │
//! │       └──── Retry ◄── AttemptTracker ──► Exhausted (bounded only)      │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use hire_core::validation::{parse_vehicle_type, parse_days_hired};
//! use hire_core::VehicleType;
//!
//! assert_eq!(parse_vehicle_type("h").unwrap(), VehicleType::HighPerformance);
//! assert!(parse_days_hired("11").is_err());
//! ```

use crate::error::ValidationError;
use crate::types::{CustomerType, DaysHired, LoyaltyTier, VehicleType};
use crate::{CUSTOMER_TYPE_MAX_ATTEMPTS, MAX_DAYS_HIRED, MIN_DAYS_HIRED};

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Trims and upper-cases a raw token.
fn normalize(raw: &str) -> String {
    raw.trim().to_uppercase()
}

fn not_allowed(field: &str, allowed: &[&str]) -> ValidationError {
    ValidationError::NotAllowed {
        field: field.to_string(),
        allowed: allowed.iter().map(|s| s.to_string()).collect(),
    }
}

fn require(field: &str, raw: &str) -> ValidationResult<String> {
    let token = normalize(raw);
    if token.is_empty() {
        return Err(ValidationError::Required {
            field: field.to_string(),
        });
    }
    Ok(token)
}

// =============================================================================
// Token Parsers
// =============================================================================

/// Parses the vehicle code.
///
/// ## Rules
/// - Exactly one of `S`, `H`, `V`, any case
///
/// ## Example
/// ```rust
/// use hire_core::validation::parse_vehicle_type;
/// use hire_core::VehicleType;
///
/// assert_eq!(parse_vehicle_type("s").unwrap(), VehicleType::Saloon);
/// assert!(parse_vehicle_type("X").is_err());
/// ```
pub fn parse_vehicle_type(raw: &str) -> ValidationResult<VehicleType> {
    const FIELD: &str = "vehicle type";
    let token = require(FIELD, raw)?;

    match token.as_str() {
        "S" => Ok(VehicleType::Saloon),
        "H" => Ok(VehicleType::HighPerformance),
        "V" => Ok(VehicleType::Van),
        _ => Err(not_allowed(FIELD, &["S", "H", "V"])),
    }
}

/// Parses the number of days.
///
/// ## Rules
/// - Must be a whole number (`"3"`, `"+3"`, `"03"`)
/// - Must be within `1..=10`
///
/// ## Example
/// ```rust
/// use hire_core::validation::parse_days_hired;
///
/// assert_eq!(parse_days_hired("8").unwrap().get(), 8);
/// assert!(parse_days_hired("eight").is_err());
/// assert!(parse_days_hired("0").is_err());
/// ```
pub fn parse_days_hired(raw: &str) -> ValidationResult<DaysHired> {
    const FIELD: &str = "days hired";
    let token = require(FIELD, raw)?;

    let days: i64 = token.parse().map_err(|_| ValidationError::InvalidFormat {
        field: FIELD.to_string(),
        reason: format!("'{}' is not a whole number", raw.trim()),
    })?;

    let out_of_range = || ValidationError::OutOfRange {
        field: FIELD.to_string(),
        min: MIN_DAYS_HIRED as i64,
        max: MAX_DAYS_HIRED as i64,
    };

    let days = u32::try_from(days).map_err(|_| out_of_range())?;
    DaysHired::new(days)
}

/// Parses a yes/no answer.
///
/// ## Rules
/// - `YES`/`Y` is true, `NO`/`N` is false, any case
pub fn parse_yes_no(raw: &str) -> ValidationResult<bool> {
    const FIELD: &str = "insurance";
    let token = require(FIELD, raw)?;

    match token.as_str() {
        "YES" | "Y" => Ok(true),
        "NO" | "N" => Ok(false),
        _ => Err(not_allowed(FIELD, &["YES", "Y", "NO", "N"])),
    }
}

/// Parses the customer category.
///
/// ## Rules
/// - `NEW` or `EXISTING`, any case
pub fn parse_customer_type(raw: &str) -> ValidationResult<CustomerType> {
    const FIELD: &str = "customer type";
    let token = require(FIELD, raw)?;

    match token.as_str() {
        "NEW" => Ok(CustomerType::New),
        "EXISTING" => Ok(CustomerType::Existing),
        _ => Err(not_allowed(FIELD, &["NEW", "EXISTING"])),
    }
}

/// Parses the loyalty card.
///
/// ## Rules
/// - `BRONZE`, `SILVER` or `GOLD`, any case
pub fn parse_loyalty_tier(raw: &str) -> ValidationResult<LoyaltyTier> {
    const FIELD: &str = "loyalty card";
    let token = require(FIELD, raw)?;

    match token.as_str() {
        "BRONZE" => Ok(LoyaltyTier::Bronze),
        "SILVER" => Ok(LoyaltyTier::Silver),
        "GOLD" => Ok(LoyaltyTier::Gold),
        _ => Err(not_allowed(FIELD, &["BRONZE", "SILVER", "GOLD"])),
    }
}

// =============================================================================
// Retry Policy
// =============================================================================

/// How many rejected answers a prompt tolerates.
///
/// Only the customer-type prompt is bounded; every other prompt asks again
/// forever.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RetryPolicy {
    /// `None` means unbounded.
    pub max_attempts: Option<u32>,
}

impl RetryPolicy {
    /// Retry forever.
    pub const fn unbounded() -> Self {
        RetryPolicy { max_attempts: None }
    }

    /// Give up after `max_attempts` rejected answers.
    pub const fn bounded(max_attempts: u32) -> Self {
        RetryPolicy {
            max_attempts: Some(max_attempts),
        }
    }

    /// Policy for the customer-type prompt.
    pub const fn customer_type() -> Self {
        RetryPolicy::bounded(CUSTOMER_TYPE_MAX_ATTEMPTS)
    }
}

/// What to do after a rejected answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttemptOutcome {
    /// Prompt again.
    Retry { attempt: u32 },
    /// The bounded policy is used up.
    Exhausted { attempts: u32 },
}

/// Counts rejected answers against a [`RetryPolicy`].
///
/// ## Example
/// ```rust
/// use hire_core::validation::{AttemptOutcome, AttemptTracker, RetryPolicy};
///
/// let mut tracker = AttemptTracker::new(RetryPolicy::bounded(2));
/// assert_eq!(tracker.record_rejection(), AttemptOutcome::Retry { attempt: 1 });
/// assert_eq!(tracker.record_rejection(), AttemptOutcome::Exhausted { attempts: 2 });
/// ```
#[derive(Debug, Clone)]
pub struct AttemptTracker {
    policy: RetryPolicy,
    rejected: u32,
}

impl AttemptTracker {
    pub const fn new(policy: RetryPolicy) -> Self {
        AttemptTracker { policy, rejected: 0 }
    }

    /// Rejected answers so far.
    pub const fn rejected(&self) -> u32 {
        self.rejected
    }

    /// Records a rejected answer and reports whether to ask again.
    pub fn record_rejection(&mut self) -> AttemptOutcome {
        self.rejected = self.rejected.saturating_add(1);

        match self.policy.max_attempts {
            Some(max) if self.rejected >= max => AttemptOutcome::Exhausted {
                attempts: self.rejected,
            },
            _ => AttemptOutcome::Retry {
                attempt: self.rejected,
            },
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
