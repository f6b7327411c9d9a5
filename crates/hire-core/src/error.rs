//! # Error Types
//!
//! Domain-specific error types for hire-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  hire-core errors (this file)                                          │
//! │  ├── ValidationError  - A single token was rejected                    │
//! │  └── CoreError        - A prompt gave up (attempts exhausted)          │
//! │                                                                         │
//! │  hire-cli errors (in app)                                              │
//! │  └── CollectError     - What the binary maps to an exit code           │
//! │                                                                         │
//! │  Flow: ValidationError → re-prompt                                     │
//! │        CoreError::AttemptsExhausted → CollectError → exit status 1     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Include context in error messages (field, rejected token)
//! 3. Errors are enum variants, never String

use thiserror::Error;

// =============================================================================
// Core Error
// =============================================================================

/// Core business logic errors.
#[derive(Debug, Error)]
pub enum CoreError {
    /// A bounded prompt received too many rejected tokens.
    ///
    /// ## When This Occurs
    /// Only the customer-type prompt is bounded, so in practice this is
    /// raised after the third unrecognised answer to "New or Existing?".
    ///
    /// ## User Workflow
    /// ```text
    /// "maybe" ──► rejected (1/3)
    /// "dunno" ──► rejected (2/3)
    /// "?"     ──► rejected (3/3)
    ///      │
    ///      ▼
    /// AttemptsExhausted { field: "customer type", attempts: 3 }
    ///      │
    ///      ▼
    /// "Too many invalid attempts. Exiting program." + exit status 1
    /// ```
    #[error("{field}: no valid answer after {attempts} attempts")]
    AttemptsExhausted { field: String, attempts: u32 },
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// Every variant is recoverable: the owning prompt prints its message and
/// asks again.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// Nothing was entered.
    #[error("{field} is required")]
    Required { field: String },

    /// Token could not be parsed (e.g. "ten" where a number is expected).
    #[error("{field} has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },

    /// Numeric value is out of range.
    #[error("{field} must be between {min} and {max}")]
    OutOfRange { field: String, min: i64, max: i64 },

    /// Value is not in allowed set.
    #[error("{field} must be one of: {allowed:?}")]
    NotAllowed { field: String, allowed: Vec<String> },
}

// =============================================================================
// Unit Tests
// =============================================================================
