//! # hire-core: Pure Business Logic for Car Hire Quotes
//!
//! This crate is the **heart** of the car hire quote tool. It contains all
//! business logic as pure functions with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Car Hire Quote Architecture                        │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    hire-cli (car-hire binary)                   │   │
//! │  │    Vehicle ──► Days ──► Insurance ──► Customer ──► Loyalty      │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ raw tokens                             │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ hire-core (THIS CRATE) ★                        │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │ validation│  │   types   │  │  pricing  │  │  report   │  │   │
//! │  │   │  parsers  │─►│  Rental   │─►│   Quote   │─►│  Summary  │  │   │
//! │  │   │  retries  │  │  Request  │  │   rules   │  │   text    │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO STDIN • NO ENV • PURE FUNCTIONS                  │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (VehicleType, Customer, RentalRequest, Rate)
//! - [`money`] - Money type with integer arithmetic (no floating point!)
//! - [`error`] - Domain error types
//! - [`validation`] - Token parsers and the retry policy state machine
//! - [`pricing`] - The ordered discount rules producing a [`Quote`]
//! - [`report`] - Fixed-layout text for the quote summary and prompts
//!
//! ## Example Usage
//!
//! ```rust
//! use hire_core::{compute_quote, Customer, DaysHired, LoyaltyTier, RentalRequest, VehicleType};
//!
//! let request = RentalRequest::new(
//!     VehicleType::HighPerformance,
//!     DaysHired::new(1).unwrap(),
//!     true,
//!     Customer::Existing(LoyaltyTier::Gold),
//! );
//!
//! let quote = compute_quote(&request);
//! assert_eq!(quote.total.pence(), 7130); // £71.30
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod money;
pub mod pricing;
pub mod report;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use error::{CoreError, ValidationError};
pub use money::Money;
pub use pricing::{compute_quote, Quote};
pub use report::format_summary;
pub use types::*;
pub use validation::{AttemptOutcome, AttemptTracker, RetryPolicy};

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Shortest hire accepted, in days.
pub const MIN_DAYS_HIRED: u32 = 1;

/// Longest hire accepted, in days.
pub const MAX_DAYS_HIRED: u32 = 10;

/// Hires strictly longer than this many days earn the multi-day discount.
pub const MULTI_DAY_THRESHOLD: u32 = 7;

/// Attempts allowed at the customer-type prompt before the session ends.
///
/// ## Business Reason
/// This is the only bounded prompt. Every other prompt retries forever.
pub const CUSTOMER_TYPE_MAX_ATTEMPTS: u32 = 3;

/// Currency symbol prefixed to every rendered amount.
pub const CURRENCY_SYMBOL: &str = "£";
