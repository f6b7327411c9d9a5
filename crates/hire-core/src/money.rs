//! # Money Module
//!
//! Provides the `Money` type for handling monetary values safely.
//!
//! ## Why Integer Money?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                             │
//! │                                                                         │
//! │  In floating point:                                                     │
//! │    22.50 × 8 × 0.10 = 17.999999999999996  ❌ WRONG!                     │
//! │                                                                         │
//! │  OUR SOLUTION: Integer Pence                                            │
//! │    2250 × 8 = 18000 pence, 10% = 1800 pence exactly                    │
//! │                                                                         │
//! │  Percentages that land between pence (5% of £22.50 = 112.5p) are       │
//! │  carried in ExactMoney and rounded ONCE, when a Quote is built.        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use hire_core::money::Money;
//!
//! let daily = Money::from_pence(2250);  // £22.50
//! let subtotal = daily * 8u32;          // £180.00
//! assert_eq!(subtotal.to_string(), "£180.00");
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, AddAssign, Mul, Sub, SubAssign};

use crate::types::Rate;
use crate::CURRENCY_SYMBOL;

/// Sub-penny units per penny in [`ExactMoney`] (one per basis point).
const EXACT_SCALE: i128 = 10_000;

// =============================================================================
// Money Type
// =============================================================================

/// Represents a monetary value in pence (the smallest sterling unit).
///
/// ## Design Decisions
/// - **i64 (signed)**: A discount larger than the subtotal is representable,
///   nothing in the pricing rules clamps at zero
/// - **Single field tuple struct**: Zero-cost abstraction over i64
///
/// ## Where Money is Used
/// ```text
/// VehicleType::daily_charge ──► × days ──► Quote.subtotal
///                                               │
///               Quote.discount ◄── rules ───────┤
///                                               ▼
///       Quote.total = subtotal - discount + insurance + deposit
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Money(i64);

impl Money {
    /// Creates a Money value from pence.
    ///
    /// ## Example
    /// ```rust
    /// use hire_core::money::Money;
    ///
    /// let deposit = Money::from_pence(5000); // £50.00
    /// assert_eq!(deposit.pence(), 5000);
    /// ```
    #[inline]
    pub const fn from_pence(pence: i64) -> Self {
        Money(pence)
    }

    /// Returns the value in pence.
    #[inline]
    pub const fn pence(&self) -> i64 {
        self.0
    }

    /// Returns the whole pounds portion.
    ///
    /// ## Example
    /// ```rust
    /// use hire_core::money::Money;
    ///
    /// assert_eq!(Money::from_pence(2250).pounds(), 22);
    /// assert_eq!(Money::from_pence(-550).pounds(), -5);
    /// ```
    #[inline]
    pub const fn pounds(&self) -> i64 {
        self.0 / 100
    }

    /// Returns the pence portion (always 0-99).
    #[inline]
    pub const fn pence_part(&self) -> i64 {
        (self.0 % 100).abs()
    }

    /// Returns zero money value.
    #[inline]
    pub const fn zero() -> Self {
        Money(0)
    }

    /// Checks if the value is negative (less than zero).
    #[inline]
    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Returns `rate` of this amount without rounding.
    ///
    /// ## Example
    /// ```rust
    /// use hire_core::money::Money;
    /// use hire_core::types::Rate;
    ///
    /// // 5% of £22.50 is 112.5p, kept exact
    /// let portion = Money::from_pence(2250).portion(Rate::from_bps(500));
    /// assert_eq!(portion.round_half_even().pence(), 112);
    /// ```
    pub fn portion(&self, rate: Rate) -> ExactMoney {
        ExactMoney(self.0 as i128 * rate.bps() as i128)
    }

    /// Lifts this amount into exact sub-penny units.
    #[inline]
    pub fn exact(&self) -> ExactMoney {
        ExactMoney(self.0 as i128 * EXACT_SCALE)
    }
}

// =============================================================================
// Exact (sub-penny) Money
// =============================================================================

/// An amount held in ten-thousandths of a penny.
///
/// Percentage rules produce values that fall between whole pence. Holding them
/// here lets several rules accumulate before a single rounding step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
pub struct ExactMoney(i128);

impl ExactMoney {
    /// Zero.
    #[inline]
    pub const fn zero() -> Self {
        ExactMoney(0)
    }

    /// Raw value in ten-thousandths of a penny.
    #[inline]
    pub const fn raw(&self) -> i128 {
        self.0
    }

    /// Settles to whole pence using round-half-to-even.
    ///
    /// ```text
    ///   112.5p → 112p   (tie, 112 is even)
    ///   337.5p → 338p   (tie, 338 is even)
    ///   112.6p → 113p
    /// ```
    pub fn round_half_even(&self) -> Money {
        let whole = self.0.div_euclid(EXACT_SCALE);
        let rem = self.0.rem_euclid(EXACT_SCALE);

        let rounded = match (rem * 2).cmp(&EXACT_SCALE) {
            std::cmp::Ordering::Less => whole,
            std::cmp::Ordering::Greater => whole + 1,
            std::cmp::Ordering::Equal => whole + (whole & 1),
        };

        Money(rounded as i64)
    }
}

impl Add for ExactMoney {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        ExactMoney(self.0 + other.0)
    }
}

impl AddAssign for ExactMoney {
    #[inline]
    fn add_assign(&mut self, other: Self) {
        self.0 += other.0;
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Renders as `£22.50`, or `-£5.50` for negative amounts.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        write!(
            f,
            "{}{}{}.{:02}",
            sign,
            CURRENCY_SYMBOL,
            self.pounds().abs(),
            self.pence_part()
        )
    }
}

impl Default for Money {
    fn default() -> Self {
        Money::zero()
    }
}

impl Add for Money {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        Money(self.0 + other.0)
    }
}

impl AddAssign for Money {
    #[inline]
    fn add_assign(&mut self, other: Self) {
        self.0 += other.0;
    }
}

impl Sub for Money {
    type Output = Self;

    #[inline]
    fn sub(self, other: Self) -> Self {
        Money(self.0 - other.0)
    }
}

impl SubAssign for Money {
    #[inline]
    fn sub_assign(&mut self, other: Self) {
        self.0 -= other.0;
    }
}

/// Multiplication by a day count.
impl Mul<u32> for Money {
    type Output = Self;

    #[inline]
    fn mul(self, qty: u32) -> Self {
        Money(self.0 * qty as i64)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
