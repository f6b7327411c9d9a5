//! # Domain Types
//!
//! Core domain types for a single car hire quote.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────┐       │
//! │  │                     RentalRequest                           │       │
//! │  │  vehicle: VehicleType    days: DaysHired (1..=10)           │       │
//! │  │  wants_insurance: bool   customer: Customer                 │       │
//! │  └─────────────────────────────────────────────────────────────┘       │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │  VehicleType    │   │    Customer     │   │  LoyaltyTier    │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  Saloon  £22.50 │   │  New            │   │  Bronze   5%    │       │
//! │  │  HighPerf £28.00│   │  Existing(tier) │   │  Silver  10%    │       │
//! │  │  Van     £35.00 │   └─────────────────┘   │  Gold    15%    │       │
//! │  └─────────────────┘                         └─────────────────┘       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Illegal States
//! A loyalty tier only exists inside `Customer::Existing`, so a new customer
//! with a loyalty card cannot be constructed.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::ValidationError;
use crate::money::Money;
use crate::{MAX_DAYS_HIRED, MIN_DAYS_HIRED};

// =============================================================================
// Rate
// =============================================================================

/// A percentage represented in basis points (bps).
///
/// ## Why Basis Points?
/// 1 basis point = 0.01% = 1/10000
/// 1000 bps = 10% (multi-day discount)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rate(u32);

impl Rate {
    /// Creates a rate from basis points.
    #[inline]
    pub const fn from_bps(bps: u32) -> Self {
        Rate(bps)
    }

    /// Creates a rate from a whole percentage.
    #[inline]
    pub const fn from_percent(pct: u32) -> Self {
        Rate(pct * 100)
    }

    /// Returns the rate in basis points.
    #[inline]
    pub const fn bps(&self) -> u32 {
        self.0
    }

    /// Zero rate.
    #[inline]
    pub const fn zero() -> Self {
        Rate(0)
    }
}

impl Default for Rate {
    fn default() -> Self {
        Rate::zero()
    }
}

// =============================================================================
// Vehicle Type
// =============================================================================

/// The class of vehicle being hired.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VehicleType {
    Saloon,
    HighPerformance,
    Van,
}

impl VehicleType {
    /// Every vehicle type, in menu order.
    pub const ALL: [VehicleType; 3] = [
        VehicleType::Saloon,
        VehicleType::HighPerformance,
        VehicleType::Van,
    ];

    /// Daily charge for this vehicle type (the rate table).
    pub const fn daily_charge(&self) -> Money {
        match self {
            VehicleType::Saloon => Money::from_pence(2250),
            VehicleType::HighPerformance => Money::from_pence(2800),
            VehicleType::Van => Money::from_pence(3500),
        }
    }

    /// Single-letter code typed at the vehicle prompt.
    pub const fn code(&self) -> char {
        match self {
            VehicleType::Saloon => 'S',
            VehicleType::HighPerformance => 'H',
            VehicleType::Van => 'V',
        }
    }

    /// Name shown on the quote summary.
    pub const fn display_name(&self) -> &'static str {
        match self {
            VehicleType::Saloon => "Saloon",
            VehicleType::HighPerformance => "High Performance",
            VehicleType::Van => "Van",
        }
    }
}

impl fmt::Display for VehicleType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

// =============================================================================
// Days Hired
// =============================================================================

/// Length of the hire in whole days, always within `1..=10`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub struct DaysHired(u32);

impl DaysHired {
    /// Creates a day count, rejecting values outside the hire window.
    ///
    /// ## Example
    /// ```rust
    /// use hire_core::types::DaysHired;
    ///
    /// assert!(DaysHired::new(7).is_ok());
    /// assert!(DaysHired::new(0).is_err());
    /// assert!(DaysHired::new(11).is_err());
    /// ```
    pub fn new(days: u32) -> Result<Self, ValidationError> {
        if !(MIN_DAYS_HIRED..=MAX_DAYS_HIRED).contains(&days) {
            return Err(ValidationError::OutOfRange {
                field: "days hired".to_string(),
                min: MIN_DAYS_HIRED as i64,
                max: MAX_DAYS_HIRED as i64,
            });
        }

        Ok(DaysHired(days))
    }

    /// Returns the number of days.
    #[inline]
    pub const fn get(&self) -> u32 {
        self.0
    }
}

impl TryFrom<u32> for DaysHired {
    type Error = ValidationError;

    fn try_from(days: u32) -> Result<Self, Self::Error> {
        DaysHired::new(days)
    }
}

impl From<DaysHired> for u32 {
    fn from(days: DaysHired) -> Self {
        days.0
    }
}

impl fmt::Display for DaysHired {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// =============================================================================
// Customer
// =============================================================================

/// Answer to "new or existing customer?".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CustomerType {
    New,
    Existing,
}

impl CustomerType {
    /// Upper-case label, as shown on the summary.
    pub const fn label(&self) -> &'static str {
        match self {
            CustomerType::New => "NEW",
            CustomerType::Existing => "EXISTING",
        }
    }
}

impl fmt::Display for CustomerType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Loyalty card held by an existing customer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LoyaltyTier {
    Bronze,
    Silver,
    Gold,
}

impl LoyaltyTier {
    /// Every tier, in menu order.
    pub const ALL: [LoyaltyTier; 3] = [LoyaltyTier::Bronze, LoyaltyTier::Silver, LoyaltyTier::Gold];

    /// Percentage of the subtotal taken off for this tier.
    pub const fn discount_rate(&self) -> Rate {
        match self {
            LoyaltyTier::Bronze => Rate::from_percent(5),
            LoyaltyTier::Silver => Rate::from_percent(10),
            LoyaltyTier::Gold => Rate::from_percent(15),
        }
    }

    /// Upper-case label, as shown on the summary.
    pub const fn label(&self) -> &'static str {
        match self {
            LoyaltyTier::Bronze => "BRONZE",
            LoyaltyTier::Silver => "SILVER",
            LoyaltyTier::Gold => "GOLD",
        }
    }
}

impl fmt::Display for LoyaltyTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Who is hiring. Only existing customers carry a loyalty tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Customer {
    New,
    Existing(LoyaltyTier),
}

impl Customer {
    /// The customer category without the tier.
    pub const fn customer_type(&self) -> CustomerType {
        match self {
            Customer::New => CustomerType::New,
            Customer::Existing(_) => CustomerType::Existing,
        }
    }

    /// The loyalty tier, present only for existing customers.
    pub const fn loyalty_tier(&self) -> Option<LoyaltyTier> {
        match self {
            Customer::New => None,
            Customer::Existing(tier) => Some(*tier),
        }
    }
}

// =============================================================================
// Rental Request
// =============================================================================

/// Everything the pricing engine needs, fully validated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RentalRequest {
    pub vehicle: VehicleType,
    pub days: DaysHired,
    pub wants_insurance: bool,
    pub customer: Customer,
}

impl RentalRequest {
    pub const fn new(
        vehicle: VehicleType,
        days: DaysHired,
        wants_insurance: bool,
        customer: Customer,
    ) -> Self {
        RentalRequest {
            vehicle,
            days,
            wants_insurance,
            customer,
        }
    }

    #[inline]
    pub const fn customer_type(&self) -> CustomerType {
        self.customer.customer_type()
    }

    #[inline]
    pub const fn loyalty_tier(&self) -> Option<LoyaltyTier> {
        self.customer.loyalty_tier()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
