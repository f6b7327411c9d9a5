//! # Pricing Engine
//!
//! Turns a validated [`RentalRequest`] into a [`Quote`].
//!
//! ## Rule Order
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  1. subtotal  = daily charge × days                                    │
//! │  2. discount  = 0                                                      │
//! │  3. days > 7  → discount += 10% of subtotal                            │
//! │  4. Existing  → Bronze  5% │ Silver 10% │ Gold 15%                     │
//! │                 Gold + High Performance → discount += £18.00 flat     │
//! │  5. total     = subtotal - discount                                    │
//! │  6. insurance → total += £15.50                                        │
//! │  7. deposit   → total += £50.00 (always)                               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Percentages are all taken from the undiscounted subtotal and summed in
//! [`ExactMoney`]. The discount is rounded to whole pence once, half to even.
//! The total is not clamped at zero.

use serde::{Deserialize, Serialize};

use crate::money::{ExactMoney, Money};
use crate::types::{Customer, LoyaltyTier, Rate, RentalRequest, VehicleType};
use crate::MULTI_DAY_THRESHOLD;

/// Added to every quote.
pub const DEPOSIT: Money = Money::from_pence(5000);

/// Added when the customer takes insurance cover.
pub const INSURANCE_FEE: Money = Money::from_pence(1550);

/// Flat deduction for Gold card holders hiring a High Performance vehicle.
pub const GOLD_HIGH_PERFORMANCE_DEDUCTION: Money = Money::from_pence(1800);

/// Discount for hires longer than [`MULTI_DAY_THRESHOLD`] days.
pub const MULTI_DAY_RATE: Rate = Rate::from_percent(10);

/// Cost breakdown for one hire. Built only by [`compute_quote`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Quote {
    pub subtotal: Money,
    pub discount: Money,
    pub insurance_fee: Money,
    pub deposit: Money,
    pub total: Money,
}

/// Computes the quote for a request.
///
/// Pure and total: the request is already validated, so there is no failure
/// path.
///
/// ## Example
/// ```rust
/// use hire_core::{compute_quote, Customer, DaysHired, RentalRequest, VehicleType};
///
/// let request = RentalRequest::new(VehicleType::Saloon, DaysHired::new(8).unwrap(), false, Customer::New);
/// let quote = compute_quote(&request);
/// assert_eq!(quote.discount.pence(), 1800);
/// assert_eq!(quote.total.pence(), 21200);
/// ```
pub fn compute_quote(request: &RentalRequest) -> Quote {
    let days = request.days.get();
    let subtotal = request.vehicle.daily_charge() * days;

    let mut discount = ExactMoney::zero();

    if days > MULTI_DAY_THRESHOLD {
        discount += subtotal.portion(MULTI_DAY_RATE);
    }

    if let Customer::Existing(tier) = request.customer {
        discount += subtotal.portion(tier.discount_rate());

        if tier == LoyaltyTier::Gold && request.vehicle == VehicleType::HighPerformance {
            discount += GOLD_HIGH_PERFORMANCE_DEDUCTION.exact();
        }
    }

    let discount = discount.round_half_even();

    let insurance_fee = if request.wants_insurance {
        INSURANCE_FEE
    } else {
        Money::zero()
    };

    let total = subtotal - discount + insurance_fee + DEPOSIT;

    Quote {
        subtotal,
        discount,
        insurance_fee,
        deposit: DEPOSIT,
        total,
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::DaysHired;

    fn request(vehicle: VehicleType, days: u32, insurance: bool, customer: Customer) -> RentalRequest {
        RentalRequest::new(vehicle, DaysHired::new(days).unwrap(), insurance, customer)
    }

    #[test]
    fn test_saloon_one_day_new_customer() {
        let quote = compute_quote(&request(VehicleType::Saloon, 1, false, Customer::New));
        assert_eq!(quote.subtotal.pence(), 2250);
        assert_eq!(quote.discount, Money::zero());
        assert_eq!(quote.insurance_fee, Money::zero());
        assert_eq!(quote.deposit.pence(), 5000);
        assert_eq!(quote.total.pence(), 7250);
    }

    #[test]
    fn test_seven_days_has_no_multi_day_discount() {
        let quote = compute_quote(&request(VehicleType::Saloon, 7, false, Customer::New));
        assert_eq!(quote.discount, Money::zero());
        assert_eq!(quote.total.pence(), 20750);
    }

    #[test]
    fn test_eight_days_gets_multi_day_discount() {
        let quote = compute_quote(&request(VehicleType::Saloon, 8, false, Customer::New));
        assert_eq!(quote.subtotal.pence(), 18000);
        assert_eq!(quote.discount.pence(), 1800);
        assert_eq!(quote.total.pence(), 21200);
    }

    #[test]
    fn test_gold_high_performance_with_insurance() {
        let quote = compute_quote(&request(
            VehicleType::HighPerformance,
            1,
            true,
            Customer::Existing(LoyaltyTier::Gold),
        ));
        assert_eq!(quote.subtotal.pence(), 2800);
        assert_eq!(quote.discount.pence(), 2220);
        assert_eq!(quote.insurance_fee.pence(), 1550);
        assert_eq!(quote.total.pence(), 7130);
    }

    #[test]
    fn test_gold_other_vehicles_get_percentage_only() {
        let quote = compute_quote(&request(
            VehicleType::Van,
            2,
            false,
            Customer::Existing(LoyaltyTier::Gold),
        ));
        // 15% of £70.00
        assert_eq!(quote.discount.pence(), 1050);
        assert_eq!(quote.total.pence(), 7000 - 1050 + 5000);
    }

    #[test]
    fn test_silver_and_bronze() {
        let silver = compute_quote(&request(
            VehicleType::Van,
            4,
            false,
            Customer::Existing(LoyaltyTier::Silver),
        ));
        assert_eq!(silver.discount.pence(), 1400);

        let bronze = compute_quote(&request(
            VehicleType::Van,
            4,
            false,
            Customer::Existing(LoyaltyTier::Bronze),
        ));
        assert_eq!(bronze.discount.pence(), 700);
    }

    #[test]
    fn test_multi_day_and_loyalty_stack_on_subtotal() {
        // 10 days High Performance: £280.00
        // 10% multi-day + 15% gold = £70.00, plus £18.00 flat
        let quote = compute_quote(&request(
            VehicleType::HighPerformance,
            10,
            true,
            Customer::Existing(LoyaltyTier::Gold),
        ));
        assert_eq!(quote.subtotal.pence(), 28000);
        assert_eq!(quote.discount.pence(), 7000 + 1800);
        assert_eq!(quote.total.pence(), 28000 - 8800 + 1550 + 5000);
    }

    #[test]
    fn test_half_penny_discount_rounds_once() {
        // 5% of £22.50 = 112.5p → 112p, total £71.38
        let quote = compute_quote(&request(
            VehicleType::Saloon,
            1,
            false,
            Customer::Existing(LoyaltyTier::Bronze),
        ));
        assert_eq!(quote.discount.pence(), 112);
        assert_eq!(quote.total.to_string(), "£71.38");
    }

    #[test]
    fn test_new_customer_never_gets_loyalty_discount() {
        for vehicle in VehicleType::ALL {
            let quote = compute_quote(&request(vehicle, 3, false, Customer::New));
            assert_eq!(quote.discount, Money::zero());
        }
    }
}
