//! # Report Module
//!
//! Every piece of text the terminal shows, built as plain `String`s so the
//! front end only has to write them out.
//!
//! ## Summary Layout
//! ```text
//! ==================================================   ← 50 wide
//!          CAR HIRE QUOTE SUMMARY
//! ==================================================
//! Vehicle Type:        High Performance              ← labels padded to 21
//! Daily Charge:        £28.00
//! Days Hired:          1
//! Customer Type:       EXISTING
//! Loyalty Card:        GOLD
//! Insurance Cover:     Included (£15.50)
//! Deposit:             £50.00
//! --------------------------------------------------
//! TOTAL COST:          £71.30
//! ==================================================
//! ```

use std::fmt::Write as _;

use crate::pricing::{Quote, GOLD_HIGH_PERFORMANCE_DEDUCTION};
use crate::types::{LoyaltyTier, RentalRequest, VehicleType};
use crate::{MAX_DAYS_HIRED, MIN_DAYS_HIRED};

/// Width of the summary rule lines.
pub const SUMMARY_WIDTH: usize = 50;

/// Column where values start on summary lines.
const LABEL_WIDTH: usize = 21;

// =============================================================================
// Prompts and Messages
// =============================================================================

pub const VEHICLE_REJECTED: &str = "\nInvalid vehicle type. Please try again.\n";

pub const INSURANCE_PROMPT: &str = "\nDo you need insurance cover? (Yes/No): ";
pub const INSURANCE_REJECTED: &str = "Invalid response. Please enter Yes or No.\n";

pub const CUSTOMER_TYPE_PROMPT: &str =
    "\nAre you a new or an existing customer? (New/Existing): ";
pub const CUSTOMER_TYPE_REJECTED: &str = "Invalid response. Must enter 'New' or 'Existing'.\n";
pub const CUSTOMER_TYPE_EXHAUSTED: &str = "\nToo many invalid attempts. Exiting program.\n";

pub const LOYALTY_REJECTED: &str = "Invalid loyalty card type. Please try again.\n";

/// First prompt for the day count.
pub fn days_prompt() -> String {
    format!(
        "\nEnter the number of days for hire ({}-{}): ",
        MIN_DAYS_HIRED, MAX_DAYS_HIRED
    )
}

/// Shown after any rejected day count. Doubles as the next prompt.
pub fn days_rejected() -> String {
    format!(
        "Invalid input. Please enter a number between {} and {}: ",
        MIN_DAYS_HIRED, MAX_DAYS_HIRED
    )
}

/// Vehicle menu with the daily charge for each type.
pub fn vehicle_menu() -> String {
    let mut menu = String::from("\nEnter vehicle type:\n");
    for vehicle in VehicleType::ALL {
        let _ = writeln!(
            menu,
            "  {} - {} ({}/day)",
            vehicle.code(),
            vehicle.display_name(),
            vehicle.daily_charge()
        );
    }
    menu.push_str("Choice: ");
    menu
}

/// Loyalty card menu with the discount for each tier.
pub fn loyalty_menu() -> String {
    let mut menu = String::from("\nEnter loyalty card type:\n");
    for tier in LoyaltyTier::ALL {
        let _ = write!(
            menu,
            "  {} - {}% additional discount",
            tier_title(tier),
            tier.discount_rate().bps() / 100
        );
        if tier == LoyaltyTier::Gold {
            let _ = write!(
                menu,
                " + £{} off {}",
                GOLD_HIGH_PERFORMANCE_DEDUCTION.pounds(),
                VehicleType::HighPerformance.display_name()
            );
        }
        menu.push('\n');
    }
    menu.push_str("Choice: ");
    menu
}

fn tier_title(tier: LoyaltyTier) -> &'static str {
    match tier {
        LoyaltyTier::Bronze => "Bronze",
        LoyaltyTier::Silver => "Silver",
        LoyaltyTier::Gold => "Gold",
    }
}

/// Welcome block printed before the first prompt.
pub fn banner() -> String {
    let stars = "*".repeat(38);
    format!("\n{stars}\n   WELCOME TO CAR HIRE SERVICES\n{stars}\n")
}

/// Printed after the summary.
pub fn closing_line() -> String {
    "\nThank you for choosing our car hire service!\n\n".to_string()
}

// =============================================================================
// Summary
// =============================================================================

/// Formats the quote summary block.
///
/// Pure presentation: every figure comes from `request` or `quote`.
pub fn format_summary(request: &RentalRequest, quote: &Quote) -> String {
    let heavy = "=".repeat(SUMMARY_WIDTH);
    let light = "-".repeat(SUMMARY_WIDTH);

    let loyalty = request
        .loyalty_tier()
        .map_or("None", |tier| tier.label());

    let insurance = if request.wants_insurance {
        format!("Included ({})", quote.insurance_fee)
    } else {
        "Not Included".to_string()
    };

    let mut out = String::new();
    out.push('\n');
    let _ = writeln!(out, "{heavy}");
    let _ = writeln!(out, "         CAR HIRE QUOTE SUMMARY");
    let _ = writeln!(out, "{heavy}");
    line(&mut out, "Vehicle Type:", request.vehicle.display_name());
    line(&mut out, "Daily Charge:", request.vehicle.daily_charge());
    line(&mut out, "Days Hired:", request.days);
    line(&mut out, "Customer Type:", request.customer_type());
    line(&mut out, "Loyalty Card:", loyalty);
    line(&mut out, "Insurance Cover:", insurance);
    line(&mut out, "Deposit:", quote.deposit);
    let _ = writeln!(out, "{light}");
    line(&mut out, "TOTAL COST:", quote.total);
    let _ = writeln!(out, "{heavy}");
    out
}

fn line(out: &mut String, label: &str, value: impl std::fmt::Display) {
    let _ = writeln!(out, "{label:<width$}{value}", width = LABEL_WIDTH);
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pricing::compute_quote;
    use crate::types::{Customer, DaysHired};

    fn gold_hp() -> RentalRequest {
        RentalRequest::new(
            VehicleType::HighPerformance,
            DaysHired::new(1).unwrap(),
            true,
            Customer::Existing(LoyaltyTier::Gold),
        )
    }

    #[test]
    fn test_summary_layout() {
        let request = gold_hp();
        let summary = format_summary(&request, &compute_quote(&request));

        let expected = "\n\
==================================================\n\
\x20        CAR HIRE QUOTE SUMMARY\n\
==================================================\n\
Vehicle Type:        High Performance\n\
Daily Charge:        £28.00\n\
Days Hired:          1\n\
Customer Type:       EXISTING\n\
Loyalty Card:        GOLD\n\
Insurance Cover:     Included (£15.50)\n\
Deposit:             £50.00\n\
--------------------------------------------------\n\
TOTAL COST:          £71.30\n\
==================================================\n";
        assert_eq!(summary, expected);
    }

    #[test]
    fn test_summary_new_customer_without_insurance() {
        let request = RentalRequest::new(
            VehicleType::Saloon,
            DaysHired::new(7).unwrap(),
            false,
            Customer::New,
        );
        let summary = format_summary(&request, &compute_quote(&request));

        assert!(summary.contains("Customer Type:       NEW\n"));
        assert!(summary.contains("Loyalty Card:        None\n"));
        assert!(summary.contains("Insurance Cover:     Not Included\n"));
        assert!(summary.contains("TOTAL COST:          £207.50\n"));
    }

    #[test]
    fn test_rule_lines_are_fifty_wide() {
        let request = gold_hp();
        let summary = format_summary(&request, &compute_quote(&request));
        for rule in summary.lines().filter(|l| l.starts_with('=') || l.starts_with('-')) {
            assert_eq!(rule.chars().count(), SUMMARY_WIDTH);
        }
    }

    #[test]
    fn test_vehicle_menu_lists_rates() {
        let menu = vehicle_menu();
        assert!(menu.contains("  S - Saloon (£22.50/day)\n"));
        assert!(menu.contains("  H - High Performance (£28.00/day)\n"));
        assert!(menu.contains("  V - Van (£35.00/day)\n"));
        assert!(menu.ends_with("Choice: "));
    }

    #[test]
    fn test_loyalty_menu() {
        let menu = loyalty_menu();
        assert!(menu.contains("  Bronze - 5% additional discount\n"));
        assert!(menu.contains("  Silver - 10% additional discount\n"));
        assert!(menu.contains("  Gold - 15% additional discount + £18 off High Performance\n"));
    }

    #[test]
    fn test_day_prompts() {
        assert_eq!(days_prompt(), "\nEnter the number of days for hire (1-10): ");
        assert_eq!(
            days_rejected(),
            "Invalid input. Please enter a number between 1 and 10: "
        );
    }

    #[test]
    fn test_banner() {
        let banner = banner();
        assert!(banner.contains("WELCOME TO CAR HIRE SERVICES"));
        assert_eq!(banner.matches(&"*".repeat(38)).count(), 2);
    }
}
