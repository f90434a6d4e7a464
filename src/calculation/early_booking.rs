//! Early-booking discount calculation.
//!
//! The lead time is measured from `today`, which callers inject so that
//! pricing stays reproducible.

use chrono::NaiveDate;
use rust_decimal::Decimal;

use crate::config::TariffConfig;
use crate::models::{AdjustmentKind, AuditStep, DateRange};

use super::adjustment::{AdjustmentResult, non_zero_adjustment};
use super::currency::{as_percentage, round_cents, signed_percent};
use super::stay_nights::days_until;

/// Calculates the early-booking discount for one room.
///
/// Standard tiers: ≥ 60 days ahead 10%, ≥ 30 days 7%, ≥ 14 days 5%.
pub fn calculate_early_booking_discount(
    range: &DateRange,
    base_amount: Decimal,
    today: NaiveDate,
    tariff: &TariffConfig,
    room_id: &str,
    step_number: u32,
) -> AdjustmentResult {
    let days_ahead = days_until(today, range.start);
    let tier = tariff.booking_tier(days_ahead);
    let discount = tier.map_or(Decimal::ZERO, |t| t.discount);
    let amount = -round_cents(base_amount * discount);

    let audit_step = AuditStep {
        step_number,
        rule_id: "early_booking_discount".to_string(),
        rule_name: "Early Booking Discount".to_string(),
        room_id: Some(room_id.to_string()),
        input: serde_json::json!({
            "today": today.to_string(),
            "check_in": range.start.to_string(),
            "days_ahead": days_ahead,
            "base_amount": base_amount.normalize().to_string(),
        }),
        output: serde_json::json!({
            "tier_min_days_ahead": tier.map(|t| t.min_days_ahead),
            "discount": discount.normalize().to_string(),
            "amount": amount.normalize().to_string(),
        }),
        reasoning: match tier {
            Some(t) => format!(
                "Booked {} days ahead (tier ≥ {}): -${} × {} = ${}",
                days_ahead,
                t.min_days_ahead,
                base_amount.normalize(),
                discount.normalize(),
                amount.normalize()
            ),
            None => format!("Booked {} days ahead; no early-booking tier", days_ahead),
        },
    };

    AdjustmentResult {
        adjustment: non_zero_adjustment(
            AdjustmentKind::EarlyBooking,
            amount,
            Some(as_percentage(-discount)),
            format!(
                "Early booking: {} days ahead ({})",
                days_ahead,
                signed_percent(-discount)
            ),
        ),
        audit_step,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ConfigLoader;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn make_date(date_str: &str) -> NaiveDate {
        NaiveDate::parse_from_str(date_str, "%Y-%m-%d").unwrap()
    }

    fn load_tariff() -> TariffConfig {
        ConfigLoader::load("./config/standard")
            .expect("Failed to load config")
            .config()
            .tariff()
            .clone()
    }

    fn discount_booked_on(today: &str) -> Decimal {
        let tariff = load_tariff();
        let range = DateRange::new(make_date("2024-09-10"), make_date("2024-09-12"));
        calculate_early_booking_discount(&range, dec("200"), make_date(today), &tariff, "room_101", 1)
            .amount()
    }

    #[test]
    fn test_last_minute_booking_gets_nothing() {
        assert_eq!(discount_booked_on("2024-09-10"), Decimal::ZERO);
        assert_eq!(discount_booked_on("2024-08-28"), Decimal::ZERO); // 13 days
    }

    #[test]
    fn test_booking_tiers() {
        assert_eq!(discount_booked_on("2024-08-27"), dec("-10.00")); // 14 days, 5%
        assert_eq!(discount_booked_on("2024-08-11"), dec("-14.00")); // 30 days, 7%
        assert_eq!(discount_booked_on("2024-07-12"), dec("-20.00")); // 60 days, 10%
        assert_eq!(discount_booked_on("2024-01-01"), dec("-20.00"));
    }

    #[test]
    fn test_check_in_in_the_past_gets_nothing() {
        assert_eq!(discount_booked_on("2024-09-11"), Decimal::ZERO);
    }

    #[test]
    fn test_same_clock_gives_same_result() {
        let tariff = load_tariff();
        let range = DateRange::new(make_date("2024-09-10"), make_date("2024-09-12"));
        let today = make_date("2024-07-01");

        let first = calculate_early_booking_discount(&range, dec("200"), today, &tariff, "r", 1);
        let second = calculate_early_booking_discount(&range, dec("200"), today, &tariff, "r", 1);
        assert_eq!(first.adjustment, second.adjustment);
        assert_eq!(first.audit_step, second.audit_step);
    }

    #[test]
    fn test_audit_records_lead_time() {
        let tariff = load_tariff();
        let range = DateRange::new(make_date("2024-09-10"), make_date("2024-09-12"));

        let result = calculate_early_booking_discount(
            &range,
            dec("200"),
            make_date("2024-08-11"),
            &tariff,
            "room_101",
            5,
        );
        assert_eq!(result.audit_step.input["days_ahead"], 30);
        assert_eq!(result.audit_step.output["tier_min_days_ahead"], 30);
        assert_eq!(result.adjustment.unwrap().percentage, Some(dec("-7")));
    }
}
