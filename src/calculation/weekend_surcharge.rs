//! Weekend surcharge calculation.
//!
//! Each weekend night (Friday and Saturday under the standard tariff) adds a
//! fixed share of the nightly rate.

use rust_decimal::Decimal;

use crate::config::TariffConfig;
use crate::models::{AdjustmentKind, AuditStep, DateRange};

use super::adjustment::{AdjustmentResult, non_zero_adjustment};
use super::currency::{as_percentage, round_cents, signed_percent};
use super::stay_nights::count_weekend_nights;

/// Calculates the weekend surcharge for one room over a stay.
///
/// `amount = nightly_rate × surcharge × weekend nights`, rounded to cents.
///
/// # Arguments
///
/// * `range` - The stay being priced
/// * `nightly_rate` - The room's nightly rate
/// * `tariff` - The tariff holding the surcharge and weekend nights
/// * `room_id` - The room, recorded in the audit step
/// * `step_number` - The step number for audit trail sequencing
///
/// # Examples
///
/// ```no_run
/// use occupancy_engine::calculation::calculate_weekend_surcharge;
/// use occupancy_engine::config::ConfigLoader;
/// use occupancy_engine::models::DateRange;
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
///
/// let loader = ConfigLoader::load("config/standard").unwrap();
/// let range = DateRange::new(
///     NaiveDate::from_ymd_opt(2024, 7, 5).unwrap(),
///     NaiveDate::from_ymd_opt(2024, 7, 7).unwrap(),
/// );
///
/// let result = calculate_weekend_surcharge(&range, Decimal::new(150, 0), loader.config().tariff(), "room_101", 1);
/// // 2 weekend nights × $150 × 25% = $75.00
/// assert_eq!(result.amount(), Decimal::new(7500, 2));
/// ```
pub fn calculate_weekend_surcharge(
    range: &DateRange,
    nightly_rate: Decimal,
    tariff: &TariffConfig,
    room_id: &str,
    step_number: u32,
) -> AdjustmentResult {
    let surcharge = tariff.weekend.surcharge;
    let weekend_nights = count_weekend_nights(range, tariff);
    let amount = round_cents(nightly_rate * surcharge * Decimal::from(weekend_nights));

    let description = format!(
        "Weekend surcharge: {} night(s) at {} of nightly rate",
        weekend_nights,
        signed_percent(surcharge)
    );

    let audit_step = AuditStep {
        step_number,
        rule_id: "weekend_surcharge".to_string(),
        rule_name: "Weekend Surcharge".to_string(),
        room_id: Some(room_id.to_string()),
        input: serde_json::json!({
            "nightly_rate": nightly_rate.normalize().to_string(),
            "nights": range.nights(),
            "weekend_nights": weekend_nights,
            "surcharge": surcharge.normalize().to_string(),
        }),
        output: serde_json::json!({
            "amount": amount.normalize().to_string(),
        }),
        reasoning: format!(
            "Weekend surcharge: {} night(s) × ${} × {} = ${}",
            weekend_nights,
            nightly_rate.normalize(),
            surcharge.normalize(),
            amount.normalize()
        ),
    };

    AdjustmentResult {
        adjustment: non_zero_adjustment(
            AdjustmentKind::WeekendSurcharge,
            amount,
            Some(as_percentage(surcharge)),
            description,
        ),
        audit_step,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ConfigLoader;
    use chrono::NaiveDate;
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

    #[test]
    fn test_friday_to_sunday_has_two_weekend_nights() {
        let tariff = load_tariff();
        let range = DateRange::new(make_date("2024-07-05"), make_date("2024-07-07"));

        let result = calculate_weekend_surcharge(&range, dec("150"), &tariff, "room_101", 1);

        // 2 × 150 × 0.25 = 75.00
        let adjustment = result.adjustment.unwrap();
        assert_eq!(adjustment.amount, dec("75.00"));
        assert_eq!(adjustment.kind, AdjustmentKind::WeekendSurcharge);
        assert_eq!(adjustment.percentage, Some(dec("25")));
    }

    #[test]
    fn test_single_saturday_night() {
        let tariff = load_tariff();
        // 2024-07-06 is a Saturday
        let range = DateRange::new(make_date("2024-07-06"), make_date("2024-07-07"));

        let result = calculate_weekend_surcharge(&range, dec("150"), &tariff, "room_101", 1);
        assert_eq!(result.amount(), dec("37.50"));
    }

    #[test]
    fn test_midweek_stay_has_no_surcharge() {
        let tariff = load_tariff();
        // Monday to Thursday
        let range = DateRange::new(make_date("2024-07-01"), make_date("2024-07-04"));

        let result = calculate_weekend_surcharge(&range, dec("150"), &tariff, "room_101", 1);
        assert!(result.adjustment.is_none());
        assert_eq!(result.amount(), Decimal::ZERO);
        assert_eq!(result.audit_step.input["weekend_nights"], 0);
    }

    #[test]
    fn test_audit_step_records_inputs() {
        let tariff = load_tariff();
        let range = DateRange::new(make_date("2024-07-05"), make_date("2024-07-07"));

        let result = calculate_weekend_surcharge(&range, dec("150"), &tariff, "room_101", 3);

        assert_eq!(result.audit_step.step_number, 3);
        assert_eq!(result.audit_step.rule_id, "weekend_surcharge");
        assert_eq!(result.audit_step.room_id.as_deref(), Some("room_101"));
        assert_eq!(result.audit_step.input["nightly_rate"].as_str().unwrap(), "150");
        assert_eq!(result.audit_step.input["surcharge"].as_str().unwrap(), "0.25");
        assert_eq!(result.audit_step.output["amount"].as_str().unwrap(), "75");
    }
}
