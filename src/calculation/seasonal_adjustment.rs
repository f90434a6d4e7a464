//! Seasonal adjustment calculation.
//!
//! The check-in month selects a seasonal bracket from the tariff. The whole
//! stay takes that bracket's adjustment, even if it runs into another month.

use chrono::Datelike;
use rust_decimal::Decimal;

use crate::config::TariffConfig;
use crate::models::{AdjustmentKind, AuditStep, DateRange};

use super::adjustment::{AdjustmentResult, non_zero_adjustment};
use super::currency::{as_percentage, round_cents, signed_percent};

/// Calculates the seasonal adjustment for one room over a stay.
///
/// `amount = base_amount × bracket adjustment`, rounded to cents. Months
/// outside every bracket get no adjustment.
pub fn calculate_seasonal_adjustment(
    range: &DateRange,
    base_amount: Decimal,
    tariff: &TariffConfig,
    room_id: &str,
    step_number: u32,
) -> AdjustmentResult {
    let month = range.start.month();
    let season = tariff.season_for(month);

    let (amount, adjustment, reasoning) = match season {
        Some(season) => {
            let amount = round_cents(base_amount * season.adjustment);
            let adjustment = non_zero_adjustment(
                AdjustmentKind::Seasonal,
                amount,
                Some(as_percentage(season.adjustment)),
                format!("{} ({})", season.name, signed_percent(season.adjustment)),
            );
            let reasoning = format!(
                "{} applies to check-in month {}: ${} × {} = ${}",
                season.name,
                month,
                base_amount.normalize(),
                season.adjustment.normalize(),
                amount.normalize()
            );
            (amount, adjustment, reasoning)
        }
        None => (
            Decimal::ZERO,
            None,
            format!("No seasonal bracket covers check-in month {}", month),
        ),
    };

    let audit_step = AuditStep {
        step_number,
        rule_id: "seasonal_adjustment".to_string(),
        rule_name: "Seasonal Adjustment".to_string(),
        room_id: Some(room_id.to_string()),
        input: serde_json::json!({
            "base_amount": base_amount.normalize().to_string(),
            "check_in_month": month,
        }),
        output: serde_json::json!({
            "season": season.map(|s| s.name.clone()),
            "adjustment": season.map(|s| s.adjustment.normalize().to_string()),
            "amount": amount.normalize().to_string(),
        }),
        reasoning,
    };

    AdjustmentResult {
        adjustment,
        audit_step,
    }
}
