//! Length-of-stay discount calculation.

use rust_decimal::Decimal;

use crate::config::TariffConfig;
use crate::models::{AdjustmentKind, AuditStep};

use super::adjustment::{AdjustmentResult, non_zero_adjustment};
use super::currency::{as_percentage, round_cents, signed_percent};

/// Calculates the length-of-stay discount for one room.
///
/// The largest tier whose `min_nights` the stay reaches applies; the
/// discount is taken off `base_amount`. Under the standard tariff:
///
/// | Nights | Discount |
/// |--------|----------|
/// | ≥ 14   | 20%      |
/// | ≥ 7    | 15%      |
/// | ≥ 4    | 8%       |
/// | ≥ 3    | 5%       |
pub fn calculate_length_of_stay_discount(
    nights: u32,
    base_amount: Decimal,
    tariff: &TariffConfig,
    room_id: &str,
    step_number: u32,
) -> AdjustmentResult {
    let tier = tariff.stay_tier(nights);
    let discount = tier.map_or(Decimal::ZERO, |t| t.discount);
    let amount = -round_cents(base_amount * discount);

    let description = format!(
        "Length of stay: {} nights ({})",
        nights,
        signed_percent(-discount)
    );

    let audit_step = AuditStep {
        step_number,
        rule_id: "length_of_stay_discount".to_string(),
        rule_name: "Length of Stay Discount".to_string(),
        room_id: Some(room_id.to_string()),
        input: serde_json::json!({
            "nights": nights,
            "base_amount": base_amount.normalize().to_string(),
        }),
        output: serde_json::json!({
            "tier_min_nights": tier.map(|t| t.min_nights),
            "discount": discount.normalize().to_string(),
            "amount": amount.normalize().to_string(),
        }),
        reasoning: match tier {
            Some(t) => format!(
                "{} nights reaches the {}-night tier: -${} × {} = ${}",
                nights,
                t.min_nights,
                base_amount.normalize(),
                discount.normalize(),
                amount.normalize()
            ),
            None => format!("{} nights is below every length-of-stay tier", nights),
        },
    };

    AdjustmentResult {
        adjustment: non_zero_adjustment(
            AdjustmentKind::LengthOfStay,
            amount,
            Some(as_percentage(-discount)),
            description,
        ),
        audit_step,
    }
}
