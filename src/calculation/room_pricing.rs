//! Per-room stay pricing.
//!
//! Runs the base rate step and the four adjustment rules in order. Every rule
//! is evaluated against the base amount, so adjustments never compound.

use chrono::NaiveDate;
use rust_decimal::Decimal;

use crate::config::TariffConfig;
use crate::models::{AuditStep, DateRange, PricingBreakdown, Room, RoomType};

use super::adjustment::AdjustmentResult;
use super::currency::round_cents;
use super::early_booking::calculate_early_booking_discount;
use super::length_of_stay::calculate_length_of_stay_discount;
use super::seasonal_adjustment::calculate_seasonal_adjustment;
use super::weekend_surcharge::calculate_weekend_surcharge;

/// The priced room and the audit steps taken to price it.
#[derive(Debug, Clone)]
pub struct RoomPricingResult {
    /// The itemized price.
    pub breakdown: PricingBreakdown,
    /// Base rate step followed by one step per adjustment rule.
    pub audit_steps: Vec<AuditStep>,
}

/// Prices one room over a stay, numbering audit steps from `first_step`.
pub fn price_room(
    room: &Room,
    room_type: &RoomType,
    range: &DateRange,
    tariff: &TariffConfig,
    today: NaiveDate,
    first_step: u32,
) -> RoomPricingResult {
    let nights = range.nights();
    let nightly_rate = room.nightly_rate(room_type.base_rate);
    let base_amount = round_cents(nightly_rate * Decimal::from(nights));

    let rate_source = if room.rate.is_some() {
        "room override"
    } else {
        "room type base rate"
    };
    let base_step = AuditStep {
        step_number: first_step,
        rule_id: "base_rate".to_string(),
        rule_name: "Base Rate".to_string(),
        room_id: Some(room.id.clone()),
        input: serde_json::json!({
            "room_type_id": room_type.id,
            "room_rate": room.rate.map(|r| r.normalize().to_string()),
            "base_rate": room_type.base_rate.normalize().to_string(),
            "nights": nights,
        }),
        output: serde_json::json!({
            "nightly_rate": nightly_rate.normalize().to_string(),
            "base_amount": base_amount.normalize().to_string(),
        }),
        reasoning: format!(
            "Nightly rate ${} ({}) × {} night(s) = ${}",
            nightly_rate.normalize(),
            rate_source,
            nights,
            base_amount.normalize()
        ),
    };

    let rules: [AdjustmentResult; 4] = [
        calculate_weekend_surcharge(range, nightly_rate, tariff, &room.id, first_step + 1),
        calculate_seasonal_adjustment(range, base_amount, tariff, &room.id, first_step + 2),
        calculate_length_of_stay_discount(nights, base_amount, tariff, &room.id, first_step + 3),
        calculate_early_booking_discount(
            range,
            base_amount,
            today,
            tariff,
            &room.id,
            first_step + 4,
        ),
    ];

    let mut audit_steps = vec![base_step];
    let mut adjustments = Vec::new();
    for result in rules {
        audit_steps.push(result.audit_step);
        adjustments.extend(result.adjustment);
    }

    let adjusted: Decimal = base_amount + adjustments.iter().map(|a| a.amount).sum::<Decimal>();
    let final_amount = adjusted.max(Decimal::ZERO);

    RoomPricingResult {
        breakdown: PricingBreakdown {
            room_id: room.id.clone(),
            room_type_id: room_type.id.clone(),
            nightly_rate,
            nights,
            base_amount,
            adjustments,
            final_amount,
        },
        audit_steps,
    }
}

/// Prices one room over a stay, returning only the breakdown.
pub fn price(
    room: &Room,
    room_type: &RoomType,
    range: &DateRange,
    tariff: &TariffConfig,
    today: NaiveDate,
) -> PricingBreakdown {
    price_room(room, room_type, range, tariff, today, 1).breakdown
}
