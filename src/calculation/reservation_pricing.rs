//! Reservation-level pricing.
//!
//! Prices every room of a reservation, then applies taxes and fees once to
//! the combined subtotal.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use std::collections::HashMap;

use crate::config::{ChargesConfig, EngineConfig};
use crate::models::{
    AuditStep, AuditTrace, AuditWarning, DateRange, FeeBreakdown, FeeKind, FeeLine,
    ReservationPricing, Room, RoomType, TaxBreakdown, TaxKind, TaxLine,
};

use super::currency::round_cents;
use super::room_pricing::price_room;

/// Prices a reservation across `rooms` for `range`.
///
/// Rooms whose room type is missing from `room_types` are excluded and
/// reported through `excluded_room_ids` and an audit warning. The function
/// is pure: the same inputs and `today` always produce the same result.
///
/// # Examples
///
/// ```no_run
/// use occupancy_engine::calculation::calculate_pricing;
/// use occupancy_engine::config::ConfigLoader;
/// use occupancy_engine::models::{DateRange, Room, RoomType};
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
///
/// let loader = ConfigLoader::load("config/standard").unwrap();
/// let room_type = RoomType {
///     id: "standard".to_string(),
///     name: "Standard".to_string(),
///     base_rate: Decimal::new(150, 0),
///     capacity: 2,
///     amenities: vec![],
/// };
/// let room = Room::new("room_101", "hotel_1", "101", 2, "standard");
/// let range = DateRange::new(
///     NaiveDate::from_ymd_opt(2024, 7, 5).unwrap(),
///     NaiveDate::from_ymd_opt(2024, 7, 7).unwrap(),
/// );
///
/// let pricing = calculate_pricing(
///     &[room],
///     &[room_type],
///     &range,
///     loader.config(),
///     NaiveDate::from_ymd_opt(2024, 7, 1).unwrap(),
/// );
/// assert_eq!(pricing.total, Decimal::new(55525, 2));
/// ```
pub fn calculate_pricing(
    rooms: &[Room],
    room_types: &[RoomType],
    range: &DateRange,
    config: &EngineConfig,
    today: NaiveDate,
) -> ReservationPricing {
    let types_by_id: HashMap<&str, &RoomType> =
        room_types.iter().map(|t| (t.id.as_str(), t)).collect();
    let nights = range.nights();

    let mut trace = AuditTrace::default();
    let mut breakdowns = Vec::with_capacity(rooms.len());
    let mut excluded_room_ids = Vec::new();
    let mut next_step = 1;

    for room in rooms {
        let Some(room_type) = types_by_id.get(room.room_type_id.as_str()) else {
            excluded_room_ids.push(room.id.clone());
            trace.warnings.push(AuditWarning {
                code: "ROOM_TYPE_NOT_FOUND".to_string(),
                message: format!(
                    "Room {} references unknown room type '{}' and was not priced",
                    room.id, room.room_type_id
                ),
                severity: "medium".to_string(),
            });
            continue;
        };

        let priced = price_room(room, room_type, range, config.tariff(), today, next_step);
        next_step += priced.audit_steps.len() as u32;
        trace.steps.extend(priced.audit_steps);
        breakdowns.push(priced.breakdown);
    }

    let base_total: Decimal = breakdowns.iter().map(|b| b.base_amount).sum();
    let adjustments_total: Decimal = breakdowns.iter().map(|b| b.adjustments_total()).sum();
    let subtotal: Decimal = breakdowns.iter().map(|b| b.final_amount).sum();

    let (taxes, fees) = if breakdowns.is_empty() {
        trace.warnings.push(AuditWarning {
            code: "NO_ROOMS_PRICED".to_string(),
            message: "No rooms could be priced; taxes and fees were not applied".to_string(),
            severity: "high".to_string(),
        });
        (
            TaxBreakdown {
                lines: vec![],
                total: Decimal::ZERO,
            },
            FeeBreakdown {
                lines: vec![],
                total: Decimal::ZERO,
            },
        )
    } else {
        let charges = config.charges();
        let taxes = calculate_taxes(subtotal, charges);
        let fees = calculate_fees(subtotal, nights, charges);
        trace.steps.push(tax_audit_step(next_step, subtotal, &taxes));
        trace.steps.push(fee_audit_step(next_step + 1, subtotal, nights, &fees));
        (taxes, fees)
    };

    let total = subtotal + taxes.total + fees.total;

    ReservationPricing {
        date_range: *range,
        nights,
        rooms: breakdowns,
        excluded_room_ids,
        base_total,
        adjustments_total,
        subtotal,
        taxes,
        fees,
        total,
        audit_trace: trace,
    }
}

/// Applies city, state and tourism tax to `subtotal`.
///
/// Each line is rounded on its own; the total is the sum of the rounded lines.
pub fn calculate_taxes(subtotal: Decimal, charges: &ChargesConfig) -> TaxBreakdown {
    let rates = &charges.taxes;
    let lines: Vec<TaxLine> = [
        (TaxKind::City, rates.city),
        (TaxKind::State, rates.state),
        (TaxKind::Tourism, rates.tourism),
    ]
    .into_iter()
    .map(|(kind, rate)| TaxLine {
        kind,
        rate,
        amount: round_cents(subtotal * rate),
    })
    .collect();
    let total = lines.iter().map(|l| l.amount).sum();

    TaxBreakdown { lines, total }
}

/// Computes the reservation fees: resort per night, service on the subtotal,
/// and a flat cleaning fee.
pub fn calculate_fees(subtotal: Decimal, nights: u32, charges: &ChargesConfig) -> FeeBreakdown {
    let fees = &charges.fees;
    let lines = vec![
        FeeLine {
            kind: FeeKind::Resort,
            description: format!(
                "Resort fee: {} night(s) × ${}",
                nights,
                fees.resort_per_night.normalize()
            ),
            amount: round_cents(fees.resort_per_night * Decimal::from(nights)),
        },
        FeeLine {
            kind: FeeKind::Service,
            description: format!(
                "Service fee: {}% of subtotal",
                (fees.service_rate * Decimal::ONE_HUNDRED).normalize()
            ),
            amount: round_cents(subtotal * fees.service_rate),
        },
        FeeLine {
            kind: FeeKind::Cleaning,
            description: "Cleaning fee".to_string(),
            amount: round_cents(fees.cleaning),
        },
    ];
    let total = lines.iter().map(|l| l.amount).sum();

    FeeBreakdown { lines, total }
}

fn tax_audit_step(step_number: u32, subtotal: Decimal, taxes: &TaxBreakdown) -> AuditStep {
    AuditStep {
        step_number,
        rule_id: "taxes".to_string(),
        rule_name: "Taxes".to_string(),
        room_id: None,
        input: serde_json::json!({
            "subtotal": subtotal.normalize().to_string(),
        }),
        output: serde_json::json!({
            "lines": taxes.lines.iter().map(|l| serde_json::json!({
                "kind": l.kind,
                "rate": l.rate.normalize().to_string(),
                "amount": l.amount.normalize().to_string(),
            })).collect::<Vec<_>>(),
            "total": taxes.total.normalize().to_string(),
        }),
        reasoning: format!(
            "Taxes on subtotal ${}: total ${}",
            subtotal.normalize(),
            taxes.total.normalize()
        ),
    }
}

fn fee_audit_step(
    step_number: u32,
    subtotal: Decimal,
    nights: u32,
    fees: &FeeBreakdown,
) -> AuditStep {
    AuditStep {
        step_number,
        rule_id: "fees".to_string(),
        rule_name: "Reservation Fees".to_string(),
        room_id: None,
        input: serde_json::json!({
            "subtotal": subtotal.normalize().to_string(),
            "nights": nights,
        }),
        output: serde_json::json!({
            "lines": fees.lines.iter().map(|l| serde_json::json!({
                "kind": l.kind,
                "amount": l.amount.normalize().to_string(),
            })).collect::<Vec<_>>(),
            "total": fees.total.normalize().to_string(),
        }),
        reasoning: format!(
            "Fees charged once per reservation: total ${}",
            fees.total.normalize()
        ),
    }
}
