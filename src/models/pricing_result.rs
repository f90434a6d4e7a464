//! Pricing result models.
//!
//! This module contains the per-room [`PricingBreakdown`], the
//! reservation-level [`ReservationPricing`] and the audit types that record
//! every pricing rule decision.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::DateRange;

/// The kind of a pricing adjustment, in application order.
///
/// # Example
///
/// ```
/// use occupancy_engine::models::AdjustmentKind;
///
/// let kind = AdjustmentKind::LengthOfStay;
/// assert_eq!(format!("{:?}", kind), "LengthOfStay");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AdjustmentKind {
    /// Surcharge for Friday and Saturday nights.
    WeekendSurcharge,
    /// Surcharge or discount by check-in month.
    Seasonal,
    /// Discount for longer stays.
    LengthOfStay,
    /// Discount for booking well ahead of arrival.
    EarlyBooking,
}

/// A signed surcharge or discount applied to a room's base amount.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Adjustment {
    /// What kind of adjustment this is.
    pub kind: AdjustmentKind,
    /// Human-readable description (e.g., "Peak season (+20%)").
    pub description: String,
    /// Signed amount: positive for surcharges, negative for discounts.
    pub amount: Decimal,
    /// The percentage applied, when the adjustment is percentage based.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub percentage: Option<Decimal>,
}

/// The itemized price for one room over a stay.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PricingBreakdown {
    /// The room being priced.
    pub room_id: String,
    /// The room's type.
    pub room_type_id: String,
    /// The nightly rate used (room override or type base rate).
    pub nightly_rate: Decimal,
    /// Number of nights priced.
    pub nights: u32,
    /// `nightly_rate × nights`.
    pub base_amount: Decimal,
    /// Adjustments in application order. Only non-zero adjustments appear.
    pub adjustments: Vec<Adjustment>,
    /// `max(0, base_amount + Σ adjustments)`.
    pub final_amount: Decimal,
}

impl PricingBreakdown {
    /// Sum of all adjustment amounts.
    pub fn adjustments_total(&self) -> Decimal {
        self.adjustments.iter().map(|a| a.amount).sum()
    }
}

/// The tax authority a tax line is owed to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaxKind {
    /// City occupancy tax.
    City,
    /// State sales tax.
    State,
    /// Tourism levy.
    Tourism,
}

/// One line of the tax breakdown.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxLine {
    /// The tax authority.
    pub kind: TaxKind,
    /// The rate as a fraction (e.g., 0.03).
    pub rate: Decimal,
    /// The rounded amount.
    pub amount: Decimal,
}

/// The kind of a reservation-level fee.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FeeKind {
    /// Per-night resort fee.
    Resort,
    /// Percentage service fee on the subtotal.
    Service,
    /// Flat cleaning fee.
    Cleaning,
}

/// One line of the fee breakdown.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeeLine {
    /// The kind of fee.
    pub kind: FeeKind,
    /// Human-readable description.
    pub description: String,
    /// The rounded amount.
    pub amount: Decimal,
}

/// Taxes owed on a reservation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxBreakdown {
    /// City, state and tourism lines.
    pub lines: Vec<TaxLine>,
    /// Sum of the rounded lines.
    pub total: Decimal,
}

/// Fees charged once per reservation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeeBreakdown {
    /// Resort, service and cleaning lines.
    pub lines: Vec<FeeLine>,
    /// Sum of the lines.
    pub total: Decimal,
}

/// A single step in the audit trace recording a pricing decision.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditStep {
    /// The sequential step number.
    pub step_number: u32,
    /// The unique identifier of the rule that was applied.
    pub rule_id: String,
    /// The human-readable name of the rule.
    pub rule_name: String,
    /// The room the step applies to; absent for reservation-level steps.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub room_id: Option<String>,
    /// The input data for this step.
    pub input: serde_json::Value,
    /// The output data from this step.
    pub output: serde_json::Value,
    /// Human-readable explanation of the decision.
    pub reasoning: String,
}

/// A warning generated during pricing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditWarning {
    /// A code identifying the type of warning.
    pub code: String,
    /// A human-readable description of the warning.
    pub message: String,
    /// The severity level (e.g., "low", "medium", "high").
    pub severity: String,
}

/// The complete audit trace for a pricing calculation.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct AuditTrace {
    /// The sequence of rule decisions.
    pub steps: Vec<AuditStep>,
    /// Any warnings generated while pricing.
    pub warnings: Vec<AuditWarning>,
}

/// The complete price of a reservation across all of its rooms.
///
/// Taxes and fees are computed once for the whole reservation, not per room.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReservationPricing {
    /// The stay being priced.
    pub date_range: DateRange,
    /// Number of nights.
    pub nights: u32,
    /// One breakdown per priced room, in input order.
    pub rooms: Vec<PricingBreakdown>,
    /// Rooms left out because their room type was unknown.
    pub excluded_room_ids: Vec<String>,
    /// Sum of base amounts.
    pub base_total: Decimal,
    /// Sum of all room adjustments.
    pub adjustments_total: Decimal,
    /// Sum of per-room final amounts.
    pub subtotal: Decimal,
    /// Taxes on the subtotal.
    pub taxes: TaxBreakdown,
    /// Reservation-level fees.
    pub fees: FeeBreakdown,
    /// `subtotal + taxes + fees`.
    pub total: Decimal,
    /// Rule decisions taken while pricing.
    pub audit_trace: AuditTrace,
}
