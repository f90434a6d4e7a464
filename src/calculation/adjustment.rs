//! Shared result type for the pricing adjustment rules.

use rust_decimal::Decimal;

use crate::models::{Adjustment, AdjustmentKind, AuditStep};

/// The result of one pricing adjustment rule.
///
/// `adjustment` is `None` when the rule did not apply or came to zero; the
/// audit step is always recorded.
#[derive(Debug, Clone)]
pub struct AdjustmentResult {
    /// The adjustment to add to the breakdown, if any.
    pub adjustment: Option<Adjustment>,
    /// The audit step recording this rule decision.
    pub audit_step: AuditStep,
}

impl AdjustmentResult {
    /// The signed amount contributed, zero when the rule did not apply.
    pub fn amount(&self) -> Decimal {
        self.adjustment.as_ref().map_or(Decimal::ZERO, |a| a.amount)
    }
}

pub(crate) fn non_zero_adjustment(
    kind: AdjustmentKind,
    amount: Decimal,
    percentage: Option<Decimal>,
    description: String,
) -> Option<Adjustment> {
    if amount.is_zero() {
        return None;
    }
    Some(Adjustment {
        kind,
        description,
        amount,
        percentage,
    })
}
