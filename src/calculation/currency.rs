//! Currency rounding and percentage formatting shared by the pricing rules.

use rust_decimal::{Decimal, RoundingStrategy};

/// Rounds a monetary amount to cents, halves away from zero.
///
/// # Example
///
/// ```
/// use occupancy_engine::calculation::round_cents;
/// use rust_decimal::Decimal;
///
/// assert_eq!(round_cents(Decimal::new(43875, 3)), Decimal::new(4388, 2));
/// assert_eq!(round_cents(Decimal::new(-10125, 3)), Decimal::new(-1013, 2));
/// ```
pub fn round_cents(amount: Decimal) -> Decimal {
    amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}

/// Formats a fraction as a signed percentage label, e.g. `0.2` → `"+20%"`.
pub(crate) fn signed_percent(fraction: Decimal) -> String {
    let percent = (fraction * Decimal::ONE_HUNDRED).normalize();
    if percent.is_sign_negative() {
        format!("{}%", percent)
    } else {
        format!("+{}%", percent)
    }
}

/// Converts a fraction to a percentage value, e.g. `0.25` → `25`.
pub(crate) fn as_percentage(fraction: Decimal) -> Decimal {
    (fraction * Decimal::ONE_HUNDRED).normalize()
}
