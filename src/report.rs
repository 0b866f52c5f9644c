//! Output formatting for payroll results.

use rust_decimal::{Decimal, RoundingStrategy};

use crate::models::PayrollResult;

/// Number of fraction digits in printed amounts.
pub const AMOUNT_DECIMAL_PLACES: u32 = 2;

/// Formats an amount with exactly two fraction digits, rounding half away
/// from zero. No thousands separator is used.
///
/// # Examples
///
/// ```
/// use payroll_engine::report::format_amount;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// assert_eq!(format_amount(Decimal::from(10260)), "10260.00");
/// assert_eq!(format_amount(Decimal::from_str("22.5").unwrap()), "22.50");
/// assert_eq!(format_amount(Decimal::from_str("0.125").unwrap()), "0.13");
/// assert_eq!(format_amount(Decimal::ZERO), "0.00");
/// ```
pub fn format_amount(amount: Decimal) -> String {
    let rounded =
        amount.round_dp_with_strategy(AMOUNT_DECIMAL_PLACES, RoundingStrategy::MidpointAwayFromZero);
    let rounded = if rounded.is_zero() { Decimal::ZERO } else { rounded };
    format!("{:.*}", AMOUNT_DECIMAL_PLACES as usize, rounded)
}

/// Formats the payroll total for standard output.
pub fn format_total(result: &PayrollResult) -> String {
    format_amount(result.total())
}

/// Renders the full payroll result as pretty-printed JSON.
pub fn render_json(result: &PayrollResult) -> serde_json::Result<String> {
    serde_json::to_string_pretty(result)
}
