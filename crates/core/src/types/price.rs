//! Money formatting with decimal arithmetic.
//!
//! The backend reports monetary amounts as plain numbers; all arithmetic and
//! display formatting on this side uses [`rust_decimal::Decimal`] to avoid
//! binary floating point drift when summing revenue.

use rust_decimal::Decimal;

/// Format an amount for display with a currency symbol prefix.
///
/// The symbol is configuration-supplied (e.g. `$`, `€`, `₹`); amounts always
/// render with two fractional digits.
///
/// ```
/// use cartwheel_core::format_amount;
/// use rust_decimal::Decimal;
///
/// assert_eq!(format_amount("$", Decimal::new(1999, 2)), "$19.99");
/// assert_eq!(format_amount("₹", Decimal::from(250)), "₹250.00");
/// ```
#[must_use]
pub fn format_amount(symbol: &str, amount: Decimal) -> String {
    format!("{symbol}{:.2}", amount)
}
