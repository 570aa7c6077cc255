use rust_decimal::Decimal;
use std::borrow::Cow;

/// Render a cost total for the report.
///
/// The value is rounded to cents (banker's rounding), then trailing
/// fractional zeros and a bare trailing decimal point are stripped, so whole
/// numbers carry no fractional artifact.
///
/// # Examples
///
/// ```
/// use report_core::formatting::format_cost;
/// use rust_decimal::dec;
///
/// assert_eq!(format_cost(dec!(300.00)), "300");
/// assert_eq!(format_cost(dec!(300.50)), "300.5");
/// assert_eq!(format_cost(dec!(1964.49)), "1964.49");
/// assert_eq!(format_cost(dec!(0)), "0");
/// ```
pub fn format_cost(value: Decimal) -> String {
    value.round_dp(2).normalize().to_string()
}

/// Wrap `value` in double quotes when it contains the delimiter, so the
/// emitted row still splits into the right number of fields.
///
/// # Examples
///
/// ```
/// use report_core::formatting::quote_if_needed;
///
/// assert_eq!(quote_if_needed("AMBIEN", ','), "AMBIEN");
/// assert_eq!(quote_if_needed("AMOXICILLIN, 500MG", ','), "\"AMOXICILLIN, 500MG\"");
/// ```
pub fn quote_if_needed(value: &str, delimiter: char) -> Cow<'_, str> {
    if value.contains(delimiter) {
        Cow::Owned(format!("\"{value}\""))
    } else {
        Cow::Borrowed(value)
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
