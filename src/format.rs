//! Price rendering helpers for terminal output.

use crate::config::DisplayConfig;

/// Group the integer part of a number with thousands separators
///
/// Fractional digits are kept (up to two) only when present.
pub fn format_amount(amount: f64) -> String {
    if !amount.is_finite() {
        return amount.to_string();
    }

    let mut rounded = (amount * 100.0).round() / 100.0;
    if !rounded.is_finite() {
        rounded = amount;
    }
    let negative = rounded < 0.0;
    let abs = rounded.abs();
    let cents = ((abs - abs.trunc()) * 100.0).round() as u64;

    let digits = format!("{:.0}", abs.trunc());
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (idx, ch) in digits.chars().enumerate() {
        if idx > 0 && (digits.len() - idx) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    let sign = if negative { "-" } else { "" };
    if cents == 0 {
        format!("{}{}", sign, grouped)
    } else {
        format!("{}{}.{:02}", sign, grouped, cents)
    }
}

/// Round to the nearest multiple of `unit` for display (0 leaves the amount as-is)
pub fn round_for_display(amount: f64, unit: u64) -> f64 {
    if unit == 0 {
        return amount;
    }
    let unit = unit as f64;
    (amount / unit).round() * unit
}

/// Render a price with the configured rounding and currency label
pub fn format_price(amount: f64, display: &DisplayConfig) -> String {
    let shown = round_for_display(amount, display.round_to);
    format!("{} {}", format_amount(shown), display.currency)
}

/// Render a multiplier, showing "-" for the unset sentinel
pub fn format_multiplier(value: f64) -> String {
    if value == 0.0 {
        "-".to_string()
    } else {
        format!("×{}", value)
    }
}
