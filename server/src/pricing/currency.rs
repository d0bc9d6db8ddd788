use rust_decimal::prelude::{FromPrimitive, ToPrimitive};
use rust_decimal::{Decimal, RoundingStrategy};

use crate::models::DEFAULT_CURRENCY;

const MINOR_UNITS_PER_MAJOR: i64 = 100;

/// Formats a minor-unit amount for display, en-US style.
///
/// Zero is shown as `"Free"`. Whole amounts drop the fractional digits, so
/// `2500` becomes `"$25"` while `2550` becomes `"$25.50"`.
pub fn format_price(amount: i64, currency: &str) -> String {
    if amount == 0 {
        return "Free".to_string();
    }

    let abs = amount.unsigned_abs();
    let whole = group_thousands(abs / MINOR_UNITS_PER_MAJOR as u64);
    let cents = abs % MINOR_UNITS_PER_MAJOR as u64;
    let sign = if amount < 0 { "-" } else { "" };
    let symbol = currency_symbol(currency);

    if cents == 0 {
        format!("{sign}{symbol}{whole}")
    } else {
        format!("{sign}{symbol}{whole}.{cents:02}")
    }
}

/// [`format_price`] in the default currency.
pub fn format_usd(amount: i64) -> String {
    format_price(amount, DEFAULT_CURRENCY)
}

pub fn convert_to_major_units(minor: i64) -> f64 {
    minor as f64 / MINOR_UNITS_PER_MAJOR as f64
}

/// Converts a major-unit amount to minor units, rounding half up on the
/// cents boundary (`25.999 -> 2600`, `25.001 -> 2500`).
pub fn convert_to_minor_units(major: f64) -> i64 {
    let Some(value) = Decimal::from_f64(major) else {
        // Non-finite input; saturating cast keeps this total.
        return (major * MINOR_UNITS_PER_MAJOR as f64 + 0.5).floor() as i64;
    };

    let scaled = value * Decimal::from(MINOR_UNITS_PER_MAJOR);
    let strategy = if scaled.is_sign_negative() {
        RoundingStrategy::MidpointTowardZero
    } else {
        RoundingStrategy::MidpointAwayFromZero
    };

    scaled
        .round_dp_with_strategy(0, strategy)
        .to_i64()
        .unwrap_or(if scaled.is_sign_negative() {
            i64::MIN
        } else {
            i64::MAX
        })
}

fn currency_symbol(currency: &str) -> String {
    match currency.to_ascii_uppercase().as_str() {
        "USD" => "$".to_string(),
        "EUR" => "€".to_string(),
        "GBP" => "£".to_string(),
        "JPY" => "¥".to_string(),
        "INR" => "₹".to_string(),
        "CAD" => "CA$".to_string(),
        "AUD" => "A$".to_string(),
        other => format!("{other} "),
    }
}

fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}
