//! Vietnamese (`vi-VN`) number and currency formatting.
//!
//! Thousands are grouped with `.` and the decimal separator is `,`, so
//! `1234567.5` renders as `1.234.567,5`.

use rust_decimal::{Decimal, RoundingStrategy};

/// Back-office currency format: up to three fraction digits, `VND` suffix.
#[must_use]
pub fn format_currency(amount: Decimal) -> String {
    format!("{} VND", format_grouped(amount, 3))
}

/// Storefront currency format: whole dong, `VNĐ` suffix.
#[must_use]
pub fn format_vnd(amount: Decimal) -> String {
    format!("{} VNĐ", format_grouped(amount, 0))
}

/// Grouped integer, e.g. for the dashboard counters.
#[must_use]
pub fn format_count(value: u64) -> String {
    group_thousands(&value.to_string())
}

/// Formats `amount` with `vi-VN` separators, rounding half away from zero
/// to at most `max_fraction_digits` and dropping trailing zeros.
#[must_use]
pub fn format_grouped(amount: Decimal, max_fraction_digits: u32) -> String {
    let rounded = amount
        .round_dp_with_strategy(max_fraction_digits, RoundingStrategy::MidpointAwayFromZero)
        .normalize();
    let negative = rounded.is_sign_negative() && !rounded.is_zero();
    let text = rounded.abs().to_string();

    let (int_part, frac_part) = match text.split_once('.') {
        Some((int_part, frac_part)) => (int_part, Some(frac_part)),
        None => (text.as_str(), None),
    };

    let mut out = String::with_capacity(text.len() + text.len() / 3 + 1);
    if negative {
        out.push('-');
    }
    out.push_str(&group_thousands(int_part));
    if let Some(frac) = frac_part {
        out.push(',');
        out.push_str(frac);
    }
    out
}

fn group_thousands(digits: &str) -> String {
    let len = digits.len();
    let mut out = String::with_capacity(len + len / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push('.');
        }
        out.push(ch);
    }
    out
}
