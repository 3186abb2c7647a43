//! Currency and number formatting helpers for the report

use rust_decimal::{Decimal, RoundingStrategy};

use crate::constants::CURRENCY_SYMBOL;

/// Format a monetary value with currency symbol, thousands separators and
/// two decimal places (e.g. `₹1,234.50`)
pub fn money(value: Decimal) -> String {
    format!("{}{}", CURRENCY_SYMBOL, thousands(value, 2))
}

/// Format a monetary value with currency symbol and no decimal places
pub fn money_whole(value: Decimal) -> String {
    format!("{}{}", CURRENCY_SYMBOL, thousands(value, 0))
}

/// Render a decimal with `dp` fraction digits and comma-grouped integer part
pub fn thousands(value: Decimal, dp: u32) -> String {
    let rounded = value.round_dp_with_strategy(dp, RoundingStrategy::MidpointAwayFromZero);
    let text = format!("{:.*}", dp as usize, rounded);

    let (sign, unsigned) = match text.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", text.as_str()),
    };

    let (int_part, frac_part) = match unsigned.split_once('.') {
        Some((int_part, frac_part)) => (int_part, Some(frac_part)),
        None => (unsigned, None),
    };

    let grouped = group_digits(int_part);
    match frac_part {
        Some(frac) => format!("{}{}.{}", sign, grouped, frac),
        None => format!("{}{}", sign, grouped),
    }
}

fn group_digits(digits: &str) -> String {
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    let offset = digits.len() % 3;

    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (i + 3 - offset) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }

    grouped
}
