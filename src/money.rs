use rust_decimal::{Decimal, RoundingStrategy};

/// Rounds an amount to whole rubles, half away from zero.
///
/// Every monetary field in a breakdown is rounded independently with this
/// function; minor drift between fields is expected and matches the
/// reference outputs.
pub fn round_rub(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
}

/// Formats a whole-ruble amount with digit groups of three separated by
/// spaces, e.g. `1292000` → `"1 292 000 ₽"`.
pub fn format_rub(value: Decimal) -> String {
    format!("{} ₽", group_digits(round_rub(value)))
}

fn group_digits(value: Decimal) -> String {
    let s = value.abs().to_string();
    let mut grouped = String::new();
    for (i, c) in s.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            grouped.push(' ');
        }
        grouped.push(c);
    }
    let digits: String = grouped.chars().rev().collect();
    if value.is_sign_negative() && !value.is_zero() {
        format!("-{}", digits)
    } else {
        digits
    }
}
