use std::str::FromStr;

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};

/// Convert through the shortest decimal text that round-trips the float, so
/// `1.005` is treated as written rather than as its binary neighbour.
///
/// Returns `None` for NaN, infinities and magnitudes `Decimal` cannot hold.
pub fn to_decimal(value: f64) -> Option<Decimal> {
    if !value.is_finite() {
        return None;
    }
    Decimal::from_str(&value.to_string()).ok()
}

/// Round half away from zero to exactly `dp` decimal places.
pub fn round_fixed(value: f64, dp: u32) -> Option<Decimal> {
    let mut rounded =
        to_decimal(value)?.round_dp_with_strategy(dp, RoundingStrategy::MidpointAwayFromZero);
    rounded.rescale(dp);
    Some(rounded)
}

/// Round half away from zero to `dp` places, staying in `f64`.
///
/// Floats beyond `Decimal`'s range are already whole numbers and are
/// returned unchanged.
pub fn round_half_away(value: f64, dp: u32) -> f64 {
    round_fixed(value, dp)
        .and_then(|rounded| rounded.to_f64())
        .unwrap_or(value)
}

/// Render with exactly `dp` decimals. Values outside `Decimal`'s range fall
/// back to the float formatter.
pub fn format_fixed(value: f64, dp: u32) -> String {
    match round_fixed(value, dp) {
        Some(rounded) => rounded.to_string(),
        None => format!("{:.*}", dp as usize, value),
    }
}

pub fn format_two_decimals(value: f64) -> String {
    format_fixed(value, 2)
}

fn group_int_digits(int_part: &str) -> String {
    let len = int_part.len();
    let mut out = String::with_capacity(len + len / 3);
    for (i, ch) in int_part.chars().enumerate() {
        out.push(ch);
        let remaining = len - i - 1;
        if remaining > 0 && remaining % 3 == 0 {
            out.push(',');
        }
    }
    out
}

/// Format a USD value for human display: two decimals, optional thousands
/// separators and currency symbol. The sign goes in front of the symbol.
pub fn format_usd_display(value: f64, grouping: bool, symbol: Option<&str>) -> String {
    let fixed = format_two_decimals(value.abs());
    let body = if grouping {
        match fixed.split_once('.') {
            Some((int_part, frac)) => format!("{}.{frac}", group_int_digits(int_part)),
            None => group_int_digits(&fixed),
        }
    } else {
        fixed
    };

    let mut out = String::new();
    if value < 0.0 && body.chars().any(|c| matches!(c, '1'..='9')) {
        out.push('-');
    }
    if let Some(sym) = symbol {
        out.push_str(sym);
    }
    out.push_str(&body);
    out
}
