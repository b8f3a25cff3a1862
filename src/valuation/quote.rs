use tracing::debug;

use crate::error::{InputProblem, Result, Side};
use crate::format::{format_two_decimals, round_half_away};
use crate::models::{ExchangeQuote, PriceSnapshot};

/// Convert `amount` of `from` into `to` at the snapshot's prices.
///
/// Checks run in a fixed order: both symbols, then the amount, then the two
/// prices. Any failure is [`crate::Error::IncompleteInput`]; there is no
/// partial or zero-filled quote. Unlike ranking, an unknown price blocks the
/// quote. A price that is zero, negative or not finite counts as unknown.
pub fn quote(from: &str, to: &str, amount: f64, prices: &PriceSnapshot) -> Result<ExchangeQuote> {
    let (from, to) = check_symbols(from, to)?;
    if !amount.is_finite() || amount <= 0.0 {
        return Err(InputProblem::InvalidAmount {
            raw: amount.to_string(),
        }
        .into());
    }
    quote_checked(from, to, amount, prices)
}

/// Like [`quote`], but takes the amount as the raw text of a form field.
/// Empty or non-numeric text is rejected as an invalid amount.
pub fn quote_from_input(
    from: &str,
    to: &str,
    amount: &str,
    prices: &PriceSnapshot,
) -> Result<ExchangeQuote> {
    let (from, to) = check_symbols(from, to)?;
    let parsed = amount
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite() && *value > 0.0)
        .ok_or_else(|| InputProblem::InvalidAmount {
            raw: amount.to_string(),
        })?;
    quote_checked(from, to, parsed, prices)
}

/// Blank fields count as unselected. Symbols are otherwise looked up exactly
/// as given, like ranking does.
fn check_symbols<'a>(from: &'a str, to: &'a str) -> Result<(&'a str, &'a str)> {
    if from.trim().is_empty() {
        return Err(InputProblem::MissingSymbol(Side::From).into());
    }
    if to.trim().is_empty() {
        return Err(InputProblem::MissingSymbol(Side::To).into());
    }
    Ok((from, to))
}

fn known_price(prices: &PriceSnapshot, symbol: &str) -> Result<f64> {
    prices
        .get(symbol)
        .filter(|price| price.is_finite() && *price > 0.0)
        .ok_or_else(|| {
            InputProblem::UnknownPrice {
                symbol: symbol.to_string(),
            }
            .into()
        })
}

fn quote_checked(from: &str, to: &str, amount: f64, prices: &PriceSnapshot) -> Result<ExchangeQuote> {
    let from_price = known_price(prices, from)?;
    let to_price = known_price(prices, to)?;

    let rate = from_price / to_price;
    let converted = amount * rate;
    let formatted_converted_amount = format_two_decimals(converted);

    debug!(from, to, rate, converted = %formatted_converted_amount, "quote computed");
    Ok(ExchangeQuote {
        from_symbol: from.to_string(),
        to_symbol: to.to_string(),
        rate,
        converted_amount: round_half_away(converted, 2),
        formatted_converted_amount,
    })
}
