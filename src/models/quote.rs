use serde::Serialize;

/// Conversion between two assets at one snapshot's prices.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExchangeQuote {
    pub from_symbol: String,
    pub to_symbol: String,
    /// Units of `to_symbol` per unit of `from_symbol`.
    pub rate: f64,
    /// `amount * rate` rounded half away from zero to two decimals.
    pub converted_amount: f64,
    /// `converted_amount` rendered with exactly two decimals.
    pub formatted_converted_amount: String,
}
