mod support;

use tokenfolio::valuation::{quote, quote_from_input, ValuationEngine};
use tokenfolio::{Error, ErrorKind, InputProblem};

use support::snapshot;

#[test]
fn eth_to_btc_quote() {
    let prices = snapshot(&[("ETH", 2000.0), ("BTC", 40000.0)]);
    let quote = quote("ETH", "BTC", 10.0, &prices).expect("quote");

    assert_eq!(quote.rate, 0.05);
    assert_eq!(quote.formatted_converted_amount, "0.50");
}

#[test]
fn missing_target_price_is_incomplete_input() {
    let prices = snapshot(&[("ETH", 2000.0)]);
    let err = quote("ETH", "XYZ", 10.0, &prices).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::IncompleteInput);
}

#[test]
fn missing_source_price_is_incomplete_input() {
    let prices = snapshot(&[("BTC", 40000.0)]);
    let err = quote("ETH", "BTC", 10.0, &prices).unwrap_err();
    assert!(matches!(
        err,
        Error::IncompleteInput(InputProblem::UnknownPrice { ref symbol }) if symbol == "ETH"
    ));
}

#[test]
fn symbols_are_case_sensitive() {
    let prices = snapshot(&[("ETH", 2000.0), ("BTC", 40000.0)]);
    let err = quote("eth", "BTC", 1.0, &prices).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::IncompleteInput);
}

#[test]
fn quoting_a_token_against_itself_is_identity() {
    let prices = snapshot(&[("USDT", 1.0)]);
    let quote = quote("USDT", "USDT", 12.345, &prices).unwrap();
    assert_eq!(quote.rate, 1.0);
    assert_eq!(quote.formatted_converted_amount, "12.35");
}

#[test]
fn form_input_with_blank_amount_is_blocked() {
    let prices = snapshot(&[("ETH", 2000.0), ("BTC", 40000.0)]);
    let engine = ValuationEngine::default();
    let err = engine.quote_from_input("ETH", "BTC", "", &prices).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::IncompleteInput);
}

#[test]
fn form_input_quote_matches_numeric_quote() {
    let prices = snapshot(&[("ETH", 1645.93), ("USDT", 1.0)]);
    let from_text = quote_from_input("ETH", "USDT", "2.5", &prices).unwrap();
    let from_number = quote("ETH", "USDT", 2.5, &prices).unwrap();
    assert_eq!(from_text, from_number);
    assert_eq!(from_text.formatted_converted_amount, "4114.83");
}

#[test]
fn result_that_rounds_to_zero_renders_as_zero() {
    let prices = snapshot(&[("SHIB", 0.00001), ("BTC", 30000.0)]);
    let quote = quote("SHIB", "BTC", 1.0, &prices).unwrap();
    assert_eq!(quote.converted_amount, 0.0);
    assert_eq!(quote.formatted_converted_amount, "0.00");
}

#[test]
fn result_larger_than_any_decimal_still_quotes() {
    let prices = snapshot(&[("BTC", 30000.0), ("PEPE", 1e-12)]);
    let quote = quote("BTC", "PEPE", 1e13, &prices).expect("huge quote");

    assert!(quote.converted_amount > 7.9e28);
    assert_eq!(
        quote.formatted_converted_amount,
        format!("{:.2}", quote.converted_amount)
    );
    assert!(quote.formatted_converted_amount.ends_with(".00"));
}

#[test]
fn padded_symbol_is_looked_up_verbatim() {
    let prices = snapshot(&[("ETH", 2000.0), ("BTC", 40000.0)]);
    let err = quote(" ETH", "BTC", 1.0, &prices).unwrap_err();
    assert!(matches!(
        err,
        Error::IncompleteInput(InputProblem::UnknownPrice { ref symbol }) if symbol == " ETH"
    ));
}
