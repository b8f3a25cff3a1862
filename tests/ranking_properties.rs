mod support;

use tokenfolio::models::PriceSnapshot;
use tokenfolio::priority::PriorityRule;
use tokenfolio::valuation::{rank, ValuationEngine};

use support::{holding, mixed_wallet, snapshot};

#[test]
fn output_is_a_filtered_subset() {
    let holdings = mixed_wallet();
    let ranked = rank(&holdings, &PriceSnapshot::default(), &PriorityRule::reference());

    assert!(ranked.len() <= holdings.len());
    for row in &ranked {
        assert!(row.priority > -99, "{} has priority {}", row.symbol, row.priority);
        assert!(row.quantity > 0.0, "{} has quantity {}", row.symbol, row.quantity);
    }
    assert!(ranked.iter().all(|row| row.symbol != "SOL"));
    assert!(ranked.iter().all(|row| row.symbol != "ARB"));
    assert!(ranked.iter().all(|row| row.symbol != "ATOM"));
}

#[test]
fn priorities_are_non_increasing() {
    let ranked = rank(&mixed_wallet(), &PriceSnapshot::default(), &PriorityRule::reference());
    for pair in ranked.windows(2) {
        assert!(pair[0].priority >= pair[1].priority);
    }
}

#[test]
fn full_ordering_for_mixed_wallet() {
    let ranked = rank(&mixed_wallet(), &PriceSnapshot::default(), &PriorityRule::reference());
    let symbols: Vec<_> = ranked.iter().map(|r| r.symbol.as_str()).collect();
    assert_eq!(symbols, vec!["OSMO", "ETH", "USDC", "ZIL", "NEO"]);
}

#[test]
fn zilliqa_and_neo_tie_keeps_input_order() {
    let forward = vec![holding("ZIL", 1.0, "Zilliqa"), holding("NEO", 1.0, "Neo")];
    let ranked = rank(&forward, &PriceSnapshot::default(), &PriorityRule::reference());
    assert_eq!(ranked[0].symbol, "ZIL");
    assert_eq!(ranked[1].symbol, "NEO");

    let backward = vec![holding("NEO", 1.0, "Neo"), holding("ZIL", 1.0, "Zilliqa")];
    let ranked = rank(&backward, &PriceSnapshot::default(), &PriorityRule::reference());
    assert_eq!(ranked[0].symbol, "NEO");
    assert_eq!(ranked[1].symbol, "ZIL");
}

#[test]
fn tie_ignores_quantity_and_value() {
    let prices = snapshot(&[("BIG", 1000.0), ("SMALL", 0.01)]);
    let holdings = vec![holding("SMALL", 1.0, "Ethereum"), holding("BIG", 50.0, "Ethereum")];
    let ranked = rank(&holdings, &prices, &PriorityRule::reference());
    assert_eq!(ranked[0].symbol, "SMALL");
    assert_eq!(ranked[1].symbol, "BIG");
}

#[test]
fn unpriced_symbol_is_valued_at_exactly_zero() {
    let prices = snapshot(&[("ETH", 1645.93)]);
    let ranked = rank(&[holding("OSMO", 4.56, "Osmosis")], &prices, &PriorityRule::reference());
    assert_eq!(ranked.len(), 1);
    assert_eq!(ranked[0].usd_value, 0.0);
    assert_eq!(ranked[0].formatted_quantity, "4.56");
}

#[test]
fn empty_input_gives_empty_output() {
    let ranked = rank(&[], &snapshot(&[("ETH", 1.0)]), &PriorityRule::reference());
    assert!(ranked.is_empty());
}

#[test]
fn all_filtered_gives_empty_output() {
    let holdings = vec![holding("SOL", 1.0, "Solana"), holding("ETH", 0.0, "Ethereum")];
    let ranked = rank(&holdings, &PriceSnapshot::default(), &PriorityRule::reference());
    assert!(ranked.is_empty());
}

#[test]
fn engine_uses_its_rule() {
    let engine = ValuationEngine::new(PriorityRule::new(10, 0).with_chain("Osmosis", 1));
    let holdings = vec![holding("OSMO", 1.0, "Osmosis"), holding("SOL", 1.0, "Solana")];
    let ranked = engine.rank(&holdings, &PriceSnapshot::default());

    let symbols: Vec<_> = ranked.iter().map(|r| r.symbol.as_str()).collect();
    assert_eq!(symbols, vec!["SOL", "OSMO"]);
}

#[test]
fn formats_quantity_with_two_decimals() {
    let prices = snapshot(&[("ETH", 2000.0)]);
    let ranked = rank(&[holding("ETH", 1.005, "Ethereum")], &prices, &PriorityRule::reference());
    assert_eq!(ranked[0].formatted_quantity, "1.01");
    assert_eq!(ranked[0].formatted_usd_value, "2010.00");
}
