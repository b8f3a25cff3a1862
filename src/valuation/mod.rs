//! Ranking and quoting over an explicit price snapshot.
//!
//! Nothing here reads shared state: callers pass in the snapshot they want
//! to use, typically the latest one from a [`crate::market_data::PriceFeed`].

mod quote;
mod rank;

pub use quote::{quote, quote_from_input};
pub use rank::{rank, total_usd_value};

use crate::error::Result;
use crate::models::{ExchangeQuote, Holding, PriceSnapshot, RankedHolding};
use crate::priority::PriorityRule;

/// Ranking and quoting bound to one priority rule.
#[derive(Debug, Clone, Default)]
pub struct ValuationEngine {
    rule: PriorityRule,
}

impl ValuationEngine {
    pub fn new(rule: PriorityRule) -> Self {
        Self { rule }
    }

    pub fn rule(&self) -> &PriorityRule {
        &self.rule
    }

    pub fn rank(&self, holdings: &[Holding], prices: &PriceSnapshot) -> Vec<RankedHolding> {
        rank(holdings, prices, &self.rule)
    }

    pub fn quote(
        &self,
        from: &str,
        to: &str,
        amount: f64,
        prices: &PriceSnapshot,
    ) -> Result<ExchangeQuote> {
        quote(from, to, amount, prices)
    }

    pub fn quote_from_input(
        &self,
        from: &str,
        to: &str,
        amount: &str,
        prices: &PriceSnapshot,
    ) -> Result<ExchangeQuote> {
        quote_from_input(from, to, amount, prices)
    }
}
