use std::collections::{BTreeMap, HashMap};

use serde::{Deserialize, Serialize};

/// Point-in-time mapping of symbol to price.
///
/// A snapshot is built whole from one response and never patched afterwards.
/// A missing symbol means the price is unknown, not zero.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PriceSnapshot {
    prices: HashMap<String, f64>,
}

impl PriceSnapshot {
    pub fn new(prices: HashMap<String, f64>) -> Self {
        Self { prices }
    }

    pub fn get(&self, symbol: &str) -> Option<f64> {
        self.prices.get(symbol).copied()
    }

    pub fn contains(&self, symbol: &str) -> bool {
        self.prices.contains_key(symbol)
    }

    pub fn len(&self) -> usize {
        self.prices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.prices.is_empty()
    }

    /// Prices ordered by symbol, for stable output.
    pub fn sorted(&self) -> BTreeMap<&str, f64> {
        self.prices.iter().map(|(k, v)| (k.as_str(), *v)).collect()
    }
}

impl<S: Into<String>> FromIterator<(S, f64)> for PriceSnapshot {
    fn from_iter<I: IntoIterator<Item = (S, f64)>>(iter: I) -> Self {
        Self {
            prices: iter.into_iter().map(|(k, v)| (k.into(), v)).collect(),
        }
    }
}
