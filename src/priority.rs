//! Chain-tag priority table used to order and filter wallet rows.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

fn default_priority() -> i32 {
    -99
}

fn default_excluded_threshold() -> i32 {
    -99
}

fn reference_chains() -> HashMap<String, i32> {
    [
        ("Osmosis", 100),
        ("Ethereum", 50),
        ("Arbitrum", 30),
        ("Zilliqa", 20),
        ("Neo", 20),
    ]
    .into_iter()
    .map(|(tag, priority)| (tag.to_string(), priority))
    .collect()
}

/// Maps a chain tag to an integer priority; higher ranks first.
///
/// Tags missing from `chains` fall back to `default`. Any priority at or
/// below `excluded_threshold` removes the holding from ranked output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriorityRule {
    #[serde(default = "reference_chains")]
    pub chains: HashMap<String, i32>,

    #[serde(default = "default_priority")]
    pub default: i32,

    #[serde(default = "default_excluded_threshold")]
    pub excluded_threshold: i32,
}

impl Default for PriorityRule {
    fn default() -> Self {
        Self::reference()
    }
}

impl PriorityRule {
    /// Osmosis 100, Ethereum 50, Arbitrum 30, Zilliqa and Neo 20, anything
    /// else -99 (excluded).
    pub fn reference() -> Self {
        Self {
            chains: reference_chains(),
            default: default_priority(),
            excluded_threshold: default_excluded_threshold(),
        }
    }

    pub fn new(default: i32, excluded_threshold: i32) -> Self {
        Self {
            chains: HashMap::new(),
            default,
            excluded_threshold,
        }
    }

    pub fn with_chain(mut self, tag: impl Into<String>, priority: i32) -> Self {
        self.chains.insert(tag.into(), priority);
        self
    }

    pub fn priority(&self, chain_tag: &str) -> i32 {
        self.chains.get(chain_tag).copied().unwrap_or(self.default)
    }

    pub fn is_excluded(&self, priority: i32) -> bool {
        priority <= self.excluded_threshold
    }
}
