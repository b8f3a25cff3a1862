#![allow(dead_code)]

use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use async_trait::async_trait;
use tokenfolio::market_data::PriceSource;
use tokenfolio::models::{Holding, PriceSnapshot};
use tokenfolio::{Error, Result};

pub fn holding(symbol: &str, quantity: f64, chain_tag: &str) -> Holding {
    Holding::new(symbol, quantity, chain_tag).expect("valid holding")
}

pub fn snapshot(prices: &[(&str, f64)]) -> PriceSnapshot {
    prices.iter().map(|(s, p)| (*s, *p)).collect()
}

/// The wallet mix used across ranking tests: every reference chain, an
/// unknown chain, and empty positions.
pub fn mixed_wallet() -> Vec<Holding> {
    vec![
        holding("ETH", 1.23, "Ethereum"),
        holding("OSMO", 4.56, "Osmosis"),
        holding("ZIL", 900.0, "Zilliqa"),
        holding("SOL", 12.0, "Solana"),
        holding("NEO", 3.0, "Neo"),
        holding("ARB", 0.0, "Arbitrum"),
        holding("USDC", 250.0, "Arbitrum"),
        holding("ATOM", -2.0, "Osmosis"),
    ]
}

/// Price source that answers after a fixed delay and counts calls.
pub struct DelayedPriceSource {
    snapshot: PriceSnapshot,
    delay: Duration,
    calls: AtomicUsize,
    fail: bool,
}

impl DelayedPriceSource {
    pub fn new(snapshot: PriceSnapshot, delay: Duration) -> Self {
        Self {
            snapshot,
            delay,
            calls: AtomicUsize::new(0),
            fail: false,
        }
    }

    pub fn failing() -> Self {
        Self {
            snapshot: PriceSnapshot::default(),
            delay: Duration::ZERO,
            calls: AtomicUsize::new(0),
            fail: true,
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl PriceSource for DelayedPriceSource {
    async fn fetch_snapshot(&self) -> Result<PriceSnapshot> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        tokio::time::sleep(self.delay).await;
        if self.fail {
            return Err(Error::fetch("delayed", "simulated outage"));
        }
        Ok(self.snapshot.clone())
    }

    fn name(&self) -> &str {
        "delayed"
    }
}
