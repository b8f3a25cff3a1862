//! HTTP price source.
//!
//! Expects the endpoint to return one flat JSON object of symbol to price,
//! e.g. `{"ETH": 1645.93, "BTC": 26002.82}`.

use std::time::Duration;

use reqwest::Client;
use tracing::debug;

use super::PriceSource;
use crate::error::{Error, Result};
use crate::models::PriceSnapshot;

pub const DEFAULT_PRICE_URL: &str = "https://interview.switcheo.com/prices.json";

const USER_AGENT: &str = concat!("tokenfolio/", env!("CARGO_PKG_VERSION"));

#[derive(Debug, Clone)]
pub struct HttpPriceSource {
    client: Client,
    url: String,
}

impl HttpPriceSource {
    pub fn new(url: impl Into<String>) -> Self {
        Self::with_client(url, Client::new())
    }

    pub fn with_client(url: impl Into<String>, client: Client) -> Self {
        Self {
            client,
            url: url.into(),
        }
    }

    /// Build a client that gives up on requests taking longer than `timeout`.
    pub fn with_timeout(url: impl Into<String>, timeout: Duration) -> Result<Self> {
        let url = url.into();
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| Error::fetch(url.clone(), e))?;
        Ok(Self::with_client(url, client))
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

#[async_trait::async_trait]
impl PriceSource for HttpPriceSource {
    async fn fetch_snapshot(&self) -> Result<PriceSnapshot> {
        debug!(url = %self.url, "fetching price snapshot");

        let response = self
            .client
            .get(&self.url)
            .header("Accept", "application/json")
            .header("User-Agent", USER_AGENT)
            .send()
            .await
            .and_then(|r| r.error_for_status())
            .map_err(|e| Error::fetch(self.url.clone(), e))?;

        let snapshot: PriceSnapshot = response
            .json()
            .await
            .map_err(|e| Error::fetch(self.url.clone(), e))?;

        debug!(url = %self.url, symbols = snapshot.len(), "price snapshot fetched");
        Ok(snapshot)
    }

    fn name(&self) -> &str {
        "http"
    }
}
