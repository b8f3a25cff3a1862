use crate::error::Result;
use crate::models::PriceSnapshot;

/// Anything that can produce a complete price snapshot on demand.
///
/// Implementations re-fetch on every call and return either the whole mapping
/// or a [`crate::Error::Fetch`], never a partial result.
#[async_trait::async_trait]
pub trait PriceSource: Send + Sync {
    async fn fetch_snapshot(&self) -> Result<PriceSnapshot>;

    fn name(&self) -> &str;
}

/// Serves a fixed snapshot without any I/O.
#[derive(Debug, Clone, Default)]
pub struct StaticPriceSource {
    snapshot: PriceSnapshot,
}

impl StaticPriceSource {
    pub fn new(snapshot: PriceSnapshot) -> Self {
        Self { snapshot }
    }
}

#[async_trait::async_trait]
impl PriceSource for StaticPriceSource {
    async fn fetch_snapshot(&self) -> Result<PriceSnapshot> {
        Ok(self.snapshot.clone())
    }

    fn name(&self) -> &str {
        "static"
    }
}
