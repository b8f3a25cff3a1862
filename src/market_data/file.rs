use std::path::{Path, PathBuf};

use tracing::debug;

use super::PriceSource;
use crate::error::{Error, Result};
use crate::models::PriceSnapshot;

/// Reads a snapshot saved in the same JSON shape the price endpoint serves.
#[derive(Debug, Clone)]
pub struct FilePriceSource {
    path: PathBuf,
}

impl FilePriceSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait::async_trait]
impl PriceSource for FilePriceSource {
    async fn fetch_snapshot(&self) -> Result<PriceSnapshot> {
        let origin = self.path.display().to_string();
        debug!(path = %origin, "reading price snapshot");

        let bytes = tokio::fs::read(&self.path)
            .await
            .map_err(|e| Error::fetch(origin.clone(), e))?;
        serde_json::from_slice(&bytes).map_err(|e| Error::fetch(origin, e))
    }

    fn name(&self) -> &str {
        "file"
    }
}
