//! Loading holdings lists from disk.
//!
//! Two layouts are accepted, chosen by file extension:
//! - `.json`: a top-level array of holdings
//! - `.toml`: one `[[holdings]]` table per holding

use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::error::Error;
use crate::models::Holding;

#[derive(Debug, Deserialize)]
struct HoldingsFile {
    #[serde(default)]
    holdings: Vec<Holding>,
}

/// Read and validate a holdings file.
///
/// A malformed entry (empty symbol, non-finite quantity) rejects the whole
/// file; the underlying [`Error::Validation`] can be recovered with
/// `downcast_ref`.
pub fn load_holdings(path: &Path) -> Result<Vec<Holding>> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read holdings file: {}", path.display()))?;

    let is_toml = path
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("toml"));

    let holdings = if is_toml {
        toml::from_str::<HoldingsFile>(&content)
            .with_context(|| format!("Failed to parse holdings file: {}", path.display()))?
            .holdings
    } else {
        serde_json::from_str::<Vec<Holding>>(&content)
            .with_context(|| format!("Failed to parse holdings file: {}", path.display()))?
    };

    for (index, holding) in holdings.iter().enumerate() {
        holding.validate().map_err(Error::from).with_context(|| {
            format!("Invalid holding #{} in {}", index + 1, path.display())
        })?;
    }

    Ok(holdings)
}
