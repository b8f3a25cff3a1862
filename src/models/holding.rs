use serde::{Deserialize, Serialize};

use crate::error::HoldingError;

/// A quantity of one asset held on one chain.
///
/// Field names follow the wallet source as well (`currency`, `amount`,
/// `blockchain`), so balances exported from a wallet load without renaming.
///
/// Fields are read-only once built; construct through [`Holding::new`] or
/// deserialization.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Holding {
    #[serde(alias = "currency")]
    symbol: String,
    #[serde(alias = "amount")]
    quantity: f64,
    #[serde(alias = "blockchain")]
    chain_tag: String,
}

impl Holding {
    /// Build a holding, rejecting an empty symbol or a non-finite quantity.
    pub fn new(
        symbol: impl Into<String>,
        quantity: f64,
        chain_tag: impl Into<String>,
    ) -> Result<Self, HoldingError> {
        let holding = Self {
            symbol: symbol.into(),
            quantity,
            chain_tag: chain_tag.into(),
        };
        holding.validate()?;
        Ok(holding)
    }

    /// Build without validation, for exercising the malformed-input paths.
    #[cfg(test)]
    pub(crate) fn unchecked(symbol: &str, quantity: f64, chain_tag: &str) -> Self {
        Self {
            symbol: symbol.to_string(),
            quantity,
            chain_tag: chain_tag.to_string(),
        }
    }

    pub fn symbol(&self) -> &str {
        &self.symbol
    }

    pub fn quantity(&self) -> f64 {
        self.quantity
    }

    pub fn chain_tag(&self) -> &str {
        &self.chain_tag
    }

    /// Deserialized holdings skip [`Holding::new`]; check them with this.
    pub fn validate(&self) -> Result<(), HoldingError> {
        if self.symbol.trim().is_empty() {
            return Err(HoldingError::EmptySymbol);
        }
        if !self.quantity.is_finite() {
            return Err(HoldingError::NonFiniteQuantity {
                symbol: self.symbol.clone(),
                quantity: self.quantity,
            });
        }
        Ok(())
    }
}

/// A holding that survived ranking, with its priority and valuation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RankedHolding {
    pub symbol: String,
    pub quantity: f64,
    pub chain_tag: String,
    pub priority: i32,
    pub usd_value: f64,
    pub formatted_quantity: String,
    pub formatted_usd_value: String,
}
