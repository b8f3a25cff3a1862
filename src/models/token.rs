use serde::{Deserialize, Serialize};

/// An entry in the swap form's token list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenInfo {
    pub symbol: String,
    pub name: String,
}

impl TokenInfo {
    pub fn new(symbol: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            symbol: symbol.into(),
            name: name.into(),
        }
    }
}

pub fn default_tokens() -> Vec<TokenInfo> {
    vec![
        TokenInfo::new("ETH", "Ethereum"),
        TokenInfo::new("BTC", "Bitcoin"),
        TokenInfo::new("USDT", "Tether"),
    ]
}
