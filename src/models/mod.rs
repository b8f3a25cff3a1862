mod holding;
mod quote;
mod snapshot;
mod token;

pub use holding::{Holding, RankedHolding};
pub use quote::ExchangeQuote;
pub use snapshot::PriceSnapshot;
pub use token::{default_tokens, TokenInfo};
