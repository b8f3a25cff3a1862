mod feed;
mod file;
mod http;
mod source;

pub use feed::{FeedEntry, FetchTicket, PriceFeed};
pub use file::FilePriceSource;
pub use http::{HttpPriceSource, DEFAULT_PRICE_URL};
pub use source::{PriceSource, StaticPriceSource};
