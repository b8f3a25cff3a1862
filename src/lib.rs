//! Price snapshots, wallet ranking and swap quotes.
//!
//! [`market_data`] fetches a symbol-to-price snapshot; [`valuation`] ranks
//! holdings and quotes swaps against a snapshot the caller passes in.

pub mod config;
pub mod duration;
pub mod error;
pub mod format;
pub mod holdings;
pub mod market_data;
pub mod models;
pub mod priority;
pub mod valuation;

pub use error::{Error, ErrorKind, InputProblem, Result};
