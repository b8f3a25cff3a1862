use std::fmt;

pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Failures surfaced by price fetching, quoting and holding validation.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Transport, status or decoding failure while fetching a price snapshot.
    #[error("failed to fetch prices from {origin}")]
    Fetch {
        origin: String,
        #[source]
        source: BoxError,
    },

    /// A quote was requested with a missing symbol, bad amount or unknown price.
    #[error("incomplete input: {0}")]
    IncompleteInput(#[from] InputProblem),

    #[error("invalid holding: {0}")]
    Validation(#[from] HoldingError),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Fetch,
    IncompleteInput,
    Validation,
}

impl Error {
    pub fn fetch(origin: impl Into<String>, source: impl Into<BoxError>) -> Self {
        Error::Fetch {
            origin: origin.into(),
            source: source.into(),
        }
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::Fetch { .. } => ErrorKind::Fetch,
            Error::IncompleteInput(_) => ErrorKind::IncompleteInput,
            Error::Validation(_) => ErrorKind::Validation,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;

/// Which side of a swap a field belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    From,
    To,
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::From => f.write_str("from"),
            Side::To => f.write_str("to"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum InputProblem {
    #[error("no {0} token selected")]
    MissingSymbol(Side),

    #[error("amount {raw:?} is not a positive number")]
    InvalidAmount { raw: String },

    #[error("no price available for {symbol}")]
    UnknownPrice { symbol: String },
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum HoldingError {
    #[error("symbol must not be empty")]
    EmptySymbol,

    #[error("quantity for {symbol} is not a finite number ({quantity})")]
    NonFiniteQuantity { symbol: String, quantity: f64 },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kind_matches_variant() {
        let err = Error::fetch("https://prices.invalid", "connection refused");
        assert_eq!(err.kind(), ErrorKind::Fetch);
        assert_eq!(
            err.to_string(),
            "failed to fetch prices from https://prices.invalid"
        );

        let err: Error = InputProblem::MissingSymbol(Side::To).into();
        assert_eq!(err.kind(), ErrorKind::IncompleteInput);
        assert_eq!(err.to_string(), "incomplete input: no to token selected");

        let err: Error = HoldingError::EmptySymbol.into();
        assert_eq!(err.kind(), ErrorKind::Validation);
    }

    #[test]
    fn fetch_error_keeps_source() {
        use std::error::Error as _;

        let err = Error::fetch("prices.json", "HTTP 503");
        let source = err.source().expect("fetch error should carry a source");
        assert_eq!(source.to_string(), "HTTP 503");
    }
}
