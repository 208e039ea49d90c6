//! Error types for pricestats

use thiserror::Error;

/// Main error type for pricestats
#[derive(Error, Debug)]
pub enum PriceStatsError {
    #[error("malformed record: expected at least {expected} fields, found {found}")]
    MalformedRecord { expected: usize, found: usize },

    #[error("invalid decimal in field '{field}': '{value}'")]
    InvalidNumber { field: &'static str, value: String },

    #[error("no exchange rate for currency: {0}")]
    UnknownCurrency(String),

    #[error("exchange rate is zero, cannot divide")]
    DivisionByZero,

    #[error("aggregate requires at least one product")]
    EmptyInput,

    #[error("decimal overflow during computation")]
    Overflow,

    #[error("parse error at line {line}: {source}")]
    ParseAt {
        line: usize,
        #[source]
        source: Box<PriceStatsError>,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("serialization error: {0}")]
    Serde(#[from] serde_json::Error),
}

impl PriceStatsError {
    /// Attach a 1-based line number to a parse error
    pub fn at_line(self, line: usize) -> Self {
        PriceStatsError::ParseAt {
            line,
            source: Box::new(self),
        }
    }
}

/// Result type alias for pricestats operations
pub type Result<T> = std::result::Result<T, PriceStatsError>;
