use thiserror::Error;

use crate::domain::TradingDay;
use crate::provider::SourceError;

/// Validation and contract errors exposed by `tradelens-core`.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ValidationError {
    #[error("symbol cannot be empty")]
    EmptySymbol,
    #[error("symbol length {len} exceeds max {max}")]
    SymbolTooLong { len: usize, max: usize },
    #[error("symbol contains invalid character '{ch}' at index {index}")]
    SymbolInvalidChar { ch: char, index: usize },

    #[error("invalid exchange '{value}', expected one of nse, bse")]
    InvalidExchange { value: String },

    #[error("date must be YYYY-MM-DD: '{value}'")]
    InvalidDate { value: String },
    #[error("timestamp {value} is out of range for a calendar date")]
    InvalidTimestamp { value: i64 },

    #[error("price series cannot be empty")]
    EmptySeries,
    #[error("price series dates must be strictly increasing at index {index}")]
    SeriesNotChronological { index: usize },
    #[error("close at {date} must be finite")]
    NonFiniteClose { date: TradingDay },
    #[error("close at {date} must be non-negative")]
    NegativeClose { date: TradingDay },
}

/// Failures of lookback-window resolution.
///
/// A window that cannot be resolved is a hard failure for the run: analysis
/// on a window that starts much later than requested would silently answer a
/// different question than the one asked.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum WindowError {
    #[error("no trading day on or after {target}")]
    NoTradingDayInRange { target: TradingDay },

    #[error(
        "first trading day {start} is {delta_days} days after {target}, \
         exceeding the {max_roll_days}-day roll-forward tolerance"
    )]
    RollForwardExceeded {
        target: TradingDay,
        start: TradingDay,
        delta_days: i64,
        max_roll_days: u32,
    },

    #[error("no valid closing prices in window")]
    EmptyAfterCleaning,
}

/// Top-level error for the fetch-and-resolve pipeline.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Window(#[from] WindowError),

    #[error("provider error: {0}")]
    Source(#[from] SourceError),
}
