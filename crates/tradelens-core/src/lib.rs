//! Core contracts for tradelens.
//!
//! This crate contains:
//! - Canonical domain models and validation
//! - Lookback window resolution against a real trading calendar
//! - The single-transaction best-trade analyzer
//! - The price-history provider seam and its adapters

pub mod adapters;
pub mod analyzer;
pub mod domain;
pub mod error;
pub mod fetcher;
pub mod provider;
pub mod window;

pub use adapters::{FixtureProvider, YahooDailyAdapter};
pub use analyzer::{find_best_trade, Trade};
pub use domain::{Exchange, PriceObservation, PriceSeries, RawObservation, Symbol, TradingDay};
pub use error::{FetchError, ValidationError, WindowError};
pub use fetcher::{ClosesFetcher, FetchConfig};
pub use provider::{ClosesRequest, PriceHistoryProvider, SourceError, SourceErrorKind};
pub use window::{resolve_window, LookbackWindow, ResolvedWindow};
