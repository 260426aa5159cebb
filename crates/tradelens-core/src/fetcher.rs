use tracing::info;

use crate::domain::{Exchange, Symbol, TradingDay};
use crate::error::FetchError;
use crate::provider::{ClosesRequest, PriceHistoryProvider};
use crate::window::{resolve_window, ResolvedWindow};

/// Lookback and roll-forward settings for a fetch run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FetchConfig {
    /// Lookback period in calendar years.
    pub years_back: u32,
    /// Maximum days the window start may roll past the anniversary.
    pub max_roll_days: u32,
}

impl FetchConfig {
    pub const fn new(years_back: u32, max_roll_days: u32) -> Self {
        Self {
            years_back,
            max_roll_days,
        }
    }
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self::new(5, 5)
    }
}

/// Fetches a ticker's closing-price history and cuts it to the lookback
/// window. Fail-fast: the first violated precondition propagates; no retries.
#[derive(Debug, Clone)]
pub struct ClosesFetcher<P> {
    provider: P,
    config: FetchConfig,
}

impl<P: PriceHistoryProvider> ClosesFetcher<P> {
    pub fn new(provider: P) -> Self {
        Self::with_config(provider, FetchConfig::default())
    }

    pub fn with_config(provider: P, config: FetchConfig) -> Self {
        Self { provider, config }
    }

    pub const fn config(&self) -> &FetchConfig {
        &self.config
    }

    pub const fn provider(&self) -> &P {
        &self.provider
    }

    /// Download daily closes for `symbol` on `exchange` and resolve the
    /// lookback window ending at `today`.
    pub fn fetch_window(
        &self,
        symbol: &Symbol,
        exchange: Exchange,
        today: TradingDay,
    ) -> Result<ResolvedWindow, FetchError> {
        let ticker = symbol.with_suffix(exchange);
        let target = today.years_earlier(self.config.years_back);
        let request = ClosesRequest::new(ticker.clone(), target, today)?;

        info!(%ticker, from = %target, to = %today, "downloading daily closes");
        let raw = self.provider.daily_closes(&request)?;

        let resolved = resolve_window(&raw, self.config.years_back, today, self.config.max_roll_days)?;
        Ok(resolved)
    }
}
