use serde::Serialize;
use tracing::info;

use crate::domain::{PriceObservation, PriceSeries, RawObservation, TradingDay};
use crate::error::WindowError;

/// The span of dates an analysis actually covered.
///
/// `target` is the requested calendar anniversary; `start` is the first
/// trading day on or after it; `end` is the last observation kept.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LookbackWindow {
    pub target: TradingDay,
    pub start: TradingDay,
    pub end: TradingDay,
}

/// A cleaned price series together with the window it was cut to.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedWindow {
    pub window: LookbackWindow,
    pub series: PriceSeries,
}

/// Turn "N years back from today" into a concrete sub-series against a real
/// trading calendar.
///
/// The anniversary rarely lands on a trading day, so the start rolls forward
/// to the first observation on or after it, within `max_roll_days`
/// (inclusive). Observations with missing closes are dropped after the cut.
/// Input ordering is not trusted: the raw series is sorted and de-duplicated
/// (first observation per date wins) before scanning.
pub fn resolve_window(
    raw: &[RawObservation],
    years_back: u32,
    today: TradingDay,
    max_roll_days: u32,
) -> Result<ResolvedWindow, WindowError> {
    let target = today.years_earlier(years_back);

    let mut observations = raw.to_vec();
    observations.sort_by_key(|obs| obs.date);
    observations.dedup_by_key(|obs| obs.date);

    let start = observations
        .iter()
        .map(|obs| obs.date)
        .find(|date| *date >= target)
        .ok_or(WindowError::NoTradingDayInRange { target })?;

    let delta_days = start.days_since(target);
    if delta_days > i64::from(max_roll_days) {
        return Err(WindowError::RollForwardExceeded {
            target,
            start,
            delta_days,
            max_roll_days,
        });
    }

    let cleaned: Vec<PriceObservation> = observations
        .into_iter()
        .filter(|obs| obs.date >= start)
        .filter_map(|obs| {
            obs.close
                .filter(|close| close.is_finite() && *close >= 0.0)
                .map(|close| PriceObservation::new(obs.date, close))
        })
        .collect();

    // Ordering and finiteness are guaranteed above, so emptiness is the only
    // way construction can fail here.
    let series = PriceSeries::new(cleaned).map_err(|_| WindowError::EmptyAfterCleaning)?;

    let window = LookbackWindow {
        target,
        start,
        end: series.last().date,
    };
    info!(
        anniversary = %window.target,
        start = %window.start,
        end = %window.end,
        delta_days,
        observations = series.len(),
        "resolved lookback window"
    );

    Ok(ResolvedWindow { window, series })
}
