use serde::{Deserialize, Serialize};

use crate::domain::{PriceSeries, TradingDay};

/// The optimal single buy-then-sell transaction for a price series.
///
/// `buy_date < sell_date` and `profit > 0` hold by construction; a series
/// with no profitable pair yields no `Trade` at all.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Trade {
    pub buy_date: TradingDay,
    pub sell_date: TradingDay,
    pub buy_price: f64,
    pub sell_price: f64,
    pub profit: f64,
}

/// Find the maximum-profit single trade in one forward pass.
///
/// O(n) time, O(1) extra space: track the cheapest close seen so far and the
/// best profit any later close would realize against it. The profit check
/// uses the minimum from *before* the current observation, so buying and
/// selling on the same day is impossible. Strict comparisons keep the first
/// occurrence of the best profit and the earliest date of a tied minimum.
///
/// Returns `None` when no positive-profit pair exists; that is the expected
/// outcome for non-increasing series, not an error.
pub fn find_best_trade(series: &PriceSeries) -> Option<Trade> {
    let mut min_close = f64::INFINITY;
    let mut min_date: Option<TradingDay> = None;
    let mut best_profit = 0.0_f64;
    let mut best_pair: Option<(TradingDay, TradingDay)> = None;

    for obs in series.iter() {
        let candidate = obs.close - min_close;
        if candidate > best_profit {
            best_profit = candidate;
            best_pair = min_date.map(|buy_date| (buy_date, obs.date));
        }
        if obs.close < min_close {
            min_close = obs.close;
            min_date = Some(obs.date);
        }
    }

    if best_profit <= 0.0 {
        return None;
    }

    // Re-read the prices at the chosen dates from the series itself rather
    // than carrying scan temporaries.
    let (buy_date, sell_date) = best_pair?;
    let buy_price = series.close_on(buy_date)?;
    let sell_price = series.close_on(sell_date)?;

    Some(Trade {
        buy_date,
        sell_date,
        buy_price,
        sell_price,
        profit: best_profit,
    })
}
