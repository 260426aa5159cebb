use serde::Serialize;
use tradelens_core::{find_best_trade, LookbackWindow, Symbol, Trade, TradingDay};

use crate::cli::BestTradeArgs;
use crate::error::CliError;

use super::{to_exchange, yahoo_fetcher, CommandResult};

#[derive(Debug, Serialize)]
struct BestTradeReport {
    ticker: String,
    years_back: u32,
    window: LookbackWindow,
    /// `null` means the analysis ran and found no profitable trade.
    trade: Option<Trade>,
}

pub fn run(args: &BestTradeArgs) -> Result<CommandResult, CliError> {
    let symbol = Symbol::parse(&args.symbol)?;
    let exchange = to_exchange(args.exchange);
    let ticker = symbol.with_suffix(exchange);

    let fetcher = yahoo_fetcher(args.years, args.roll_days);
    let resolved = fetcher.fetch_window(&symbol, exchange, TradingDay::today())?;
    let trade = find_best_trade(&resolved.series);

    let report = BestTradeReport {
        ticker: ticker.to_string(),
        years_back: args.years,
        window: resolved.window,
        trade,
    };
    let mut result = CommandResult::new(serde_json::to_value(&report)?);

    match &report.trade {
        Some(trade) => {
            result = result
                .with_summary_line(format!("BEST TRADE for {ticker}:"))
                .with_summary_line(format!(
                    "  buy  on {} at {:.2}",
                    trade.buy_date, trade.buy_price
                ))
                .with_summary_line(format!(
                    "  sell on {} at {:.2}",
                    trade.sell_date, trade.sell_price
                ))
                .with_summary_line(format!("  profit: {:.2}", trade.profit));
        }
        None => {
            result = result.with_summary_line(format!(
                "No profitable trade found for {ticker} in the last {} years.",
                args.years
            ));
        }
    }

    Ok(result)
}
