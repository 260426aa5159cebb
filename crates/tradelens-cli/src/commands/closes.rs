use serde::Serialize;
use tradelens_core::{LookbackWindow, PriceObservation, Symbol, TradingDay};

use crate::cli::ClosesArgs;
use crate::error::CliError;

use super::{to_exchange, yahoo_fetcher, CommandResult};

#[derive(Debug, Serialize)]
struct ClosesReport {
    ticker: String,
    window: LookbackWindow,
    observations: Vec<PriceObservation>,
}

pub fn run(args: &ClosesArgs) -> Result<CommandResult, CliError> {
    let symbol = Symbol::parse(&args.symbol)?;
    let exchange = to_exchange(args.exchange);
    let ticker = symbol.with_suffix(exchange);

    let fetcher = yahoo_fetcher(args.years, args.roll_days);
    let resolved = fetcher.fetch_window(&symbol, exchange, TradingDay::today())?;

    let report = ClosesReport {
        ticker: ticker.to_string(),
        window: resolved.window,
        observations: resolved.series.observations().to_vec(),
    };
    let mut result = CommandResult::new(serde_json::to_value(&report)?).with_summary_line(format!(
        "{} closes from {} to {} ({} trading days):",
        ticker,
        report.window.start,
        report.window.end,
        report.observations.len()
    ));

    for obs in &report.observations {
        result = result.with_summary_line(format!("  {}  {:.2}", obs.date, obs.close));
    }

    Ok(result)
}
