mod best_trade;
mod closes;

use serde_json::Value;
use tradelens_core::{ClosesFetcher, Exchange, FetchConfig, YahooDailyAdapter};

use crate::cli::{Cli, Command, ExchangeSelector};
use crate::error::CliError;

/// JSON payload plus the human-readable lines the table format prints.
pub struct CommandResult {
    pub data: Value,
    pub summary: Vec<String>,
}

impl CommandResult {
    pub fn new(data: Value) -> Self {
        Self {
            data,
            summary: Vec::new(),
        }
    }

    pub fn with_summary_line(mut self, line: impl Into<String>) -> Self {
        self.summary.push(line.into());
        self
    }
}

pub fn run(cli: &Cli) -> Result<CommandResult, CliError> {
    match &cli.command {
        Command::BestTrade(args) => best_trade::run(args),
        Command::Closes(args) => closes::run(args),
    }
}

fn to_exchange(selector: ExchangeSelector) -> Exchange {
    match selector {
        ExchangeSelector::Nse => Exchange::Nse,
        ExchangeSelector::Bse => Exchange::Bse,
    }
}

fn yahoo_fetcher(years: u32, roll_days: u32) -> ClosesFetcher<YahooDailyAdapter> {
    ClosesFetcher::with_config(YahooDailyAdapter::new(), FetchConfig::new(years, roll_days))
}
