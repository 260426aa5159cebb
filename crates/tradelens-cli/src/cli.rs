//! CLI argument definitions for tradelens.

use clap::{Args, Parser, Subcommand, ValueEnum};

/// tradelens - best single-trade analysis over historical closing prices.
///
/// Downloads daily closes for one ticker, resolves the lookback window
/// against the real trading calendar, and reports the most profitable
/// buy-then-sell pair in it.
#[derive(Debug, Parser)]
#[command(
    name = "tradelens",
    author,
    version,
    about = "Best single-trade analysis for historical closing prices"
)]
pub struct Cli {
    /// Output format for results.
    #[arg(long, global = true, value_enum, default_value_t = OutputFormat::Table)]
    pub format: OutputFormat,

    /// Pretty-print JSON output with indentation.
    #[arg(long, global = true, default_value_t = false)]
    pub pretty: bool,

    #[command(subcommand)]
    pub command: Command,
}

/// Output format options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Plain text for terminal display.
    Table,
    /// Single JSON object output.
    Json,
}

/// Exchange the ticker trades on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ExchangeSelector {
    /// National Stock Exchange of India (Yahoo suffix NS).
    Nse,
    /// Bombay Stock Exchange (Yahoo suffix BO).
    Bse,
}

/// Available CLI commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Find the most profitable single buy/sell in the lookback window.
    ///
    /// # Examples
    ///
    ///   tradelens best-trade TCS
    ///   tradelens best-trade BEL --exchange bse --years 3
    BestTrade(BestTradeArgs),

    /// Print the resolved closing-price window for a ticker.
    ///
    /// # Examples
    ///
    ///   tradelens closes TCS --format json --pretty
    Closes(ClosesArgs),
}

/// Arguments for the `best-trade` command.
#[derive(Debug, Args)]
pub struct BestTradeArgs {
    /// Ticker symbol without exchange suffix (e.g. TCS, BEL).
    pub symbol: String,

    /// Exchange the ticker trades on.
    #[arg(long, value_enum, default_value_t = ExchangeSelector::Nse)]
    pub exchange: ExchangeSelector,

    /// Lookback period in calendar years.
    #[arg(long, default_value_t = 5, value_parser = clap::value_parser!(u32).range(1..))]
    pub years: u32,

    /// Maximum days the window start may roll past the anniversary.
    #[arg(long, default_value_t = 5)]
    pub roll_days: u32,
}

/// Arguments for the `closes` command.
#[derive(Debug, Args)]
pub struct ClosesArgs {
    /// Ticker symbol without exchange suffix.
    pub symbol: String,

    /// Exchange the ticker trades on.
    #[arg(long, value_enum, default_value_t = ExchangeSelector::Nse)]
    pub exchange: ExchangeSelector,

    /// Lookback period in calendar years.
    #[arg(long, default_value_t = 5, value_parser = clap::value_parser!(u32).range(1..))]
    pub years: u32,

    /// Maximum days the window start may roll past the anniversary.
    #[arg(long, default_value_t = 5)]
    pub roll_days: u32,
}
