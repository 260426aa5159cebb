mod exchange;
mod series;
mod symbol;
mod trading_day;

pub use exchange::Exchange;
pub use series::{PriceObservation, PriceSeries, RawObservation};
pub use symbol::Symbol;
pub use trading_day::TradingDay;
