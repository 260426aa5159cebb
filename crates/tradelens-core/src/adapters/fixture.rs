use crate::domain::RawObservation;
use crate::provider::{ClosesRequest, PriceHistoryProvider, SourceError};

/// Deterministic in-memory provider for tests and offline runs.
///
/// Serves a canned observation list filtered to the requested date range,
/// regardless of ticker.
#[derive(Debug, Clone, Default)]
pub struct FixtureProvider {
    observations: Vec<RawObservation>,
}

impl FixtureProvider {
    pub fn new(observations: Vec<RawObservation>) -> Self {
        Self { observations }
    }
}

impl PriceHistoryProvider for FixtureProvider {
    fn daily_closes(&self, req: &ClosesRequest) -> Result<Vec<RawObservation>, SourceError> {
        Ok(self
            .observations
            .iter()
            .copied()
            .filter(|obs| obs.date >= req.start && obs.date <= req.end)
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Symbol, TradingDay};

    #[test]
    fn filters_to_requested_range() {
        let day = |value: &str| TradingDay::parse(value).expect("valid date");
        let provider = FixtureProvider::new(vec![
            RawObservation::new(day("2020-01-01"), Some(10.0)),
            RawObservation::new(day("2021-01-01"), Some(12.0)),
            RawObservation::new(day("2022-01-01"), Some(14.0)),
        ]);

        let request = ClosesRequest::new(
            Symbol::parse("TCS.NS").expect("valid ticker"),
            day("2020-06-01"),
            day("2021-06-01"),
        )
        .expect("valid request");

        let closes = provider.daily_closes(&request).expect("fixture never fails");
        assert_eq!(closes.len(), 1);
        assert_eq!(closes[0].date, day("2021-01-01"));
    }
}
