use serde::{Deserialize, Serialize};

use crate::domain::TradingDay;
use crate::ValidationError;

/// Provider-shaped observation: the close may be missing for a trading day
/// the exchange was open but the feed has no data for.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RawObservation {
    pub date: TradingDay,
    pub close: Option<f64>,
}

impl RawObservation {
    pub fn new(date: TradingDay, close: Option<f64>) -> Self {
        Self { date, close }
    }
}

/// A single cleaned (date, closing price) pair.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PriceObservation {
    pub date: TradingDay,
    pub close: f64,
}

impl PriceObservation {
    pub fn new(date: TradingDay, close: f64) -> Self {
        Self { date, close }
    }
}

/// Non-empty closing-price series, strictly increasing by date.
///
/// The validating constructor is the only way to build one, so downstream
/// analysis can rely on ordering and finite, non-negative prices as type
/// invariants rather than re-checking them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<PriceObservation>", into = "Vec<PriceObservation>")]
pub struct PriceSeries(Vec<PriceObservation>);

impl PriceSeries {
    pub fn new(observations: Vec<PriceObservation>) -> Result<Self, ValidationError> {
        if observations.is_empty() {
            return Err(ValidationError::EmptySeries);
        }

        for (index, obs) in observations.iter().enumerate() {
            if !obs.close.is_finite() {
                return Err(ValidationError::NonFiniteClose { date: obs.date });
            }
            if obs.close < 0.0 {
                return Err(ValidationError::NegativeClose { date: obs.date });
            }
            if index > 0 && observations[index - 1].date >= obs.date {
                return Err(ValidationError::SeriesNotChronological { index });
            }
        }

        Ok(Self(observations))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &PriceObservation> {
        self.0.iter()
    }

    pub fn observations(&self) -> &[PriceObservation] {
        &self.0
    }

    pub fn first(&self) -> &PriceObservation {
        &self.0[0]
    }

    pub fn last(&self) -> &PriceObservation {
        &self.0[self.0.len() - 1]
    }

    /// Closing price on an exact trading date, if the series contains it.
    pub fn close_on(&self, date: TradingDay) -> Option<f64> {
        self.0
            .binary_search_by_key(&date, |obs| obs.date)
            .ok()
            .map(|index| self.0[index].close)
    }
}

impl TryFrom<Vec<PriceObservation>> for PriceSeries {
    type Error = ValidationError;

    fn try_from(value: Vec<PriceObservation>) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<PriceSeries> for Vec<PriceObservation> {
    fn from(value: PriceSeries) -> Self {
        value.0
    }
}
