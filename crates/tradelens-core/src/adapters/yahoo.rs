use std::time::Duration;

use serde::Deserialize;

use crate::domain::{RawObservation, TradingDay};
use crate::provider::{ClosesRequest, PriceHistoryProvider, SourceError};

const CHART_BASE_URL: &str = "https://query1.finance.yahoo.com/v8/finance/chart";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Yahoo Finance daily-close adapter over the v8 chart endpoint.
///
/// The chart endpoint serves historical OHLC without the cookie/crumb dance
/// Yahoo's quote endpoints require; a referer header is enough.
#[derive(Debug, Clone)]
pub struct YahooDailyAdapter {
    client: reqwest::blocking::Client,
    base_url: String,
}

impl Default for YahooDailyAdapter {
    fn default() -> Self {
        Self::new()
    }
}

impl YahooDailyAdapter {
    pub fn new() -> Self {
        Self::with_base_url(CHART_BASE_URL)
    }

    /// Point the adapter at a different chart host, e.g. a local stub server.
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            client: reqwest::blocking::Client::new(),
            base_url: base_url.into(),
        }
    }
}

impl PriceHistoryProvider for YahooDailyAdapter {
    fn daily_closes(&self, req: &ClosesRequest) -> Result<Vec<RawObservation>, SourceError> {
        // period2 is exclusive, so push it past the end date's midnight.
        let period1 = req.start.unix_midnight();
        let period2 = req.end.plus_days(1).unix_midnight();
        let url = format!(
            "{}/{}?period1={}&period2={}&interval=1d&events=history",
            self.base_url,
            urlencoding::encode(req.ticker.as_str()),
            period1,
            period2,
        );

        let response = self
            .client
            .get(&url)
            .header("referer", "https://finance.yahoo.com/")
            .timeout(REQUEST_TIMEOUT)
            .send()
            .map_err(|error| SourceError::unavailable(format!("yahoo transport error: {error}")))?;

        let status = response.status();
        if status.as_u16() == 429 {
            return Err(SourceError::rate_limited("yahoo throttled the request"));
        }
        if !status.is_success() {
            return Err(SourceError::unavailable(format!(
                "yahoo returned status {status}"
            )));
        }

        let body = response
            .text()
            .map_err(|error| SourceError::unavailable(format!("yahoo transport error: {error}")))?;
        parse_chart_response(&body)
    }
}

/// Parse a v8 chart payload into raw observations, keeping null closes as
/// gaps for the window resolver to drop.
pub fn parse_chart_response(body: &str) -> Result<Vec<RawObservation>, SourceError> {
    let response: ChartResponse = serde_json::from_str(body)
        .map_err(|error| SourceError::internal(format!("failed to parse yahoo chart: {error}")))?;

    if let Some(error) = &response.chart.error {
        return Err(SourceError::unavailable(format!(
            "yahoo chart API error {}: {}",
            error.code, error.description
        )));
    }

    let result = response
        .chart
        .result
        .as_deref()
        .and_then(<[ChartResult]>::first)
        .ok_or_else(|| SourceError::internal("no chart data in response"))?;

    let timestamps = result
        .timestamp
        .as_ref()
        .ok_or_else(|| SourceError::internal("no timestamp data"))?;
    let quote = result
        .indicators
        .quote
        .first()
        .ok_or_else(|| SourceError::internal("no quote data"))?;

    timestamps
        .iter()
        .enumerate()
        .map(|(index, &ts)| {
            let date = TradingDay::from_unix_timestamp(ts)
                .map_err(|error| SourceError::internal(error.to_string()))?;
            let close = quote
                .close
                .get(index)
                .copied()
                .flatten()
                .filter(|close| close.is_finite());
            Ok(RawObservation::new(date, close))
        })
        .collect()
}

#[derive(Debug, Deserialize)]
struct ChartResponse {
    chart: ChartData,
}

#[derive(Debug, Deserialize)]
struct ChartData {
    #[serde(default)]
    result: Option<Vec<ChartResult>>,
    #[serde(default)]
    error: Option<ChartError>,
}

#[derive(Debug, Deserialize)]
struct ChartError {
    code: String,
    description: String,
}

#[derive(Debug, Deserialize)]
struct ChartResult {
    timestamp: Option<Vec<i64>>,
    indicators: ChartIndicators,
}

#[derive(Debug, Deserialize)]
struct ChartIndicators {
    quote: Vec<ChartQuote>,
}

#[derive(Debug, Deserialize)]
struct ChartQuote {
    close: Vec<Option<f64>>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::provider::SourceErrorKind;

    #[test]
    fn parses_closes_and_preserves_gaps() {
        // 2020-01-02 and 2020-01-03 in epoch seconds, second close missing.
        let body = r#"{
            "chart": {
                "result": [{
                    "timestamp": [1577923200, 1578009600],
                    "indicators": { "quote": [{ "close": [305.25, null] }] }
                }],
                "error": null
            }
        }"#;

        let closes = parse_chart_response(body).expect("payload should parse");
        assert_eq!(closes.len(), 2);
        assert_eq!(closes[0].date.format_iso(), "2020-01-02");
        assert_eq!(closes[0].close, Some(305.25));
        assert_eq!(closes[1].close, None);
    }

    #[test]
    fn surfaces_chart_api_error() {
        let body = r#"{
            "chart": {
                "result": null,
                "error": { "code": "Not Found", "description": "No data found, symbol may be delisted" }
            }
        }"#;

        let err = parse_chart_response(body).expect_err("must fail");
        assert_eq!(err.kind(), SourceErrorKind::Unavailable);
        assert!(err.message().contains("delisted"));
    }

    #[test]
    fn malformed_json_is_internal_error() {
        let err = parse_chart_response("<html>rate limited</html>").expect_err("must fail");
        assert_eq!(err.kind(), SourceErrorKind::Internal);
    }

    #[test]
    fn empty_result_list_is_internal_error() {
        let body = r#"{ "chart": { "result": [], "error": null } }"#;
        let err = parse_chart_response(body).expect_err("must fail");
        assert_eq!(err.kind(), SourceErrorKind::Internal);
    }
}
