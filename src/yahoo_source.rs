//! Live daily prices from the Yahoo Finance v8 chart endpoint.
//!
//! The endpoint answers with one `result` object holding parallel arrays:
//! `timestamp`, `indicators.quote[0].{open,high,low,close,volume}` and
//! `indicators.adjclose[0].adjclose`. Any of the numeric arrays may contain
//! nulls for days without trading data; those days are skipped.

use chrono::{DateTime, NaiveDate, NaiveTime};
use serde::Deserialize;
use std::time::Duration;

use crate::market::{DateWindow, MarketDataError, MarketDataSource, PricePoint, PriceSeries, SeriesSource};

pub const DEFAULT_ENDPOINT: &str = "https://query1.finance.yahoo.com";
const USER_AGENT: &str = concat!("unhdash/", env!("CARGO_PKG_VERSION"));

/// Fetches daily bars over HTTP with a blocking client.
pub struct YahooChartSource {
    endpoint: String,
    timeout: Duration,
}

impl YahooChartSource {
    pub fn new() -> Self {
        Self::with_endpoint(DEFAULT_ENDPOINT, Duration::from_secs(15))
    }

    pub fn with_endpoint(endpoint: impl Into<String>, timeout: Duration) -> Self {
        Self {
            endpoint: endpoint.into().trim_end_matches('/').to_string(),
            timeout,
        }
    }

    /// Full URL of the chart resource for `ticker`.
    pub fn chart_url(&self, ticker: &str) -> String {
        format!("{}/v8/finance/chart/{}", self.endpoint, ticker)
    }
}

impl Default for YahooChartSource {
    fn default() -> Self {
        Self::new()
    }
}

impl MarketDataSource for YahooChartSource {
    fn fetch(&self, ticker: &str, window: DateWindow) -> Result<PriceSeries, MarketDataError> {
        let client = reqwest::blocking::Client::builder()
            .timeout(self.timeout)
            .user_agent(USER_AGENT)
            .build()?;

        // period2 is exclusive, so ask up to midnight after the last day
        let period1 = epoch_seconds(window.start);
        let period2 = epoch_seconds(window.end) + 86_400;

        tracing::debug!(ticker, %window, url = %self.chart_url(ticker), "requesting chart");

        let response = client
            .get(self.chart_url(ticker))
            .query(&[
                ("period1", period1.to_string()),
                ("period2", period2.to_string()),
                ("interval", "1d".to_string()),
                ("events", "history".to_string()),
            ])
            .send()?;

        let status = response.status();
        let body = response.text()?;

        // Error bodies carry a useful description; prefer it over the bare status
        if !status.is_success() {
            return match parse_chart_response(&body, ticker, window, &self.endpoint) {
                Err(err @ MarketDataError::Api { .. }) => Err(err),
                _ => Err(MarketDataError::Status { status: status.as_u16() }),
            };
        }

        parse_chart_response(&body, ticker, window, &self.endpoint)
    }

    fn describe(&self) -> String {
        format!("yahoo chart ({})", self.endpoint)
    }
}

#[derive(Deserialize)]
struct ChartEnvelope {
    chart: ChartBody,
}

#[derive(Deserialize)]
struct ChartBody {
    result: Option<Vec<ChartResult>>,
    error: Option<ChartError>,
}

#[derive(Deserialize)]
struct ChartError {
    code: String,
    description: String,
}

#[derive(Deserialize)]
struct ChartResult {
    #[serde(default)]
    meta: ChartMeta,
    #[serde(default)]
    timestamp: Vec<i64>,
    indicators: Indicators,
}

#[derive(Deserialize, Default)]
struct ChartMeta {
    /// Exchange offset from UTC in seconds; bars are stamped at the open.
    #[serde(default)]
    gmtoffset: i64,
}

#[derive(Deserialize)]
struct Indicators {
    #[serde(default)]
    quote: Vec<QuoteArrays>,
    #[serde(default)]
    adjclose: Vec<AdjCloseArray>,
}

#[derive(Deserialize, Default)]
struct QuoteArrays {
    #[serde(default)]
    open: Vec<Option<f64>>,
    #[serde(default)]
    high: Vec<Option<f64>>,
    #[serde(default)]
    low: Vec<Option<f64>>,
    #[serde(default)]
    close: Vec<Option<f64>>,
    #[serde(default)]
    volume: Vec<Option<u64>>,
}

#[derive(Deserialize)]
struct AdjCloseArray {
    #[serde(default)]
    adjclose: Vec<Option<f64>>,
}

/// Parses a chart endpoint body into a series.
///
/// When the body has no adjusted-close array (intraday intervals omit it) the
/// plain close is used instead.
pub fn parse_chart_response(
    body: &str,
    ticker: &str,
    window: DateWindow,
    endpoint: &str,
) -> Result<PriceSeries, MarketDataError> {
    let envelope: ChartEnvelope = serde_json::from_str(body)?;

    if let Some(error) = envelope.chart.error {
        return Err(MarketDataError::Api {
            code: error.code,
            description: error.description,
        });
    }

    let no_data = || MarketDataError::NoData {
        ticker: ticker.to_string(),
        window,
    };

    let result = envelope
        .chart
        .result
        .and_then(|results| results.into_iter().next())
        .ok_or_else(no_data)?;

    let quote = result.indicators.quote.into_iter().next().unwrap_or_default();
    let adjclose = result
        .indicators
        .adjclose
        .into_iter()
        .next()
        .map(|a| a.adjclose)
        .unwrap_or_default();

    let offset = result.meta.gmtoffset;
    let points: Vec<PricePoint> = result
        .timestamp
        .iter()
        .enumerate()
        .filter_map(|(i, &ts)| {
            let date = DateTime::from_timestamp(ts + offset, 0)?.date_naive();
            let close = at(&quote.close, i)?;
            Some(PricePoint {
                date,
                open: at(&quote.open, i)?,
                high: at(&quote.high, i)?,
                low: at(&quote.low, i)?,
                close,
                adjusted_close: at(&adjclose, i).unwrap_or(close),
                volume: quote.volume.get(i).copied().flatten().unwrap_or(0),
            })
        })
        .collect();

    PriceSeries::new(
        ticker,
        window,
        SeriesSource::Live {
            endpoint: endpoint.to_string(),
        },
        points,
    )
}

fn at(values: &[Option<f64>], i: usize) -> Option<f64> {
    values.get(i).copied().flatten().filter(|v| v.is_finite())
}

fn epoch_seconds(date: NaiveDate) -> i64 {
    date.and_time(NaiveTime::MIN).and_utc().timestamp()
}
