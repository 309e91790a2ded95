//! Core market-data types shared by every price source.
//!
//! A source turns a ticker and a date window into a [`PriceSeries`]. The GUI
//! only ever talks to the [`MarketDataSource`] trait, so live, synthetic and
//! snapshot data all render the same way.

use chrono::{Duration, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Longest trailing window any caller may ask for, about ten years.
pub const MAX_LOOKBACK_DAYS: i64 = 3650;

/// Inclusive range of calendar dates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateWindow {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl DateWindow {
    /// Builds a window, swapping the bounds if they arrive reversed.
    pub fn new(start: NaiveDate, end: NaiveDate) -> Self {
        if start <= end {
            Self { start, end }
        } else {
            Self { start: end, end: start }
        }
    }

    /// The `days`-day window ending on `today`, capped at [`MAX_LOOKBACK_DAYS`].
    pub fn trailing(today: NaiveDate, days: i64) -> Self {
        let days = days.clamp(0, MAX_LOOKBACK_DAYS);
        let start = today.checked_sub_signed(Duration::days(days)).unwrap_or(NaiveDate::MIN);
        Self::new(start, today)
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        date >= self.start && date <= self.end
    }

    /// Number of calendar days covered, bounds included.
    pub fn len_days(&self) -> i64 {
        (self.end - self.start).num_days() + 1
    }
}

impl fmt::Display for DateWindow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..{}", self.start, self.end)
    }
}

/// One trading day.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PricePoint {
    pub date: NaiveDate,
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
    pub adjusted_close: f64,
    pub volume: u64,
}

/// Where a series came from. Shown in the status bar.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum SeriesSource {
    Live { endpoint: String },
    Synthetic { seed: u64 },
    Snapshot { path: String },
}

impl fmt::Display for SeriesSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SeriesSource::Live { endpoint } => write!(f, "Live ({})", endpoint),
            SeriesSource::Synthetic { seed } => write!(f, "Synthetic (seed {})", seed),
            SeriesSource::Snapshot { path } => write!(f, "Snapshot ({})", path),
        }
    }
}

/// Daily prices for one ticker, sorted by date and never empty.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PriceSeries {
    pub ticker: String,
    pub window: DateWindow,
    pub source: SeriesSource,
    points: Vec<PricePoint>,
}

impl PriceSeries {
    /// Sorts and deduplicates `points` by date, keeping only dates inside
    /// `window`. Fails with [`MarketDataError::NoData`] when nothing is left.
    pub fn new(
        ticker: impl Into<String>,
        window: DateWindow,
        source: SeriesSource,
        mut points: Vec<PricePoint>,
    ) -> Result<Self, MarketDataError> {
        let ticker = ticker.into();
        points.retain(|p| window.contains(p.date));
        points.sort_by_key(|p| p.date);
        points.dedup_by_key(|p| p.date);

        if points.is_empty() {
            return Err(MarketDataError::NoData { ticker, window });
        }

        Ok(Self {
            ticker,
            window,
            source,
            points,
        })
    }

    pub fn points(&self) -> &[PricePoint] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn first(&self) -> &PricePoint {
        &self.points[0]
    }

    pub fn last(&self) -> &PricePoint {
        &self.points[self.points.len() - 1]
    }

    /// Percent change of the adjusted close from the first to the last day.
    pub fn percent_change(&self) -> f64 {
        let first = self.first().adjusted_close;
        if first == 0.0 {
            return 0.0;
        }
        (self.last().adjusted_close - first) / first * 100.0
    }

    /// Lowest and highest adjusted close.
    pub fn adjusted_close_range(&self) -> (f64, f64) {
        self.points.iter().fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), p| {
            (lo.min(p.adjusted_close), hi.max(p.adjusted_close))
        })
    }
}

/// Failure modes of a market-data fetch.
#[derive(Debug, thiserror::Error)]
pub enum MarketDataError {
    /// Transport failure (DNS, TLS, timeout, connection reset).
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The endpoint answered with a non-success status.
    #[error("endpoint returned HTTP {status}")]
    Status { status: u16 },

    /// The endpoint reported an error in its JSON body.
    #[error("endpoint error {code}: {description}")]
    Api { code: String, description: String },

    /// The body was not the expected JSON.
    #[error("malformed response: {0}")]
    Parse(#[from] serde_json::Error),

    /// The request succeeded but contained no usable prices.
    #[error("no data for {ticker} in {window}")]
    NoData { ticker: String, window: DateWindow },

    /// Reading or writing a snapshot file failed.
    #[error("snapshot I/O failed: {0}")]
    Io(#[from] std::io::Error),
}

/// Anything that can produce a daily price series for a ticker.
pub trait MarketDataSource: Send {
    /// Fetches prices for `ticker` within `window`. May block.
    fn fetch(&self, ticker: &str, window: DateWindow) -> Result<PriceSeries, MarketDataError>;

    /// Short name for logs.
    fn describe(&self) -> String;
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 5, d).unwrap()
    }

    fn point(d: u32, close: f64) -> PricePoint {
        PricePoint {
            date: day(d),
            open: close,
            high: close,
            low: close,
            close,
            adjusted_close: close,
            volume: 100,
        }
    }

    #[test]
    fn test_trailing_window() {
        let window = DateWindow::trailing(day(31), 30);
        assert_eq!(window.start, day(1));
        assert_eq!(window.end, day(31));
        assert_eq!(window.len_days(), 31);
    }

    #[test]
    fn test_trailing_window_is_capped() {
        let window = DateWindow::trailing(day(31), 100_000_000);
        assert_eq!(window.end, day(31));
        assert_eq!(window.len_days(), MAX_LOOKBACK_DAYS + 1);

        let window = DateWindow::trailing(NaiveDate::MIN, 30);
        assert_eq!(window.start, NaiveDate::MIN);
        assert_eq!(window.end, NaiveDate::MIN);

        let window = DateWindow::trailing(day(31), i64::MIN);
        assert_eq!(window.len_days(), 1);
    }

    #[test]
    fn test_reversed_window_is_swapped() {
        let window = DateWindow::new(day(10), day(2));
        assert_eq!(window.start, day(2));
        assert!(window.contains(day(5)));
    }

    #[test]
    fn test_series_sorts_and_filters() {
        let window = DateWindow::new(day(2), day(6));
        let series = PriceSeries::new(
            "UNH",
            window,
            SeriesSource::Synthetic { seed: 1 },
            vec![point(5, 3.0), point(1, 9.0), point(3, 2.0), point(3, 2.5)],
        )
        .unwrap();

        let dates: Vec<NaiveDate> = series.points().iter().map(|p| p.date).collect();
        assert_eq!(dates, vec![day(3), day(5)]);
        assert_eq!(series.adjusted_close_range(), (2.0, 3.0));
        assert!((series.percent_change() - 50.0).abs() < 1e-9);
    }

    #[test]
    fn test_empty_series_is_no_data() {
        let window = DateWindow::new(day(2), day(6));
        let err = PriceSeries::new("UNH", window, SeriesSource::Synthetic { seed: 1 }, vec![point(20, 1.0)])
            .unwrap_err();
        assert!(matches!(err, MarketDataError::NoData { .. }));
        assert!(err.to_string().contains("UNH"));
    }
}
