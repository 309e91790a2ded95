use chrono::{Datelike, Duration, Weekday};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::market::{DateWindow, MarketDataError, MarketDataSource, PricePoint, PriceSeries, SeriesSource};

const DEFAULT_SEED: u64 = 42;
/// Opening price of the walk when none is given.
pub const DEFAULT_START_PRICE: f64 = 520.0;
/// Largest daily move of the random walk, as a fraction of the price.
const MAX_DAILY_MOVE: f64 = 0.03;

/// Offline price generator: a seeded random walk over the window's weekdays.
///
/// The same seed and window always produce the same series, which keeps the
/// stock panel usable without network access.
pub struct SyntheticSource {
    seed: u64,
    start_price: f64,
}

impl SyntheticSource {
    pub fn new() -> Self {
        Self {
            seed: DEFAULT_SEED,
            start_price: DEFAULT_START_PRICE,
        }
    }

    /// A walk from the default start price.
    pub fn with_seed(seed: u64) -> Self {
        Self::with_config(seed, DEFAULT_START_PRICE)
    }

    pub fn with_config(seed: u64, start_price: f64) -> Self {
        Self { seed, start_price }
    }
}

impl Default for SyntheticSource {
    fn default() -> Self {
        Self::new()
    }
}

impl MarketDataSource for SyntheticSource {
    fn fetch(&self, ticker: &str, window: DateWindow) -> Result<PriceSeries, MarketDataError> {
        let mut rng = StdRng::seed_from_u64(self.seed);
        let mut points = Vec::new();
        let mut price = self.start_price;
        let mut date = window.start;

        while date <= window.end {
            if !matches!(date.weekday(), Weekday::Sat | Weekday::Sun) {
                let open = price;
                let close = (open * (1.0 + rng.gen_range(-MAX_DAILY_MOVE..MAX_DAILY_MOVE))).max(1.0);
                let high = open.max(close) * (1.0 + rng.gen_range(0.0..0.01));
                let low = open.min(close) * (1.0 - rng.gen_range(0.0..0.01));

                points.push(PricePoint {
                    date,
                    open,
                    high,
                    low,
                    close,
                    adjusted_close: close,
                    volume: rng.gen_range(2_000_000..9_000_000),
                });
                price = close;
            }
            date += Duration::days(1);
        }

        PriceSeries::new(ticker, window, SeriesSource::Synthetic { seed: self.seed }, points)
    }

    fn describe(&self) -> String {
        format!("synthetic (seed {})", self.seed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn test_weekdays_only() {
        // 2025-05-01 is a Thursday; 30-day window has 22 weekdays
        let window = DateWindow::new(
            NaiveDate::from_ymd_opt(2025, 5, 1).unwrap(),
            NaiveDate::from_ymd_opt(2025, 5, 31).unwrap(),
        );
        let series = SyntheticSource::new().fetch("UNH", window).unwrap();
        assert_eq!(series.len(), 22);
        assert!(series
            .points()
            .iter()
            .all(|p| !matches!(p.date.weekday(), Weekday::Sat | Weekday::Sun)));
        assert!(series.points().iter().all(|p| p.low <= p.close && p.close <= p.high));
    }

    #[test]
    fn test_with_seed_matches_default_start_price() {
        let window = DateWindow::new(
            NaiveDate::from_ymd_opt(2025, 5, 1).unwrap(),
            NaiveDate::from_ymd_opt(2025, 5, 31).unwrap(),
        );
        let seeded = SyntheticSource::with_seed(DEFAULT_SEED).fetch("UNH", window).unwrap();
        let default = SyntheticSource::new().fetch("UNH", window).unwrap();
        assert_eq!(seeded.points(), default.points());
        assert_eq!(seeded.first().open, DEFAULT_START_PRICE);
    }

    #[test]
    fn test_weekend_only_window_is_no_data() {
        let saturday = NaiveDate::from_ymd_opt(2025, 5, 3).unwrap();
        let window = DateWindow::new(saturday, saturday + Duration::days(1));
        let err = SyntheticSource::new().fetch("UNH", window).unwrap_err();
        assert!(matches!(err, MarketDataError::NoData { .. }));
    }
}
