//! Dashboard configuration.
//!
//! The GUI takes no flags; this struct is persisted as JSON in eframe storage
//! and falls back to the defaults below field by field.

use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::data::TICKER;
use crate::market::{DateWindow, MarketDataSource, MAX_LOOKBACK_DAYS};
use crate::synthetic_source::SyntheticSource;
use crate::yahoo_source::{YahooChartSource, DEFAULT_ENDPOINT};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DashboardConfig {
    /// Ticker plotted by the stock panel
    pub ticker: String,
    /// Length of the trailing price window, in days
    pub lookback_days: i64,
    /// Base URL of the chart endpoint
    pub endpoint: String,
    pub request_timeout_secs: u64,
    /// Rows per page in the metrics table
    pub table_page_size: usize,
    /// Seed for the offline series
    pub synthetic_seed: u64,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            ticker: TICKER.to_string(),
            lookback_days: 30,
            endpoint: DEFAULT_ENDPOINT.to_string(),
            request_timeout_secs: 15,
            table_page_size: 5,
            synthetic_seed: 42,
        }
    }
}

impl DashboardConfig {
    /// Clamps values that would make the UI misbehave.
    pub fn sanitized(mut self) -> Self {
        if self.ticker.trim().is_empty() {
            self.ticker = TICKER.to_string();
        }
        self.ticker = self.ticker.trim().to_ascii_uppercase();
        self.lookback_days = self.lookback_days.clamp(1, MAX_LOOKBACK_DAYS);
        self.request_timeout_secs = self.request_timeout_secs.max(1);
        self.table_page_size = self.table_page_size.max(1);
        self
    }

    /// The trailing window ending on `today`.
    pub fn window_ending(&self, today: chrono::NaiveDate) -> DateWindow {
        DateWindow::trailing(today, self.lookback_days)
    }

    pub fn live_source(&self) -> Box<dyn MarketDataSource> {
        Box::new(YahooChartSource::with_endpoint(
            self.endpoint.clone(),
            Duration::from_secs(self.request_timeout_secs),
        ))
    }

    pub fn synthetic_source(&self) -> Box<dyn MarketDataSource> {
        Box::new(SyntheticSource::with_seed(self.synthetic_seed))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_json_uses_defaults() {
        let config: DashboardConfig = serde_json::from_str(r#"{"lookback_days": 90}"#).unwrap();
        assert_eq!(config.lookback_days, 90);
        assert_eq!(config.ticker, "UNH");
        assert_eq!(config.table_page_size, 5);
    }

    #[test]
    fn test_sanitized_clamps() {
        let config = DashboardConfig {
            ticker: "  unh ".to_string(),
            lookback_days: 0,
            table_page_size: 0,
            ..Default::default()
        }
        .sanitized();
        assert_eq!(config.ticker, "UNH");
        assert_eq!(config.lookback_days, 1);
        assert_eq!(config.table_page_size, 1);

        let config = DashboardConfig {
            lookback_days: i64::MAX,
            ..Default::default()
        }
        .sanitized();
        assert_eq!(config.lookback_days, MAX_LOOKBACK_DAYS);
    }

    #[test]
    fn test_synthetic_source_uses_configured_seed() {
        let config = DashboardConfig {
            synthetic_seed: 9,
            ..Default::default()
        };
        assert_eq!(config.synthetic_source().describe(), "synthetic (seed 9)");
    }
}
