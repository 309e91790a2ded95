pub mod section;
pub mod data;
pub mod market;
pub mod yahoo_source;
pub mod synthetic_source;
pub mod snapshot;
pub mod config;
pub mod logging;
pub mod theme;

// Export section selection
pub use section::{Section, SectionSync, SelectionOrigin};

// Export literal datasets
pub use data::{
    MetricRecord, YearValue, EventMarker, SummaryBox, OverviewRow,
    TICKER, SATISFACTION_SCALE, HIGHLIGHT_YEAR,
    metrics, revenue_series, satisfaction_series, investigation_events,
    analysis_summaries, overview_summaries, overview_rows
};

// Export market data types and sources
pub use market::{
    DateWindow, PricePoint, PriceSeries, SeriesSource,
    MarketDataError, MarketDataSource, MAX_LOOKBACK_DAYS
};
pub use yahoo_source::{YahooChartSource, parse_chart_response};
pub use synthetic_source::SyntheticSource;
pub use snapshot::{SnapshotSource, write_snapshot, read_snapshot};

// Export configuration
pub use config::DashboardConfig;

// Export theme support
pub use theme::{Theme, ThemeColors, ThemeManager, hex_to_color32, with_alpha};
