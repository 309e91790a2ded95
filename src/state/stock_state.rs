//! Price series state for the stock panel.
//!
//! The fetch itself runs on a background thread (see `io::AsyncFetcher`);
//! this module only records where the panel stands.

use chrono::{DateTime, Local};
use unhdash::PriceSeries;

/// What the stock panel should show.
#[derive(Debug, Clone, Default)]
pub enum StockStatus {
    /// Nothing requested yet
    #[default]
    Idle,
    /// A fetch is in flight
    Loading { source: String },
    /// A series is available
    Loaded(PriceSeries),
    /// The last fetch failed; the panel shows "Data unavailable"
    Unavailable { reason: String },
}

/// State of the stock panel's data.
///
/// Responsibilities:
/// - Tracking the fetch lifecycle
/// - Remembering when data last arrived
#[derive(Debug, Clone, Default)]
pub struct StockState {
    status: StockStatus,
    last_updated: Option<DateTime<Local>>,
}

impl StockState {
    pub fn new() -> Self {
        Self::default()
    }

    // ===== Queries =====

    pub fn status(&self) -> &StockStatus {
        &self.status
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.status, StockStatus::Loading { .. })
    }

    /// The loaded series, if the last fetch succeeded.
    pub fn series(&self) -> Option<&PriceSeries> {
        match &self.status {
            StockStatus::Loaded(series) => Some(series),
            _ => None,
        }
    }

    pub fn last_updated(&self) -> Option<DateTime<Local>> {
        self.last_updated
    }

    // ===== Mutations =====

    /// Marks a fetch from `source` as started.
    ///
    /// The previous series is dropped so the panel shows the spinner.
    pub fn begin_loading(&mut self, source: String) {
        self.status = StockStatus::Loading { source };
    }

    pub fn finish_loaded(&mut self, series: PriceSeries) {
        self.status = StockStatus::Loaded(series);
        self.last_updated = Some(Local::now());
    }

    pub fn finish_unavailable(&mut self, reason: String) {
        self.status = StockStatus::Unavailable { reason };
    }
}
