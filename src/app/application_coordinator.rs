//! Application-level coordination and workflow management.
//!
//! Handles high-level operations like section changes, price fetches and
//! snapshot export, keeping error reporting in one place.

use crate::app::AppState;
use crate::io::{AsyncFetcher, FetchRequest, FetchResult};
use chrono::NaiveDate;
use std::path::Path;
use tracing::{debug, info, warn};
use unhdash::{DashboardConfig, MarketDataSource, Section, SelectionOrigin, SnapshotSource};

/// Coordinates application-level operations and workflows.
///
/// This struct is responsible for:
/// - Keeping the section selectors in sync
/// - Starting fetches and applying their results
/// - Writing snapshots of the loaded series
pub struct ApplicationCoordinator;

impl ApplicationCoordinator {
    /// Applies a selection made on one of the two section selectors.
    ///
    /// Returns true if the opposite selector had to be updated.
    pub fn handle_section_change(state: &mut AppState, origin: SelectionOrigin, section: Section) -> bool {
        let reconciled = state.sections.apply(origin, section);
        if reconciled {
            info!(section = %section, ?origin, "section changed");
        } else {
            debug!(section = %section, ?origin, "section already selected");
        }
        reconciled
    }

    /// The fetch started on the first frame: live prices for the configured ticker.
    pub fn launch_request() -> FetchRequest {
        FetchRequest::Live
    }

    /// Builds the data source for a fetch request.
    pub fn source_for(config: &DashboardConfig, request: &FetchRequest) -> Box<dyn MarketDataSource> {
        match request {
            FetchRequest::Live => config.live_source(),
            FetchRequest::Synthetic => config.synthetic_source(),
            FetchRequest::Snapshot(path) => Box::new(SnapshotSource::new(path.clone())),
        }
    }

    /// Starts fetching the configured ticker over the window ending today.
    pub fn request_fetch(
        state: &mut AppState,
        fetcher: &mut AsyncFetcher,
        request: FetchRequest,
        ctx: &egui::Context,
    ) {
        let today = chrono::Local::now().date_naive();
        Self::request_fetch_at(state, fetcher, request, today, ctx);
    }

    /// Starts a fetch for the window ending on `today`.
    ///
    /// The stock panel switches to its spinner immediately.
    pub fn request_fetch_at(
        state: &mut AppState,
        fetcher: &mut AsyncFetcher,
        request: FetchRequest,
        today: NaiveDate,
        ctx: &egui::Context,
    ) {
        let source = Self::source_for(&state.config, &request);
        let window = state.config.window_ending(today);
        let description = source.describe();

        if fetcher.is_loading() {
            debug!("replacing in-flight fetch");
        }
        info!(ticker = %state.config.ticker, %window, source = %description, "fetching price series");

        state.stock.begin_loading(description);
        state.error_message = None;
        fetcher.start_fetch(source, state.config.ticker.clone(), window, ctx);
    }

    /// Checks for fetch completion and applies results to application state.
    ///
    /// Called once per frame in the update loop.
    /// Returns true if a fetch completed (success or error).
    pub fn check_fetch_completion(state: &mut AppState, fetcher: &mut AsyncFetcher) -> bool {
        match fetcher.check_completion() {
            FetchResult::Success(series) => {
                info!(
                    ticker = %series.ticker,
                    points = series.len(),
                    source = %series.source,
                    "price series loaded"
                );
                state.stock.finish_loaded(series);
                true
            }
            FetchResult::Error(reason) => {
                warn!(%reason, "price series unavailable");
                state.stock.finish_unavailable(reason);
                true
            }
            FetchResult::None => false,
        }
    }

    /// Writes the loaded series to `path`.
    ///
    /// Failures are reported through `error_message`.
    pub fn save_snapshot(state: &mut AppState, path: &Path) {
        let Some(series) = state.stock.series() else {
            state.error_message = Some("No price series loaded to save".to_string());
            return;
        };

        match unhdash::write_snapshot(path, series) {
            Ok(()) => {
                info!(path = %path.display(), points = series.len(), "snapshot saved");
                state.error_message = None;
            }
            Err(e) => {
                warn!(path = %path.display(), error = %e, "snapshot save failed");
                state.error_message = Some(format!("Error saving snapshot: {:#}", e));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::StockStatus;
    use std::thread;
    use std::time::{Duration, Instant};
    use unhdash::{analysis_summaries, revenue_series, satisfaction_series};

    fn wait_for_fetch(state: &mut AppState, fetcher: &mut AsyncFetcher) {
        let deadline = Instant::now() + Duration::from_secs(10);
        while !ApplicationCoordinator::check_fetch_completion(state, fetcher) {
            assert!(Instant::now() < deadline, "fetch did not complete");
            thread::sleep(Duration::from_millis(5));
        }
    }

    #[test]
    fn test_launch_defaults() {
        let state = AppState::new();
        assert_eq!(state.sections.dropdown(), Section::StockImpact);
        assert_eq!(state.sections.tab_strip(), Section::StockImpact);
        assert_eq!(state.config.ticker, "UNH");

        let today = NaiveDate::from_ymd_opt(2025, 5, 31).unwrap();
        let window = state.config.window_ending(today);
        assert_eq!(window.end, today);
        assert_eq!(window.start, NaiveDate::from_ymd_opt(2025, 5, 1).unwrap());

        let request = ApplicationCoordinator::launch_request();
        assert_eq!(request, FetchRequest::Live);
        let source = ApplicationCoordinator::source_for(&state.config, &request);
        assert!(source.describe().contains(&state.config.endpoint));
    }

    #[test]
    fn test_selecting_analysis_from_dropdown() {
        let mut state = AppState::new();
        let moved = ApplicationCoordinator::handle_section_change(
            &mut state,
            SelectionOrigin::Dropdown,
            Section::Analysis,
        );

        assert!(moved);
        assert_eq!(state.sections.tab_strip(), Section::Analysis);
        assert_eq!(state.sections.active(), Section::Analysis);

        let values: Vec<&str> = analysis_summaries().iter().map(|s| s.value).collect();
        assert_eq!(values, vec!["7.2%", "$1.8B"]);
        assert_eq!(revenue_series().len(), 6);
        assert_eq!(satisfaction_series().len(), 5);
    }

    #[test]
    fn test_tab_change_reconciles_dropdown() {
        let mut state = AppState::new();
        for section in Section::ALL {
            ApplicationCoordinator::handle_section_change(&mut state, SelectionOrigin::TabStrip, section);
            assert_eq!(state.sections.dropdown(), section);
            assert!(state.sections.is_consistent());
        }
    }

    #[test]
    fn test_repeated_selection_writes_nothing() {
        let mut state = AppState::new();
        let moved = ApplicationCoordinator::handle_section_change(
            &mut state,
            SelectionOrigin::TabStrip,
            Section::StockImpact,
        );
        assert!(!moved);
    }

    #[test]
    fn test_synthetic_fetch_loads_series() {
        let ctx = egui::Context::default();
        let mut state = AppState::new();
        let mut fetcher = AsyncFetcher::new();
        let today = NaiveDate::from_ymd_opt(2025, 5, 30).unwrap();

        ApplicationCoordinator::request_fetch_at(&mut state, &mut fetcher, FetchRequest::Synthetic, today, &ctx);
        assert!(state.stock.is_loading());

        wait_for_fetch(&mut state, &mut fetcher);
        let series = state.stock.series().expect("series loaded");
        assert_eq!(series.ticker, "UNH");
        assert!(series.points().iter().all(|p| series.window.contains(p.date)));
        assert!(state.stock.last_updated().is_some());
    }

    #[test]
    fn test_missing_snapshot_marks_data_unavailable() {
        let ctx = egui::Context::default();
        let mut state = AppState::new();
        let mut fetcher = AsyncFetcher::new();
        let today = NaiveDate::from_ymd_opt(2025, 5, 30).unwrap();
        let request = FetchRequest::Snapshot("/nonexistent/unh-snapshot.json".into());

        ApplicationCoordinator::request_fetch_at(&mut state, &mut fetcher, request, today, &ctx);
        wait_for_fetch(&mut state, &mut fetcher);

        assert!(matches!(state.stock.status(), StockStatus::Unavailable { .. }));
        // Other state is untouched
        assert!(state.error_message.is_none());
        assert_eq!(state.sections.active(), Section::StockImpact);
    }

    #[test]
    fn test_save_snapshot_without_series_reports_error() {
        let mut state = AppState::new();
        ApplicationCoordinator::save_snapshot(&mut state, Path::new("unused.json"));
        assert!(state.error_message.is_some());
    }

    #[test]
    fn test_save_snapshot_writes_file() {
        let ctx = egui::Context::default();
        let mut state = AppState::new();
        let mut fetcher = AsyncFetcher::new();
        let today = NaiveDate::from_ymd_opt(2025, 5, 30).unwrap();
        ApplicationCoordinator::request_fetch_at(&mut state, &mut fetcher, FetchRequest::Synthetic, today, &ctx);
        wait_for_fetch(&mut state, &mut fetcher);

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("unh.json");
        ApplicationCoordinator::save_snapshot(&mut state, &path);

        assert!(state.error_message.is_none());
        let reloaded = unhdash::read_snapshot(&path).unwrap();
        assert_eq!(reloaded.len(), state.stock.series().unwrap().len());
    }
}
