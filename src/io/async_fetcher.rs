//! Asynchronous price series fetching.
//!
//! This module runs market-data requests on background threads, keeping the
//! GUI responsive while the network call (or snapshot read) blocks.

use eframe::egui;
use std::path::PathBuf;
use std::sync::mpsc::{channel, Receiver};
use std::thread;
use unhdash::{DateWindow, MarketDataSource, PriceSeries};

/// Which source the user asked for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchRequest {
    /// Live chart endpoint
    Live,
    /// Seeded offline random walk
    Synthetic,
    /// A snapshot file picked by the user
    Snapshot(PathBuf),
}

/// Result of a completed fetch.
pub enum FetchResult {
    /// The fetch produced a series
    Success(PriceSeries),
    /// The fetch failed with an error message
    Error(String),
    /// No fetch finished since the last check
    None,
}

/// Manages background fetches of the price series.
///
/// Only the most recent fetch is tracked: starting a new one drops the
/// receiver of the previous one, so a stale result can never overwrite a
/// newer request.
pub struct AsyncFetcher {
    /// Channel receiver for the active fetch
    receiver: Option<Receiver<Result<PriceSeries, String>>>,
}

impl AsyncFetcher {
    pub fn new() -> Self {
        Self { receiver: None }
    }

    /// Checks if a fetch is currently in progress.
    pub fn is_loading(&self) -> bool {
        self.receiver.is_some()
    }

    /// Starts fetching `ticker` over `window` from `source` on a new thread.
    ///
    /// Call `check_completion()` once per frame to collect the result.
    ///
    /// # Arguments
    /// * `source` - The market data source to query
    /// * `ticker` - Symbol to fetch
    /// * `window` - Date range to request
    /// * `ctx` - egui context, repainted when the fetch completes
    pub fn start_fetch(
        &mut self,
        source: Box<dyn MarketDataSource>,
        ticker: String,
        window: DateWindow,
        ctx: &egui::Context,
    ) {
        let (sender, receiver) = channel();
        self.receiver = Some(receiver);

        let ctx_handle = ctx.clone();

        thread::spawn(move || {
            let result = source.fetch(&ticker, window).map_err(|e| e.to_string());

            // The receiver is gone if a newer fetch replaced this one
            let _ = sender.send(result);

            ctx_handle.request_repaint();
        });
    }

    /// Returns the result of the active fetch once it is available.
    pub fn check_completion(&mut self) -> FetchResult {
        let Some(receiver) = &self.receiver else {
            return FetchResult::None;
        };

        match receiver.try_recv() {
            Ok(result) => {
                self.receiver = None;
                match result {
                    Ok(series) => FetchResult::Success(series),
                    Err(message) => FetchResult::Error(message),
                }
            }
            Err(std::sync::mpsc::TryRecvError::Empty) => FetchResult::None,
            Err(std::sync::mpsc::TryRecvError::Disconnected) => {
                // Worker died without sending (panicked inside the source)
                self.receiver = None;
                FetchResult::Error("fetch worker stopped unexpectedly".to_string())
            }
        }
    }
}

impl Default for AsyncFetcher {
    fn default() -> Self {
        Self::new()
    }
}
