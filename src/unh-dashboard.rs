//! UNH Crisis Dashboard GUI Application
//!
//! A tabbed dashboard built on egui. A section dropdown in the header and a
//! tab strip under it always show the same section; the central area renders
//! the panel for that section:
//! - Stock trend (trailing daily prices, fetched in the background)
//! - Investigation timeline
//! - Financial metrics table
//! - Revenue and satisfaction analysis
//! - Metrics overview
//!
//! The application is built with a modular architecture:
//! - `app/` - Application state management and coordination
//! - `domain/` - Chart math and the table query
//! - `presentation/` - Color choices for chart elements
//! - `io/` - Background price fetching
//! - `utils/` - Formatting helpers
//! - `ui/` - Panel rendering
//! - `rendering/` - Painter-based chart primitives
//! - `state/` - Focused state components

#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

use eframe::egui;
use tracing::info;

mod utils;
mod domain;
mod presentation;
mod io;
mod app;
mod rendering;
mod ui;
mod state;

use app::{AppState, ApplicationCoordinator, SettingKey, SettingsStore, ThemeCoordinator};
use io::{AsyncFetcher, FetchRequest};
use ui::panel_manager::{PanelInteraction, PanelManager};

/// Main application entry point that initializes and launches the dashboard.
fn main() -> eframe::Result {
    unhdash::logging::init_logging("info");

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1200.0, 800.0])
            .with_min_inner_size([720.0, 480.0])
            .with_title("UNH Crisis Dashboard"),
        ..Default::default()
    };

    eframe::run_native(
        "UNH Crisis Dashboard",
        options,
        Box::new(|cc| Ok(Box::new(DashboardApp::new(cc)))),
    )
}

/// The main dashboard application.
///
/// Most functionality is delegated:
/// - `ApplicationCoordinator` handles section changes, fetches and snapshots
/// - `ThemeCoordinator` handles theme persistence and application
/// - `PanelManager` handles UI panel layout and rendering
struct DashboardApp {
    /// Centralized application state
    state: AppState,
    /// Background price fetcher
    fetcher: AsyncFetcher,
    /// Fetch to start on the next frame
    pending_fetch: Option<FetchRequest>,
}

impl DashboardApp {
    /// Creates the dashboard with settings loaded from persistent storage.
    ///
    /// The live fetch for the configured ticker starts on the first frame.
    fn new(cc: &eframe::CreationContext) -> Self {
        let (theme_name, config) = SettingsStore::load_startup(cc.storage);
        info!(ticker = %config.ticker, theme = %theme_name, "starting dashboard");

        Self {
            state: AppState::with_settings(theme_name, config),
            fetcher: AsyncFetcher::new(),
            pending_fetch: Some(ApplicationCoordinator::launch_request()),
        }
    }

    /// Handles panel interactions by delegating to the coordinators.
    fn handle_panel_interaction(&mut self, interaction: PanelInteraction, ctx: &egui::Context) {
        match interaction {
            PanelInteraction::SectionChanged { origin, section } => {
                ApplicationCoordinator::handle_section_change(&mut self.state, origin, section);
            }
            PanelInteraction::RefreshRequested => {
                ApplicationCoordinator::request_fetch(&mut self.state, &mut self.fetcher, FetchRequest::Live, ctx);
            }
            PanelInteraction::OfflineSeriesRequested => {
                ApplicationCoordinator::request_fetch(
                    &mut self.state,
                    &mut self.fetcher,
                    FetchRequest::Synthetic,
                    ctx,
                );
            }
            PanelInteraction::OpenSnapshotRequested(path) => {
                ApplicationCoordinator::request_fetch(
                    &mut self.state,
                    &mut self.fetcher,
                    FetchRequest::Snapshot(path),
                    ctx,
                );
            }
            PanelInteraction::SaveSnapshotRequested(path) => {
                ApplicationCoordinator::save_snapshot(&mut self.state, &path);
            }
            PanelInteraction::ThemeChanged(name) => {
                ThemeCoordinator::change_theme(&mut self.state, name);
            }
        }
    }
}

impl eframe::App for DashboardApp {
    /// Called when the app is being shut down - ensures preferences are saved.
    fn save(&mut self, storage: &mut dyn eframe::Storage) {
        ThemeCoordinator::save_theme_to_storage(storage, &self.state);
        SettingsStore::save(storage, SettingKey::Config, &self.state.config);
    }

    /// Main update loop:
    /// 1. Check for fetch completion
    /// 2. Apply theme
    /// 3. Start the pending fetch (the launch fetch on the first frame)
    /// 4. Render all panels via PanelManager
    /// 5. Handle panel interactions
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        ApplicationCoordinator::check_fetch_completion(&mut self.state, &mut self.fetcher);

        ThemeCoordinator::apply_current_theme(ctx, &self.state);

        if let Some(request) = self.pending_fetch.take() {
            ApplicationCoordinator::request_fetch(&mut self.state, &mut self.fetcher, request, ctx);
        }

        if let Some(interaction) = PanelManager::render_all_panels(ctx, &mut self.state) {
            self.handle_panel_interaction(interaction, ctx);
        }
    }
}
