//! Panel orchestration and layout management.
//!
//! Lays out the header, tab strip and status bar around the central panel,
//! and collects the one interaction (if any) made this frame.

use crate::app::AppState;
use crate::ui::{
    analysis_panel, data_panel, header, investigations_panel, overview_panel, stock_panel, status_bar,
    tab_strip,
};
use std::path::PathBuf;
use unhdash::{Section, SelectionOrigin};

/// Result of panel interactions that need to be handled by the application coordinator.
#[derive(Debug, Clone, PartialEq)]
pub enum PanelInteraction {
    /// One of the two section selectors changed
    SectionChanged {
        origin: SelectionOrigin,
        section: Section,
    },
    /// Re-run the live fetch
    RefreshRequested,
    /// Load the synthetic series
    OfflineSeriesRequested,
    /// Load a snapshot file
    OpenSnapshotRequested(PathBuf),
    /// Write the loaded series to a file
    SaveSnapshotRequested(PathBuf),
    /// Switch themes
    ThemeChanged(String),
}

impl From<header::HeaderInteraction> for PanelInteraction {
    fn from(interaction: header::HeaderInteraction) -> Self {
        use header::HeaderInteraction as H;
        match interaction {
            H::SectionChanged(section) => PanelInteraction::SectionChanged {
                origin: header::ORIGIN,
                section,
            },
            H::RefreshRequested => PanelInteraction::RefreshRequested,
            H::OfflineSeriesRequested => PanelInteraction::OfflineSeriesRequested,
            H::OpenSnapshotRequested(path) => PanelInteraction::OpenSnapshotRequested(path),
            H::SaveSnapshotRequested(path) => PanelInteraction::SaveSnapshotRequested(path),
            H::ThemeChanged(name) => PanelInteraction::ThemeChanged(name),
        }
    }
}

/// Manages the layout and rendering of all UI panels.
pub struct PanelManager;

impl PanelManager {
    /// Renders all panels in the application window.
    ///
    /// This is the main entry point for rendering the entire UI, called from
    /// the eframe::App::update() implementation.
    pub fn render_all_panels(ctx: &egui::Context, state: &mut AppState) -> Option<PanelInteraction> {
        let mut interaction: Option<PanelInteraction> = None;

        // Header panel at the top
        egui::TopBottomPanel::top("header").show(ctx, |ui| {
            if let Some(header_interaction) = header::render_header(ui, state) {
                interaction = Some(header_interaction.into());
            }
        });

        // Tab strip directly under the header
        egui::TopBottomPanel::top("tab_strip").show(ctx, |ui| {
            if let Some(section) = tab_strip::render_tab_strip(ui, state.sections.tab_strip()) {
                interaction = Some(PanelInteraction::SectionChanged {
                    origin: tab_strip::ORIGIN,
                    section,
                });
            }
        });

        // Status panel at the very bottom
        egui::TopBottomPanel::bottom("status_panel").show(ctx, |ui| {
            status_bar::render_status_bar(ui, state);
        });

        let panel_frame = egui::Frame::default()
            .inner_margin(egui::Margin::same(12))
            .fill(ctx.style().visuals.panel_fill);

        egui::CentralPanel::default().frame(panel_frame).show(ctx, |ui| {
            state.layout.fit_chart_height(ui.available_height());
            let chart_height = state.layout.chart_height();

            egui::ScrollArea::vertical().auto_shrink([false, false]).show(ui, |ui| {
                let colors = state.theme.colors();
                ui.heading(state.sections.active().label());
                ui.separator();

                match state.sections.active() {
                    Section::StockImpact => {
                        stock_panel::render_stock_panel(ui, &state.stock, colors, chart_height)
                    }
                    Section::Investigations => investigations_panel::render_investigations_panel(ui, colors),
                    Section::Data => data_panel::render_data_panel(ui, state.layout.metrics_table_mut(), colors),
                    Section::Analysis => analysis_panel::render_analysis_panel(ui, colors, chart_height),
                    Section::MetricsOverview => overview_panel::render_overview_panel(ui, colors, chart_height),
                }
            });
        });

        interaction
    }
}
