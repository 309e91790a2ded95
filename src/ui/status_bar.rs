//! Status bar UI rendering
//!
//! Handles the bottom status bar: memory, active section and the loaded series.

use eframe::egui;
use egui::RichText;
use crate::app::AppState;
use crate::state::StockStatus;
use crate::utils::{format_memory_mb, get_current_memory_mb};

/// Renders the status panel at the bottom of the window
///
/// # Arguments
/// * `ui` - The egui UI context for drawing
/// * `state` - Reference to application state
pub fn render_status_bar(ui: &mut egui::Ui, state: &AppState) {
    ui.horizontal(|ui| {
        // Always show memory usage first
        let memory_text = format_memory_mb(get_current_memory_mb());
        ui.label(RichText::new(&memory_text).strong());
        ui.label(RichText::new("|").strong());

        ui.label(RichText::new(format!("Section: {}", state.sections.active())).strong());
        ui.label(RichText::new("|").strong());

        match state.stock.status() {
            StockStatus::Idle => {
                ui.label(RichText::new("No price series loaded").strong());
            }
            StockStatus::Loading { source } => {
                ui.label(RichText::new(format!("Fetching from {}...", source)).strong());
            }
            StockStatus::Loaded(series) => {
                let updated = state
                    .stock
                    .last_updated()
                    .map(|t| t.format("%H:%M:%S").to_string())
                    .unwrap_or_else(|| "?".to_string());
                ui.label(RichText::new(format!(
                    "{} | Source: {} | Window: {} | Points: {} | Updated: {}",
                    series.ticker,
                    series.source,
                    series.window,
                    series.len(),
                    updated
                )).strong());
            }
            StockStatus::Unavailable { .. } => {
                ui.label(
                    RichText::new("Price data unavailable")
                        .strong()
                        .color(state.theme.colors().negative),
                );
            }
        }
    });
}
