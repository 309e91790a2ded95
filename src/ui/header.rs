//! Header panel UI rendering
//!
//! Handles the top bar with the title, the section dropdown, data source
//! buttons and the theme selector.

use eframe::egui;
use std::path::PathBuf;
use unhdash::{Section, SelectionOrigin};

use crate::app::AppState;

/// Result of user interaction with the header panel
pub enum HeaderInteraction {
    /// User picked a section in the dropdown
    SectionChanged(Section),
    /// User clicked "Refresh"
    RefreshRequested,
    /// User clicked "Offline Series"
    OfflineSeriesRequested,
    /// User picked a snapshot file to load
    OpenSnapshotRequested(PathBuf),
    /// User picked a destination for the loaded series
    SaveSnapshotRequested(PathBuf),
    /// User picked a theme
    ThemeChanged(String),
}

/// Renders the application header
///
/// # Arguments
/// * `ui` - The egui UI context for drawing
/// * `state` - Application state (read only; changes are reported back)
///
/// # Returns
/// * `Option<HeaderInteraction>` - User interaction result
pub fn render_header(ui: &mut egui::Ui, state: &AppState) -> Option<HeaderInteraction> {
    let mut interaction = None;

    ui.horizontal(|ui| {
        ui.heading(format!("{} Crisis Dashboard", state.config.ticker));
        ui.separator();

        // The dropdown edits a local copy; the coordinator reconciles the tab strip
        let shown = state.sections.dropdown();
        let mut picked = shown;
        egui::ComboBox::from_id_salt("section_dropdown")
            .selected_text(picked.label())
            .show_ui(ui, |ui| {
                for section in Section::ALL {
                    ui.selectable_value(&mut picked, section, section.label());
                }
            });
        if picked != shown {
            interaction = Some(HeaderInteraction::SectionChanged(picked));
        }

        ui.separator();

        let busy = state.stock.is_loading();
        if ui
            .add_enabled(!busy, egui::Button::new("🔄 Refresh"))
            .on_hover_text("Fetch the live price series again")
            .clicked()
        {
            interaction = Some(HeaderInteraction::RefreshRequested);
        }

        if ui
            .add_enabled(!busy, egui::Button::new("🎲 Offline Series"))
            .on_hover_text("Use a seeded synthetic series")
            .clicked()
        {
            interaction = Some(HeaderInteraction::OfflineSeriesRequested);
        }

        if ui.add_enabled(!busy, egui::Button::new("📁 Open Snapshot")).clicked() {
            if let Some(path) = snapshot_dialog().pick_file() {
                interaction = Some(HeaderInteraction::OpenSnapshotRequested(path));
            }
        }

        let has_series = state.stock.series().is_some();
        if ui.add_enabled(has_series, egui::Button::new("💾 Save Snapshot")).clicked() {
            let name = format!("{}-snapshot.json", state.config.ticker.to_ascii_lowercase());
            if let Some(path) = snapshot_dialog().set_file_name(name).save_file() {
                interaction = Some(HeaderInteraction::SaveSnapshotRequested(path));
            }
        }

        // Push theme selector to the right
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            let old_theme = state.theme.current_theme_name().to_string();
            let mut current_theme = old_theme.clone();
            egui::ComboBox::from_id_salt("theme_selector")
                .selected_text(&current_theme)
                .show_ui(ui, |ui| {
                    for theme_name in state.theme.theme_manager().list_themes() {
                        ui.selectable_value(&mut current_theme, theme_name.to_string(), theme_name);
                    }
                });

            if old_theme != current_theme {
                interaction = Some(HeaderInteraction::ThemeChanged(current_theme));
            }

            ui.label("Theme:");
        });
    });

    if let Some(err) = &state.error_message {
        ui.colored_label(state.theme.colors().negative, err);
    }

    interaction
}

fn snapshot_dialog() -> rfd::FileDialog {
    let mut dialog = rfd::FileDialog::new()
        .add_filter("Price Snapshots", &["json", "br"])
        .add_filter("All Files", &["*"]);

    if let Ok(cwd) = std::env::current_dir() {
        dialog = dialog.set_directory(cwd);
    }
    dialog
}

/// Origin reported for changes made in this panel.
pub const ORIGIN: SelectionOrigin = SelectionOrigin::Dropdown;
