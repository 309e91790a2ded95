//! Colored value boxes shown above the analysis and overview charts.

use eframe::egui;
use egui::RichText;
use unhdash::{SummaryBox, ThemeColors};

use crate::presentation::color_mapping::card_fill;

const BOX_HEIGHT: f32 = 92.0;

/// Lays out `boxes` side by side, filling the available width.
pub fn render_summary_row(ui: &mut egui::Ui, boxes: &[SummaryBox], colors: &ThemeColors) {
    if boxes.is_empty() {
        return;
    }
    ui.columns(boxes.len(), |columns| {
        for (index, (column, summary)) in columns.iter_mut().zip(boxes).enumerate() {
            render_summary_box(column, summary, card_fill(index, colors), colors);
        }
    });
}

fn render_summary_box(ui: &mut egui::Ui, summary: &SummaryBox, fill: egui::Color32, colors: &ThemeColors) {
    egui::Frame::default()
        .fill(fill)
        .corner_radius(6.0)
        .inner_margin(egui::Margin::same(10))
        .show(ui, |ui| {
            ui.set_min_height(BOX_HEIGHT);
            ui.set_width(ui.available_width());
            ui.horizontal(|ui| {
                ui.label(RichText::new(summary.icon).size(28.0));
                ui.vertical(|ui| {
                    ui.label(RichText::new(summary.title).color(colors.card_text).strong());
                    ui.label(RichText::new(summary.value).color(colors.card_text).size(24.0).strong());
                    ui.label(RichText::new(summary.subtitle).color(colors.card_text).small());
                });
            });
        });
}
