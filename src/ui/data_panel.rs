//! Financial metrics table panel
//!
//! The table reads the literal metric records through a [`TableQuery`] kept in
//! layout state, so filter, sort and page survive switching sections.

use eframe::egui;
use egui::RichText;
use unhdash::{metrics, ThemeColors};

use crate::domain::table_query::{MetricColumn, TableQuery};
use crate::utils::format_metric_value;

/// Renders the filter box, the sortable table and the pager.
pub fn render_data_panel(ui: &mut egui::Ui, query: &mut TableQuery, colors: &ThemeColors) {
    ui.label(RichText::new("Financial metrics").strong());
    ui.add_space(4.0);

    ui.horizontal(|ui| {
        ui.label("Filter:");
        let mut filter = query.filter().to_string();
        let response = egui::TextEdit::singleline(&mut filter)
            .hint_text("metric name")
            .desired_width(180.0)
            .show(ui)
            .response;
        if response.changed() {
            query.set_filter(filter);
        }
    });
    ui.add_space(4.0);

    let mut clicked_column = None;
    let page = query.apply(metrics());

    egui::Grid::new("metrics_table")
        .num_columns(MetricColumn::ALL.len())
        .min_col_width(90.0)
        .spacing([24.0, 6.0])
        .striped(true)
        .show(ui, |ui| {
            for column in MetricColumn::ALL {
                let arrow = match query.sort() {
                    Some(spec) if spec.column == column => spec.direction.arrow(),
                    _ => "",
                };
                let title = RichText::new(format!("{}{}", column.title(), arrow)).strong();
                if ui.add(egui::Button::new(title).frame(false)).clicked() {
                    clicked_column = Some(column);
                }
            }
            ui.end_row();

            for record in &page.rows {
                ui.label(record.id.to_string());
                ui.label(record.label);
                ui.label(RichText::new(format_metric_value(record.value)).monospace());
                ui.end_row();
            }
        });

    if page.rows.is_empty() {
        ui.label(RichText::new("No metrics match the filter").color(colors.text_dim));
    }

    ui.add_space(6.0);
    let page_count = page.page_count;
    let current = page.page;
    let total = page.total_matches;

    ui.horizontal(|ui| {
        if ui.add_enabled(current > 0, egui::Button::new("◀ Prev")).clicked() {
            query.previous_page();
        }
        ui.label(format!("Page {} of {}", current + 1, page_count));
        if ui.add_enabled(current + 1 < page_count, egui::Button::new("Next ▶")).clicked() {
            query.next_page(page_count);
        }
        ui.label(RichText::new(format!("{} rows", total)).color(colors.text_dim));
    });

    if let Some(column) = clicked_column {
        query.toggle_sort(column);
    }
}
