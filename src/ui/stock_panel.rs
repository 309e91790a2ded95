//! Stock trend panel
//!
//! Draws the adjusted close of the loaded series as a connected line, with
//! a hover readout of the nearest trading day.

use eframe::egui;
use egui::RichText;
use unhdash::{PriceSeries, ThemeColors};

use crate::domain::chart_geometry::{nearest_index, nice_ticks, padded_range};
use crate::presentation::color_mapping::change_color;
use crate::rendering::chart::{self, ChartMargins};
use crate::state::{StockState, StockStatus};
use crate::utils::{format_percent_change, format_price, format_short_date};

const X_LABEL_COUNT: usize = 6;

/// Renders the stock panel for the current fetch status.
pub fn render_stock_panel(ui: &mut egui::Ui, stock: &StockState, colors: &ThemeColors, chart_height: f32) {
    match stock.status() {
        StockStatus::Idle => {
            ui.label(RichText::new("No price series requested yet").color(colors.text_dim));
        }
        StockStatus::Loading { source } => {
            ui.vertical_centered(|ui| {
                ui.add_space(40.0);
                ui.spinner();
                ui.label(RichText::new(format!("Loading from {}...", source)).color(colors.text_dim));
            });
        }
        StockStatus::Unavailable { reason } => {
            ui.vertical_centered(|ui| {
                ui.add_space(40.0);
                ui.label(RichText::new("Data unavailable").size(20.0).strong().color(colors.negative));
                ui.label(RichText::new(reason).color(colors.text_dim));
                ui.label(
                    RichText::new("Try Refresh, or load an offline series or snapshot from the header.")
                        .small()
                        .color(colors.text_dim),
                );
            });
        }
        StockStatus::Loaded(series) => {
            render_summary_line(ui, series, colors);
            ui.add_space(6.0);
            render_price_chart(ui, series, colors, chart_height);
        }
    }
}

fn render_summary_line(ui: &mut egui::Ui, series: &PriceSeries, colors: &ThemeColors) {
    let change = series.percent_change();
    ui.horizontal(|ui| {
        ui.label(RichText::new(format!("{} adjusted close", series.ticker)).strong());
        ui.label(format!(
            "{} {} → {} {}",
            format_short_date(series.first().date),
            format_price(series.first().adjusted_close),
            format_short_date(series.last().date),
            format_price(series.last().adjusted_close),
        ));
        ui.label(
            RichText::new(format_percent_change(change))
                .strong()
                .color(change_color(change, colors)),
        );
    });
}

fn render_price_chart(ui: &mut egui::Ui, series: &PriceSeries, colors: &ThemeColors, height: f32) {
    let origin = series.window.start;
    let xs: Vec<f64> = series
        .points()
        .iter()
        .map(|p| (p.date - origin).num_days() as f64)
        .collect();
    let line: Vec<(f64, f64)> = xs
        .iter()
        .zip(series.points())
        .map(|(&x, p)| (x, p.adjusted_close))
        .collect();

    let (lo, hi) = series.adjusted_close_range();
    let y_domain = padded_range(lo, hi, 0.08);
    let x_domain = padded_range(0.0, (series.window.len_days() - 1) as f64, 0.02);

    let (frame, response, painter) =
        chart::allocate_chart(ui, height, ChartMargins::default(), x_domain, y_domain);

    chart::draw_plot_background(&painter, &frame, colors);
    let ticks = nice_ticks(y_domain.0, y_domain.1, 5);
    chart::draw_y_axis(&painter, &frame, &ticks, |v| format!("${:.0}", v), colors);

    let stride = (series.len() / X_LABEL_COUNT).max(1);
    let labels: Vec<(f64, String)> = series
        .points()
        .iter()
        .zip(&xs)
        .step_by(stride)
        .map(|(p, &x)| (x, format_short_date(p.date)))
        .collect();
    chart::draw_x_axis(&painter, &frame, &labels, colors);

    chart::draw_line_series(&painter, &frame, &line, colors.series_primary, 2.0);
    if series.len() == 1 {
        chart::draw_point_series(&painter, &frame, &line, colors.series_primary, 3.0);
    }
    chart::draw_legend(&painter, &frame, &[("Adjusted close", colors.series_primary)], colors);

    if let Some(pointer) = response.hover_pos() {
        if frame.plot_rect().x_range().contains(pointer.x) {
            if let Some(index) = nearest_index(&xs, frame.x_from_screen(pointer.x)) {
                let point = &series.points()[index];
                let text = format!(
                    "{}\nAdj. close {}\nClose {}  Vol {}",
                    point.date.format("%a %Y-%m-%d"),
                    format_price(point.adjusted_close),
                    format_price(point.close),
                    point.volume
                );
                chart::draw_hover_readout(&painter, &frame, line[index], text, colors.series_primary, colors);
            }
        }
    }
}
