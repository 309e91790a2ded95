//! Revenue and satisfaction analysis panel.

use eframe::egui;
use egui::{Align2, RichText};
use unhdash::{analysis_summaries, revenue_series, satisfaction_series, ThemeColors, YearValue};

use crate::domain::chart_geometry::{extent, nice_ticks, padded_range};
use crate::presentation::color_mapping::satisfaction_bar_color;
use crate::rendering::chart::{self, Bar, ChartMargins};
use crate::ui::summary_box;
use crate::utils::format_billions;

pub fn render_analysis_panel(ui: &mut egui::Ui, colors: &ThemeColors, chart_height: f32) {
    summary_box::render_summary_row(ui, analysis_summaries(), colors);
    ui.add_space(10.0);

    ui.columns(2, |columns| {
        columns[0].label(RichText::new("Revenue ($B)").strong());
        render_revenue_chart(&mut columns[0], revenue_series(), colors, chart_height);

        columns[1].label(RichText::new("Patient satisfaction (%)").strong());
        render_satisfaction_chart(&mut columns[1], satisfaction_series(), colors, chart_height);
    });
}

fn year_labels(series: &[YearValue]) -> Vec<(f64, String)> {
    series.iter().map(|p| (p.year as f64, p.year.to_string())).collect()
}

fn year_domain(series: &[YearValue]) -> (f64, f64) {
    let (lo, hi) = extent(series.iter().map(|p| p.year as f64)).unwrap_or((0.0, 1.0));
    (lo - 0.5, hi + 0.5)
}

fn render_revenue_chart(ui: &mut egui::Ui, series: &[YearValue], colors: &ThemeColors, height: f32) {
    let (lo, hi) = extent(series.iter().map(|p| p.value)).unwrap_or((0.0, 1.0));
    let y_domain = padded_range(lo, hi, 0.1);

    let (frame, _response, painter) =
        chart::allocate_chart(ui, height, ChartMargins::default(), year_domain(series), y_domain);
    chart::draw_plot_background(&painter, &frame, colors);
    chart::draw_y_axis(&painter, &frame, &nice_ticks(y_domain.0, y_domain.1, 5), |v| format!("{:.0}", v), colors);
    chart::draw_x_axis(&painter, &frame, &year_labels(series), colors);

    let points: Vec<(f64, f64)> = series.iter().map(|p| (p.year as f64, p.value)).collect();
    chart::draw_line_series(&painter, &frame, &points, colors.series_primary, 2.0);
    chart::draw_point_series(&painter, &frame, &points, colors.series_primary, 4.0);

    for &point in &points {
        chart::draw_point_label(
            &painter,
            &frame,
            point,
            egui::vec2(0.0, -8.0),
            Align2::CENTER_BOTTOM,
            &format_billions(point.1),
            colors.text_dim,
        );
    }
}

fn render_satisfaction_chart(ui: &mut egui::Ui, series: &[YearValue], colors: &ThemeColors, height: f32) {
    let (lo, hi) = extent(series.iter().map(|p| p.value)).unwrap_or((0.0, 100.0));
    // Bars start a little under the lowest score so the differences stay visible
    let baseline = (lo - 5.0).floor().max(0.0);
    let y_domain = (baseline, hi + 2.0);

    let (frame, _response, painter) =
        chart::allocate_chart(ui, height, ChartMargins::default(), year_domain(series), y_domain);
    chart::draw_plot_background(&painter, &frame, colors);
    chart::draw_y_axis(&painter, &frame, &nice_ticks(y_domain.0, y_domain.1, 5), |v| format!("{:.0}", v), colors);
    chart::draw_x_axis(&painter, &frame, &year_labels(series), colors);

    let bars: Vec<Bar> = series
        .iter()
        .map(|p| Bar {
            x: p.year as f64,
            value: p.value,
            color: satisfaction_bar_color(p.year, colors),
        })
        .collect();
    chart::draw_bar_series(&painter, &frame, &bars, 0.6, baseline);

    for bar in &bars {
        chart::draw_point_label(
            &painter,
            &frame,
            (bar.x, bar.value),
            egui::vec2(0.0, -4.0),
            Align2::CENTER_BOTTOM,
            &format!("{:.0}%", bar.value),
            colors.text_dim,
        );
    }
}
