//! Metrics overview panel
//!
//! Revenue and satisfaction share one plot. Satisfaction is scaled onto the
//! revenue axis; the right-hand axis converts the ticks back to scores.

use eframe::egui;
use egui::RichText;
use unhdash::data::{scale_satisfaction, unscale_satisfaction};
use unhdash::{overview_rows, overview_summaries, OverviewRow, ThemeColors};

use crate::domain::chart_geometry::{extent, nice_ticks, padded_range};
use crate::rendering::chart::{self, ChartMargins};
use crate::ui::summary_box;

pub fn render_overview_panel(ui: &mut egui::Ui, colors: &ThemeColors, chart_height: f32) {
    summary_box::render_summary_row(ui, overview_summaries(), colors);
    ui.add_space(10.0);

    ui.label(RichText::new("Revenue vs. patient satisfaction").strong());
    render_dual_axis_chart(ui, &overview_rows(), colors, chart_height);
}

fn render_dual_axis_chart(ui: &mut egui::Ui, rows: &[OverviewRow], colors: &ThemeColors, height: f32) {
    let revenue: Vec<(f64, f64)> = rows.iter().map(|r| (r.year as f64, r.revenue)).collect();
    let satisfaction: Vec<(f64, f64)> = rows
        .iter()
        .filter_map(|r| r.satisfaction.map(|s| (r.year as f64, scale_satisfaction(s))))
        .collect();

    let all_y = revenue.iter().chain(&satisfaction).map(|&(_, y)| y);
    let (lo, hi) = extent(all_y).unwrap_or((0.0, 1.0));
    let y_domain = padded_range(lo, hi, 0.1);
    let (x_lo, x_hi) = extent(revenue.iter().map(|&(x, _)| x)).unwrap_or((0.0, 1.0));

    let (frame, _response, painter) = chart::allocate_chart(
        ui,
        height,
        ChartMargins::dual_axis(),
        (x_lo - 0.5, x_hi + 0.5),
        y_domain,
    );
    chart::draw_plot_background(&painter, &frame, colors);

    let ticks = nice_ticks(y_domain.0, y_domain.1, 6);
    chart::draw_y_axis(&painter, &frame, &ticks, |v| format!("${:.0}B", v), colors);
    chart::draw_secondary_y_axis(
        &painter,
        &frame,
        &ticks,
        |v| format!("{:.0}", unscale_satisfaction(v)),
        colors.series_secondary,
    );

    let labels: Vec<(f64, String)> = rows.iter().map(|r| (r.year as f64, r.year.to_string())).collect();
    chart::draw_x_axis(&painter, &frame, &labels, colors);

    chart::draw_line_series(&painter, &frame, &revenue, colors.series_primary, 2.0);
    chart::draw_point_series(&painter, &frame, &revenue, colors.series_primary, 4.0);
    chart::draw_line_series(&painter, &frame, &satisfaction, colors.series_secondary, 2.0);
    chart::draw_point_series(&painter, &frame, &satisfaction, colors.series_secondary, 4.0);

    chart::draw_legend(
        &painter,
        &frame,
        &[
            ("Revenue ($B)", colors.series_primary),
            ("Satisfaction (%, right axis)", colors.series_secondary),
        ],
        colors,
    );
}
