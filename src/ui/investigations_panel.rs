//! Investigation timeline panel.

use eframe::egui;
use egui::{Align2, RichText};
use unhdash::{investigation_events, EventMarker, ThemeColors};

use crate::domain::chart_geometry::{padded_range, spaced_label_indices};
use crate::rendering::chart::{self, ChartMargins};
use crate::utils::format_short_date;

const TIMELINE_HEIGHT: f32 = 220.0;
/// Y of the single row the events sit on
const TIMELINE_ROW: f64 = 1.0;
const MARKER_RADIUS: f32 = 6.0;
/// Room reserved for one "Apr 16" style axis label, in pixels
const AXIS_LABEL_WIDTH: f32 = 48.0;

/// Renders the events as unconnected points on a date axis.
pub fn render_investigations_panel(ui: &mut egui::Ui, colors: &ThemeColors) {
    let events = investigation_events();
    ui.label(RichText::new("Investigation timeline").strong());
    ui.add_space(4.0);

    if !events.is_empty() {
        render_timeline(ui, events, colors);
    }

    ui.add_space(8.0);
    egui::Grid::new("investigation_events")
        .num_columns(2)
        .spacing([16.0, 4.0])
        .striped(true)
        .show(ui, |ui| {
            for event in events {
                ui.label(RichText::new(event.date.format("%Y-%m-%d").to_string()).monospace());
                ui.label(event.description);
                ui.end_row();
            }
        });
}

/// Data-space placement of the timeline: one point per event on a single
/// row, x in days since the first event.
#[derive(Debug, Clone, PartialEq)]
struct TimelineLayout {
    x_domain: (f64, f64),
    points: Vec<(f64, f64)>,
    /// Axis label for every event, before spacing is applied
    labels: Vec<(f64, String)>,
}

fn timeline_layout(events: &[EventMarker]) -> TimelineLayout {
    let first = events.first().map(|e| e.date);
    let xs: Vec<f64> = events
        .iter()
        .map(|e| first.map_or(0.0, |first| (e.date - first).num_days() as f64))
        .collect();
    let last_x = xs.last().copied().unwrap_or(0.0);

    TimelineLayout {
        x_domain: padded_range(0.0, last_x, 0.12),
        points: xs.iter().map(|&x| (x, TIMELINE_ROW)).collect(),
        labels: events
            .iter()
            .zip(&xs)
            .map(|(e, &x)| (x, format_short_date(e.date)))
            .collect(),
    }
}

fn render_timeline(ui: &mut egui::Ui, events: &[EventMarker], colors: &ThemeColors) {
    let layout = timeline_layout(events);

    let margins = ChartMargins {
        left: 16.0,
        right: 16.0,
        ..ChartMargins::default()
    };
    let (frame, _response, painter) =
        chart::allocate_chart(ui, TIMELINE_HEIGHT, margins, layout.x_domain, (0.0, 2.0 * TIMELINE_ROW));
    chart::draw_plot_background(&painter, &frame, colors);

    // Drop axis labels that would overlap the previous one
    let pixels_per_day = f64::from(frame.x_span_to_screen(1.0));
    let min_gap = if pixels_per_day > 0.0 {
        f64::from(AXIS_LABEL_WIDTH) / pixels_per_day
    } else {
        f64::INFINITY
    };
    let positions: Vec<f64> = layout.labels.iter().map(|(x, _)| *x).collect();
    let labels: Vec<(f64, String)> = spaced_label_indices(&positions, min_gap)
        .into_iter()
        .map(|index| layout.labels[index].clone())
        .collect();
    chart::draw_x_axis(&painter, &frame, &labels, colors);

    chart::draw_point_series(&painter, &frame, &layout.points, colors.event_marker, MARKER_RADIUS);

    // Alternate above/below so labels of adjacent days do not collide
    for (index, (event, &point)) in events.iter().zip(&layout.points).enumerate() {
        let (offset, anchor) = if index % 2 == 0 {
            (egui::vec2(0.0, -12.0), Align2::CENTER_BOTTOM)
        } else {
            (egui::vec2(0.0, 12.0), Align2::CENTER_TOP)
        };
        chart::draw_point_label(&painter, &frame, point, offset, anchor, event.description, colors.text);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use egui::epaint::Shape;
    use unhdash::theme::{ThemeManager, DEFAULT_THEME};

    #[test]
    fn test_layout_puts_events_on_one_row() {
        let layout = timeline_layout(investigation_events());

        let xs: Vec<f64> = layout.points.iter().map(|p| p.0).collect();
        assert_eq!(xs, vec![0.0, 62.0, 63.0]);
        assert!(layout.points.iter().all(|p| p.1 == TIMELINE_ROW));
        assert!(layout.x_domain.0 < 0.0 && layout.x_domain.1 > 63.0);
        assert_eq!(layout.labels[0].1, format_short_date(investigation_events()[0].date));
    }

    #[test]
    fn test_empty_layout() {
        let layout = timeline_layout(&[]);
        assert!(layout.points.is_empty());
        assert!(layout.labels.is_empty());
    }

    #[test]
    fn test_events_are_painted_as_unconnected_markers() {
        let colors = ThemeManager::new().theme_or_default(DEFAULT_THEME).colors.clone();
        let ctx = egui::Context::default();
        let input = || egui::RawInput {
            screen_rect: Some(egui::Rect::from_min_size(egui::Pos2::ZERO, egui::vec2(1000.0, 800.0))),
            ..Default::default()
        };
        let paint = |ctx: &egui::Context| {
            egui::CentralPanel::default().show(ctx, |ui| render_investigations_panel(ui, &colors));
        };
        // Second frame, once layout has settled
        let _ = ctx.run(input(), paint);
        let output = ctx.run(input(), paint);

        let markers = output
            .shapes
            .iter()
            .filter(|clipped| matches!(&clipped.shape, Shape::Circle(c) if c.fill == colors.event_marker))
            .count();
        assert_eq!(markers, investigation_events().len());

        // A polyline through the events would be a path of three or more points
        assert!(!output
            .shapes
            .iter()
            .any(|clipped| matches!(&clipped.shape, Shape::Path(path) if path.points.len() >= 3)));
    }
}
