//! Painter-based chart primitives
//!
//! Every chart on the dashboard is drawn from these pieces: a [`ChartFrame`]
//! maps data coordinates into a plot rectangle, and the `draw_*` functions
//! paint axes, series and overlays into it.

use eframe::egui;
use egui::{Color32, Pos2, Rect, Stroke};
use unhdash::{with_alpha, ThemeColors};

use crate::domain::chart_geometry::{map_linear, unmap_linear};

const AXIS_FONT_SIZE: f32 = 11.0;
const LABEL_FONT_SIZE: f32 = 12.0;

/// Space around the plot area for axis labels.
#[derive(Debug, Clone, Copy)]
pub struct ChartMargins {
    pub left: f32,
    pub right: f32,
    pub top: f32,
    pub bottom: f32,
}

impl Default for ChartMargins {
    fn default() -> Self {
        Self {
            left: 56.0,
            right: 16.0,
            top: 28.0,
            bottom: 28.0,
        }
    }
}

impl ChartMargins {
    /// Margins with room for a secondary axis on the right.
    pub fn dual_axis() -> Self {
        Self {
            right: 48.0,
            ..Self::default()
        }
    }
}

/// Maps data coordinates into the plot rectangle.
#[derive(Debug, Clone, Copy)]
pub struct ChartFrame {
    plot: Rect,
    x_domain: (f64, f64),
    y_domain: (f64, f64),
}

impl ChartFrame {
    pub fn new(outer: Rect, margins: ChartMargins, x_domain: (f64, f64), y_domain: (f64, f64)) -> Self {
        let plot = Rect::from_min_max(
            egui::pos2(outer.left() + margins.left, outer.top() + margins.top),
            egui::pos2(
                (outer.right() - margins.right).max(outer.left() + margins.left + 1.0),
                (outer.bottom() - margins.bottom).max(outer.top() + margins.top + 1.0),
            ),
        );
        Self {
            plot,
            x_domain,
            y_domain,
        }
    }

    pub fn plot_rect(&self) -> Rect {
        self.plot
    }

    pub fn x_to_screen(&self, x: f64) -> f32 {
        map_linear(x, self.x_domain, (self.plot.left(), self.plot.right()))
    }

    pub fn y_to_screen(&self, y: f64) -> f32 {
        // Screen y grows downward
        map_linear(y, self.y_domain, (self.plot.bottom(), self.plot.top()))
    }

    pub fn to_screen(&self, x: f64, y: f64) -> Pos2 {
        egui::pos2(self.x_to_screen(x), self.y_to_screen(y))
    }

    pub fn x_from_screen(&self, px: f32) -> f64 {
        unmap_linear(px, self.x_domain, (self.plot.left(), self.plot.right()))
    }

    /// Screen width of `dx` data units along x.
    pub fn x_span_to_screen(&self, dx: f64) -> f32 {
        (self.x_to_screen(self.x_domain.0 + dx) - self.x_to_screen(self.x_domain.0)).abs()
    }
}

/// Allocates `height` pixels across the available width and builds a frame.
///
/// Returns the frame, the hover response for the whole chart area, and a
/// painter clipped to it.
pub fn allocate_chart(
    ui: &mut egui::Ui,
    height: f32,
    margins: ChartMargins,
    x_domain: (f64, f64),
    y_domain: (f64, f64),
) -> (ChartFrame, egui::Response, egui::Painter) {
    let (outer, response) = ui.allocate_exact_size(
        egui::vec2(ui.available_width(), height),
        egui::Sense::hover(),
    );
    let painter = ui.painter_at(outer);
    (ChartFrame::new(outer, margins, x_domain, y_domain), response, painter)
}

pub fn draw_plot_background(painter: &egui::Painter, frame: &ChartFrame, colors: &ThemeColors) {
    painter.rect_filled(frame.plot_rect(), 2.0, colors.plot_background);
}

/// Horizontal grid lines with labels on the left edge.
pub fn draw_y_axis(
    painter: &egui::Painter,
    frame: &ChartFrame,
    ticks: &[f64],
    format: impl Fn(f64) -> String,
    colors: &ThemeColors,
) {
    let plot = frame.plot_rect();
    for &tick in ticks {
        let y = frame.y_to_screen(tick);
        painter.line_segment(
            [egui::pos2(plot.left(), y), egui::pos2(plot.right(), y)],
            Stroke::new(1.0, colors.grid),
        );
        painter.text(
            egui::pos2(plot.left() - 6.0, y),
            egui::Align2::RIGHT_CENTER,
            format(tick),
            egui::FontId::proportional(AXIS_FONT_SIZE),
            colors.axis,
        );
    }
    painter.line_segment(
        [plot.left_top(), plot.left_bottom()],
        Stroke::new(1.0, colors.axis),
    );
}

/// Labels on the right edge at the primary tick positions.
///
/// `format` receives the primary-axis value; it is responsible for any
/// conversion to secondary units.
pub fn draw_secondary_y_axis(
    painter: &egui::Painter,
    frame: &ChartFrame,
    ticks: &[f64],
    format: impl Fn(f64) -> String,
    color: Color32,
) {
    let plot = frame.plot_rect();
    for &tick in ticks {
        let y = frame.y_to_screen(tick);
        painter.line_segment(
            [egui::pos2(plot.right(), y), egui::pos2(plot.right() + 4.0, y)],
            Stroke::new(1.0, color),
        );
        painter.text(
            egui::pos2(plot.right() + 6.0, y),
            egui::Align2::LEFT_CENTER,
            format(tick),
            egui::FontId::proportional(AXIS_FONT_SIZE),
            color,
        );
    }
    painter.line_segment(
        [plot.right_top(), plot.right_bottom()],
        Stroke::new(1.0, color),
    );
}

/// Tick marks and labels along the bottom edge.
pub fn draw_x_axis(painter: &egui::Painter, frame: &ChartFrame, labels: &[(f64, String)], colors: &ThemeColors) {
    let plot = frame.plot_rect();
    painter.line_segment(
        [plot.left_bottom(), plot.right_bottom()],
        Stroke::new(1.0, colors.axis),
    );

    for (x, label) in labels {
        let px = frame.x_to_screen(*x);
        painter.line_segment(
            [egui::pos2(px, plot.bottom()), egui::pos2(px, plot.bottom() + 4.0)],
            Stroke::new(1.0, colors.axis),
        );
        painter.text(
            egui::pos2(px, plot.bottom() + 6.0),
            egui::Align2::CENTER_TOP,
            label,
            egui::FontId::proportional(AXIS_FONT_SIZE),
            colors.axis,
        );
    }
}

/// Connected polyline through `points` (data coordinates).
pub fn draw_line_series(
    painter: &egui::Painter,
    frame: &ChartFrame,
    points: &[(f64, f64)],
    color: Color32,
    width: f32,
) {
    if points.len() < 2 {
        return;
    }
    let screen: Vec<Pos2> = points.iter().map(|&(x, y)| frame.to_screen(x, y)).collect();
    painter.add(egui::Shape::line(screen, Stroke::new(width, color)));
}

/// Unconnected markers at `points`.
pub fn draw_point_series(
    painter: &egui::Painter,
    frame: &ChartFrame,
    points: &[(f64, f64)],
    color: Color32,
    radius: f32,
) {
    for &(x, y) in points {
        painter.circle_filled(frame.to_screen(x, y), radius, color);
    }
}

/// A single vertical bar.
#[derive(Debug, Clone, Copy)]
pub struct Bar {
    pub x: f64,
    pub value: f64,
    pub color: Color32,
}

/// Vertical bars centered on their x, `width` in data units, rising from `baseline`.
pub fn draw_bar_series(painter: &egui::Painter, frame: &ChartFrame, bars: &[Bar], width: f64, baseline: f64) {
    let half = frame.x_span_to_screen(width) / 2.0;
    for bar in bars {
        let cx = frame.x_to_screen(bar.x);
        let top = frame.y_to_screen(bar.value);
        let bottom = frame.y_to_screen(baseline);
        let rect = Rect::from_min_max(
            egui::pos2(cx - half, top.min(bottom)),
            egui::pos2(cx + half, top.max(bottom)),
        );
        painter.rect_filled(rect, 2.0, bar.color);
    }
}

/// Text placed next to a data point, shifted by `offset` pixels.
pub fn draw_point_label(
    painter: &egui::Painter,
    frame: &ChartFrame,
    (x, y): (f64, f64),
    offset: egui::Vec2,
    anchor: egui::Align2,
    text: &str,
    color: Color32,
) {
    painter.text(
        frame.to_screen(x, y) + offset,
        anchor,
        text,
        egui::FontId::proportional(LABEL_FONT_SIZE),
        color,
    );
}

/// Swatch + name pairs in the top-left corner above the plot.
pub fn draw_legend(painter: &egui::Painter, frame: &ChartFrame, entries: &[(&str, Color32)], colors: &ThemeColors) {
    let plot = frame.plot_rect();
    let mut x = plot.left();
    let y = plot.top() - 14.0;
    let font = egui::FontId::proportional(AXIS_FONT_SIZE);

    for (name, color) in entries {
        let swatch = Rect::from_center_size(egui::pos2(x + 6.0, y), egui::vec2(12.0, 4.0));
        painter.rect_filled(swatch, 1.0, *color);
        let text_rect = painter.text(
            egui::pos2(x + 16.0, y),
            egui::Align2::LEFT_CENTER,
            name,
            font.clone(),
            colors.text,
        );
        x = text_rect.right() + 14.0;
    }
}

/// Vertical guide line at `x` with a boxed readout next to the point.
pub fn draw_hover_readout(
    painter: &egui::Painter,
    frame: &ChartFrame,
    (x, y): (f64, f64),
    text: String,
    marker_color: Color32,
    colors: &ThemeColors,
) {
    let plot = frame.plot_rect();
    let point = frame.to_screen(x, y);

    painter.line_segment(
        [egui::pos2(point.x, plot.top()), egui::pos2(point.x, plot.bottom())],
        Stroke::new(1.0, with_alpha(colors.axis, 120)),
    );
    painter.circle_stroke(point, 5.0, Stroke::new(2.0, marker_color));

    let galley = painter.layout_no_wrap(text, egui::FontId::proportional(LABEL_FONT_SIZE), colors.text);
    let size = galley.size() + egui::vec2(10.0, 6.0);

    // Keep the box inside the plot: flip to the left near the right edge
    let mut min = point + egui::vec2(10.0, -size.y - 6.0);
    if min.x + size.x > plot.right() {
        min.x = point.x - size.x - 10.0;
    }
    min.y = min.y.max(plot.top());

    let rect = Rect::from_min_size(min, size);
    painter.rect_filled(rect, 3.0, colors.extreme_background);
    painter.rect_stroke(rect, 3.0, Stroke::new(1.0, colors.border), egui::StrokeKind::Inside);
    painter.galley(rect.min + egui::vec2(5.0, 3.0), galley, colors.text);
}
