//! UI layout state management.
//!
//! Holds the view state that outlives a single frame: the metrics table
//! query and the chart heights.

use crate::domain::table_query::TableQuery;

const DEFAULT_CHART_HEIGHT: f32 = 320.0;

/// State related to UI layout and table views.
#[derive(Debug, Clone)]
pub struct LayoutState {
    /// Filter, sort and page of the metrics table
    metrics_table: TableQuery,
    /// Height of full-width charts in pixels
    chart_height: f32,
}

impl Default for LayoutState {
    fn default() -> Self {
        Self::new(5)
    }
}

impl LayoutState {
    pub fn new(table_page_size: usize) -> Self {
        Self {
            metrics_table: TableQuery::new(table_page_size),
            chart_height: DEFAULT_CHART_HEIGHT,
        }
    }

    pub fn metrics_table(&self) -> &TableQuery {
        &self.metrics_table
    }

    pub fn metrics_table_mut(&mut self) -> &mut TableQuery {
        &mut self.metrics_table
    }

    pub fn chart_height(&self) -> f32 {
        self.chart_height
    }

    /// Grows charts with the window, within sensible bounds.
    pub fn fit_chart_height(&mut self, available_height: f32) {
        self.chart_height = (available_height * 0.6).clamp(220.0, 520.0);
    }
}
