//! Literal datasets behind the dashboard panels.
//!
//! Every series here is fixed at compile time (or built once on first use for
//! the date-typed ones) and never mutated.

use chrono::NaiveDate;
use once_cell::sync::Lazy;
use serde::Serialize;

/// Ticker shown by the stock panel.
pub const TICKER: &str = "UNH";

/// Satisfaction is multiplied by this factor to share the revenue axis in the
/// overview chart. The secondary axis divides it back out.
pub const SATISFACTION_SCALE: f64 = 3.0;

/// Year drawn in the highlight color in the satisfaction bar chart.
pub const HIGHLIGHT_YEAR: i32 = 2023;

/// One row of the metrics table.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MetricRecord {
    pub id: u32,
    pub label: &'static str,
    pub value: f64,
}

/// A yearly observation used by the revenue and satisfaction charts.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct YearValue {
    pub year: i32,
    pub value: f64,
}

/// A dated event on the investigations timeline.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EventMarker {
    pub date: NaiveDate,
    pub description: &'static str,
}

/// A headline number shown in a summary box.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SummaryBox {
    pub title: &'static str,
    pub value: &'static str,
    pub subtitle: &'static str,
    pub icon: &'static str,
}

/// Row of the overview chart, joined on year.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct OverviewRow {
    pub year: i32,
    pub revenue: f64,
    /// Raw satisfaction score; `None` for years without a survey value.
    pub satisfaction: Option<f64>,
}

static METRICS: [MetricRecord; 5] = [
    MetricRecord { id: 1, label: "Revenue", value: 324.2 },
    MetricRecord { id: 2, label: "Profit", value: 22.4 },
    MetricRecord { id: 3, label: "Market Share", value: 15.0 },
    MetricRecord { id: 4, label: "Patient Satisfaction", value: 92.0 },
    MetricRecord { id: 5, label: "Membership Growth", value: 5.2 },
];

static REVENUE: [YearValue; 6] = [
    YearValue { year: 2018, value: 226.2 },
    YearValue { year: 2019, value: 240.1 },
    YearValue { year: 2020, value: 255.6 },
    YearValue { year: 2021, value: 287.6 },
    YearValue { year: 2022, value: 324.2 },
    YearValue { year: 2023, value: 360.0 },
];

static SATISFACTION: [YearValue; 5] = [
    YearValue { year: 2019, value: 88.0 },
    YearValue { year: 2020, value: 89.0 },
    YearValue { year: 2021, value: 90.0 },
    YearValue { year: 2022, value: 91.0 },
    YearValue { year: 2023, value: 92.0 },
];

static EVENTS: Lazy<Vec<EventMarker>> = Lazy::new(|| {
    [
        ((2025, 2, 13), "DOJ probe into Medicare billing reported"),
        ((2025, 4, 16), "Medicare Advantage cost pressure flagged"),
        ((2025, 4, 17), "Q1 miss and guidance cut, shares fall 22%"),
    ]
    .into_iter()
    .filter_map(|((y, m, d), description)| {
        NaiveDate::from_ymd_opt(y, m, d).map(|date| EventMarker { date, description })
    })
    .collect()
});

static ANALYSIS_SUMMARIES: [SummaryBox; 2] = [
    SummaryBox {
        title: "Revenue Growth",
        value: "7.2%",
        subtitle: "CAGR",
        icon: "📈",
    },
    SummaryBox {
        title: "Efficiency",
        value: "$1.8B",
        subtitle: "Operational Savings",
        icon: "💰",
    },
];

static OVERVIEW_SUMMARIES: [SummaryBox; 3] = [
    SummaryBox {
        title: "Revenue",
        value: "$360.0B",
        subtitle: "2023 total revenue",
        icon: "💵",
    },
    SummaryBox {
        title: "Growth",
        value: "11.0%",
        subtitle: "Year over year",
        icon: "📊",
    },
    SummaryBox {
        title: "Satisfaction",
        value: "92%",
        subtitle: "Patient satisfaction score",
        icon: "😊",
    },
];

/// The five metric records shown in the data table.
pub fn metrics() -> &'static [MetricRecord] {
    &METRICS
}

/// Revenue in billions of dollars, 2018-2023.
pub fn revenue_series() -> &'static [YearValue] {
    &REVENUE
}

/// Patient satisfaction score, 2019-2023.
pub fn satisfaction_series() -> &'static [YearValue] {
    &SATISFACTION
}

/// The three investigation events, in date order.
pub fn investigation_events() -> &'static [EventMarker] {
    &EVENTS
}

/// Summary boxes on the analysis panel.
pub fn analysis_summaries() -> &'static [SummaryBox] {
    &ANALYSIS_SUMMARIES
}

/// Summary boxes on the metrics overview panel.
pub fn overview_summaries() -> &'static [SummaryBox] {
    &OVERVIEW_SUMMARIES
}

/// Revenue and satisfaction joined on the revenue years.
pub fn overview_rows() -> Vec<OverviewRow> {
    REVENUE
        .iter()
        .map(|rev| OverviewRow {
            year: rev.year,
            revenue: rev.value,
            satisfaction: SATISFACTION
                .iter()
                .find(|s| s.year == rev.year)
                .map(|s| s.value),
        })
        .collect()
}

/// Maps a satisfaction score onto the primary (revenue) axis.
pub fn scale_satisfaction(score: f64) -> f64 {
    score * SATISFACTION_SCALE
}

/// Maps a primary-axis value back to a satisfaction score.
pub fn unscale_satisfaction(primary: f64) -> f64 {
    primary / SATISFACTION_SCALE
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_metrics_literals() {
        let got: Vec<(&str, f64)> = metrics().iter().map(|m| (m.label, m.value)).collect();
        assert_eq!(
            got,
            vec![
                ("Revenue", 324.2),
                ("Profit", 22.4),
                ("Market Share", 15.0),
                ("Patient Satisfaction", 92.0),
                ("Membership Growth", 5.2),
            ]
        );
    }

    #[test]
    fn test_events_are_dated_and_ordered() {
        let events = investigation_events();
        assert_eq!(events.len(), 3);
        assert!(events.windows(2).all(|w| w[0].date <= w[1].date));
    }

    #[test]
    fn test_overview_join() {
        let rows = overview_rows();
        assert_eq!(rows.len(), 6);
        assert_eq!(rows[0].year, 2018);
        assert_eq!(rows[0].satisfaction, None);
        assert_eq!(rows[5].satisfaction, Some(92.0));
    }

    #[test]
    fn test_satisfaction_scale_inverts() {
        assert_eq!(scale_satisfaction(90.0), 270.0);
        assert_eq!(unscale_satisfaction(270.0), 90.0);
    }
}
