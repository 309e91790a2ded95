//! Domain logic modules for the dashboard.
//!
//! This module contains pure, UI-free logic:
//! - Chart coordinate math (value mapping, ticks, ranges)
//! - Metrics table query (filter, sort, pagination)

pub mod chart_geometry;
pub mod table_query;
