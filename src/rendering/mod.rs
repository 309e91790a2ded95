//! Rendering subsystem for drawing dashboard charts
//!
//! - Chart frame (data-to-screen mapping)
//! - Axes, grid lines and legends
//! - Line, point and bar series
//! - Hover readouts

pub mod chart;
