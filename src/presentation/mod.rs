//! Presentation layer for visual styling and color mapping.
//!
//! This module contains presentation logic separated from the datasets:
//! - Bar and delta colors for charts
//! - Summary box fills

pub mod color_mapping;
