//! Utility modules for the dashboard.

pub mod formatting;

// Re-export commonly used functions
pub use formatting::{
    format_billions, format_memory_mb, format_metric_value, format_percent_change,
    format_price, format_short_date, get_current_memory_mb,
};
