//! Text formatting utilities for the dashboard.
//!
//! This module provides helper functions for formatting values in a human-readable way.

use chrono::NaiveDate;
use sysinfo::{Pid, ProcessRefreshKind, RefreshKind, System};

/// Formats a share price.
///
/// # Examples
/// ```ignore
/// assert_eq!(format_price(512.345), "$512.35");
/// ```
pub fn format_price(price: f64) -> String {
    format!("${:.2}", price)
}

/// Formats a percent change with an explicit sign.
///
/// # Examples
/// ```ignore
/// assert_eq!(format_percent_change(3.14159), "+3.14%");
/// assert_eq!(format_percent_change(-0.5), "-0.50%");
/// ```
pub fn format_percent_change(percent: f64) -> String {
    format!("{:+.2}%", percent)
}

/// Formats a value in billions of dollars.
pub fn format_billions(value: f64) -> String {
    format!("${:.1}B", value)
}

/// Formats a metric table value with one decimal.
pub fn format_metric_value(value: f64) -> String {
    format!("{:.1}", value)
}

/// Short axis label for a date, e.g. "Apr 17".
pub fn format_short_date(date: NaiveDate) -> String {
    date.format("%b %d").to_string()
}

/// Gets the current process memory usage in megabytes.
///
/// Returns 0.0 if the process information cannot be retrieved.
pub fn get_current_memory_mb() -> f64 {
    let mut sys = System::new_with_specifics(
        RefreshKind::new().with_processes(ProcessRefreshKind::new().with_memory())
    );
    sys.refresh_processes_specifics(ProcessRefreshKind::new().with_memory());

    sys.process(Pid::from_u32(std::process::id()))
        .map(|process| process.memory() as f64 / (1024.0 * 1024.0))
        .unwrap_or(0.0)
}

/// Formats memory usage in MB as a human-readable string.
pub fn format_memory_mb(memory_mb: f64) -> String {
    if memory_mb > 1024.0 {
        format!("Memory: {:.2} GB", memory_mb / 1024.0)
    } else {
        format!("Memory: {:.1} MB", memory_mb)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_price_and_change() {
        assert_eq!(format_price(512.345), "$512.35");
        assert_eq!(format_percent_change(3.14159), "+3.14%");
        assert_eq!(format_percent_change(-0.5), "-0.50%");
    }

    #[test]
    fn test_billions_and_metric() {
        assert_eq!(format_billions(324.2), "$324.2B");
        assert_eq!(format_metric_value(15.0), "15.0");
    }

    #[test]
    fn test_short_date() {
        let date = NaiveDate::from_ymd_opt(2025, 4, 17).unwrap();
        assert_eq!(format_short_date(date), "Apr 17");
    }

    #[test]
    fn test_memory_format() {
        assert_eq!(format_memory_mb(512.5), "Memory: 512.5 MB");
        assert_eq!(format_memory_mb(2048.0), "Memory: 2.00 GB");
    }
}
