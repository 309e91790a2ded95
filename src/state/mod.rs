//! State management modules for the dashboard.
//!
//! This module contains state-only logic (no UI concerns):
//! - Stock state (fetch status of the price series)
//! - Theme state (theme manager, current theme)
//! - Layout state (metrics table query)
//!
//! Section selection lives in the library (`unhdash::SectionSync`) since it
//! has no egui dependency.

mod stock_state;
mod theme_state;
mod layout_state;

pub use stock_state::{StockState, StockStatus};
pub use theme_state::ThemeState;
pub use layout_state::LayoutState;
