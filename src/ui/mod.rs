//! UI panel rendering subsystem
//!
//! - Header panel (title, section dropdown, data source buttons, theme selector)
//! - Tab strip (one tab per section)
//! - One panel per section, only the active one is rendered
//! - Status bar (memory, section, loaded series)
//! - Panel manager (panel orchestration and layout)

pub mod header;
pub mod tab_strip;
pub mod summary_box;
pub mod stock_panel;
pub mod investigations_panel;
pub mod data_panel;
pub mod analysis_panel;
pub mod overview_panel;
pub mod status_bar;
pub mod panel_manager;
