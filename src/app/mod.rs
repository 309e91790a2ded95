//! Application-level modules for the dashboard.
//!
//! This module contains the coordinators and centralized state management.

mod app_state;
mod application_coordinator;
mod theme_coordinator;
mod settings_store;

pub use app_state::AppState;
pub use application_coordinator::ApplicationCoordinator;
pub use theme_coordinator::ThemeCoordinator;
pub use settings_store::{SettingKey, SettingsStore};
