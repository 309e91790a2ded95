//! Centralized application state for the dashboard.
//!
//! State is split into focused components so each keeps its own invariants
//! and the borrow checker lets panels read one while writing another.

use crate::state::{LayoutState, StockState, ThemeState};
use unhdash::{DashboardConfig, SectionSync};

/// Main application state composed of focused state components.
pub struct AppState {
    /// Dropdown and tab strip selection
    pub sections: SectionSync,

    /// Price series for the stock panel
    pub stock: StockState,

    /// Theme and styling state
    pub theme: ThemeState,

    /// Table query and chart sizes
    pub layout: LayoutState,

    /// Persisted dashboard settings
    pub config: DashboardConfig,

    /// Current error message to display (if any)
    pub error_message: Option<String>,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

impl AppState {
    /// Creates a new application state with default values.
    pub fn new() -> Self {
        Self::with_settings(unhdash::theme::DEFAULT_THEME.to_string(), DashboardConfig::default())
    }

    /// Creates a new AppState from settings loaded from storage.
    ///
    /// The section always starts on Stock Impact.
    pub fn with_settings(theme_name: String, config: DashboardConfig) -> Self {
        let config = config.sanitized();
        Self {
            sections: SectionSync::new(),
            stock: StockState::new(),
            theme: ThemeState::with_theme(theme_name),
            layout: LayoutState::new(config.table_page_size),
            config,
            error_message: None,
        }
    }
}
