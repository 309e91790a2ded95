//! Theme management and persistence coordination.

use crate::app::{AppState, SettingKey, SettingsStore};
use tracing::info;

/// Coordinates theme management and persistence.
pub struct ThemeCoordinator;

impl ThemeCoordinator {
    /// Switches to `theme_name` if it exists.
    pub fn change_theme(state: &mut AppState, theme_name: String) {
        if state.theme.current_theme_name() == theme_name {
            return;
        }
        if state.theme.set_theme(theme_name) {
            info!(theme = state.theme.current_theme_name(), "theme changed");
        }
    }

    /// Saves current theme preference to persistent storage.
    pub fn save_theme_to_storage(storage: &mut dyn eframe::Storage, state: &AppState) {
        SettingsStore::save(
            storage,
            SettingKey::Theme,
            &state.theme.current_theme_name().to_string(),
        );
    }

    /// Applies the current theme to the egui context.
    ///
    /// Called every frame so a theme switch takes effect immediately.
    pub fn apply_current_theme(ctx: &egui::Context, state: &AppState) {
        let manager = state.theme.theme_manager();
        let theme = manager.theme_or_default(state.theme.current_theme_name());
        ctx.set_visuals(manager.visuals_for(theme));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_change_theme_ignores_unknown() {
        let mut state = AppState::new();
        ThemeCoordinator::change_theme(&mut state, "Solarized".to_string());
        assert_eq!(state.theme.current_theme_name(), "Dark");

        ThemeCoordinator::change_theme(&mut state, "Light".to_string());
        assert_eq!(state.theme.current_theme_name(), "Light");
    }
}
