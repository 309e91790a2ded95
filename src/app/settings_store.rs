//! Settings persistence.
//!
//! Every persisted value is stored as a JSON string in eframe's storage under
//! a fixed key. Missing or unreadable values fall back to a default, so a
//! corrupt settings file never blocks startup.

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};
use unhdash::theme::DEFAULT_THEME;
use unhdash::DashboardConfig;

/// Keys of the persisted settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SettingKey {
    /// Name of the selected theme
    Theme,
    /// The whole `DashboardConfig`
    Config,
}

impl SettingKey {
    pub fn as_str(self) -> &'static str {
        match self {
            SettingKey::Theme => "theme_preference",
            SettingKey::Config => "dashboard_config",
        }
    }
}

/// Typed access to eframe's persistent storage.
pub struct SettingsStore;

impl SettingsStore {
    /// Loads a setting, returning None if it is absent or invalid.
    pub fn try_load<T>(storage: Option<&dyn eframe::Storage>, key: SettingKey) -> Option<T>
    where
        T: for<'de> Deserialize<'de>,
    {
        let json_str = storage?.get_string(key.as_str())?;
        match serde_json::from_str(&json_str) {
            Ok(value) => Some(value),
            Err(e) => {
                warn!(key = key.as_str(), error = %e, "ignoring unreadable setting");
                None
            }
        }
    }

    /// Loads a setting with a custom default.
    pub fn load_or<T>(storage: Option<&dyn eframe::Storage>, key: SettingKey, default: T) -> T
    where
        T: for<'de> Deserialize<'de>,
    {
        Self::try_load(storage, key).unwrap_or(default)
    }

    /// Saves a setting and flushes storage.
    pub fn save<T>(storage: &mut dyn eframe::Storage, key: SettingKey, value: &T)
    where
        T: Serialize,
    {
        match serde_json::to_string(value) {
            Ok(json_str) => {
                storage.set_string(key.as_str(), json_str);
                storage.flush();
            }
            Err(e) => warn!(key = key.as_str(), error = %e, "failed to serialize setting"),
        }
    }

    /// Theme name and dashboard config, with defaults for anything missing.
    pub fn load_startup(storage: Option<&dyn eframe::Storage>) -> (String, DashboardConfig) {
        let theme = Self::load_or(storage, SettingKey::Theme, DEFAULT_THEME.to_string());
        let config = Self::load_or(storage, SettingKey::Config, DashboardConfig::default()).sanitized();
        debug!(theme = %theme, ticker = %config.ticker, days = config.lookback_days, "settings loaded");
        (theme, config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use eframe::Storage;
    use std::collections::HashMap;

    /// Simple mock storage for testing
    struct MockStorage {
        data: HashMap<String, String>,
    }

    impl MockStorage {
        fn new() -> Self {
            Self {
                data: HashMap::new(),
            }
        }
    }

    impl Storage for MockStorage {
        fn get_string(&self, key: &str) -> Option<String> {
            self.data.get(key).cloned()
        }

        fn set_string(&mut self, key: &str, value: String) {
            self.data.insert(key.to_string(), value);
        }

        fn flush(&mut self) {}
    }

    #[test]
    fn test_save_and_load_theme() {
        let mut storage = MockStorage::new();
        SettingsStore::save(&mut storage, SettingKey::Theme, &"Dracula".to_string());

        let loaded: Option<String> = SettingsStore::try_load(Some(&storage), SettingKey::Theme);
        assert_eq!(loaded.as_deref(), Some("Dracula"));
        assert!(storage.data.contains_key("theme_preference"));
    }

    #[test]
    fn test_missing_storage_gives_defaults() {
        let (theme, config) = SettingsStore::load_startup(None);
        assert_eq!(theme, "Dark");
        assert_eq!(config, DashboardConfig::default());
    }

    #[test]
    fn test_invalid_json_falls_back() {
        let mut storage = MockStorage::new();
        storage.set_string("dashboard_config", "{not json".to_string());

        let (_, config) = SettingsStore::load_startup(Some(&storage));
        assert_eq!(config, DashboardConfig::default());
    }

    #[test]
    fn test_config_round_trip_is_sanitized() {
        let mut storage = MockStorage::new();
        let config = DashboardConfig {
            ticker: "unh".to_string(),
            lookback_days: 60,
            ..DashboardConfig::default()
        };
        SettingsStore::save(&mut storage, SettingKey::Config, &config);

        let (_, loaded) = SettingsStore::load_startup(Some(&storage));
        assert_eq!(loaded.ticker, "UNH");
        assert_eq!(loaded.lookback_days, 60);
    }
}
