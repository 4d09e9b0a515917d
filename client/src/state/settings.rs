//! User preferences persisted as plain strings in durable storage.
//!
//! DESIGN
//! ======
//! Each preference has its own key (`theme`, `notifications`, `autoUpdate`,
//! `autoSave`). Booleans are stored as `"true"`/`"false"`; a missing key or
//! any value other than `"false"` reads as enabled. Export/import use the
//! same camelCase names as JSON.

#[cfg(test)]
#[path = "settings_test.rs"]
mod settings_test;

use serde::{Deserialize, Serialize};

use super::session::Session;
use crate::util::storage::Storage;
use crate::util::theme::Theme;

pub const THEME_KEY: &str = "theme";
pub const NOTIFICATIONS_KEY: &str = "notifications";
pub const AUTO_UPDATE_KEY: &str = "autoUpdate";
pub const AUTO_SAVE_KEY: &str = "autoSave";

/// Filename offered when exporting settings.
pub const EXPORT_FILENAME: &str = "settings-backup.json";

#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    #[error("invalid settings file: {0}")]
    Parse(#[from] serde_json::Error),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Settings {
    pub theme: Theme,
    pub notifications: bool,
    pub auto_update: bool,
    pub auto_save: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self { theme: Theme::System, notifications: true, auto_update: true, auto_save: true }
    }
}

/// A single boolean preference.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Toggle {
    Notifications,
    AutoUpdate,
    AutoSave,
}

impl Toggle {
    pub const ALL: [Self; 3] = [Self::Notifications, Self::AutoUpdate, Self::AutoSave];

    pub fn key(self) -> &'static str {
        match self {
            Self::Notifications => NOTIFICATIONS_KEY,
            Self::AutoUpdate => AUTO_UPDATE_KEY,
            Self::AutoSave => AUTO_SAVE_KEY,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Notifications => "Notifications",
            Self::AutoUpdate => "Automatic updates",
            Self::AutoSave => "Auto-save",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            Self::Notifications => "Show notices about new exhibitions and updates",
            Self::AutoUpdate => "Check for new versions in the background",
            Self::AutoSave => "Remember your browsing position",
        }
    }
}

/// Partial settings read from an imported file.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SettingsPatch {
    theme: Option<Theme>,
    notifications: Option<bool>,
    auto_update: Option<bool>,
    auto_save: Option<bool>,
}

fn read_flag(storage: &dyn Storage, key: &str) -> bool {
    storage.get(key).is_none_or(|v| v != "false")
}

impl Settings {
    pub fn load(storage: &dyn Storage) -> Self {
        let theme = storage.get(THEME_KEY).and_then(|raw| Theme::parse(&raw)).unwrap_or_default();
        Self {
            theme,
            notifications: read_flag(storage, NOTIFICATIONS_KEY),
            auto_update: read_flag(storage, AUTO_UPDATE_KEY),
            auto_save: read_flag(storage, AUTO_SAVE_KEY),
        }
    }

    pub fn save(&self, storage: &dyn Storage) {
        storage.set(THEME_KEY, self.theme.as_str());
        for toggle in Toggle::ALL {
            storage.set(toggle.key(), if self.get(toggle) { "true" } else { "false" });
        }
    }

    pub fn get(&self, toggle: Toggle) -> bool {
        match toggle {
            Toggle::Notifications => self.notifications,
            Toggle::AutoUpdate => self.auto_update,
            Toggle::AutoSave => self.auto_save,
        }
    }

    /// Update one toggle and persist only that key.
    pub fn set(&mut self, toggle: Toggle, value: bool, storage: &dyn Storage) {
        match toggle {
            Toggle::Notifications => self.notifications = value,
            Toggle::AutoUpdate => self.auto_update = value,
            Toggle::AutoSave => self.auto_save = value,
        }
        storage.set(toggle.key(), if value { "true" } else { "false" });
    }

    pub fn set_theme(&mut self, theme: Theme, storage: &dyn Storage) {
        self.theme = theme;
        storage.set(THEME_KEY, theme.as_str());
    }

    /// Pretty JSON for the export download.
    ///
    /// # Errors
    ///
    /// Only if serialization fails, which plain fields never do in practice.
    pub fn export_json(&self) -> Result<String, SettingsError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Merge an imported JSON object over `self`. Unknown keys are ignored
    /// and absent keys keep their current value.
    ///
    /// # Errors
    ///
    /// [`SettingsError::Parse`] when `raw` is not a settings object.
    pub fn merge_json(&self, raw: &str) -> Result<Self, SettingsError> {
        let patch: SettingsPatch = serde_json::from_str(raw)?;
        Ok(Self {
            theme: patch.theme.unwrap_or(self.theme),
            notifications: patch.notifications.unwrap_or(self.notifications),
            auto_update: patch.auto_update.unwrap_or(self.auto_update),
            auto_save: patch.auto_save.unwrap_or(self.auto_save),
        })
    }
}

/// Approximate bytes used by durable storage: key plus value lengths in
/// UTF-16 code units, as the webview counts them.
pub fn storage_usage(storage: &dyn Storage) -> usize {
    storage
        .entries()
        .iter()
        .map(|(k, v)| k.encode_utf16().count() + v.encode_utf16().count())
        .sum()
}

#[allow(clippy::cast_precision_loss)]
pub fn format_usage(units: usize) -> String {
    format!("{:.2} MB", units as f64 / 1024.0 / 1024.0)
}

/// Wipe durable storage (signing the user out) and write default settings.
pub fn reset_app_data(storage: &dyn Storage, session: &Session) -> Settings {
    storage.clear();
    session.clear_token();
    let defaults = Settings::default();
    defaults.save(storage);
    defaults
}
