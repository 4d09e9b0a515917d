use std::sync::Arc;

use super::*;
use crate::state::session::TOKEN_KEY;
use crate::util::storage::MemoryStorage;

// =============================================================
// Loading
// =============================================================

#[test]
fn empty_storage_loads_defaults() {
    let storage = MemoryStorage::default();
    assert_eq!(Settings::load(&storage), Settings::default());
    assert_eq!(Settings::default().theme, Theme::System);
}

#[test]
fn only_literal_false_disables() {
    let storage = MemoryStorage::default();
    storage.set(NOTIFICATIONS_KEY, "false");
    storage.set(AUTO_UPDATE_KEY, "no");
    storage.set(AUTO_SAVE_KEY, "FALSE");
    let settings = Settings::load(&storage);
    assert!(!settings.notifications);
    assert!(settings.auto_update);
    assert!(settings.auto_save);
}

#[test]
fn unknown_theme_reads_as_system() {
    let storage = MemoryStorage::default();
    storage.set(THEME_KEY, "sepia");
    assert_eq!(Settings::load(&storage).theme, Theme::System);
    storage.set(THEME_KEY, "dark");
    assert_eq!(Settings::load(&storage).theme, Theme::Dark);
}

// =============================================================
// Writing
// =============================================================

#[test]
fn set_persists_single_key() {
    let storage = MemoryStorage::default();
    let mut settings = Settings::default();
    settings.set(Toggle::AutoSave, false, &storage);
    assert!(!settings.auto_save);
    assert_eq!(storage.get(AUTO_SAVE_KEY).as_deref(), Some("false"));
    assert_eq!(storage.get(NOTIFICATIONS_KEY), None);
}

#[test]
fn save_then_load_round_trips() {
    let storage = MemoryStorage::default();
    let settings = Settings { theme: Theme::Light, notifications: false, auto_update: true, auto_save: false };
    settings.save(&storage);
    assert_eq!(Settings::load(&storage), settings);
}

// =============================================================
// Export / import
// =============================================================

#[test]
fn export_uses_camel_case_keys() {
    let json = Settings::default().export_json().expect("export");
    let value: serde_json::Value = serde_json::from_str(&json).expect("json");
    assert_eq!(
        value,
        serde_json::json!({ "theme": "system", "notifications": true, "autoUpdate": true, "autoSave": true })
    );
}

#[test]
fn import_merges_partial_object() {
    let merged = Settings::default()
        .merge_json(r#"{ "theme": "dark", "autoSave": false, "extra": 1 }"#)
        .expect("merge");
    assert_eq!(merged.theme, Theme::Dark);
    assert!(!merged.auto_save);
    assert!(merged.notifications);
}

#[test]
fn import_rejects_malformed_file() {
    let err = Settings::default().merge_json("not json").expect_err("malformed");
    assert!(err.to_string().starts_with("invalid settings file"));
}

// =============================================================
// Storage usage and reset
// =============================================================

#[test]
fn usage_counts_keys_and_values() {
    let storage = MemoryStorage::default();
    storage.set("theme", "dark");
    assert_eq!(storage_usage(&storage), 9);
}

#[test]
fn usage_formats_two_decimals() {
    assert_eq!(format_usage(0), "0.00 MB");
    assert_eq!(format_usage(1024 * 1024 * 3 / 2), "1.50 MB");
}

#[test]
fn reset_signs_out_and_writes_defaults() {
    let storage = Arc::new(MemoryStorage::default());
    let session = Session::new(storage.clone());
    session.set_token("abc");
    storage.set("custom", "x");

    let settings = reset_app_data(&*storage, &session);
    assert_eq!(settings, Settings::default());
    assert_eq!(session.token(), None);
    assert_eq!(storage.get(TOKEN_KEY), None);
    assert_eq!(storage.get("custom"), None);
    assert_eq!(storage.get(THEME_KEY).as_deref(), Some("system"));
    assert_eq!(storage.get(AUTO_SAVE_KEY).as_deref(), Some("true"));
}
