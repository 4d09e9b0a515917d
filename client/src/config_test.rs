use std::collections::HashMap;

use super::*;

fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = pairs.iter().map(|(k, v)| ((*k).to_owned(), (*v).to_owned())).collect();
    move |key| map.get(key).cloned()
}

#[test]
fn empty_lookup_yields_defaults() {
    let config = AppConfig::from_lookup(lookup(&[]));
    assert_eq!(config, AppConfig::default());
    assert_eq!(config.images_dir, "/images");
    assert_eq!(config.admin_email, "yi@example.com");
    assert_eq!(config.chat_history_window, 5);
    assert_eq!(config.map_api_key, None);
}

#[test]
fn map_key_prefers_museum_var() {
    let config = AppConfig::from_lookup(lookup(&[("MUSEUM_MAP_KEY", "m"), ("VITE_AMAP_KEY", "v")]));
    assert_eq!(config.map_api_key.as_deref(), Some("m"));
}

#[test]
fn map_key_falls_back_to_vite_var() {
    let config = AppConfig::from_lookup(lookup(&[("MUSEUM_MAP_KEY", "  "), ("VITE_AMAP_KEY", "v")]));
    assert_eq!(config.map_api_key.as_deref(), Some("v"));
}

#[test]
fn overrides_are_applied() {
    let config = AppConfig::from_lookup(lookup(&[
        ("MUSEUM_IMAGES_DIR", "/assets/img/"),
        ("MUSEUM_ADMIN_EMAIL", "curator@museum.org"),
        ("MUSEUM_CHAT_WINDOW", "8"),
    ]));
    assert_eq!(config.images_dir, "/assets/img");
    assert_eq!(config.admin_email, "curator@museum.org");
    assert_eq!(config.chat_history_window, 8);
}

#[test]
fn bad_chat_window_uses_default() {
    let config = AppConfig::from_lookup(lookup(&[("MUSEUM_CHAT_WINDOW", "lots")]));
    assert_eq!(config.chat_history_window, DEFAULT_CHAT_HISTORY_WINDOW);
}

#[test]
fn is_admin_ignores_case_and_whitespace() {
    let config = AppConfig::default();
    assert!(config.is_admin("yi@example.com"));
    assert!(config.is_admin(" YI@example.com "));
    assert!(!config.is_admin("someone@example.com"));
}
