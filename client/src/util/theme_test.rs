use super::*;

#[test]
fn explicit_themes_ignore_system_preference() {
    assert!(!resolve(Theme::Light, true));
    assert!(resolve(Theme::Dark, false));
}

#[test]
fn system_theme_follows_preference() {
    assert!(resolve(Theme::System, true));
    assert!(!resolve(Theme::System, false));
}

#[test]
fn parse_round_trips_names() {
    for theme in Theme::ALL {
        assert_eq!(Theme::parse(theme.as_str()), Some(theme));
    }
    assert_eq!(Theme::parse("sepia"), None);
}

#[test]
fn default_is_system() {
    assert_eq!(Theme::default(), Theme::System);
}

#[cfg(not(feature = "csr"))]
#[test]
fn apply_is_callable_without_browser() {
    apply(Theme::Dark);
    apply(Theme::System);
}
