use super::*;

// =============================================================
// Defaults
// =============================================================

#[test]
fn ui_state_default_is_quiet() {
    let state = UiState::default();
    assert!(state.search_query.is_empty());
    assert!(!state.login_open);
    assert!(!state.profile_open);
    assert!(!state.sidebar_collapsed);
    assert_eq!(state.toast, None);
}

// =============================================================
// Toasts
// =============================================================

#[test]
fn show_toast_bumps_sequence() {
    let mut state = UiState::default();
    let first = state.show_toast("Logged in");
    let second = state.show_toast("Logged out");
    assert_eq!(second, first + 1);
    assert_eq!(state.toast.as_ref().map(|t| t.message.as_str()), Some("Logged out"));
}

#[test]
fn stale_hide_keeps_newer_toast() {
    let mut state = UiState::default();
    let old = state.show_toast("Logged in");
    let new = state.show_toast("Logged out");
    state.hide_toast(old);
    assert!(state.toast.is_some());
    state.hide_toast(new);
    assert!(state.toast.is_none());
}

#[test]
fn toast_durations() {
    assert_eq!(LOGIN_TOAST_MS, 3_000);
    assert_eq!(LOGOUT_TOAST_MS, 2_000);
    assert!(FAVORITE_TOAST_MS > LOGIN_TOAST_MS);
}
