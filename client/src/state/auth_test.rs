use super::*;
use crate::test_support::user;

#[test]
fn default_is_signed_out() {
    let state = AuthState::default();
    assert!(!state.is_logged_in());
    assert!(!state.loading);
    assert_eq!(state.username(), None);
}

#[test]
fn accessors_read_user() {
    let state = AuthState { user: Some(user("yi@example.com")), loading: false };
    assert!(state.is_logged_in());
    assert_eq!(state.username(), Some("yi"));
    assert_eq!(state.email(), Some("yi@example.com"));
}
