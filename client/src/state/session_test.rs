use std::sync::atomic::{AtomicBool, Ordering};

use super::*;
use crate::util::storage::MemoryStorage;

fn storage() -> Arc<MemoryStorage> {
    Arc::new(MemoryStorage::default())
}

// =============================================================
// Token lifecycle
// =============================================================

#[test]
fn new_session_has_no_token() {
    let session = Session::new(storage());
    assert_eq!(session.token(), None);
    assert!(!session.is_logged_in());
}

#[test]
fn set_token_writes_memory_and_storage() {
    let store = storage();
    let session = Session::new(store.clone());
    session.set_token("abc");
    assert_eq!(session.token().as_deref(), Some("abc"));
    assert_eq!(store.get(TOKEN_KEY).as_deref(), Some("abc"));
}

#[test]
fn fresh_session_rehydrates_from_storage() {
    let store = storage();
    Session::new(store.clone()).set_token("abc");

    let restarted = Session::new(store);
    assert_eq!(restarted.token().as_deref(), Some("abc"));
    assert!(restarted.is_logged_in());
}

#[test]
fn clear_token_erases_both_copies() {
    let store = storage();
    let session = Session::new(store.clone());
    session.set_token("abc");
    session.clear_token();
    assert_eq!(session.token(), None);
    assert_eq!(store.get(TOKEN_KEY), None);
}

#[test]
fn clones_share_one_slot() {
    let session = Session::new(storage());
    let other = session.clone();
    session.set_token("abc");
    assert_eq!(other.token().as_deref(), Some("abc"));
    other.clear_token();
    assert_eq!(session.token(), None);
}

// =============================================================
// Unauthorized hook
// =============================================================

#[test]
fn notify_without_hook_is_harmless() {
    let session = Session::new(storage());
    session.notify_unauthorized();
}

#[test]
fn hook_can_touch_session() {
    let session = Session::new(storage());
    session.set_token("stale");
    let fired = Arc::new(AtomicBool::new(false));
    let flag = fired.clone();
    let inner = session.clone();
    session.set_on_unauthorized(move || {
        inner.clear_token();
        flag.store(true, Ordering::SeqCst);
    });

    session.notify_unauthorized();
    assert!(fired.load(Ordering::SeqCst));
    assert_eq!(session.token(), None);
}
