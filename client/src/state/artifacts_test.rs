use super::*;
use crate::test_support::artifacts;

fn loaded(count: i64) -> ArtifactsState {
    let mut state = ArtifactsState::default();
    state.finish(Ok(artifacts(count)));
    state
}

// =============================================================
// Loading
// =============================================================

#[test]
fn finish_ok_replaces_items_and_clears_error() {
    let mut state = ArtifactsState::default();
    state.start_loading();
    assert!(state.loading);
    state.finish(Ok(artifacts(3)));
    assert!(!state.loading);
    assert_eq!(state.items.len(), 3);
    assert_eq!(state.error, None);
}

#[test]
fn finish_err_keeps_previous_items() {
    let mut state = loaded(2);
    state.start_loading();
    state.finish(Err("database is locked".to_owned()));
    assert_eq!(state.error.as_deref(), Some("database is locked"));
    assert_eq!(state.items.len(), 2);
}

// =============================================================
// Favorite echo
// =============================================================

#[test]
fn apply_favorite_touches_only_target() {
    let mut state = loaded(4);
    assert!(state.apply_favorite(3, true));
    let flags: Vec<bool> = state.items.iter().map(|a| a.is_favorite).collect();
    assert_eq!(flags, vec![false, false, true, false]);
}

#[test]
fn apply_favorite_unknown_id_changes_nothing() {
    let mut state = loaded(2);
    assert!(!state.apply_favorite(42, true));
    assert!(state.items.iter().all(|a| !a.is_favorite));
}

#[test]
fn unfavorite_in_favorites_removes_item() {
    let mut state = loaded(3);
    state.apply_favorite_in_favorites(2, false);
    let ids: Vec<i64> = state.items.iter().map(ArtifactWithFavorite::id).collect();
    assert_eq!(ids, vec![1, 3]);
}

// =============================================================
// Hot ranking and overflow
// =============================================================

#[test]
fn hot_ranking_takes_first_five() {
    let state = loaded(8);
    let ids: Vec<i64> = state.hot_ranking().iter().map(ArtifactWithFavorite::id).collect();
    assert_eq!(ids, vec![1, 2, 3, 4, 5]);
    assert_eq!(loaded(2).hot_ranking().len(), 2);
}

#[test]
fn rank_badges_distinguish_top_three() {
    assert_eq!(rank_badge(0).1, "🔥");
    assert_eq!(rank_badge(1).1, "⭐");
    assert_eq!(rank_badge(2).1, "✨");
    assert_eq!(rank_badge(3), rank_badge(4));
}

#[test]
fn has_more_only_past_twenty() {
    assert!(!loaded(20).has_more());
    assert!(loaded(21).has_more());
}

// =============================================================
// Empty states
// =============================================================

#[test]
fn favorites_empty_state_ignores_query() {
    let state = empty_state(Section::Favorites, "ding");
    assert_eq!(state.title, "You have not favorited any artifacts yet");
}

#[test]
fn search_empty_state_quotes_query() {
    let state = empty_state(Section::Home, " ding ");
    assert_eq!(state.title, "No artifacts matching \"ding\"");
    assert_eq!(state.hint, "Try a different keyword");
}

#[test]
fn no_data_empty_state() {
    assert_eq!(empty_state(Section::Browsing, "").title, "No artifacts available");
}

// =============================================================
// Stale replies
// =============================================================

#[test]
fn gallery_request_matches_same_query_and_user() {
    let request = GalleryRequest::new("bronze", Some(4));
    assert!(request.is_current("bronze", Some(4)));
    assert!(!request.is_current("jade", Some(4)));
}

#[test]
fn signed_in_reply_is_stale_after_logout() {
    let request = GalleryRequest::new("bronze", Some(4));
    assert!(!request.is_current("bronze", None));
    assert!(!request.is_current("bronze", Some(5)));
}

#[test]
fn anonymous_reply_is_stale_after_login() {
    let request = GalleryRequest::new("", None);
    assert!(request.is_current("", None));
    assert!(!request.is_current("", Some(1)));
}

// =============================================================
// Favorite failures
// =============================================================

#[test]
fn remote_favorite_failure_becomes_toast_text() {
    let err = ApiError::Remote { command: catalog::Command::ToggleFavorite, message: "artifact not found".to_owned() };
    assert_eq!(
        favorite_failure_message(&err).as_deref(),
        Some("Could not update favorite: artifact not found")
    );
}

#[test]
fn missing_session_needs_no_toast() {
    assert_eq!(favorite_failure_message(&ApiError::NotLoggedIn), None);
}
