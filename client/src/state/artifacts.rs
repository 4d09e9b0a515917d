//! Artifact list state shared by the gallery and favorites pages.
//!
//! SYSTEM CONTEXT
//! ==============
//! Each page fetches its own list through `MuseumApi::get_artifacts` and
//! keeps it here. The favorite flag is never computed locally; the only
//! local write is echoing the value an acknowledged `toggle_favorite`
//! returned.

#[cfg(test)]
#[path = "artifacts_test.rs"]
mod artifacts_test;

use catalog::ArtifactWithFavorite;

use crate::net::ApiError;

/// What a gallery fetch was issued for. The reply is applied only while the
/// page still shows the same query to the same user, since favorite flags
/// belong to the session that asked.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GalleryRequest {
    pub query: String,
    pub user_id: Option<i64>,
}

impl GalleryRequest {
    pub fn new(query: impl Into<String>, user_id: Option<i64>) -> Self {
        Self { query: query.into(), user_id }
    }

    pub fn is_current(&self, query: &str, user_id: Option<i64>) -> bool {
        self.query == query && self.user_id == user_id
    }
}

/// Toast text for a failed favorite toggle. `None` for a missing session:
/// the sign-in dialog is already open.
pub fn favorite_failure_message(err: &ApiError) -> Option<String> {
    if err.is_not_logged_in() {
        return None;
    }
    Some(format!("Could not update favorite: {err}"))
}

/// Entries shown in the gallery's hot ranking.
pub const HOT_RANKING_LEN: usize = 5;

#[derive(Clone, Debug, Default)]
pub struct ArtifactsState {
    pub items: Vec<ArtifactWithFavorite>,
    pub loading: bool,
    pub error: Option<String>,
}

impl ArtifactsState {
    pub fn start_loading(&mut self) {
        self.loading = true;
        self.error = None;
    }

    pub fn finish(&mut self, result: Result<Vec<ArtifactWithFavorite>, String>) {
        self.loading = false;
        match result {
            Ok(items) => {
                self.items = items;
                self.error = None;
            }
            Err(message) => self.error = Some(message),
        }
    }

    /// Echo an acknowledged favorite toggle onto the matching artifact.
    /// Returns whether any item matched.
    pub fn apply_favorite(&mut self, id: i64, is_favorite: bool) -> bool {
        let mut found = false;
        for item in self.items.iter_mut().filter(|a| a.id() == id) {
            item.is_favorite = is_favorite;
            found = true;
        }
        found
    }

    /// Favorites view: an un-favorited artifact leaves the list.
    pub fn apply_favorite_in_favorites(&mut self, id: i64, is_favorite: bool) {
        if is_favorite {
            self.apply_favorite(id, true);
        } else {
            self.items.retain(|a| a.id() != id);
        }
    }

    pub fn find(&self, id: i64) -> Option<&ArtifactWithFavorite> {
        self.items.iter().find(|a| a.id() == id)
    }

    pub fn hot_ranking(&self) -> &[ArtifactWithFavorite] {
        &self.items[..self.items.len().min(HOT_RANKING_LEN)]
    }

    /// More artifacts loaded than the gallery grid places.
    pub fn has_more(&self) -> bool {
        catalog::layout::has_overflow(self.items.len())
    }
}

/// Badge style and marker for a zero-based hot-ranking position.
pub fn rank_badge(rank: usize) -> (&'static str, &'static str) {
    match rank {
        0 => ("rank-badge rank-badge--gold", "🔥"),
        1 => ("rank-badge rank-badge--silver", "⭐"),
        2 => ("rank-badge rank-badge--bronze", "✨"),
        _ => ("rank-badge", "↑"),
    }
}

/// Which listing an empty state belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Section {
    Home,
    Favorites,
    Browsing,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EmptyState {
    pub title: String,
    pub hint: &'static str,
}

/// Copy for an empty listing. Favorites wins over a search query.
pub fn empty_state(section: Section, query: &str) -> EmptyState {
    let query = query.trim();
    if section == Section::Favorites {
        EmptyState {
            title: "You have not favorited any artifacts yet".to_owned(),
            hint: "Tap the heart on an artifact card to save it here",
        }
    } else if !query.is_empty() {
        EmptyState {
            title: format!("No artifacts matching \"{query}\""),
            hint: "Try a different keyword",
        }
    } else {
        EmptyState { title: "No artifacts available".to_owned(), hint: "Please try again later" }
    }
}
