//! Fetch, open and favorite flows shared by the artifact listing pages.

use catalog::{ArtifactWithFavorite, SearchParams};
use leptos::prelude::*;

use crate::components::shell::flash_toast;
use crate::net::MuseumApi;
use crate::state::artifacts::{ArtifactsState, favorite_failure_message};
use crate::state::ui::{FAVORITE_TOAST_MS, UiState};

/// Load `params` into `artifacts`. The reply is dropped if `still_wanted`
/// says a newer request superseded it.
pub(crate) fn load(
    api: &MuseumApi,
    artifacts: RwSignal<ArtifactsState>,
    params: SearchParams,
    still_wanted: impl Fn() -> bool + 'static,
) {
    artifacts.update(ArtifactsState::start_loading);
    let api = api.clone();
    leptos::task::spawn_local(async move {
        let result = api.get_artifacts(&params).await.map_err(|e| e.to_string());
        if !still_wanted() {
            return;
        }
        if let Err(message) = &result {
            leptos::logging::warn!("artifact list failed: {message}");
        }
        artifacts.update(|a| a.finish(result));
    });
}

/// Show `item` in the detail dialog and record the view for signed-in users.
///
/// Recording is best effort: a failure is logged and the dialog stays open.
pub(crate) fn open(api: &MuseumApi, selected: RwSignal<Option<ArtifactWithFavorite>>, item: ArtifactWithFavorite) {
    let id = item.id();
    selected.set(Some(item));
    if !api.session().is_logged_in() {
        return;
    }
    let api = api.clone();
    leptos::task::spawn_local(async move {
        if let Err(e) = api.add_to_history(id).await {
            leptos::logging::warn!("recording view of artifact {id} failed: {e}");
        }
    });
}

/// Flip the favorite flag of `id`, then hand the new state to `apply` and
/// mirror it into the open dialog.
///
/// A rejected toggle leaves the flag as it was and raises a toast. Without a
/// session the gateway's unauthorized hook opens the sign-in dialog instead.
pub(crate) fn toggle_favorite(
    api: &MuseumApi,
    ui: RwSignal<UiState>,
    selected: RwSignal<Option<ArtifactWithFavorite>>,
    id: i64,
    apply: impl FnOnce(bool) + 'static,
) {
    let api = api.clone();
    leptos::task::spawn_local(async move {
        match api.toggle_favorite(id).await {
            Ok(is_favorite) => {
                apply(is_favorite);
                selected.update(|s| {
                    if let Some(item) = s.as_mut().filter(|item| item.id() == id) {
                        item.is_favorite = is_favorite;
                    }
                });
            }
            Err(e) => {
                if let Some(message) = favorite_failure_message(&e) {
                    leptos::logging::warn!("favorite toggle for artifact {id} failed: {e}");
                    flash_toast(ui, message, FAVORITE_TOAST_MS);
                }
            }
        }
    });
}
