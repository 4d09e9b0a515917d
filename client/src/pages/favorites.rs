//! The signed-in user's favorited artifacts.
//!
//! Un-favoriting from this page removes the card immediately.

use catalog::{ArtifactWithFavorite, SearchParams};
use leptos::prelude::*;

use super::gallery;
use crate::components::artifact_dialog::ArtifactDialog;
use crate::components::artifact_grid::{CompactGrid, EmptyStateView, GridSkeleton};
use crate::net::MuseumApi;
use crate::state::artifacts::{ArtifactsState, Section, empty_state};
use crate::state::auth::AuthState;
use crate::state::ui::UiState;

#[component]
pub fn FavoritesPage() -> impl IntoView {
    let api = expect_context::<MuseumApi>();
    let auth = expect_context::<RwSignal<AuthState>>();
    let ui = expect_context::<RwSignal<UiState>>();

    let artifacts = RwSignal::new(ArtifactsState::default());
    let selected = RwSignal::new(None::<ArtifactWithFavorite>);

    {
        let api = api.clone();
        Effect::new(move || {
            let Some(user_id) = auth.with(|a| a.user.as_ref().map(|u| u.id)) else {
                artifacts.set(ArtifactsState::default());
                return;
            };
            gallery::load(&api, artifacts, SearchParams::favorites(), move || {
                auth.with_untracked(|a| a.user.as_ref().is_some_and(|u| u.id == user_id))
            });
        });
    }

    let on_open = {
        let api = api.clone();
        Callback::new(move |item: ArtifactWithFavorite| gallery::open(&api, selected, item))
    };
    let on_favorite = Callback::new(move |id: i64| {
        gallery::toggle_favorite(&api, ui, selected, id, move |flag| {
            artifacts.update(|a| a.apply_favorite_in_favorites(id, flag));
        });
    });
    let on_close = Callback::new(move |()| selected.set(None));

    view! {
        <div class="favorites-page">
            <h1 class="page-title">"My Favorites"</h1>
            {move || {
                if auth.with(|a| a.loading) {
                    return view! { <GridSkeleton/> }.into_any();
                }
                if !auth.with(AuthState::is_logged_in) {
                    return view! {
                        <div class="empty-state">
                            <h3 class="empty-state__title">"Sign in to see your favorites"</h3>
                            <button class="btn btn--primary" on:click=move |_| ui.update(|u| u.login_open = true)>
                                "Sign in"
                            </button>
                        </div>
                    }
                        .into_any();
                }
                let state = artifacts.get();
                if state.loading && state.items.is_empty() {
                    view! { <GridSkeleton/> }.into_any()
                } else if let Some(message) = state.error {
                    view! { <p class="page-error">{format!("Failed to load favorites: {message}")}</p> }.into_any()
                } else if state.items.is_empty() {
                    view! { <EmptyStateView state=empty_state(Section::Favorites, "")/> }.into_any()
                } else {
                    view! { <CompactGrid items=state.items on_open=on_open on_favorite=on_favorite/> }.into_any()
                }
            }}
            {move || {
                selected
                    .get()
                    .map(|item| view! { <ArtifactDialog item=item on_close=on_close on_favorite=on_favorite/> })
            }}
        </div>
    }
}
