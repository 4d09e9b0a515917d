//! Home gallery: the allocated artifact grid with a hot-ranking aside.
//!
//! SYSTEM CONTEXT
//! ==============
//! Refetches whenever the header search query or the signed-in user
//! changes (favorite flags are per user). A reply is applied only while
//! both still match what the request was made for.

use catalog::layout::MAX_PLACED;
use catalog::{ArtifactWithFavorite, SearchParams};
use leptos::prelude::*;

use super::gallery;
use crate::components::artifact_dialog::ArtifactDialog;
use crate::components::artifact_grid::{ArtifactGrid, CompactGrid, EmptyStateView, GridSkeleton};
use crate::components::hot_ranking::HotRanking;
use crate::net::MuseumApi;
use crate::state::artifacts::{ArtifactsState, GalleryRequest, Section, empty_state};
use crate::state::auth::AuthState;
use crate::state::ui::UiState;

#[component]
pub fn HomePage() -> impl IntoView {
    let api = expect_context::<MuseumApi>();
    let ui = expect_context::<RwSignal<UiState>>();
    let auth = expect_context::<RwSignal<AuthState>>();

    let artifacts = RwSignal::new(ArtifactsState::default());
    let selected = RwSignal::new(None::<ArtifactWithFavorite>);
    let show_overflow = RwSignal::new(false);

    {
        let api = api.clone();
        Effect::new(move || {
            let query = ui.with(|u| u.search_query.clone());
            let user_id = auth.with(|a| a.user.as_ref().map(|u| u.id));
            show_overflow.set(false);
            let params = SearchParams::gallery(&query);
            let request = GalleryRequest::new(query, user_id);
            gallery::load(&api, artifacts, params, move || {
                let query = ui.with_untracked(|u| u.search_query.clone());
                let user_id = auth.with_untracked(|a| a.user.as_ref().map(|u| u.id));
                request.is_current(&query, user_id)
            });
        });
    }

    let on_open = {
        let api = api.clone();
        Callback::new(move |item: ArtifactWithFavorite| gallery::open(&api, selected, item))
    };
    let on_favorite = Callback::new(move |id: i64| {
        gallery::toggle_favorite(&api, ui, selected, id, move |flag| {
            artifacts.update(|a| {
                a.apply_favorite(id, flag);
            });
        });
    });
    let on_close = Callback::new(move |()| selected.set(None));

    view! {
        <div class="home-page">
            {move || {
                let state = artifacts.get();
                if state.loading && state.items.is_empty() {
                    return view! { <GridSkeleton/> }.into_any();
                }
                if let Some(message) = state.error.clone() {
                    return view! {
                        <div class="page-error">
                            <p>{format!("Failed to load artifacts: {message}")}</p>
                        </div>
                    }
                        .into_any();
                }
                if state.items.is_empty() {
                    let empty = ui.with_untracked(|u| empty_state(Section::Home, &u.search_query));
                    return view! { <EmptyStateView state=empty/> }.into_any();
                }

                let ranking = state.hot_ranking().to_vec();
                let has_more = state.has_more();
                let overflow = state.items.get(MAX_PLACED..).map(<[_]>::to_vec).unwrap_or_default();
                view! {
                    <div class="home-page__layout">
                        <div class="home-page__main">
                            <ArtifactGrid items=state.items on_open=on_open on_favorite=on_favorite/>
                            <Show when=move || has_more && !show_overflow.get()>
                                <button class="btn home-page__more" on:click=move |_| show_overflow.set(true)>
                                    "Load more"
                                </button>
                            </Show>
                            <Show when=move || show_overflow.get()>
                                <CompactGrid items=overflow.clone() on_open=on_open on_favorite=on_favorite/>
                            </Show>
                        </div>
                        <HotRanking items=ranking on_open=on_open/>
                    </div>
                }
                    .into_any()
            }}
            {move || {
                selected
                    .get()
                    .map(|item| view! { <ArtifactDialog item=item on_close=on_close on_favorite=on_favorite/> })
            }}
        </div>
    }
}
