//! Browsing history with text search, time-range filter and clear-all.

use catalog::{ArtifactWithFavorite, HistoryItem};
use leptos::prelude::*;

use super::gallery;
use crate::components::artifact_card::card_image_url;
use crate::components::artifact_dialog::ArtifactDialog;
use crate::config::AppConfig;
use crate::net::MuseumApi;
use crate::state::auth::AuthState;
use crate::state::history::{TimeRange, filter_history};
use crate::state::ui::UiState;
use crate::util::time::{format_timestamp, now_ms};

#[component]
pub fn HistoryPage() -> impl IntoView {
    let api = expect_context::<MuseumApi>();
    let auth = expect_context::<RwSignal<AuthState>>();
    let ui = expect_context::<RwSignal<UiState>>();
    let config = expect_context::<AppConfig>();

    let items = RwSignal::new(Vec::<HistoryItem>::new());
    let loading = RwSignal::new(false);
    let error = RwSignal::new(None::<String>);
    let search = RwSignal::new(String::new());
    let range = RwSignal::new(TimeRange::All);
    let selected = RwSignal::new(None::<ArtifactWithFavorite>);

    {
        let api = api.clone();
        Effect::new(move || {
            if !auth.with(AuthState::is_logged_in) {
                items.set(Vec::new());
                return;
            }
            loading.set(true);
            error.set(None);
            let api = api.clone();
            leptos::task::spawn_local(async move {
                match api.get_browsing_history().await {
                    Ok(list) => items.set(list),
                    Err(e) => {
                        leptos::logging::warn!("history load failed: {e}");
                        error.set(Some(e.to_string()));
                    }
                }
                loading.set(false);
            });
        });
    }

    let on_clear = {
        let api = api.clone();
        move |_| {
            let api = api.clone();
            leptos::task::spawn_local(async move {
                match api.clear_browsing_history().await {
                    Ok(()) => items.set(Vec::new()),
                    Err(e) => {
                        leptos::logging::warn!("history clear failed: {e}");
                        error.set(Some(e.to_string()));
                    }
                }
            });
        }
    };

    let on_open = {
        let api = api.clone();
        move |item: ArtifactWithFavorite| gallery::open(&api, selected, item)
    };
    let on_favorite = Callback::new(move |id: i64| {
        gallery::toggle_favorite(&api, ui, selected, id, move |flag| {
            items.update(|list| {
                for entry in list.iter_mut().filter(|h| h.artifact.id() == id) {
                    entry.artifact.is_favorite = flag;
                }
            });
        });
    });
    let on_close = Callback::new(move |()| selected.set(None));

    let rows = move || {
        let now = now_ms();
        items.with(|list| {
            search.with(|query| {
                filter_history(list, query, range.get(), now)
                    .into_iter()
                    .cloned()
                    .collect::<Vec<_>>()
            })
        })
    };

    view! {
        <div class="history-page">
            <h1 class="page-title">"Browsing History"</h1>
            <Show
                when=move || auth.with(AuthState::is_logged_in)
                fallback=move || view! {
                    <div class="empty-state">
                        <h3 class="empty-state__title">"Sign in to see your browsing history"</h3>
                        <button class="btn btn--primary" on:click=move |_| ui.update(|u| u.login_open = true)>
                            "Sign in"
                        </button>
                    </div>
                }
            >
                <div class="history-page__toolbar">
                    <input
                        class="history-page__search"
                        type="search"
                        placeholder="Search by title, dynasty or category"
                        prop:value=move || search.get()
                        on:input=move |ev| search.set(event_target_value(&ev))
                    />
                    <select
                        class="history-page__range"
                        on:change=move |ev| range.set(TimeRange::parse(&event_target_value(&ev)))
                        prop:value=move || range.get().as_str()
                    >
                        {TimeRange::ALL
                            .into_iter()
                            .map(|r| view! { <option value=r.as_str()>{r.label()}</option> })
                            .collect_view()}
                    </select>
                    <button
                        class="btn btn--danger"
                        disabled=move || items.with(Vec::is_empty)
                        on:click=on_clear.clone()
                    >
                        "Clear history"
                    </button>
                </div>
                <Show when=move || error.get().is_some()>
                    <p class="page-error">{move || error.get().unwrap_or_default()}</p>
                </Show>
                {
                    let config = config.clone();
                    let on_open = on_open.clone();
                    move || {
                        if loading.get() {
                            return view! { <p class="history-page__loading">"Loading..."</p> }.into_any();
                        }
                        let rows = rows();
                        if rows.is_empty() {
                            return view! { <p class="empty-state__hint">"No matching history entries"</p> }.into_any();
                        }
                        view! {
                            <ul class="history-list">
                                {rows
                                    .into_iter()
                                    .map(|entry| {
                                        let src = card_image_url(&config, &entry.artifact);
                                        let when = format_timestamp(&entry.viewed_at);
                                        let title = entry.artifact.title.clone();
                                        let subtitle = format!("{} · {}", entry.artifact.dynasty, entry.artifact.category);
                                        let artifact = entry.artifact;
                                        let on_open = on_open.clone();
                                        view! {
                                            <li class="history-list__item" on:click=move |_| on_open(artifact.clone())>
                                                <img class="history-list__thumb" src=src alt=title.clone()/>
                                                <div class="history-list__text">
                                                    <span class="history-list__title">{title}</span>
                                                    <span class="history-list__meta">{subtitle}</span>
                                                </div>
                                                <time class="history-list__time">{when}</time>
                                            </li>
                                        }
                                    })
                                    .collect_view()}
                            </ul>
                        }
                            .into_any()
                    }
                }
            </Show>
            {move || {
                selected
                    .get()
                    .map(|item| view! { <ArtifactDialog item=item on_close=on_close on_favorite=on_favorite/> })
            }}
        </div>
    }
}
