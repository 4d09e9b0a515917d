//! Detail modal for one artifact.

#[cfg(test)]
#[path = "artifact_dialog_test.rs"]
mod artifact_dialog_test;

use catalog::ArtifactWithFavorite;
use leptos::prelude::*;

use crate::components::artifact_card::{FavoriteButton, card_image_url};
use crate::config::AppConfig;

/// Label/value rows shown in the detail table, skipping blank values.
fn detail_rows(item: &ArtifactWithFavorite) -> Vec<(&'static str, String)> {
    [
        ("Dynasty", &item.dynasty),
        ("Period", &item.period),
        ("Category", &item.category),
        ("Material", &item.material),
        ("Dimensions", &item.dimensions),
        ("Location", &item.location),
        ("Discovered at", &item.discovery_location),
        ("Collection", &item.collection),
    ]
    .into_iter()
    .filter(|(_, value)| !value.trim().is_empty())
    .map(|(label, value)| (label, value.clone()))
    .collect()
}

#[component]
pub fn ArtifactDialog(item: ArtifactWithFavorite, on_close: Callback<()>, on_favorite: Callback<i64>) -> impl IntoView {
    let config = expect_context::<AppConfig>();
    let src = card_image_url(&config, &item);
    let rows = detail_rows(&item);
    let body = if item.detailed_description.trim().is_empty() {
        item.description.clone()
    } else {
        item.detailed_description.clone()
    };

    view! {
        <div class="dialog-backdrop" on:click=move |_| on_close.run(())>
            <div
                class="dialog dialog--artifact"
                tabindex="0"
                on:click=move |ev| ev.stop_propagation()
                on:keydown=move |ev: leptos::ev::KeyboardEvent| {
                    if ev.key() == "Escape" {
                        ev.prevent_default();
                        on_close.run(());
                    }
                }
            >
                <img class="dialog__image" src=src alt=item.title.clone()/>
                <div class="dialog__body">
                    <header class="dialog__header">
                        <h2>{item.title.clone()}</h2>
                        <FavoriteButton id=item.id() is_favorite=item.is_favorite on_favorite=on_favorite/>
                    </header>
                    <dl class="dialog__details">
                        {rows
                            .into_iter()
                            .map(|(label, value)| view! {
                                <dt>{label}</dt>
                                <dd>{value}</dd>
                            })
                            .collect_view()}
                    </dl>
                    <p class="dialog__description">{body}</p>
                </div>
                <button class="dialog__close" title="Close" on:click=move |_| on_close.run(())>
                    "×"
                </button>
            </div>
        </div>
    }
}
