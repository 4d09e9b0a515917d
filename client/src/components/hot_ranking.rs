//! Top-five sidebar list on the home page.

use catalog::ArtifactWithFavorite;
use leptos::prelude::*;

use crate::state::artifacts::rank_badge;

#[component]
pub fn HotRanking(items: Vec<ArtifactWithFavorite>, on_open: Callback<ArtifactWithFavorite>) -> impl IntoView {
    view! {
        <aside class="hot-ranking">
            <h3 class="hot-ranking__title">"Hot Ranking"</h3>
            <ol class="hot-ranking__list">
                {items
                    .into_iter()
                    .enumerate()
                    .map(|(rank, item)| {
                        let (class, marker) = rank_badge(rank);
                        let title = item.title.clone();
                        let dynasty = item.dynasty.clone();
                        view! {
                            <li class="hot-ranking__item" on:click=move |_| on_open.run(item.clone())>
                                <span class=class>{marker}</span>
                                <span class="hot-ranking__name">{title}</span>
                                <span class="hot-ranking__dynasty">{dynasty}</span>
                            </li>
                        }
                    })
                    .collect_view()}
            </ol>
        </aside>
    }
}
