//! Gallery cards for a single artifact.

use catalog::ArtifactWithFavorite;
use leptos::prelude::*;

use crate::config::AppConfig;
use crate::util::time::now_ms;

/// Image URL for `item`, busting the webview cache on every render.
pub fn card_image_url(config: &AppConfig, item: &ArtifactWithFavorite) -> String {
    item.image_url(&config.images_dir, u64::try_from(now_ms()).unwrap_or_default())
}

/// Heart toggle shared by every artifact card and the detail dialog.
#[component]
pub fn FavoriteButton(id: i64, is_favorite: bool, on_favorite: Callback<i64>) -> impl IntoView {
    view! {
        <button
            class="favorite-button"
            class:favorite-button--active=is_favorite
            title={if is_favorite { "Remove from favorites" } else { "Add to favorites" }}
            on:click=move |ev| {
                ev.stop_propagation();
                on_favorite.run(id);
            }
        >
            {if is_favorite { "♥" } else { "♡" }}
        </button>
    }
}

/// Compact card: image, title and dynasty.
#[component]
pub fn ArtifactCard(
    item: ArtifactWithFavorite,
    on_open: Callback<ArtifactWithFavorite>,
    on_favorite: Callback<i64>,
) -> impl IntoView {
    let config = expect_context::<AppConfig>();
    let src = card_image_url(&config, &item);
    let id = item.id();
    let is_favorite = item.is_favorite;
    let title = item.title.clone();
    let dynasty = item.dynasty.clone();

    view! {
        <article class="artifact-card" on:click=move |_| on_open.run(item.clone())>
            <img class="artifact-card__image" src=src alt=title.clone() loading="lazy"/>
            <div class="artifact-card__overlay">
                <h3 class="artifact-card__title">{title}</h3>
                <span class="artifact-card__dynasty">{dynasty}</span>
            </div>
            <FavoriteButton id=id is_favorite=is_favorite on_favorite=on_favorite/>
        </article>
    }
}

/// Lead card: large image with the short description.
#[component]
pub fn FeaturedCard(
    item: ArtifactWithFavorite,
    on_open: Callback<ArtifactWithFavorite>,
    on_favorite: Callback<i64>,
) -> impl IntoView {
    let config = expect_context::<AppConfig>();
    let src = card_image_url(&config, &item);
    let id = item.id();
    let is_favorite = item.is_favorite;
    let title = item.title.clone();
    let dynasty = item.dynasty.clone();
    let description = item.description.clone();

    view! {
        <article class="artifact-card artifact-card--featured" on:click=move |_| on_open.run(item.clone())>
            <img class="artifact-card__image" src=src alt=title.clone()/>
            <div class="artifact-card__overlay">
                <span class="artifact-card__badge">"Featured"</span>
                <h2 class="artifact-card__title">{title}</h2>
                <span class="artifact-card__dynasty">{dynasty}</span>
                <p class="artifact-card__description">{description}</p>
            </div>
            <FavoriteButton id=id is_favorite=is_favorite on_favorite=on_favorite/>
        </article>
    }
}
