//! Gallery grid rendered from the slot allocation in `catalog::layout`.

use catalog::{ArtifactWithFavorite, Slot};
use leptos::prelude::*;

use crate::components::artifact_card::{ArtifactCard, FeaturedCard};
use crate::components::function_card::FunctionCardView;
use crate::state::artifacts::EmptyState;

/// Mixed grid of the lead artifacts and function cards.
#[component]
pub fn ArtifactGrid(
    items: Vec<ArtifactWithFavorite>,
    on_open: Callback<ArtifactWithFavorite>,
    on_favorite: Callback<i64>,
) -> impl IntoView {
    let slots = catalog::allocate(&items)
        .into_iter()
        .map(|slot| {
            let class = format!("grid-slot {}", slot.span().class());
            let card = match slot {
                Slot::Featured { artifact, .. } => {
                    view! { <FeaturedCard item=artifact.clone() on_open=on_open on_favorite=on_favorite/> }.into_any()
                }
                Slot::Artifact { artifact, .. } => {
                    view! { <ArtifactCard item=artifact.clone() on_open=on_open on_favorite=on_favorite/> }.into_any()
                }
                Slot::Function { card, .. } => view! { <FunctionCardView card=card/> }.into_any(),
            };
            view! { <div class=class>{card}</div> }
        })
        .collect_view();

    view! { <div class="artifact-grid">{slots}</div> }
}

/// Uniform grid of compact cards, used past the allocator's cap and on the
/// favorites page.
#[component]
pub fn CompactGrid(
    items: Vec<ArtifactWithFavorite>,
    on_open: Callback<ArtifactWithFavorite>,
    on_favorite: Callback<i64>,
) -> impl IntoView {
    view! {
        <div class="compact-grid">
            {items
                .into_iter()
                .map(|item| view! { <ArtifactCard item=item on_open=on_open on_favorite=on_favorite/> })
                .collect_view()}
        </div>
    }
}

#[component]
pub fn EmptyStateView(state: EmptyState) -> impl IntoView {
    view! {
        <div class="empty-state">
            <h3 class="empty-state__title">{state.title}</h3>
            <p class="empty-state__hint">{state.hint}</p>
        </div>
    }
}

/// Placeholder tiles shown while the first page of artifacts loads.
#[component]
pub fn GridSkeleton() -> impl IntoView {
    view! {
        <div class="artifact-grid artifact-grid--loading">
            {(0..8).map(|i| view! { <div class="grid-slot skeleton" class:col-span-2={i == 0}></div> }).collect_view()}
        </div>
    }
}
