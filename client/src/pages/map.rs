//! Find-site map: a filterable list of excavation sites beside the external
//! map renderer.

use leptos::prelude::*;

use crate::components::external_view::{ExternalViewHost, ViewHandle};
use crate::config::AppConfig;
use crate::state::map::{ALL_CATEGORIES, MapCommand, MapConfig, MapState, categories, site};
use crate::util::viewer::MAP_GLOBAL;

const CONTAINER_ID: &str = "museum-map";

#[component]
pub fn MapPage() -> impl IntoView {
    let config = expect_context::<AppConfig>();
    let map = RwSignal::new(MapState::default());
    let handle = ViewHandle::new(MAP_GLOBAL);

    let mount_config = serde_json::to_value(MapConfig::new(config.map_api_key.as_deref())).unwrap_or_else(|e| {
        leptos::logging::warn!("map config encode failed: {e}");
        serde_json::Value::Null
    });

    // Keep markers in sync with the filtered list once the map is up.
    Effect::new(move || {
        if !handle.mounted() {
            return;
        }
        let visible = map.with(MapState::visible);
        handle.send(&MapCommand::markers(&visible));
    });

    let focus = move |id: u32| {
        let Some(found) = site(id) else {
            return;
        };
        map.update(|m| m.selected = Some(id));
        handle.send(&MapCommand::focus(found));
    };

    view! {
        <div class="map-page">
            <aside class="map-page__panel">
                <h1 class="page-title">"Find Sites"</h1>
                <input
                    class="map-page__search"
                    type="search"
                    placeholder="Search sites or places"
                    prop:value=move || map.with(|m| m.query.clone())
                    on:input=move |ev| {
                        let value = event_target_value(&ev);
                        map.update(|m| m.query = value);
                    }
                />
                <div class="map-page__categories">
                    {categories()
                        .into_iter()
                        .map(|category| {
                            let label = if category == ALL_CATEGORIES { "All" } else { category };
                            view! {
                                <button
                                    class="chip"
                                    class:chip--active=move || map.with(|m| m.category == category)
                                    on:click=move |_| map.update(|m| m.category = category)
                                >
                                    {label}
                                </button>
                            }
                        })
                        .collect_view()}
                </div>
                <ul class="site-list">
                    {move || {
                        map.with(MapState::visible)
                            .into_iter()
                            .map(|s| {
                                let id = s.id;
                                view! {
                                    <li
                                        class="site-list__item"
                                        class:site-list__item--selected=move || map.with(|m| m.selected == Some(id))
                                        on:click=move |_| focus(id)
                                    >
                                        <strong>{s.title}</strong>
                                        <span class="site-list__meta">{format!("{} · {}", s.dynasty, s.location)}</span>
                                        <p class="site-list__description">{s.description}</p>
                                    </li>
                                }
                            })
                            .collect_view()
                    }}
                </ul>
            </aside>
            <ExternalViewHost handle=handle container_id=CONTAINER_ID config=mount_config/>
        </div>
    }
}
