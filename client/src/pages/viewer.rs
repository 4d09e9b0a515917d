//! 3D artifact viewer: model picker and camera controls around the external
//! scene renderer.

use leptos::prelude::*;
use serde_json::json;

use crate::components::external_view::{ExternalViewHost, ViewHandle};
use crate::state::viewer::{LoadStatus, MODELS, SceneCommand, ViewerState};
use crate::util::viewer::SCENE_GLOBAL;

const CONTAINER_ID: &str = "museum-scene";

#[component]
pub fn ViewerPage() -> impl IntoView {
    let viewer = RwSignal::new(ViewerState::default());
    let handle = ViewHandle::new(SCENE_GLOBAL);

    // Replay the current state into a freshly mounted renderer.
    Effect::new(move || {
        if !handle.mounted() {
            if let Some(message) = handle.error() {
                viewer.update(|v| v.status = LoadStatus::Failed(message));
            }
            return;
        }
        let commands = viewer.with_untracked(ViewerState::initial_commands);
        let accepted = commands.iter().all(|command| handle.send(command));
        viewer.update(|v| v.status = settle(accepted, handle));
    });

    let run = move |command: SceneCommand| {
        handle.send(&command);
    };

    let select = move |id: &'static str| {
        let mut command = None;
        viewer.update(|v| command = v.select(id));
        if let Some(command) = command {
            let accepted = handle.send(&command);
            viewer.update(|v| v.status = settle(accepted, handle));
        }
    };

    view! {
        <div class="viewer-page">
            <aside class="viewer-page__models">
                <h1 class="page-title">"3D Artifacts"</h1>
                {MODELS
                    .iter()
                    .map(|entry| {
                        let id = entry.id;
                        view! {
                            <button
                                class="model-card"
                                class:model-card--active=move || viewer.with(|v| v.selected.id == id)
                                on:click=move |_| select(id)
                            >
                                <strong>{entry.name}</strong>
                                <span class="model-card__meta">{format!("{} · {}", entry.era, entry.category)}</span>
                                <p>{entry.description}</p>
                            </button>
                        }
                    })
                    .collect_view()}
            </aside>
            <section class="viewer-page__stage">
                <ExternalViewHost handle=handle container_id=CONTAINER_ID config=json!({ "background": "transparent" })/>
                <p class="viewer-page__status">
                    {move || match viewer.with(|v| v.status.clone()) {
                        LoadStatus::Loading => "Loading model...".to_owned(),
                        LoadStatus::Ready => viewer.with(|v| v.selected.name.to_owned()),
                        LoadStatus::Failed(message) => format!("Could not load model: {message}"),
                    }}
                </p>
                <div class="viewer-page__controls">
                    <button class="btn" on:click=move |_| run(SceneCommand::ZoomIn)>
                        "Zoom in"
                    </button>
                    <button class="btn" on:click=move |_| run(SceneCommand::ZoomOut)>
                        "Zoom out"
                    </button>
                    <button class="btn" on:click=move |_| run(SceneCommand::ResetCamera)>
                        "Reset view"
                    </button>
                    <button
                        class="btn"
                        class:btn--active=move || viewer.with(|v| v.auto_rotate)
                        on:click=move |_| {
                            let mut command = None;
                            viewer.update(|v| command = Some(v.toggle_auto_rotate()));
                            if let Some(command) = command {
                                run(command);
                            }
                        }
                    >
                        "Auto-rotate"
                    </button>
                    <button
                        class="btn"
                        class:btn--active=move || viewer.with(|v| v.wireframe)
                        on:click=move |_| {
                            let mut command = None;
                            viewer.update(|v| command = Some(v.toggle_wireframe()));
                            if let Some(command) = command {
                                run(command);
                            }
                        }
                    >
                        "Wireframe"
                    </button>
                </div>
            </section>
        </div>
    }
}

fn settle(accepted: bool, handle: ViewHandle) -> LoadStatus {
    if accepted {
        LoadStatus::Ready
    } else {
        LoadStatus::Failed(handle.error_untracked().unwrap_or_else(|| "renderer unavailable".to_owned()))
    }
}
