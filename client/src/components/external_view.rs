//! Host element for an externally rendered view (3D scene, map).
//!
//! SYSTEM CONTEXT
//! ==============
//! The renderer itself lives outside the crate (see `util::viewer`). This
//! component owns the container element, mounts the renderer once the
//! element exists, and disposes it when the component unmounts. Pages keep a
//! [`ViewHandle`] to push commands afterwards.
//!
//! ERROR HANDLING
//! ==============
//! Mount and command failures are logged and surfaced through
//! [`ViewHandle::error`]; they never panic the page.

use leptos::prelude::*;
use serde::Serialize;
use serde_json::Value;

use crate::util::viewer::{ExternalView, ViewHost, external_view};

/// Copyable handle to a renderer owned by the current reactive scope.
#[derive(Clone, Copy)]
pub struct ViewHandle {
    host: StoredValue<ViewHost<Box<dyn ExternalView>>, LocalStorage>,
    mounted: RwSignal<bool>,
    error: RwSignal<Option<String>>,
}

impl ViewHandle {
    /// Handle for the renderer published under `global`.
    pub fn new(global: &'static str) -> Self {
        Self {
            host: StoredValue::new_local(ViewHost::new(external_view(global))),
            mounted: RwSignal::new(false),
            error: RwSignal::new(None),
        }
    }

    /// Reactive: true once the renderer accepted its mount config.
    pub fn mounted(&self) -> bool {
        self.mounted.get()
    }

    /// Reactive: the last renderer failure, if any.
    pub fn error(&self) -> Option<String> {
        self.error.get()
    }

    pub fn error_untracked(&self) -> Option<String> {
        self.error.get_untracked()
    }

    /// Forward `command` to the renderer. Returns whether it was accepted.
    pub fn send<C: Serialize>(&self, command: &C) -> bool {
        match self.host.try_update_value(|host| host.send(command)) {
            Some(Ok(())) => true,
            Some(Err(e)) => {
                leptos::logging::warn!("renderer command failed: {e}");
                self.error.set(Some(e.to_string()));
                false
            }
            None => false,
        }
    }

    fn mount(&self, container_id: &str, config: &Value) {
        match self.host.try_update_value(|host| host.mount(container_id, config)) {
            Some(Ok(())) => {
                self.error.set(None);
                self.mounted.set(true);
            }
            Some(Err(e)) => {
                leptos::logging::warn!("renderer mount failed: {e}");
                self.error.set(Some(e.to_string()));
            }
            None => {}
        }
    }

    fn dispose(&self) {
        self.host.try_update_value(|host| host.dispose());
        self.mounted.try_update(|mounted| *mounted = false);
    }
}

/// Container `div` the renderer draws into.
#[component]
pub fn ExternalViewHost(handle: ViewHandle, container_id: &'static str, config: Value) -> impl IntoView {
    let node = NodeRef::<leptos::html::Div>::new();

    Effect::new(move || {
        if node.get().is_some() && !handle.mounted.get_untracked() {
            handle.mount(container_id, &config);
        }
    });

    on_cleanup(move || handle.dispose());

    view! {
        <div class="external-view">
            <div class="external-view__canvas" id=container_id node_ref=node></div>
            {move || handle.error().map(|message| view! { <p class="external-view__error">{message}</p> })}
        </div>
    }
}
