//! Bridge to renderers that live in the host page's JavaScript.
//!
//! SYSTEM CONTEXT
//! ==============
//! The 3D model viewer and the map are drawn by JS libraries bundled with the
//! desktop shell. Each one is exposed as a global (`window.MuseumViewer`,
//! `window.MuseumMap`) with a `mount(containerId, config)` function that
//! returns a handle carrying `update(command)` and `dispose()`. Configs and
//! commands are plain JSON.
//!
//! DESIGN
//! ======
//! [`ExternalView`] is the narrow seam; [`ViewHost`] tracks the mount
//! lifecycle so callers cannot update a disposed view or leak a mounted one.

#[cfg(test)]
#[path = "viewer_test.rs"]
mod viewer_test;

use serde::Serialize;
use serde_json::Value;

pub const SCENE_GLOBAL: &str = "MuseumViewer";
pub const MAP_GLOBAL: &str = "MuseumMap";

#[derive(Debug, thiserror::Error)]
pub enum ViewerError {
    #[error("the {0} renderer is not available")]
    Unavailable(&'static str),
    #[error("{renderer} renderer failed: {message}")]
    Renderer { renderer: &'static str, message: String },
    #[error("view is not mounted")]
    NotMounted,
    #[error("failed to encode view payload: {0}")]
    Encode(#[from] serde_json::Error),
}

/// An imperatively driven view mounted into a DOM container.
pub trait ExternalView {
    /// # Errors
    ///
    /// Returns [`ViewerError`] when the renderer is missing or throws.
    fn mount(&mut self, container_id: &str, config: &Value) -> Result<(), ViewerError>;

    /// # Errors
    ///
    /// Returns [`ViewerError`] when the renderer throws.
    fn update(&mut self, command: &Value) -> Result<(), ViewerError>;

    fn dispose(&mut self);
}

/// Mount-state guard around an [`ExternalView`].
pub struct ViewHost<V> {
    view: V,
    mounted: bool,
}

impl<V: ExternalView> ViewHost<V> {
    pub fn new(view: V) -> Self {
        Self { view, mounted: false }
    }

    pub fn is_mounted(&self) -> bool {
        self.mounted
    }

    /// Mount into `container_id`, disposing any previous mount first.
    ///
    /// # Errors
    ///
    /// Returns [`ViewerError`] when encoding fails or the renderer rejects.
    pub fn mount<C: Serialize>(&mut self, container_id: &str, config: &C) -> Result<(), ViewerError> {
        self.dispose();
        let config = serde_json::to_value(config)?;
        self.view.mount(container_id, &config)?;
        self.mounted = true;
        Ok(())
    }

    /// # Errors
    ///
    /// [`ViewerError::NotMounted`] before a successful mount, otherwise
    /// encoding or renderer failures.
    pub fn send<C: Serialize>(&mut self, command: &C) -> Result<(), ViewerError> {
        if !self.mounted {
            return Err(ViewerError::NotMounted);
        }
        let command = serde_json::to_value(command)?;
        self.view.update(&command)
    }

    /// Release the view. Safe to call repeatedly.
    pub fn dispose(&mut self) {
        if self.mounted {
            self.view.dispose();
            self.mounted = false;
        }
    }
}

/// Renderer placeholder for builds without a host page.
#[derive(Clone, Copy, Debug)]
pub struct UnavailableView {
    renderer: &'static str,
}

impl UnavailableView {
    pub fn new(renderer: &'static str) -> Self {
        Self { renderer }
    }
}

impl ExternalView for UnavailableView {
    fn mount(&mut self, _container_id: &str, _config: &Value) -> Result<(), ViewerError> {
        Err(ViewerError::Unavailable(self.renderer))
    }

    fn update(&mut self, _command: &Value) -> Result<(), ViewerError> {
        Err(ViewerError::Unavailable(self.renderer))
    }

    fn dispose(&mut self) {}
}

#[cfg(feature = "csr")]
mod js {
    use wasm_bindgen::{JsCast, JsValue};

    pub fn describe(err: &JsValue) -> String {
        err.as_string().unwrap_or_else(|| format!("{err:?}"))
    }

    pub fn to_js(value: &serde_json::Value) -> Result<JsValue, String> {
        js_sys::JSON::parse(&value.to_string()).map_err(|e| describe(&e))
    }

    pub fn lookup_global(name: &str) -> Option<JsValue> {
        let value = js_sys::Reflect::get(&js_sys::global(), &JsValue::from_str(name)).ok()?;
        (!value.is_undefined() && !value.is_null()).then_some(value)
    }

    pub fn call_method(target: &JsValue, name: &str, args: &[&JsValue]) -> Result<JsValue, String> {
        let method = js_sys::Reflect::get(target, &JsValue::from_str(name)).map_err(|e| describe(&e))?;
        let function = method
            .dyn_into::<js_sys::Function>()
            .map_err(|_| format!("`{name}` is not a function"))?;
        let array = js_sys::Array::new();
        for arg in args {
            array.push(arg);
        }
        function.apply(target, &array).map_err(|e| describe(&e))
    }
}

/// View backed by a renderer global on `window`.
#[cfg(feature = "csr")]
pub struct JsGlobalView {
    global: &'static str,
    handle: Option<wasm_bindgen::JsValue>,
}

#[cfg(feature = "csr")]
impl JsGlobalView {
    pub fn new(global: &'static str) -> Self {
        Self { global, handle: None }
    }

    fn failed(&self, message: String) -> ViewerError {
        ViewerError::Renderer { renderer: self.global, message }
    }
}

#[cfg(feature = "csr")]
impl ExternalView for JsGlobalView {
    fn mount(&mut self, container_id: &str, config: &Value) -> Result<(), ViewerError> {
        let renderer = js::lookup_global(self.global).ok_or(ViewerError::Unavailable(self.global))?;
        let config = js::to_js(config).map_err(|m| self.failed(m))?;
        let container = wasm_bindgen::JsValue::from_str(container_id);
        let handle = js::call_method(&renderer, "mount", &[&container, &config]).map_err(|m| self.failed(m))?;
        self.handle = Some(handle);
        Ok(())
    }

    fn update(&mut self, command: &Value) -> Result<(), ViewerError> {
        let handle = self.handle.as_ref().ok_or(ViewerError::NotMounted)?;
        let command = js::to_js(command).map_err(|m| self.failed(m))?;
        js::call_method(handle, "update", &[&command])
            .map(|_| ())
            .map_err(|m| self.failed(m))
    }

    fn dispose(&mut self) {
        if let Some(handle) = self.handle.take() {
            if let Err(message) = js::call_method(&handle, "dispose", &[]) {
                leptos::logging::warn!("{} dispose failed: {message}", self.global);
            }
        }
    }
}

/// Renderer binding for the current build target.
#[cfg(feature = "csr")]
pub fn external_view(global: &'static str) -> Box<dyn ExternalView> {
    Box::new(JsGlobalView::new(global))
}

/// Renderer binding for the current build target.
#[cfg(not(feature = "csr"))]
pub fn external_view(global: &'static str) -> Box<dyn ExternalView> {
    Box::new(UnavailableView::new(global))
}

impl ExternalView for Box<dyn ExternalView> {
    fn mount(&mut self, container_id: &str, config: &Value) -> Result<(), ViewerError> {
        (**self).mount(container_id, config)
    }

    fn update(&mut self, command: &Value) -> Result<(), ViewerError> {
        (**self).update(command)
    }

    fn dispose(&mut self) {
        (**self).dispose();
    }
}
