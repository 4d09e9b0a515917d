//! The single remote-call primitive used to reach the desktop backend.
//!
//! Browser builds (`csr`): calls go through the shell bridge exposed at
//! `window.__TAURI__.core.invoke`. Other builds get [`UnavailableTransport`],
//! which rejects every call, so views degrade to their error state instead
//! of panicking.
//!
//! Payloads cross the bridge as JSON text to keep the wire shape identical to
//! what `catalog` builds and tests.

use async_trait::async_trait;
use serde_json::Value;

/// Dispatch a named command with a JSON argument object.
///
/// Futures are not `Send`: everything runs on the UI event loop.
#[async_trait(?Send)]
pub trait Transport: Send + Sync {
    /// # Errors
    ///
    /// Returns the backend's (or bridge's) error message on rejection.
    async fn invoke(&self, command: &str, args: Value) -> Result<Value, String>;
}

/// Transport used when no desktop shell is present.
#[derive(Clone, Copy, Debug, Default)]
pub struct UnavailableTransport;

pub const UNAVAILABLE_MESSAGE: &str = "backend is only available inside the desktop app";

#[async_trait(?Send)]
impl Transport for UnavailableTransport {
    async fn invoke(&self, _command: &str, _args: Value) -> Result<Value, String> {
        Err(UNAVAILABLE_MESSAGE.to_owned())
    }
}

#[cfg(feature = "csr")]
mod bridge {
    use wasm_bindgen::prelude::*;

    #[wasm_bindgen]
    extern "C" {
        #[wasm_bindgen(catch, js_namespace = ["window", "__TAURI__", "core"], js_name = invoke)]
        pub async fn shell_invoke(cmd: &str, args: JsValue) -> Result<JsValue, JsValue>;
    }

    pub fn error_message(err: &JsValue) -> String {
        err.as_string().unwrap_or_else(|| format!("{err:?}"))
    }
}

/// Transport backed by the desktop shell's `invoke` bridge.
#[cfg(feature = "csr")]
#[derive(Clone, Copy, Debug, Default)]
pub struct ShellTransport;

#[cfg(feature = "csr")]
#[async_trait(?Send)]
impl Transport for ShellTransport {
    async fn invoke(&self, command: &str, args: Value) -> Result<Value, String> {
        let raw = serde_json::to_string(&args).map_err(|e| e.to_string())?;
        let js_args = js_sys::JSON::parse(&raw).map_err(|e| bridge::error_message(&e))?;
        let result = bridge::shell_invoke(command, js_args)
            .await
            .map_err(|e| bridge::error_message(&e))?;
        if result.is_undefined() || result.is_null() {
            return Ok(Value::Null);
        }
        let text: String = js_sys::JSON::stringify(&result)
            .map_err(|e| bridge::error_message(&e))?
            .into();
        serde_json::from_str(&text).map_err(|e| e.to_string())
    }
}

/// Transport the app wires up for the current build target.
#[cfg(feature = "csr")]
pub type DefaultTransport = ShellTransport;

/// Transport the app wires up for the current build target.
#[cfg(not(feature = "csr"))]
pub type DefaultTransport = UnavailableTransport;
