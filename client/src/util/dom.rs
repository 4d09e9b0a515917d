//! Small browser helpers: confirm prompts, file download and file upload.
//!
//! Outside the browser these degrade to refusals so callers need no
//! feature gating of their own.

#[cfg(feature = "csr")]
use wasm_bindgen::{JsCast, JsValue};

pub const BROWSER_ONLY: &str = "only available in the browser";

#[cfg(feature = "csr")]
fn describe(err: &JsValue) -> String {
    err.as_string().unwrap_or_else(|| format!("{err:?}"))
}

/// Ask the user to confirm `message`. Defaults to `false` when no dialog
/// can be shown.
#[cfg_attr(not(feature = "csr"), allow(unused_variables))]
pub fn confirm(message: &str) -> bool {
    #[cfg(feature = "csr")]
    {
        web_sys::window()
            .and_then(|w| w.confirm_with_message(message).ok())
            .unwrap_or(false)
    }
    #[cfg(not(feature = "csr"))]
    {
        false
    }
}

/// Offer `text` as a JSON file download named `filename`.
///
/// # Errors
///
/// Returns a description of the failing browser call.
#[cfg(feature = "csr")]
pub fn download_json(filename: &str, text: &str) -> Result<(), String> {
    let parts = js_sys::Array::of1(&JsValue::from_str(text));
    let options = web_sys::BlobPropertyBag::new();
    options.set_type("application/json");
    let blob = web_sys::Blob::new_with_str_sequence_and_options(&parts, &options).map_err(|e| describe(&e))?;
    let url = web_sys::Url::create_object_url_with_blob(&blob).map_err(|e| describe(&e))?;

    let document = web_sys::window()
        .and_then(|w| w.document())
        .ok_or_else(|| "no document".to_owned())?;
    let anchor = document
        .create_element("a")
        .map_err(|e| describe(&e))?
        .dyn_into::<web_sys::HtmlAnchorElement>()
        .map_err(|_| "anchor element expected".to_owned())?;
    anchor.set_href(&url);
    anchor.set_download(filename);
    anchor.click();

    web_sys::Url::revoke_object_url(&url).map_err(|e| describe(&e))
}

/// # Errors
///
/// Always: there is no browser to download into.
#[cfg(not(feature = "csr"))]
pub fn download_json(_filename: &str, _text: &str) -> Result<(), String> {
    Err(BROWSER_ONLY.to_owned())
}

/// Read the first file selected in the `<input type="file">` that fired
/// `ev`. Resolves to `Ok(None)` when nothing was picked.
///
/// # Errors
///
/// Returns a description of the failing browser call.
#[cfg(feature = "csr")]
pub async fn read_selected_file(ev: &leptos::ev::Event) -> Result<Option<String>, String> {
    let input = ev
        .target()
        .and_then(|t| t.dyn_into::<web_sys::HtmlInputElement>().ok())
        .ok_or_else(|| "file input expected".to_owned())?;
    let Some(file) = input.files().and_then(|files| files.get(0)) else {
        return Ok(None);
    };
    // Let the same file be picked again later.
    input.set_value("");
    let text = wasm_bindgen_futures::JsFuture::from(file.text())
        .await
        .map_err(|e| describe(&e))?;
    Ok(text.as_string())
}

/// # Errors
///
/// Always: there is no file picker outside the browser.
#[cfg(not(feature = "csr"))]
pub async fn read_selected_file(_ev: &leptos::ev::Event) -> Result<Option<String>, String> {
    Err(BROWSER_ONLY.to_owned())
}
