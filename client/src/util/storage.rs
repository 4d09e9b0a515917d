//! Durable key/value storage behind a small trait.
//!
//! SYSTEM CONTEXT
//! ==============
//! The session token and user preferences live in the webview's
//! `localStorage`. `Session` and the settings page depend on [`Storage`]
//! rather than on `web_sys`, so both run under plain `cargo test` against
//! [`MemoryStorage`].

#[cfg(test)]
#[path = "storage_test.rs"]
mod storage_test;

use std::collections::BTreeMap;
use std::sync::{Mutex, PoisonError};

/// String key/value store. Writes are best-effort; failures are logged by
/// the implementation, never returned.
pub trait Storage: Send + Sync {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str);
    fn remove(&self, key: &str);
    fn clear(&self);
    /// Every stored pair, in no particular order.
    fn entries(&self) -> Vec<(String, String)>;
}

/// In-process store used by tests and non-browser builds.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    items: Mutex<BTreeMap<String, String>>,
}

impl MemoryStorage {
    fn items(&self) -> std::sync::MutexGuard<'_, BTreeMap<String, String>> {
        self.items.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Storage for MemoryStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.items().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) {
        self.items().insert(key.to_owned(), value.to_owned());
    }

    fn remove(&self, key: &str) {
        self.items().remove(key);
    }

    fn clear(&self) {
        self.items().clear();
    }

    fn entries(&self) -> Vec<(String, String)> {
        self.items().iter().map(|(k, v)| (k.clone(), v.clone())).collect()
    }
}

/// The webview's `localStorage`.
#[cfg(feature = "csr")]
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserStorage;

#[cfg(feature = "csr")]
impl BrowserStorage {
    fn local() -> Option<web_sys::Storage> {
        web_sys::window().and_then(|w| w.local_storage().ok().flatten())
    }
}

#[cfg(feature = "csr")]
impl Storage for BrowserStorage {
    fn get(&self, key: &str) -> Option<String> {
        Self::local()?.get_item(key).ok().flatten()
    }

    fn set(&self, key: &str, value: &str) {
        let Some(storage) = Self::local() else {
            return;
        };
        if storage.set_item(key, value).is_err() {
            leptos::logging::warn!("localStorage write failed for {key}");
        }
    }

    fn remove(&self, key: &str) {
        if let Some(storage) = Self::local() {
            if storage.remove_item(key).is_err() {
                leptos::logging::warn!("localStorage remove failed for {key}");
            }
        }
    }

    fn clear(&self) {
        if let Some(storage) = Self::local() {
            if storage.clear().is_err() {
                leptos::logging::warn!("localStorage clear failed");
            }
        }
    }

    fn entries(&self) -> Vec<(String, String)> {
        let Some(storage) = Self::local() else {
            return Vec::new();
        };
        let len = storage.length().unwrap_or(0);
        (0..len)
            .filter_map(|i| storage.key(i).ok().flatten())
            .filter_map(|key| {
                let value = storage.get_item(&key).ok().flatten()?;
                Some((key, value))
            })
            .collect()
    }
}

/// Store the app wires up for the current build target.
#[cfg(feature = "csr")]
pub type DefaultStorage = BrowserStorage;

/// Store the app wires up for the current build target.
#[cfg(not(feature = "csr"))]
pub type DefaultStorage = MemoryStorage;
