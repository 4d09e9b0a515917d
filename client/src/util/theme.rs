//! Colour theme resolution and application.
//!
//! The chosen [`Theme`] is persisted by the settings layer; this module only
//! decides whether it means dark and toggles the `dark` class on `<html>`.
//! Browser-only; non-`csr` builds resolve `System` to light and `apply` is a
//! no-op.

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    Light,
    Dark,
    #[default]
    System,
}

impl Theme {
    pub const ALL: [Self; 3] = [Self::Light, Self::Dark, Self::System];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
            Self::System => "system",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Light => "Light",
            Self::Dark => "Dark",
            Self::System => "System",
        }
    }

    pub fn parse(raw: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.as_str() == raw)
    }
}

/// Whether `theme` renders dark given the system preference.
pub fn resolve(theme: Theme, system_prefers_dark: bool) -> bool {
    match theme {
        Theme::Light => false,
        Theme::Dark => true,
        Theme::System => system_prefers_dark,
    }
}

/// `prefers-color-scheme: dark` as reported by the webview.
pub fn system_prefers_dark() -> bool {
    #[cfg(feature = "csr")]
    {
        web_sys::window()
            .and_then(|w| w.match_media("(prefers-color-scheme: dark)").ok().flatten())
            .is_some_and(|mq| mq.matches())
    }
    #[cfg(not(feature = "csr"))]
    {
        false
    }
}

/// Toggle the `dark` class on the document element.
#[cfg_attr(not(feature = "csr"), allow(unused_variables))]
pub fn apply(theme: Theme) {
    let dark = resolve(theme, system_prefers_dark());
    #[cfg(feature = "csr")]
    {
        if let Some(el) = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.document_element())
        {
            if el.class_list().toggle_with_force("dark", dark).is_err() {
                leptos::logging::warn!("failed to apply theme {}", theme.as_str());
            }
        }
    }
}
