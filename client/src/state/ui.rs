//! Shell chrome state: header search, account dialogs, sidebar, toast.
//!
//! DESIGN
//! ======
//! Transient presentation concerns stay out of `auth` and `artifacts` so
//! page logic can change without touching the shell.

#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

/// Toast shown after a successful login.
pub const LOGIN_TOAST_MS: u32 = 3_000;
/// Toast shown after logout.
pub const LOGOUT_TOAST_MS: u32 = 2_000;
/// A failed favorite toggle stays up a little longer.
pub const FAVORITE_TOAST_MS: u32 = 4_000;
/// Toast shown after a profile edit.
pub const PROFILE_TOAST_MS: u32 = 2_000;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Toast {
    pub message: String,
    /// Increments per toast so a stale timer never hides a newer one.
    pub seq: u64,
}

#[derive(Clone, Debug)]
pub struct UiState {
    /// Header search box; drives the gallery query.
    pub search_query: String,
    pub login_open: bool,
    pub profile_open: bool,
    pub sidebar_collapsed: bool,
    pub toast: Option<Toast>,
    pub toast_seq: u64,
}

impl Default for UiState {
    fn default() -> Self {
        Self {
            search_query: String::new(),
            login_open: false,
            profile_open: false,
            sidebar_collapsed: false,
            toast: None,
            toast_seq: 0,
        }
    }
}

impl UiState {
    /// Show `message` and return its sequence number for the hide timer.
    pub fn show_toast(&mut self, message: impl Into<String>) -> u64 {
        self.toast_seq += 1;
        self.toast = Some(Toast { message: message.into(), seq: self.toast_seq });
        self.toast_seq
    }

    /// Hide the toast only if it is still the one identified by `seq`.
    pub fn hide_toast(&mut self, seq: u64) {
        if self.toast.as_ref().is_some_and(|t| t.seq == seq) {
            self.toast = None;
        }
    }
}
