//! Errors surfaced by the command gateway.
//!
//! ERROR HANDLING
//! ==============
//! `Display` output is what views show inline, so messages are short and
//! user-facing. `NotLoggedIn` is produced locally before any dispatch.

use catalog::{CatalogError, Command};

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// A privileged command was attempted without a session token.
    #[error("not logged in")]
    NotLoggedIn,
    /// The backend (or the shell bridge) rejected the call.
    #[error("{message}")]
    Remote { command: Command, message: String },
    /// The backend answered with an unexpected payload.
    #[error(transparent)]
    Decode(#[from] CatalogError),
}

impl ApiError {
    #[must_use]
    pub fn is_not_logged_in(&self) -> bool {
        matches!(self, Self::NotLoggedIn)
    }
}
