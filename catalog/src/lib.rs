//! Shared museum catalogue model, command table, and gallery layout.
//!
//! This crate owns everything the front-end knows about the backend contract
//! that does not depend on a browser: the wire DTOs returned by the desktop
//! backend, the verbatim command names with their argument envelopes, and the
//! pure gallery layout allocator. The `client` crate layers transport,
//! session handling, and rendering on top.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`model`] | Artifact, user, history, auth, and chat DTOs |
//! | [`command`] | Remote command names and typed argument builders |
//! | [`layout`] | Gallery slot allocation (card kind + grid spans) |

pub mod command;
pub mod layout;
pub mod model;

pub use command::{Command, Invocation};
pub use layout::{FunctionCard, Slot, Span, allocate};
pub use model::*;

/// Error returned when a backend payload cannot be interpreted.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    /// The JSON result of a command did not match the expected shape.
    #[error("failed to decode `{command}` response: {source}")]
    Decode {
        command: &'static str,
        #[source]
        source: serde_json::Error,
    },
}
