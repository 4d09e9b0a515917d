//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by domain (`auth`, `artifacts`, `chat`, etc.) so
//! components depend on small focused models. Plain structs here are wrapped
//! in `RwSignal`s by `app` and handed out through context; `session` is the
//! exception, a shared handle rather than reactive state.

pub mod admin;
pub mod artifacts;
pub mod auth;
pub mod chat;
pub mod history;
pub mod map;
pub mod session;
pub mod settings;
pub mod ui;
pub mod viewer;
