//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration (fetching, selection, dialogs)
//! and delegates rendering details to `components`.

pub mod about;
pub mod admin;
pub mod assistant;
pub mod favorites;
mod gallery;
pub mod history;
pub mod home;
pub mod map;
pub mod settings;
pub mod viewer;
