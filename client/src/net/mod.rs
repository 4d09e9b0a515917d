//! Networking modules for the desktop backend command surface.
//!
//! SYSTEM CONTEXT
//! ==============
//! `transport` owns the single `invoke(command, args)` primitive, `api`
//! layers typed operations and session checks on top, and `error` defines
//! what views see when a call fails.

pub mod api;
pub mod error;
#[cfg(test)]
pub(crate) mod mock;
pub mod transport;

pub use api::MuseumApi;
pub use error::ApiError;
