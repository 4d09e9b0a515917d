//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser/environment concerns (storage, theme,
//! external renderers, clocks) from page and component logic so the logic
//! stays testable off the browser.

pub mod dom;
pub mod markdown;
pub mod storage;
pub mod theme;
pub mod time;
pub mod validate;
pub mod viewer;
