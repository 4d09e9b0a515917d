//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render the museum chrome (shell, dialogs, gallery cards) and
//! read shared state from the context providers set up in `app`.

pub mod artifact_card;
pub mod artifact_dialog;
pub mod artifact_grid;
pub mod external_view;
pub mod function_card;
pub mod hot_ranking;
pub mod login_dialog;
pub mod profile_dialog;
pub mod shell;
