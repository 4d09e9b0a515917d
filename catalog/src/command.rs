//! Remote command table for the desktop backend.
//!
//! SYSTEM CONTEXT
//! ==============
//! The backend exposes named commands reached through one `invoke(name, args)`
//! primitive. Names are matched verbatim. Top-level argument keys use the
//! shell's camelCase convention (`artifactId`), which the backend maps onto
//! its snake_case parameters; nested payloads (`params`, `request`,
//! `artifact`) are plain serde structs and keep snake_case fields.

#[cfg(test)]
#[path = "command_test.rs"]
mod command_test;

use serde::de::DeserializeOwned;
use serde_json::{Map, Value, json};

use crate::CatalogError;
use crate::model::{ArtifactInput, ChatMessage, ChatRequest, LoginRequest, ProfileUpdate, RegisterRequest, SearchParams};

/// Every backend command the client calls.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Command {
    GetArtifacts,
    GetArtifactById,
    SearchArtifacts,
    ToggleFavorite,
    CreateArtifact,
    UpdateArtifact,
    DeleteArtifact,
    Login,
    Register,
    GetCurrentUser,
    Logout,
    UpdateProfile,
    AddToHistory,
    GetBrowsingHistory,
    ClearBrowsingHistory,
    ChatWithAi,
}

impl Command {
    pub const ALL: [Self; 16] = [
        Self::GetArtifacts,
        Self::GetArtifactById,
        Self::SearchArtifacts,
        Self::ToggleFavorite,
        Self::CreateArtifact,
        Self::UpdateArtifact,
        Self::DeleteArtifact,
        Self::Login,
        Self::Register,
        Self::GetCurrentUser,
        Self::Logout,
        Self::UpdateProfile,
        Self::AddToHistory,
        Self::GetBrowsingHistory,
        Self::ClearBrowsingHistory,
        Self::ChatWithAi,
    ];

    /// Backend command name.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::GetArtifacts => "get_artifacts",
            Self::GetArtifactById => "get_artifact_by_id",
            Self::SearchArtifacts => "search_artifacts",
            Self::ToggleFavorite => "toggle_favorite",
            Self::CreateArtifact => "create_artifact",
            Self::UpdateArtifact => "update_artifact",
            Self::DeleteArtifact => "delete_artifact",
            Self::Login => "login",
            Self::Register => "register",
            Self::GetCurrentUser => "get_current_user",
            Self::Logout => "logout",
            Self::UpdateProfile => "update_profile",
            Self::AddToHistory => "add_to_history",
            Self::GetBrowsingHistory => "get_browsing_history",
            Self::ClearBrowsingHistory => "clear_browsing_history",
            Self::ChatWithAi => "chat_with_ai",
        }
    }

    /// Whether the command must carry a session token. The client gateway
    /// refuses to dispatch these without one.
    ///
    /// `get_artifacts` accepts an optional token, and `get_current_user` /
    /// `logout` short-circuit client-side when no token exists, so none of
    /// those count as privileged here.
    #[must_use]
    pub fn requires_token(self) -> bool {
        matches!(
            self,
            Self::ToggleFavorite
                | Self::CreateArtifact
                | Self::UpdateArtifact
                | Self::DeleteArtifact
                | Self::UpdateProfile
                | Self::AddToHistory
                | Self::GetBrowsingHistory
                | Self::ClearBrowsingHistory
        )
    }

    /// Decode a JSON result for this command.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::Decode`] when the value does not match `T`.
    pub fn decode<T: DeserializeOwned>(self, value: Value) -> Result<T, CatalogError> {
        serde_json::from_value(value).map_err(|source| CatalogError::Decode { command: self.name(), source })
    }
}

impl std::fmt::Display for Command {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// A command plus its argument object, ready for the transport.
#[derive(Clone, Debug, PartialEq)]
pub struct Invocation {
    pub command: Command,
    pub args: Value,
}

impl Invocation {
    fn new(command: Command, args: Value) -> Self {
        Self { command, args }
    }

    #[must_use]
    pub fn get_artifacts(params: &SearchParams, token: Option<&str>) -> Self {
        Self::new(Command::GetArtifacts, json!({ "params": params, "token": token }))
    }

    #[must_use]
    pub fn get_artifact_by_id(id: i64) -> Self {
        Self::new(Command::GetArtifactById, json!({ "id": id }))
    }

    #[must_use]
    pub fn search_artifacts(query: &str) -> Self {
        Self::new(Command::SearchArtifacts, json!({ "query": query }))
    }

    #[must_use]
    pub fn toggle_favorite(artifact_id: i64, token: &str) -> Self {
        Self::new(Command::ToggleFavorite, json!({ "artifactId": artifact_id, "token": token }))
    }

    #[must_use]
    pub fn create_artifact(artifact: &ArtifactInput, token: &str) -> Self {
        Self::new(Command::CreateArtifact, json!({ "artifact": artifact, "token": token }))
    }

    #[must_use]
    pub fn update_artifact(artifact: &ArtifactInput, token: &str) -> Self {
        Self::new(Command::UpdateArtifact, json!({ "artifact": artifact, "token": token }))
    }

    #[must_use]
    pub fn delete_artifact(id: i64, token: &str) -> Self {
        Self::new(Command::DeleteArtifact, json!({ "id": id, "token": token }))
    }

    #[must_use]
    pub fn login(request: &LoginRequest) -> Self {
        Self::new(Command::Login, json!({ "request": request }))
    }

    #[must_use]
    pub fn register(request: &RegisterRequest) -> Self {
        Self::new(Command::Register, json!({ "request": request }))
    }

    #[must_use]
    pub fn get_current_user(token: &str) -> Self {
        Self::new(Command::GetCurrentUser, json!({ "token": token }))
    }

    #[must_use]
    pub fn logout(token: &str) -> Self {
        Self::new(Command::Logout, json!({ "token": token }))
    }

    /// Profile edit; only fields that are set are sent.
    #[must_use]
    pub fn update_profile(update: &ProfileUpdate, token: &str) -> Self {
        let mut args = Map::new();
        args.insert("token".to_owned(), Value::String(token.to_owned()));
        if let Some(username) = &update.username {
            args.insert("username".to_owned(), Value::String(username.clone()));
        }
        if let Some(email) = &update.email {
            args.insert("email".to_owned(), Value::String(email.clone()));
        }
        Self::new(Command::UpdateProfile, Value::Object(args))
    }

    #[must_use]
    pub fn add_to_history(artifact_id: i64, token: &str) -> Self {
        Self::new(Command::AddToHistory, json!({ "artifactId": artifact_id, "token": token }))
    }

    #[must_use]
    pub fn get_browsing_history(token: &str) -> Self {
        Self::new(Command::GetBrowsingHistory, json!({ "token": token }))
    }

    #[must_use]
    pub fn clear_browsing_history(token: &str) -> Self {
        Self::new(Command::ClearBrowsingHistory, json!({ "token": token }))
    }

    #[must_use]
    pub fn chat_with_ai(message: &str, history: &[ChatMessage]) -> Self {
        let request = ChatRequest { message: message.to_owned(), conversation_history: history.to_vec() };
        Self::new(Command::ChatWithAi, json!({ "request": request }))
    }
}
