//! Typed operations over the backend command surface.
//!
//! SYSTEM CONTEXT
//! ==============
//! Pages and components never touch the transport directly; they call
//! `MuseumApi` methods, which build the argument envelope via
//! `catalog::Invocation`, attach the session token where needed and decode
//! the reply.
//!
//! ERROR HANDLING
//! ==============
//! `call` checks `Command::requires_token` before dispatch. With no token a
//! privileged call is rejected with `ApiError::NotLoggedIn`, the session's
//! unauthorized hook fires, and nothing is dispatched. Transport rejections become
//! `ApiError::Remote` carrying the backend's message unchanged.

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use std::sync::Arc;

use catalog::{
    ArtifactInput, ArtifactWithFavorite, AuthResponse, ChatMessage, ChatResponse, HistoryItem, Invocation,
    LoginRequest, ProfileUpdate, RegisterRequest, SearchParams, User,
};
use serde::de::{DeserializeOwned, IgnoredAny};

use super::error::ApiError;
use super::transport::Transport;
use crate::state::session::Session;

/// Client handle for the backend. Cheap to clone; provided as context.
#[derive(Clone)]
pub struct MuseumApi {
    transport: Arc<dyn Transport>,
    session: Session,
}

impl MuseumApi {
    pub fn new(transport: Arc<dyn Transport>, session: Session) -> Self {
        Self { transport, session }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    async fn call<T: DeserializeOwned>(&self, invocation: Invocation) -> Result<T, ApiError> {
        let Invocation { command, args } = invocation;
        if command.requires_token() && !self.session.is_logged_in() {
            self.session.notify_unauthorized();
            return Err(ApiError::NotLoggedIn);
        }
        let value = self
            .transport
            .invoke(command.name(), args)
            .await
            .map_err(|message| ApiError::Remote { command, message })?;
        Ok(command.decode(value)?)
    }

    /// Commands whose reply carries nothing the client reads.
    async fn call_unit(&self, invocation: Invocation) -> Result<(), ApiError> {
        self.call::<IgnoredAny>(invocation).await.map(|_| ())
    }

    /// Token for privileged builders. Empty without a session; `call`
    /// rejects those before anything is sent.
    fn bearer(&self) -> String {
        self.session.token().unwrap_or_default()
    }

    // =========================================================================
    // Artifacts
    // =========================================================================

    /// List artifacts. The token is optional; with it the backend fills in
    /// each artifact's favorite flag for the current user.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] when the backend rejects the call or replies with
    /// an unexpected payload.
    pub async fn get_artifacts(&self, params: &SearchParams) -> Result<Vec<ArtifactWithFavorite>, ApiError> {
        let token = self.session.token();
        self.call(Invocation::get_artifacts(params, token.as_deref())).await
    }

    /// # Errors
    ///
    /// Returns [`ApiError`] on backend rejection or decode failure.
    pub async fn get_artifact_by_id(&self, id: i64) -> Result<Option<ArtifactWithFavorite>, ApiError> {
        self.call(Invocation::get_artifact_by_id(id)).await
    }

    /// # Errors
    ///
    /// Returns [`ApiError`] on backend rejection or decode failure.
    pub async fn search_artifacts(&self, query: &str) -> Result<Vec<ArtifactWithFavorite>, ApiError> {
        self.call(Invocation::search_artifacts(query)).await
    }

    /// Flip the favorite flag; resolves to the new state.
    ///
    /// # Errors
    ///
    /// [`ApiError::NotLoggedIn`] without a session, otherwise backend errors.
    pub async fn toggle_favorite(&self, artifact_id: i64) -> Result<bool, ApiError> {
        self.call(Invocation::toggle_favorite(artifact_id, &self.bearer())).await
    }

    /// # Errors
    ///
    /// [`ApiError::NotLoggedIn`] without a session, otherwise backend errors.
    pub async fn create_artifact(&self, input: &ArtifactInput) -> Result<ArtifactWithFavorite, ApiError> {
        self.call(Invocation::create_artifact(input, &self.bearer())).await
    }

    /// # Errors
    ///
    /// [`ApiError::NotLoggedIn`] without a session, otherwise backend errors.
    pub async fn update_artifact(&self, input: &ArtifactInput) -> Result<ArtifactWithFavorite, ApiError> {
        self.call(Invocation::update_artifact(input, &self.bearer())).await
    }

    /// # Errors
    ///
    /// [`ApiError::NotLoggedIn`] without a session, otherwise backend errors.
    pub async fn delete_artifact(&self, id: i64) -> Result<bool, ApiError> {
        self.call(Invocation::delete_artifact(id, &self.bearer())).await
    }

    // =========================================================================
    // Accounts
    // =========================================================================

    /// Authenticate and store the issued token.
    ///
    /// # Errors
    ///
    /// Returns the backend's rejection (bad credentials, unknown account).
    pub async fn login(&self, request: &LoginRequest) -> Result<AuthResponse, ApiError> {
        let response: AuthResponse = self.call(Invocation::login(request)).await?;
        self.session.set_token(&response.token);
        Ok(response)
    }

    /// Create an account and store the issued token.
    ///
    /// # Errors
    ///
    /// Returns the backend's rejection (duplicate email, bad input).
    pub async fn register(&self, request: &RegisterRequest) -> Result<AuthResponse, ApiError> {
        let response: AuthResponse = self.call(Invocation::register(request)).await?;
        self.session.set_token(&response.token);
        Ok(response)
    }

    /// Resolve the user behind the stored token. No token means no user and
    /// no backend call.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] when the backend rejects the token.
    pub async fn get_current_user(&self) -> Result<Option<User>, ApiError> {
        let Some(token) = self.session.token() else {
            return Ok(None);
        };
        self.call(Invocation::get_current_user(&token)).await
    }

    /// End the session on the backend, then forget the token locally.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] when the backend rejects the call; the token is
    /// kept in that case.
    pub async fn logout(&self) -> Result<(), ApiError> {
        let Some(token) = self.session.token() else {
            return Ok(());
        };
        self.call_unit(Invocation::logout(&token)).await?;
        self.session.clear_token();
        Ok(())
    }

    /// # Errors
    ///
    /// [`ApiError::NotLoggedIn`] without a session, otherwise backend errors.
    pub async fn update_profile(&self, update: &ProfileUpdate) -> Result<User, ApiError> {
        self.call(Invocation::update_profile(update, &self.bearer())).await
    }

    // =========================================================================
    // History
    // =========================================================================

    /// # Errors
    ///
    /// [`ApiError::NotLoggedIn`] without a session, otherwise backend errors.
    pub async fn add_to_history(&self, artifact_id: i64) -> Result<(), ApiError> {
        self.call_unit(Invocation::add_to_history(artifact_id, &self.bearer())).await
    }

    /// # Errors
    ///
    /// [`ApiError::NotLoggedIn`] without a session, otherwise backend errors.
    pub async fn get_browsing_history(&self) -> Result<Vec<HistoryItem>, ApiError> {
        self.call(Invocation::get_browsing_history(&self.bearer())).await
    }

    /// # Errors
    ///
    /// [`ApiError::NotLoggedIn`] without a session, otherwise backend errors.
    pub async fn clear_browsing_history(&self) -> Result<(), ApiError> {
        self.call_unit(Invocation::clear_browsing_history(&self.bearer())).await
    }

    // =========================================================================
    // Assistant
    // =========================================================================

    /// Ask the assistant; resolves to the reply text.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] on backend rejection or a reply without `response`.
    pub async fn chat_with_ai(&self, message: &str, history: &[ChatMessage]) -> Result<String, ApiError> {
        let reply: ChatResponse = self.call(Invocation::chat_with_ai(message, history)).await?;
        Ok(reply.response)
    }
}
