//! Wire DTOs exchanged with the desktop backend.
//!
//! DESIGN
//! ======
//! Field names mirror the backend's serde output exactly (snake_case), so
//! every type round-trips through `serde_json` without custom adapters.
//! Timestamps stay as the backend's RFC 3339 strings; the client never does
//! date arithmetic on artifacts, only on history entries (see `client`).

#[cfg(test)]
#[path = "model_test.rs"]
mod model_test;

use serde::{Deserialize, Serialize};

/// Directory the desktop shell serves artifact images from.
pub const IMAGES_DIR: &str = "/images";

/// A catalogued museum object.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Artifact {
    pub id: i64,
    pub title: String,
    pub image_path: String,
    pub period: String,
    pub dynasty: String,
    pub location: String,
    pub description: String,
    pub detailed_description: String,
    pub material: String,
    pub dimensions: String,
    pub discovery_location: String,
    pub collection: String,
    pub category: String,
    pub created_at: String,
    pub updated_at: String,
}

impl Artifact {
    /// Image URL under `images_dir` with a cache-busting query parameter.
    #[must_use]
    pub fn image_url(&self, images_dir: &str, cache_bust: u64) -> String {
        image_url(images_dir, &self.image_path, cache_bust)
    }
}

/// An artifact plus the per-user favorite flag computed by the backend.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ArtifactWithFavorite {
    #[serde(flatten)]
    pub artifact: Artifact,
    pub is_favorite: bool,
}

impl ArtifactWithFavorite {
    #[must_use]
    pub fn id(&self) -> i64 {
        self.artifact.id
    }
}

impl std::ops::Deref for ArtifactWithFavorite {
    type Target = Artifact;

    fn deref(&self) -> &Artifact {
        &self.artifact
    }
}

/// Build the URL for an artifact image file.
///
/// A fresh `cache_bust` value per render keeps the webview from serving a
/// stale image after an admin replaces the file under the same name.
#[must_use]
pub fn image_url(images_dir: &str, image_path: &str, cache_bust: u64) -> String {
    let dir = images_dir.trim_end_matches('/');
    let file = image_path.trim_start_matches('/');
    format!("{dir}/{file}?t={cache_bust}")
}

/// An authenticated user account.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    pub username: String,
    pub email: String,
    pub created_at: String,
}

/// One entry of the per-user browsing log.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct HistoryItem {
    pub id: i64,
    pub artifact: ArtifactWithFavorite,
    pub viewed_at: String,
}

/// Gallery category filter.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    #[default]
    All,
    Ceramics,
    Bronze,
    Jade,
    Calligraphy,
    Sculpture,
}

impl Category {
    pub const ALL: [Self; 6] = [
        Self::All,
        Self::Ceramics,
        Self::Bronze,
        Self::Jade,
        Self::Calligraphy,
        Self::Sculpture,
    ];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Ceramics => "ceramics",
            Self::Bronze => "bronze",
            Self::Jade => "jade",
            Self::Calligraphy => "calligraphy",
            Self::Sculpture => "sculpture",
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::All => "All",
            Self::Ceramics => "Ceramics",
            Self::Bronze => "Bronze",
            Self::Jade => "Jade",
            Self::Calligraphy => "Calligraphy",
            Self::Sculpture => "Sculpture",
        }
    }

    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.as_str() == raw)
    }
}

/// Filters for `get_artifacts`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchParams {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub query: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<Category>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dynasty: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub favorites_only: Option<bool>,
}

impl SearchParams {
    /// Gallery listing: all categories, optional free-text query.
    #[must_use]
    pub fn gallery(query: &str) -> Self {
        let query = query.trim();
        Self {
            query: (!query.is_empty()).then(|| query.to_owned()),
            category: Some(Category::All),
            dynasty: None,
            favorites_only: Some(false),
        }
    }

    /// The current user's favorites only.
    #[must_use]
    pub fn favorites() -> Self {
        Self { favorites_only: Some(true), ..Self::default() }
    }
}

/// Create/update payload for the admin artifact form.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArtifactInput {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    pub title: String,
    pub image_path: String,
    pub period: String,
    pub dynasty: String,
    pub location: String,
    pub description: String,
    pub detailed_description: String,
    pub material: String,
    pub dimensions: String,
    pub discovery_location: String,
    pub collection: String,
    pub category: String,
}

impl From<&Artifact> for ArtifactInput {
    fn from(a: &Artifact) -> Self {
        Self {
            id: Some(a.id),
            title: a.title.clone(),
            image_path: a.image_path.clone(),
            period: a.period.clone(),
            dynasty: a.dynasty.clone(),
            location: a.location.clone(),
            description: a.description.clone(),
            detailed_description: a.detailed_description.clone(),
            material: a.material.clone(),
            dimensions: a.dimensions.clone(),
            discovery_location: a.discovery_location.clone(),
            collection: a.collection.clone(),
            category: a.category.clone(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegisterRequest {
    pub username: String,
    pub email: String,
    pub password: String,
}

/// Result of a successful `login` or `register`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthResponse {
    pub user: User,
    pub token: String,
}

/// Partial profile edit; `None` fields are left unchanged by the backend.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileUpdate {
    pub username: Option<String>,
    pub email: Option<String>,
}

/// Speaker of a chat message.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChatRole {
    User,
    Assistant,
}

/// One turn of assistant conversation history sent with each prompt.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: ChatRole,
    pub content: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatRequest {
    pub message: String,
    pub conversation_history: Vec<ChatMessage>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatResponse {
    pub response: String,
}
