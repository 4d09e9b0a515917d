//! Admin artifact form state.
//!
//! Failures from create/update/delete are reported with a fixed message that
//! names the admin account, since the backend rejects them for any other
//! user.

#[cfg(test)]
#[path = "admin_test.rs"]
mod admin_test;

use catalog::{Artifact, ArtifactInput};

pub const LOAD_FAILED: &str = "Failed to load the artifact list";

pub fn forbidden_message(admin_email: &str) -> String {
    format!("This account cannot access the admin console (requires {admin_email})")
}

pub fn save_failed_message(admin_email: &str) -> String {
    format!("Save failed. Make sure you are signed in as the admin account ({admin_email})")
}

pub fn delete_failed_message(admin_email: &str) -> String {
    format!("Delete failed. Make sure you are signed in as the admin account ({admin_email})")
}

/// What the admin list shows. A bare number looks up that id, other text
/// runs a keyword search, blank lists everything.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Lookup {
    All,
    ById(i64),
    Keyword(String),
}

impl Lookup {
    pub fn parse(input: &str) -> Self {
        let input = input.trim();
        if input.is_empty() {
            return Self::All;
        }
        match input.parse::<i64>() {
            Ok(id) if id > 0 => Self::ById(id),
            _ => Self::Keyword(input.to_owned()),
        }
    }
}

/// Editable fields of the artifact form, in display order.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Field {
    Title,
    ImagePath,
    Category,
    Period,
    Dynasty,
    Location,
    Material,
    Dimensions,
    DiscoveryLocation,
    Collection,
    Description,
    DetailedDescription,
}

impl Field {
    pub const ALL: [Self; 12] = [
        Self::Title,
        Self::ImagePath,
        Self::Category,
        Self::Period,
        Self::Dynasty,
        Self::Location,
        Self::Material,
        Self::Dimensions,
        Self::DiscoveryLocation,
        Self::Collection,
        Self::Description,
        Self::DetailedDescription,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Self::Title => "Title",
            Self::ImagePath => "Image file",
            Self::Category => "Category",
            Self::Period => "Period",
            Self::Dynasty => "Dynasty",
            Self::Location => "Location",
            Self::Material => "Material",
            Self::Dimensions => "Dimensions",
            Self::DiscoveryLocation => "Discovery location",
            Self::Collection => "Collection",
            Self::Description => "Description",
            Self::DetailedDescription => "Detailed description",
        }
    }

    /// Rendered as a textarea.
    pub fn multiline(self) -> bool {
        matches!(self, Self::Description | Self::DetailedDescription)
    }

    pub fn get(self, input: &ArtifactInput) -> &str {
        match self {
            Self::Title => &input.title,
            Self::ImagePath => &input.image_path,
            Self::Category => &input.category,
            Self::Period => &input.period,
            Self::Dynasty => &input.dynasty,
            Self::Location => &input.location,
            Self::Material => &input.material,
            Self::Dimensions => &input.dimensions,
            Self::DiscoveryLocation => &input.discovery_location,
            Self::Collection => &input.collection,
            Self::Description => &input.description,
            Self::DetailedDescription => &input.detailed_description,
        }
    }

    pub fn set(self, input: &mut ArtifactInput, value: String) {
        let slot = match self {
            Self::Title => &mut input.title,
            Self::ImagePath => &mut input.image_path,
            Self::Category => &mut input.category,
            Self::Period => &mut input.period,
            Self::Dynasty => &mut input.dynasty,
            Self::Location => &mut input.location,
            Self::Material => &mut input.material,
            Self::Dimensions => &mut input.dimensions,
            Self::DiscoveryLocation => &mut input.discovery_location,
            Self::Collection => &mut input.collection,
            Self::Description => &mut input.description,
            Self::DetailedDescription => &mut input.detailed_description,
        };
        *slot = value;
    }
}

#[derive(Clone, Debug, Default)]
pub struct AdminState {
    pub form: ArtifactInput,
    /// Editing an existing artifact rather than creating one.
    pub editing: bool,
    pub error: Option<String>,
    pub busy: bool,
}

impl AdminState {
    pub fn edit(&mut self, artifact: &Artifact) {
        self.form = ArtifactInput::from(artifact);
        self.editing = true;
        self.error = None;
    }

    pub fn reset(&mut self) {
        self.form = ArtifactInput::default();
        self.editing = false;
    }

    /// Payload to send: the id is only kept when editing.
    pub fn payload(&self) -> ArtifactInput {
        let mut input = self.form.clone();
        if !self.editing {
            input.id = None;
        }
        input
    }

    /// After a delete: drop the form if it was editing the deleted artifact.
    pub fn forget(&mut self, id: i64) {
        if self.editing && self.form.id == Some(id) {
            self.reset();
        }
    }
}
