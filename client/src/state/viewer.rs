//! Model catalogue and controls for the 3D viewer page.

#[cfg(test)]
#[path = "viewer_test.rs"]
mod viewer_test;

use serde::Serialize;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct ModelEntry {
    pub id: &'static str,
    pub name: &'static str,
    /// GLB asset served by the desktop shell.
    pub file: &'static str,
    pub description: &'static str,
    pub category: &'static str,
    pub era: &'static str,
}

pub const MODELS: [ModelEntry; 3] = [
    ModelEntry {
        id: "chinese_vase",
        name: "Chinese Vase",
        file: "/3DModels/chinese_vase.glb",
        description: "A traditional Chinese vase showing the refinement of Chinese porcelain craft",
        category: "Ceramics",
        era: "Qing",
    },
    ModelEntry {
        id: "dragon",
        name: "Chinese Dragon",
        file: "/3DModels/dragon.glb",
        description: "The traditional dragon, a symbol of power, wisdom and good fortune",
        category: "Sculpture",
        era: "Traditional",
    },
    ModelEntry {
        id: "nezha",
        name: "Nezha Conquers the Dragon King",
        file: "/3DModels/nezha_conquers_the_dragon_king.glb",
        description: "The classic scene from the Nezha legend",
        category: "Sculpture",
        era: "Mythology",
    },
];

pub fn model(id: &str) -> Option<&'static ModelEntry> {
    MODELS.iter().find(|m| m.id == id)
}

/// Instructions for the external 3D renderer.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum SceneCommand {
    LoadModel { url: &'static str },
    SetAutoRotate { enabled: bool },
    SetWireframe { enabled: bool },
    ZoomIn,
    ZoomOut,
    ResetCamera,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LoadStatus {
    Loading,
    Ready,
    Failed(String),
}

#[derive(Clone, Debug)]
pub struct ViewerState {
    pub selected: &'static ModelEntry,
    pub auto_rotate: bool,
    pub wireframe: bool,
    pub status: LoadStatus,
}

impl Default for ViewerState {
    fn default() -> Self {
        Self { selected: &MODELS[0], auto_rotate: true, wireframe: false, status: LoadStatus::Loading }
    }
}

impl ViewerState {
    /// Switch models. Returns the load command, or `None` if already shown.
    pub fn select(&mut self, id: &str) -> Option<SceneCommand> {
        let entry = model(id)?;
        if entry.id == self.selected.id {
            return None;
        }
        self.selected = entry;
        self.status = LoadStatus::Loading;
        Some(SceneCommand::LoadModel { url: entry.file })
    }

    pub fn toggle_auto_rotate(&mut self) -> SceneCommand {
        self.auto_rotate = !self.auto_rotate;
        SceneCommand::SetAutoRotate { enabled: self.auto_rotate }
    }

    pub fn toggle_wireframe(&mut self) -> SceneCommand {
        self.wireframe = !self.wireframe;
        SceneCommand::SetWireframe { enabled: self.wireframe }
    }

    /// Commands that bring a freshly mounted renderer in line with this state.
    pub fn initial_commands(&self) -> [SceneCommand; 3] {
        [
            SceneCommand::LoadModel { url: self.selected.file },
            SceneCommand::SetAutoRotate { enabled: self.auto_rotate },
            SceneCommand::SetWireframe { enabled: self.wireframe },
        ]
    }
}
