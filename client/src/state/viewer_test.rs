use super::*;

#[test]
fn catalogue_has_three_models() {
    assert_eq!(MODELS.len(), 3);
    assert_eq!(model("dragon").map(|m| m.file), Some("/3DModels/dragon.glb"));
    assert!(model("teapot").is_none());
}

#[test]
fn defaults_rotate_without_wireframe() {
    let state = ViewerState::default();
    assert_eq!(state.selected.id, "chinese_vase");
    assert!(state.auto_rotate);
    assert!(!state.wireframe);
    assert_eq!(state.status, LoadStatus::Loading);
}

#[test]
fn select_emits_load_once() {
    let mut state = ViewerState { status: LoadStatus::Ready, ..ViewerState::default() };
    assert_eq!(state.select("nezha"), Some(SceneCommand::LoadModel { url: "/3DModels/nezha_conquers_the_dragon_king.glb" }));
    assert_eq!(state.status, LoadStatus::Loading);
    assert_eq!(state.select("nezha"), None);
    assert_eq!(state.select("unknown"), None);
    assert_eq!(state.selected.id, "nezha");
}

#[test]
fn toggles_flip_and_report() {
    let mut state = ViewerState::default();
    assert_eq!(state.toggle_auto_rotate(), SceneCommand::SetAutoRotate { enabled: false });
    assert_eq!(state.toggle_wireframe(), SceneCommand::SetWireframe { enabled: true });
}

#[test]
fn commands_serialize_tagged() {
    assert_eq!(
        serde_json::to_value(SceneCommand::SetWireframe { enabled: true }).expect("json"),
        serde_json::json!({ "type": "set_wireframe", "enabled": true })
    );
    assert_eq!(
        serde_json::to_value(SceneCommand::ResetCamera).expect("json"),
        serde_json::json!({ "type": "reset_camera" })
    );
}

#[test]
fn initial_commands_mirror_state() {
    let state = ViewerState::default();
    let [load, rotate, wire] = state.initial_commands();
    assert_eq!(load, SceneCommand::LoadModel { url: "/3DModels/chinese_vase.glb" });
    assert_eq!(rotate, SceneCommand::SetAutoRotate { enabled: true });
    assert_eq!(wire, SceneCommand::SetWireframe { enabled: false });
}
