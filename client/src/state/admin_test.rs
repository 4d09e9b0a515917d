use super::*;
use crate::test_support::artifact;

#[test]
fn new_form_creates() {
    let state = AdminState::default();
    assert!(!state.editing);
    assert_eq!(state.payload().id, None);
}

#[test]
fn edit_copies_artifact_and_keeps_id() {
    let mut state = AdminState::default();
    state.edit(&artifact(7));
    assert!(state.editing);
    let payload = state.payload();
    assert_eq!(payload.id, Some(7));
    assert_eq!(payload.title, "Artifact 7");
}

#[test]
fn payload_drops_stale_id_when_creating() {
    let mut state = AdminState::default();
    state.form.id = Some(3);
    assert_eq!(state.payload().id, None);
}

#[test]
fn forget_resets_only_matching_edit() {
    let mut state = AdminState::default();
    state.edit(&artifact(7));
    state.forget(8);
    assert!(state.editing);
    state.forget(7);
    assert!(!state.editing);
    assert_eq!(state.form, ArtifactInput::default());
}

#[test]
fn fields_read_and_write_input() {
    let mut input = ArtifactInput::default();
    for (i, field) in Field::ALL.into_iter().enumerate() {
        field.set(&mut input, format!("v{i}"));
    }
    for (i, field) in Field::ALL.into_iter().enumerate() {
        assert_eq!(field.get(&input), format!("v{i}"));
    }
    assert_eq!(input.detailed_description, "v11");
}

#[test]
fn failure_messages_name_admin() {
    assert!(save_failed_message("yi@example.com").contains("(yi@example.com)"));
    assert!(delete_failed_message("yi@example.com").starts_with("Delete failed"));
    assert!(forbidden_message("a@b.c").contains("a@b.c"));
}

// =============================================================
// Lookup
// =============================================================

#[test]
fn lookup_blank_lists_everything() {
    assert_eq!(Lookup::parse("   "), Lookup::All);
}

#[test]
fn lookup_number_is_an_id() {
    assert_eq!(Lookup::parse(" 42 "), Lookup::ById(42));
}

#[test]
fn lookup_other_text_is_a_keyword() {
    assert_eq!(Lookup::parse("bronze ding"), Lookup::Keyword("bronze ding".to_owned()));
    assert_eq!(Lookup::parse("-3"), Lookup::Keyword("-3".to_owned()));
}
