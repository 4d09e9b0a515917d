use super::*;

fn ids(sites: &[&FindSite]) -> Vec<u32> {
    sites.iter().map(|s| s.id).collect()
}

#[test]
fn catalogue_has_six_sites() {
    assert_eq!(FIND_SITES.len(), 6);
    assert_eq!(site(4).map(|s| s.location), Some("Xi'an, Shaanxi"));
    assert!(site(99).is_none());
}

#[test]
fn categories_start_with_all_and_dedupe() {
    assert_eq!(categories(), vec!["all", "Bronze", "Painting", "Ceramics", "Jade"]);
}

#[test]
fn filter_by_category() {
    assert_eq!(ids(&filter_sites("", "Bronze")), vec![1, 2]);
    assert_eq!(ids(&filter_sites("", ALL_CATEGORIES)).len(), 6);
}

#[test]
fn filter_by_title_or_location() {
    assert_eq!(ids(&filter_sites("henan", ALL_CATEGORIES)), vec![1, 5]);
    assert_eq!(ids(&filter_sites("JADE", ALL_CATEGORIES)), vec![6]);
}

#[test]
fn filters_combine() {
    assert_eq!(ids(&filter_sites("hunan", "Painting")), vec![3]);
    assert!(filter_sites("hunan", "Jade").is_empty());
}

#[test]
fn focus_command_uses_site_coordinates() {
    let command = MapCommand::focus(&FIND_SITES[0]);
    assert_eq!(
        serde_json::to_value(&command).expect("json"),
        serde_json::json!({ "type": "focus", "id": 1, "lat": 36.0671, "lng": 114.3524, "zoom": 12 })
    );
}

#[test]
fn markers_command_lists_sites() {
    let visible = filter_sites("", "Jade");
    let value = serde_json::to_value(MapCommand::markers(&visible)).expect("json");
    assert_eq!(value["type"], "set_markers");
    assert_eq!(value["sites"][0]["title"], "Jade Burial Suit Sewn with Gold Thread");
}

#[test]
fn default_state_shows_everything() {
    let state = MapState::default();
    assert_eq!(state.visible().len(), 6);
    assert_eq!(state.selected, None);
}
