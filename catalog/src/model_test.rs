use super::*;

fn artifact_json() -> serde_json::Value {
    serde_json::json!({
        "id": 7,
        "title": "Houmuwu Ding",
        "image_path": "bronze_ding.jpg",
        "period": "Late Shang",
        "dynasty": "Shang",
        "location": "Anyang",
        "description": "Largest bronze vessel",
        "detailed_description": "Cast around 1200 BCE.",
        "material": "Bronze",
        "dimensions": "133 x 110 cm",
        "discovery_location": "Yinxu, Anyang",
        "collection": "National Museum",
        "category": "bronze",
        "created_at": "2024-01-01T00:00:00Z",
        "updated_at": "2024-01-02T00:00:00Z",
        "is_favorite": true
    })
}

// =============================================================
// ArtifactWithFavorite
// =============================================================

#[test]
fn artifact_with_favorite_reads_flat_backend_shape() {
    let item: ArtifactWithFavorite = serde_json::from_value(artifact_json()).expect("decode");
    assert_eq!(item.id(), 7);
    assert_eq!(item.title, "Houmuwu Ding");
    assert!(item.is_favorite);
}

#[test]
fn artifact_with_favorite_serializes_flat() {
    let item: ArtifactWithFavorite = serde_json::from_value(artifact_json()).expect("decode");
    let value = serde_json::to_value(&item).expect("encode");
    assert_eq!(value, artifact_json());
}

#[test]
fn history_item_nests_artifact() {
    let value = serde_json::json!({
        "id": 3,
        "artifact": artifact_json(),
        "viewed_at": "2024-05-01T10:00:00+00:00"
    });
    let item: HistoryItem = serde_json::from_value(value).expect("decode");
    assert_eq!(item.artifact.id(), 7);
    assert_eq!(item.viewed_at, "2024-05-01T10:00:00+00:00");
}

// =============================================================
// Images
// =============================================================

#[test]
fn image_url_appends_cache_buster() {
    assert_eq!(image_url(IMAGES_DIR, "jade.jpg", 42), "/images/jade.jpg?t=42");
}

#[test]
fn image_url_normalizes_slashes() {
    assert_eq!(image_url("/images/", "/jade.jpg", 1), "/images/jade.jpg?t=1");
}

// =============================================================
// SearchParams / Category
// =============================================================

#[test]
fn gallery_params_drop_blank_query() {
    let params = SearchParams::gallery("   ");
    assert_eq!(params.query, None);
    assert_eq!(params.category, Some(Category::All));
    assert_eq!(params.favorites_only, Some(false));
}

#[test]
fn search_params_skip_unset_fields() {
    let value = serde_json::to_value(SearchParams::favorites()).expect("encode");
    assert_eq!(value, serde_json::json!({ "favorites_only": true }));
}

#[test]
fn category_parse_accepts_wire_names() {
    assert_eq!(Category::parse("jade"), Some(Category::Jade));
    assert_eq!(Category::parse("Jade"), None);
    assert_eq!(serde_json::to_value(Category::Calligraphy).expect("encode"), "calligraphy");
}

#[test]
fn artifact_input_from_artifact_keeps_id() {
    let item: ArtifactWithFavorite = serde_json::from_value(artifact_json()).expect("decode");
    let input = ArtifactInput::from(&item.artifact);
    assert_eq!(input.id, Some(7));
    assert_eq!(input.category, "bronze");
}

#[test]
fn chat_role_serializes_lowercase() {
    let msg = ChatMessage { role: ChatRole::Assistant, content: "hi".to_owned() };
    assert_eq!(
        serde_json::to_value(msg).expect("encode"),
        serde_json::json!({ "role": "assistant", "content": "hi" })
    );
}
