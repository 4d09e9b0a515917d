//! Fixtures shared by unit tests.

use catalog::{Artifact, ArtifactWithFavorite, HistoryItem, User};

pub(crate) fn artifact(id: i64) -> ArtifactWithFavorite {
    ArtifactWithFavorite {
        artifact: Artifact {
            id,
            title: format!("Artifact {id}"),
            image_path: format!("{id}.jpg"),
            period: "Late Shang".to_owned(),
            dynasty: "Shang".to_owned(),
            location: "Anyang".to_owned(),
            description: "A ritual vessel.".to_owned(),
            detailed_description: "A cast bronze ritual vessel.".to_owned(),
            material: "Bronze".to_owned(),
            dimensions: "133 x 110 cm".to_owned(),
            discovery_location: "Anyang, Henan".to_owned(),
            collection: "National Museum".to_owned(),
            category: "bronze".to_owned(),
            created_at: "2024-01-01T00:00:00Z".to_owned(),
            updated_at: "2024-01-01T00:00:00Z".to_owned(),
        },
        is_favorite: false,
    }
}

pub(crate) fn artifacts(count: i64) -> Vec<ArtifactWithFavorite> {
    (1..=count).map(artifact).collect()
}

pub(crate) fn history_item(id: i64, title: &str, dynasty: &str, viewed_at: &str) -> HistoryItem {
    let mut entry = artifact(id);
    entry.artifact.title = title.to_owned();
    entry.artifact.dynasty = dynasty.to_owned();
    HistoryItem { id, artifact: entry, viewed_at: viewed_at.to_owned() }
}

pub(crate) fn user(email: &str) -> User {
    User {
        id: 1,
        username: "yi".to_owned(),
        email: email.to_owned(),
        created_at: "2024-01-01T00:00:00Z".to_owned(),
    }
}
