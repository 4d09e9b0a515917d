use super::*;
use crate::test_support::artifact;

#[test]
fn detail_rows_follow_display_order() {
    let labels: Vec<_> = detail_rows(&artifact(1)).into_iter().map(|(label, _)| label).collect();
    assert_eq!(
        labels,
        vec!["Dynasty", "Period", "Category", "Material", "Dimensions", "Location", "Discovered at", "Collection"]
    );
}

#[test]
fn detail_rows_skip_blank_values() {
    let mut item = artifact(1);
    item.artifact.dimensions = "   ".to_owned();
    item.artifact.collection = String::new();

    let rows = detail_rows(&item);
    assert_eq!(rows.len(), 6);
    assert!(rows.iter().all(|(label, _)| *label != "Dimensions" && *label != "Collection"));
    assert!(rows.contains(&("Material", "Bronze".to_owned())));
}
