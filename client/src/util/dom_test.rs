use super::*;

#[test]
fn confirm_declines_without_a_browser() {
    assert!(!confirm("Delete this artifact?"));
}

#[test]
fn download_is_refused_without_a_browser() {
    let err = download_json("settings-backup.json", "{}").expect_err("no browser");
    assert_eq!(err, BROWSER_ONLY);
}

