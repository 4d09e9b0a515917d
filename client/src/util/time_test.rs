use super::*;

#[test]
fn parse_rfc3339_ms_reads_utc() {
    assert_eq!(parse_rfc3339_ms("1970-01-01T00:00:01Z"), Some(1_000));
    assert_eq!(parse_rfc3339_ms("2024-01-01T00:00:00Z"), Some(1_704_067_200_000));
}

#[test]
fn parse_rfc3339_ms_honours_offset() {
    assert_eq!(parse_rfc3339_ms("2024-01-01T08:00:00+08:00"), Some(1_704_067_200_000));
}

#[test]
fn parse_rfc3339_ms_rejects_garbage() {
    assert_eq!(parse_rfc3339_ms("yesterday"), None);
    assert_eq!(parse_rfc3339_ms(""), None);
}

#[test]
fn format_timestamp_renders_minutes() {
    assert_eq!(format_timestamp("2024-03-05T09:07:59Z"), "2024-03-05 09:07");
    assert_eq!(format_timestamp("2024-03-05T09:07:59.123456+00:00"), "2024-03-05 09:07");
}

#[test]
fn format_timestamp_passes_through_unparseable() {
    assert_eq!(format_timestamp("not a date"), "not a date");
}

#[test]
fn now_ms_is_after_2020() {
    assert!(now_ms() > 1_577_836_800_000);
}
