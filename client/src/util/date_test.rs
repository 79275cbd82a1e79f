use super::*;

#[test]
fn formats_naive_timestamp_with_fraction() {
    assert_eq!(format_created_at("2024-01-05T09:30:00.123456"), "Jan 5, 2024");
}

#[test]
fn formats_naive_timestamp_without_fraction() {
    assert_eq!(format_created_at("2023-11-21T23:59:59"), "Nov 21, 2023");
}

#[test]
fn formats_rfc3339_in_its_own_offset() {
    assert_eq!(format_created_at("2024-02-29T22:00:00+05:30"), "Feb 29, 2024");
    assert_eq!(format_created_at("2024-02-29T22:00:00Z"), "Feb 29, 2024");
}

#[test]
fn formats_bare_date() {
    assert_eq!(format_created_at("2024-12-01"), "Dec 1, 2024");
}

#[test]
fn unparseable_is_returned_as_is() {
    assert_eq!(format_created_at("yesterday"), "yesterday");
    assert_eq!(format_created_at(""), "");
}
