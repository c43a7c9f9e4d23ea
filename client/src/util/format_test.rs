use super::*;
use chrono::TimeZone;

fn at() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 5, 1, 9, 30, 0).unwrap()
}

#[test]
fn zero_offset_is_utc() {
    assert_eq!(format_with_offset(at(), 0), "2024-05-01 09:30");
}

#[test]
fn positive_offset_is_west_of_utc() {
    assert_eq!(format_with_offset(at(), 300), "2024-05-01 04:30");
}

#[test]
fn negative_offset_can_cross_midnight() {
    assert_eq!(format_with_offset(Utc.with_ymd_and_hms(2024, 5, 1, 20, 0, 0).unwrap(), -330), "2024-05-02 01:30");
}

#[test]
fn missing_timestamp_is_blank() {
    assert_eq!(local_timestamp_opt(None), "");
    assert_eq!(local_timestamp_opt(Some(at())), "2024-05-01 09:30");
}
