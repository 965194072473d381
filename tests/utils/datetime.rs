use chrono::{DateTime, Duration, TimeZone, Utc};
use shadekit::utils::datetime::*;

fn now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap()
}

fn ago(seconds: i64, style: TimeStyle) -> String {
    let then = (now() - Duration::seconds(seconds)).to_rfc3339();
    format_time_ago_at(&then, now(), style)
}

#[test]
fn test_verbose_buckets() {
    assert_eq!(ago(45, TimeStyle::Verbose), "45 seconds ago");
    assert_eq!(ago(90, TimeStyle::Verbose), "1 minute ago");
    assert_eq!(ago(7_200, TimeStyle::Verbose), "2 hours ago");
    assert_eq!(ago(172_800, TimeStyle::Verbose), "2 days ago");
    assert_eq!(ago(5_184_000, TimeStyle::Verbose), "2 months ago");
    assert_eq!(ago(63_072_000, TimeStyle::Verbose), "2 years ago");
}

#[test]
fn test_compact_buckets() {
    assert_eq!(ago(45, TimeStyle::Compact), "45s ago");
    assert_eq!(ago(90, TimeStyle::Compact), "1m ago");
    assert_eq!(ago(7_200, TimeStyle::Compact), "2h ago");
    assert_eq!(ago(172_800, TimeStyle::Compact), "2d ago");
    assert_eq!(ago(5_184_000, TimeStyle::Compact), "2mo ago");
    assert_eq!(ago(63_072_000, TimeStyle::Compact), "2y ago");
}

#[test]
fn test_sixty_seconds_is_a_minute() {
    assert_eq!(ago(59, TimeStyle::Verbose), "59 seconds ago");
    assert_eq!(ago(60, TimeStyle::Verbose), "1 minute ago");
    assert_eq!(ago(60, TimeStyle::Compact), "1m ago");
}

#[test]
fn test_singular_units() {
    assert_eq!(ago(3_600, TimeStyle::Verbose), "1 hour ago");
    assert_eq!(ago(86_400, TimeStyle::Verbose), "1 day ago");
    assert_eq!(ago(2_592_000, TimeStyle::Verbose), "1 month ago");
    assert_eq!(ago(31_536_000, TimeStyle::Verbose), "1 year ago");
}

#[test]
fn test_quotients_are_floored() {
    assert_eq!(ago(3_599, TimeStyle::Verbose), "59 minutes ago");
    assert_eq!(ago(86_399, TimeStyle::Compact), "23h ago");
}

#[test]
fn test_unparseable_input_is_returned_verbatim() {
    assert_eq!(format_time_ago_at("not-a-date", now(), TimeStyle::Verbose), "not-a-date");
    assert_eq!(format_time_ago_at("not-a-date", now(), TimeStyle::Compact), "not-a-date");
}

#[test]
fn test_empty_input() {
    assert_eq!(format_time_ago_at("", now(), TimeStyle::Verbose), "");
    assert_eq!(format_time_ago("", TimeStyle::Compact), "");
}

#[test]
fn test_future_timestamps_clamp_to_zero() {
    let later = (now() + Duration::minutes(5)).to_rfc3339();
    assert_eq!(format_time_ago_at(&later, now(), TimeStyle::Verbose), "0 seconds ago");
}

#[test]
fn test_sub_second_difference_floors() {
    let then = (now() - Duration::milliseconds(59_999)).to_rfc3339();
    assert_eq!(format_time_ago_at(&then, now(), TimeStyle::Compact), "59s ago");
}

#[test]
fn test_parse_timestamp_formats() {
    let expected = Utc.with_ymd_and_hms(2024, 5, 1, 10, 30, 0).unwrap();
    assert_eq!(parse_timestamp("2024-05-01T10:30:00Z"), Some(expected));
    assert_eq!(parse_timestamp("2024-05-01T12:30:00+02:00"), Some(expected));
    assert_eq!(parse_timestamp("Wed, 01 May 2024 10:30:00 +0000"), Some(expected));
    assert_eq!(
        parse_timestamp("2024-05-01"),
        Some(Utc.with_ymd_and_hms(2024, 5, 1, 0, 0, 0).unwrap())
    );
    assert!(parse_timestamp("2024-05-01T10:30:00").is_some());
    assert_eq!(parse_timestamp("yesterday"), None);
}

#[test]
fn test_time_style_display() {
    assert_eq!(TimeStyle::default(), TimeStyle::Verbose);
    assert_eq!(TimeStyle::Compact.to_string(), "compact");
    assert_eq!(TimeStyle::Verbose.as_str(), "verbose");
}
