//! Date and time utility functions
//!
//! This module turns timestamp attributes into the coarse "time ago" strings
//! shown on article cards (e.g., "2 hours ago" or "2h ago").

use chrono::{DateTime, Local, NaiveDate, NaiveDateTime, TimeZone, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

pub const SECONDS_PER_MINUTE: i64 = 60;
pub const SECONDS_PER_HOUR: i64 = 3_600;
pub const SECONDS_PER_DAY: i64 = 86_400;
/// Months are a flat 30 days.
pub const SECONDS_PER_MONTH: i64 = 2_592_000;
/// Years are a flat 365 days.
pub const SECONDS_PER_YEAR: i64 = 31_536_000;

/// Naive formats tried after RFC 3339 / RFC 2822, interpreted as local time
const LOCAL_DATETIME_FORMATS: [&str; 4] = [
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
];

/// Date-only format, interpreted as UTC midnight
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Output style of the relative-time formatter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TimeStyle {
    /// "5 minutes ago"
    #[default]
    Verbose,
    /// "5m ago"
    Compact,
}

impl TimeStyle {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Verbose => "verbose",
            Self::Compact => "compact",
        }
    }
}

impl fmt::Display for TimeStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TimeStyle {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "verbose" => Ok(Self::Verbose),
            "compact" => Ok(Self::Compact),
            other => Err(format!("unknown time style '{other}' (expected 'verbose' or 'compact')")),
        }
    }
}

/// One contiguous range of elapsed seconds mapped to a unit
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimeBucket {
    Seconds,
    Minutes,
    Hours,
    Days,
    Months,
    Years,
}

impl TimeBucket {
    /// Pick the bucket for a non-negative elapsed second count
    pub fn for_elapsed(elapsed_secs: i64) -> Self {
        match elapsed_secs {
            s if s < SECONDS_PER_MINUTE => Self::Seconds,
            s if s < SECONDS_PER_HOUR => Self::Minutes,
            s if s < SECONDS_PER_DAY => Self::Hours,
            s if s < SECONDS_PER_MONTH => Self::Days,
            s if s < SECONDS_PER_YEAR => Self::Months,
            _ => Self::Years,
        }
    }

    pub fn seconds(self) -> i64 {
        match self {
            Self::Seconds => 1,
            Self::Minutes => SECONDS_PER_MINUTE,
            Self::Hours => SECONDS_PER_HOUR,
            Self::Days => SECONDS_PER_DAY,
            Self::Months => SECONDS_PER_MONTH,
            Self::Years => SECONDS_PER_YEAR,
        }
    }

    fn unit(self) -> &'static str {
        match self {
            Self::Seconds => "second",
            Self::Minutes => "minute",
            Self::Hours => "hour",
            Self::Days => "day",
            Self::Months => "month",
            Self::Years => "year",
        }
    }

    fn suffix(self) -> &'static str {
        match self {
            Self::Seconds => "s",
            Self::Minutes => "m",
            Self::Hours => "h",
            Self::Days => "d",
            Self::Months => "mo",
            Self::Years => "y",
        }
    }
}

/// Parse a timestamp attribute
///
/// Accepts RFC 3339, RFC 2822, naive date-times (local time) and bare
/// `YYYY-MM-DD` dates (UTC midnight).
pub fn parse_timestamp(input: &str) -> Option<DateTime<Utc>> {
    let input = input.trim();

    if let Ok(dt) = DateTime::parse_from_rfc3339(input) {
        return Some(dt.with_timezone(&Utc));
    }
    if let Ok(dt) = DateTime::parse_from_rfc2822(input) {
        return Some(dt.with_timezone(&Utc));
    }

    for format in LOCAL_DATETIME_FORMATS {
        if let Ok(naive) = NaiveDateTime::parse_from_str(input, format) {
            let local = Local
                .from_local_datetime(&naive)
                .single()
                .unwrap_or_else(|| Local.from_utc_datetime(&naive));
            return Some(local.with_timezone(&Utc));
        }
    }

    NaiveDate::parse_from_str(input, DATE_FORMAT)
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|midnight| Utc.from_utc_datetime(&midnight))
}

/// Format an elapsed second count
///
/// Negative counts (timestamps in the future) are clamped to zero.
pub fn format_elapsed(elapsed_secs: i64, style: TimeStyle) -> String {
    let elapsed_secs = elapsed_secs.max(0);
    let bucket = TimeBucket::for_elapsed(elapsed_secs);
    let n = elapsed_secs.div_euclid(bucket.seconds());

    match (style, bucket) {
        (TimeStyle::Verbose, TimeBucket::Seconds) => format!("{n} seconds ago"),
        (TimeStyle::Verbose, _) => {
            let plural = if n > 1 { "s" } else { "" };
            format!("{n} {}{plural} ago", bucket.unit())
        }
        (TimeStyle::Compact, _) => format!("{n}{} ago", bucket.suffix()),
    }
}

/// Format a timestamp string relative to `now`
///
/// Empty input yields an empty string and unparseable input is returned
/// unchanged.
pub fn format_time_ago_at(input: &str, now: DateTime<Utc>, style: TimeStyle) -> String {
    if input.is_empty() {
        return String::new();
    }

    match parse_timestamp(input) {
        Some(then) => {
            let elapsed_ms = (now - then).num_milliseconds();
            format_elapsed(elapsed_ms.div_euclid(1000), style)
        }
        None => input.to_string(),
    }
}

/// Format a timestamp string relative to the current time
pub fn format_time_ago(input: &str, style: TimeStyle) -> String {
    format_time_ago_at(input, Utc::now(), style)
}
