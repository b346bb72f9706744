//! Date and timestamp formatting for page metadata

use chrono::{DateTime, Datelike, FixedOffset, NaiveDate, Offset, SecondsFormat, Utc};

/// UTC offset of Asia/Seoul, in seconds
pub const KST_OFFSET_SECONDS: i32 = 9 * 3600;

/// Build a fixed offset from whole hours east of UTC
///
/// Returns `None` outside of `-23..=23`.
pub fn offset_from_hours(hours: i32) -> Option<FixedOffset> {
    hours
        .checked_mul(3600)
        .and_then(FixedOffset::east_opt)
}

/// Korea Standard Time, falling back to UTC
pub fn kst() -> FixedOffset {
    FixedOffset::east_opt(KST_OFFSET_SECONDS).unwrap_or_else(|| Utc.fix())
}

/// Format a date the way the ko-KR locale prints a short date
///
/// `2024-01-15` becomes `"2024. 1. 15."`.
pub fn format_ko_date(date: NaiveDate) -> String {
    format!("{}. {}. {}.", date.year(), date.month(), date.day())
}

/// Calendar date of `instant` as observed at `offset`
pub fn local_date(instant: DateTime<Utc>, offset: FixedOffset) -> NaiveDate {
    instant.with_timezone(&offset).date_naive()
}

/// ISO 8601 timestamp with millisecond precision and a `Z` suffix
pub fn format_iso_timestamp(instant: DateTime<Utc>) -> String {
    instant.to_rfc3339_opts(SecondsFormat::Millis, true)
}
