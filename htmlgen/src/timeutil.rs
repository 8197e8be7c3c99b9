//! Date and time formats used by HTML attributes.
//!
//! Times use the RFC 3339 partial-time subset `HH:MM:SS[.fraction]`, dates use
//! `YYYY-MM-DD`, and date-times `YYYY-MM-DDTHH:MM:SSZ`.

use time::format_description::BorrowedFormatItem;
use time::macros::format_description;
use time::{Date, PrimitiveDateTime, Time};

const PARTIAL_TIME: &[BorrowedFormatItem<'_>] =
    format_description!("[hour]:[minute]:[second][optional [.[subsecond]]]");

const FULL_DATE: &[BorrowedFormatItem<'_>] = format_description!("[year]-[month]-[day]");

/// Parses `HH:MM:SS` with an optional fraction of any length.
///
/// ```
/// use htmlgen::timeutil::parse_time;
/// use time::macros::time;
///
/// assert_eq!(parse_time("14:30:00"), Some(time!(14:30)));
/// assert_eq!(parse_time("14:30:00.25"), Some(time!(14:30:00.25)));
/// assert_eq!(parse_time("14:30"), None);
/// ```
pub fn parse_time(raw: &str) -> Option<Time> {
    Time::parse(raw, PARTIAL_TIME).ok()
}

/// Formats a time as `HH:MM:SS`, adding `.ffffff` microseconds when non-zero.
pub fn format_time(time: Time) -> String {
    let (hour, minute, second, micro) = time.as_hms_micro();
    if micro == 0 {
        format!("{hour:02}:{minute:02}:{second:02}")
    } else {
        format!("{hour:02}:{minute:02}:{second:02}.{micro:06}")
    }
}

/// Parses `YYYY-MM-DD`.
pub fn parse_date(raw: &str) -> Option<Date> {
    Date::parse(raw, FULL_DATE).ok()
}

/// Formats a date as `YYYY-MM-DD`.
pub fn format_date(date: Date) -> String {
    format!(
        "{:04}-{:02}-{:02}",
        date.year(),
        u8::from(date.month()),
        date.day()
    )
}

/// Formats a UTC date-time as `YYYY-MM-DDTHH:MM:SSZ`, dropping fractions.
pub fn format_datetime(datetime: PrimitiveDateTime) -> String {
    let (hour, minute, second) = datetime.as_hms();
    format!(
        "{}T{hour:02}:{minute:02}:{second:02}Z",
        format_date(datetime.date())
    )
}
