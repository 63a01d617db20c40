//! Timestamp formatting utilities
//!
//! Structured formatters render entry timestamps as RFC 3339 with up to
//! nanosecond precision, keeping the offset the timestamp was recorded with.

use chrono::{DateTime, FixedOffset, Timelike};

/// Format a timestamp as RFC 3339 with nanoseconds.
///
/// The fractional second drops trailing zeros and is left out entirely when
/// zero. A zero UTC offset is written as `Z`, any other as `+HH:MM`/`-HH:MM`;
/// seconds of a sub-minute offset are dropped.
///
/// # Examples
///
/// ```
/// use chrono::{DateTime, FixedOffset};
/// use rust_log_formatter::core::timestamp::format_rfc3339_nano;
///
/// let time = DateTime::<FixedOffset>::parse_from_rfc3339("2024-01-02T03:04:05.120+09:00").unwrap();
/// assert_eq!(format_rfc3339_nano(&time), "2024-01-02T03:04:05.12+09:00");
/// ```
#[must_use]
pub fn format_rfc3339_nano(datetime: &DateTime<FixedOffset>) -> String {
    let mut out = datetime.format("%Y-%m-%dT%H:%M:%S").to_string();

    // leap seconds are carried as nanoseconds past 1e9
    let nanos = datetime.nanosecond() % 1_000_000_000;
    if nanos != 0 {
        let digits = format!("{:09}", nanos);
        out.push('.');
        out.push_str(digits.trim_end_matches('0'));
    }

    if datetime.offset().local_minus_utc() == 0 {
        out.push('Z');
    } else {
        out.push_str(&datetime.format("%:z").to_string());
    }
    out
}
