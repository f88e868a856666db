//! Competition calendar constants and epoch conversion.
//!
//! Both hour adjustments below encode the reporting convention the charts were
//! built around: a puzzle day is treated as opening at 05:00 UTC, and the
//! "as of" stamp in chart titles is shown at UTC+1.

use chrono::{DateTime, FixedOffset, NaiveDateTime, Offset, Utc};

/// Number of puzzle days in one event.
pub const DAYS_PER_EVENT: u32 = 25;

/// Part indices a day can contain, in order.
pub const PART_INDICES: [u32; 2] = [1, 2];

/// Hours added to the wall-clock completion hour before it is reduced
/// modulo 24. Fixed by the leaderboard's reporting convention; not a general
/// timezone offset.
pub const COMPLETION_HOUR_SHIFT: f64 = -5.0;

/// Offset from UTC, in seconds, used for the "as of" stamp in chart titles.
pub const DISPLAY_UTC_OFFSET_SECS: i32 = 3600;

/// Convert epoch seconds to a timezone-naive point in time read at UTC.
///
/// Returns `None` when the value is outside chrono's representable range.
#[must_use]
pub fn from_epoch_seconds(secs: i64) -> Option<NaiveDateTime> {
    DateTime::from_timestamp(secs, 0).map(|dt| dt.naive_utc())
}

/// Re-read a UTC point in time at the fixed display offset.
#[must_use]
pub fn to_display_time(utc: NaiveDateTime) -> DateTime<FixedOffset> {
    let offset = FixedOffset::east_opt(DISPLAY_UTC_OFFSET_SECS).unwrap_or_else(|| Utc.fix());
    utc.and_utc().with_timezone(&offset)
}
