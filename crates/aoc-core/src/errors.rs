//! Parse error types for leaderboard exports.
//!
//! Every variant that concerns a single member carries the member id so the
//! offending record can be located in the export.

use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while reading or validating a leaderboard export.
#[derive(Debug, Error)]
pub enum ParseError {
    /// The export file could not be read.
    #[error("failed to read leaderboard export {path}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The document is not valid JSON or lacks the top-level `event`/`members` fields.
    #[error("malformed leaderboard document at {path}: {source}")]
    Json {
        path: String,
        #[source]
        source: serde_json::Error,
    },

    /// A member object is missing a required field or has one of the wrong type.
    #[error("member {id}: invalid field at {path}: {source}")]
    Member {
        id: String,
        path: String,
        #[source]
        source: serde_json::Error,
    },

    /// A `members` key is not a numeric id.
    #[error("member id '{0}' is not an integer")]
    InvalidMemberId(String),

    /// A `completion_day_level` key is not a numeric day.
    #[error("member {member_id}: day key '{key}' is not an integer")]
    InvalidDayKey { member_id: u64, key: String },

    /// Two `completion_day_level` keys parse to the same day, e.g. `"1"` and `"01"`.
    #[error("member {member_id}: day key '{key}' repeats day {day}")]
    DuplicateDay { member_id: u64, key: String, day: u32 },

    /// A timestamp cannot be represented as a calendar date-time.
    #[error("member {member_id}: {field} value {value} is out of range")]
    TimestampOutOfRange {
        member_id: u64,
        field: &'static str,
        value: i64,
    },

    /// The `event` field is not a year.
    #[error("event '{0}' is not a year")]
    InvalidEvent(String),
}
