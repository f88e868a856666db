//! Report error types.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ReportError {
    /// A maximum or latest value was requested but no member has completed a day.
    #[error("leaderboard has no completed days; cannot compute {what}")]
    EmptyLeaderboard { what: &'static str },

    /// A column does not have the same number of rows as the rest of its table.
    #[error("column '{column}' has {actual} rows, expected {expected}")]
    ColumnLength {
        column: String,
        expected: usize,
        actual: usize,
    },

    /// A column was looked up by a name the table does not have.
    #[error("table has no column '{0}'")]
    MissingColumn(String),

    /// A column exists but holds a different kind of value.
    #[error("column '{column}' holds {actual} values, expected {expected}")]
    ColumnType {
        column: String,
        expected: &'static str,
        actual: &'static str,
    },
}
