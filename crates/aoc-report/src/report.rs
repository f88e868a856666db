//! One-pass assembly of everything the charts consume.

use aoc_core::Leaderboard;
use chrono::{DateTime, FixedOffset};
use serde::Serialize;

use crate::metrics::{count_stars_per_day_and_part, day_span, display_timestamp};
use crate::table::{Table, build_count_table, build_star_table};
use crate::ReportError;

/// Tables the charts are bound to.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReportTables {
    /// Star table in member order.
    pub stars: Table,
    /// Star table built from the member list reversed.
    pub stars_reversed: Table,
    /// Dense per-day/part star counts.
    pub daily_counts: Table,
}

/// Inputs shared by all four charts.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Report {
    pub year: i32,
    /// Latest star across the leaderboard, at the display offset.
    pub as_of: DateTime<FixedOffset>,
    /// Largest number of completed days of any member.
    pub day_span: usize,
    pub tables: ReportTables,
}

/// Build the report for a parsed leaderboard.
///
/// # Errors
///
/// [`ReportError::EmptyLeaderboard`] when nobody has completed a day, or
/// [`ReportError::ColumnLength`] when a member's declared stars disagree with
/// their completed parts.
pub fn build_report(board: &Leaderboard) -> Result<Report, ReportError> {
    let as_of = display_timestamp(&board.members)?;
    let day_span = day_span(&board.members)?;

    let tables = ReportTables {
        stars: build_star_table(&board.members)?,
        stars_reversed: build_star_table(board.members.iter().rev())?,
        daily_counts: build_count_table(&count_stars_per_day_and_part(&board.members))?,
    };

    tracing::debug!(
        year = board.year,
        %as_of,
        day_span,
        rows = tables.stars.row_count(),
        "built report tables"
    );

    Ok(Report {
        year: board.year,
        as_of,
        day_span,
        tables,
    })
}
