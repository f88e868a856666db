//! Metrics derived from the parsed leaderboard.

use aoc_core::calendar::{COMPLETION_HOUR_SHIFT, DAYS_PER_EVENT, to_display_time};
use aoc_core::Member;
use chrono::{DateTime, Datelike, FixedOffset, NaiveDateTime, Timelike};
use serde::Serialize;

use crate::ReportError;

/// Hours after the day opened at which a part was completed.
///
/// `24 * (day_of_month - day_index)` counts whole days late; the clock term
/// is shifted by [`COMPLETION_HOUR_SHIFT`] and reduced into `[0, 24)`. A month
/// rollover can make the day term negative; it is not clamped.
#[must_use]
pub fn completion_hour(day_index: u32, get_star: NaiveDateTime) -> f64 {
    let days_late = f64::from(get_star.day()) - f64::from(day_index);
    let clock = f64::from(get_star.hour())
        + f64::from(get_star.minute()) / 60.0
        + f64::from(get_star.second() / 3600)
        + COMPLETION_HOUR_SHIFT;
    24.0 * days_late + clock.rem_euclid(24.0)
}

/// Stars earned on one day, split by part.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DailyStarCount {
    pub day: u32,
    pub part1: u32,
    pub part2: u32,
}

/// Count completed parts per day and part for every day of the event.
///
/// The result is dense: exactly [`DAYS_PER_EVENT`] rows, day 1 first, with
/// zero counts for days nobody completed. Days outside the event are skipped.
#[must_use]
pub fn count_stars_per_day_and_part(members: &[Member]) -> Vec<DailyStarCount> {
    let mut counts: Vec<DailyStarCount> = (1..=DAYS_PER_EVENT)
        .map(|day| DailyStarCount {
            day,
            part1: 0,
            part2: 0,
        })
        .collect();

    for member in members {
        for (day, part) in member.parts() {
            let Some(row) = day
                .index
                .checked_sub(1)
                .and_then(|slot| counts.get_mut(slot as usize))
            else {
                tracing::warn!(member = member.id, day = day.index, "day outside the event; not counted");
                continue;
            };
            match part.index {
                1 => row.part1 += 1,
                2 => row.part2 += 1,
                other => tracing::warn!(member = member.id, part = other, "unknown part index"),
            }
        }
    }

    counts
}

/// Largest number of completed days of any member.
///
/// # Errors
///
/// [`ReportError::EmptyLeaderboard`] when no member has completed a day.
pub fn day_span(members: &[Member]) -> Result<usize, ReportError> {
    members
        .iter()
        .map(|member| member.days.len())
        .max()
        .filter(|&span| span > 0)
        .ok_or(ReportError::EmptyLeaderboard { what: "day span" })
}

/// Most recent star-earning time across all members, at UTC.
///
/// Only members with at least one completed day take part.
///
/// # Errors
///
/// [`ReportError::EmptyLeaderboard`] when no member has completed a day.
pub fn latest_star(members: &[Member]) -> Result<NaiveDateTime, ReportError> {
    members
        .iter()
        .filter(|member| !member.days.is_empty())
        .map(|member| member.last_star)
        .max()
        .ok_or(ReportError::EmptyLeaderboard {
            what: "latest star",
        })
}

/// The "as of" stamp shown in chart titles.
///
/// # Errors
///
/// [`ReportError::EmptyLeaderboard`] when no member has completed a day.
pub fn display_timestamp(members: &[Member]) -> Result<DateTime<FixedOffset>, ReportError> {
    latest_star(members).map(to_display_time)
}
