use chrono::NaiveDateTime;
use serde::Serialize;

use super::{Day, Part};

/// A leaderboard participant and their completed days.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct Member {
    pub id: u64,
    pub name: String,
    pub local_score: i64,
    pub global_score: i64,
    /// Declared star count. Expected to equal [`Member::completed_parts`].
    pub stars: u32,
    pub last_star: NaiveDateTime,
    /// Ordered by day index, strictly ascending.
    pub days: Vec<Day>,
}

impl Member {
    /// Number of parts actually present across all days.
    #[must_use]
    pub fn completed_parts(&self) -> usize {
        self.days.iter().map(|day| day.parts.len()).sum()
    }

    /// Every completed part with its day, in day-then-part order.
    pub fn parts(&self) -> impl Iterator<Item = (&Day, &Part)> {
        self.days
            .iter()
            .flat_map(|day| day.parts.iter().map(move |part| (day, part)))
    }

    /// Sort key for the member list: lower-cased name, then id.
    #[must_use]
    pub fn sort_key(&self) -> (String, u64) {
        (self.name.to_lowercase(), self.id)
    }
}
