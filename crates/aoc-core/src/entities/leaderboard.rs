use serde::Serialize;

use super::Member;

/// A parsed leaderboard export.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct Leaderboard {
    /// Event year, e.g. 2023.
    pub year: i32,
    /// Sorted by lower-cased name, ties broken by id.
    pub members: Vec<Member>,
}

impl Leaderboard {
    /// Total declared stars across all members.
    #[must_use]
    pub fn total_stars(&self) -> u64 {
        self.members.iter().map(|member| u64::from(member.stars)).sum()
    }
}
