use chrono::NaiveDateTime;
use serde::Serialize;

/// One completed half of a day's puzzle, i.e. one earned star.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct Part {
    /// 1 or 2.
    pub index: u32,
    /// When the star was earned, read at UTC.
    pub get_star: NaiveDateTime,
    /// Global order in which this star was earned across the leaderboard.
    pub star_index: u64,
}
