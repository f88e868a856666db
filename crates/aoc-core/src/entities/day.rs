use serde::Serialize;

use super::Part;

/// A competition day a member has earned at least one star on.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct Day {
    /// 1-based puzzle number, not a calendar date.
    pub index: u32,
    /// Completed parts, ordered by part index.
    pub parts: Vec<Part>,
}
