//! Entity structs for the leaderboard model.
//!
//! All entities are immutable once built by [`crate::parse`] and derive
//! `Serialize` so tables and diagnostics can be dumped as JSON.

mod day;
mod leaderboard;
mod member;
mod part;

pub use day::Day;
pub use leaderboard::Leaderboard;
pub use member::Member;
pub use part::Part;
