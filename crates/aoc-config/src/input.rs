//! Leaderboard export location.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

fn default_path() -> PathBuf {
    PathBuf::from("aoc.json")
}

#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
pub struct InputConfig {
    /// Path of the leaderboard JSON export.
    #[serde(default = "default_path")]
    pub path: PathBuf,
}

impl Default for InputConfig {
    fn default() -> Self {
        Self {
            path: default_path(),
        }
    }
}
