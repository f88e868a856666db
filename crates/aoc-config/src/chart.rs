//! Chart text settings.

use serde::{Deserialize, Serialize};

/// Default chart title prefix.
fn default_title_prefix() -> String {
    "IITS Advent of Code".to_string()
}

#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
pub struct ChartConfig {
    /// Text placed before the year in every chart title.
    #[serde(default = "default_title_prefix")]
    pub title_prefix: String,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            title_prefix: default_title_prefix(),
        }
    }
}
