//! Where charts and table dumps are written.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

fn default_dir() -> PathBuf {
    PathBuf::from(".")
}

#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
pub struct OutputConfig {
    /// Directory receiving `plot.png` .. `plot4.png`.
    #[serde(default = "default_dir")]
    pub dir: PathBuf,

    /// When set, the chart tables are also written here as JSON.
    #[serde(default)]
    pub tables: Option<PathBuf>,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            dir: default_dir(),
            tables: None,
        }
    }
}
