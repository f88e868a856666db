use std::path::PathBuf;

use aoc_config::ConfigOverrides;
use clap::Parser;

/// Command-line parser for the `aocplot` binary.
#[derive(Debug, Parser)]
#[command(
    name = "aocplot",
    version,
    about = "Render Advent of Code private leaderboard charts"
)]
pub struct Cli {
    /// Leaderboard JSON file (defaults to aoc.json)
    #[arg(short, long)]
    pub input: Option<PathBuf>,

    /// Directory the PNG charts are written to (defaults to the current directory)
    #[arg(short, long)]
    pub output_dir: Option<PathBuf>,

    /// Also write the chart tables as JSON to this file
    #[arg(short, long)]
    pub tables: Option<PathBuf>,

    /// Quiet mode (errors only)
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Verbose mode (debug logging)
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    /// Flags that replace layered configuration values.
    #[must_use]
    pub fn overrides(&self) -> ConfigOverrides {
        ConfigOverrides {
            input: self.input.clone(),
            output_dir: self.output_dir.clone(),
            tables: self.tables.clone(),
        }
    }
}
